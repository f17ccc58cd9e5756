//! Game configuration
//!
//! The simulation reads configuration but never stores or edits it. Every section has
//! defaults, so a JSON document only needs the fields it wants to override:
//!
//! ```
//! use stacker_types::{GameConfig, GravityMode};
//!
//! let config = GameConfig::from_json_str(r#"{"gravity":{"mode":"spicy"},"queue_preview":5}"#).unwrap();
//! assert_eq!(config.gravity.mode, GravityMode::Spicy);
//! assert_eq!(config.queue_preview, 5);
//! assert_eq!(config.board.columns, 10);
//! ```

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::kicks::KickTables;
use crate::{
    DEFAULT_COLUMNS, DEFAULT_HIDDEN_ROWS, DEFAULT_INITIAL_DELAY_TICKS, DEFAULT_QUEUE_PREVIEW,
    DEFAULT_REPEAT_DELAY_TICKS, DEFAULT_VISIBLE_ROWS, GRAVITY_ROWS_PER_TICK, LINES_PER_LEVEL,
    LOCK_DELAY_TICKS, LOCK_RESET_LIMIT, MAX_SHAPE_SIZE, SOFT_DROP_MULTIPLIER, SPAWN_COLUMN,
    SPAWN_ROW,
};

/// Complete configuration consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub gravity: GravityConfig,
    pub lock: LockConfig,
    pub input: InputConfig,
    /// Number of upcoming pieces kept in the preview queue
    pub queue_preview: usize,
    pub kicks: KickTables,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            gravity: GravityConfig::default(),
            lock: LockConfig::default(),
            input: InputConfig::default(),
            queue_preview: DEFAULT_QUEUE_PREVIEW,
            kicks: KickTables::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: u8,
    pub visible_rows: u8,
    /// Buffer rows above the visible area
    pub hidden_rows: u8,
    pub spawn_column: i32,
    pub spawn_row: i32,
}

impl BoardConfig {
    /// Total rows including the hidden buffer
    pub fn total_rows(&self) -> usize {
        self.visible_rows as usize + self.hidden_rows as usize
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            visible_rows: DEFAULT_VISIBLE_ROWS,
            hidden_rows: DEFAULT_HIDDEN_ROWS,
            spawn_column: SPAWN_COLUMN,
            spawn_row: SPAWN_ROW,
        }
    }
}

/// Gravity mode, scaling the per-level base speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityMode {
    /// No gravity at all
    Off,
    /// Half speed
    Relaxed,
    #[default]
    Normal,
    /// 1.5x speed
    Engaging,
    /// Double speed
    Spicy,
    /// Pieces fall to the bottom on the tick they spawn (but still obey lock delay)
    Instant,
}

impl GravityMode {
    /// Multiplier over the level's base speed
    ///
    /// `Instant` bypasses accumulation and reports `None`.
    pub fn multiplier(&self) -> Option<f64> {
        match self {
            GravityMode::Off => Some(0.0),
            GravityMode::Relaxed => Some(0.5),
            GravityMode::Normal => Some(1.0),
            GravityMode::Engaging => Some(1.5),
            GravityMode::Spicy => Some(2.0),
            GravityMode::Instant => None,
        }
    }

    pub fn is_instant(&self) -> bool {
        matches!(self, GravityMode::Instant)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    pub mode: GravityMode,
    /// Rows per tick, indexed by level (clamped to the last entry)
    pub rows_per_tick: Vec<f64>,
    pub soft_drop_multiplier: f64,
    pub start_level: u32,
    /// Lines per level step; 0 keeps the level fixed at `start_level`
    pub lines_per_level: u32,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            mode: GravityMode::Normal,
            rows_per_tick: GRAVITY_ROWS_PER_TICK.to_vec(),
            soft_drop_multiplier: SOFT_DROP_MULTIPLIER,
            start_level: 0,
            lines_per_level: LINES_PER_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// When false, a piece locks on the tick gravity rests it
    pub enabled: bool,
    pub delay_ticks: f64,
    pub max_resets: u32,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ticks: LOCK_DELAY_TICKS,
            max_resets: LOCK_RESET_LIMIT,
        }
    }
}

/// Auto-repeat timing for repeatable actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Ticks after the first fire before repeating starts (DAS)
    pub initial_delay: i32,
    /// Ticks between repeats (ARR)
    pub repeat_delay: i32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY_TICKS,
            repeat_delay: DEFAULT_REPEAT_DELAY_TICKS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(json).context("failed to parse game config")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize game config")
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let board = &self.board;
        ensure!(
            board.columns as usize >= MAX_SHAPE_SIZE,
            "board needs at least {} columns, got {}",
            MAX_SHAPE_SIZE,
            board.columns
        );
        ensure!(
            board.total_rows() >= MAX_SHAPE_SIZE,
            "board needs at least {} rows, got {}",
            MAX_SHAPE_SIZE,
            board.total_rows()
        );
        ensure!(
            board.spawn_column >= 0
                && board.spawn_column + MAX_SHAPE_SIZE as i32 <= board.columns as i32,
            "spawn column {} does not fit a {}-wide piece",
            board.spawn_column,
            MAX_SHAPE_SIZE
        );
        ensure!(
            board.spawn_row >= 0 && (board.spawn_row as usize) < board.total_rows(),
            "spawn row {} is outside the board",
            board.spawn_row
        );

        let gravity = &self.gravity;
        ensure!(
            !gravity.rows_per_tick.is_empty(),
            "gravity table must have at least one level"
        );
        ensure!(
            gravity
                .rows_per_tick
                .iter()
                .all(|speed| speed.is_finite() && *speed >= 0.0),
            "gravity table entries must be finite and non-negative"
        );
        ensure!(
            gravity.soft_drop_multiplier.is_finite() && gravity.soft_drop_multiplier >= 1.0,
            "soft drop multiplier must be at least 1, got {}",
            gravity.soft_drop_multiplier
        );

        ensure!(
            self.lock.delay_ticks.is_finite() && self.lock.delay_ticks >= 0.0,
            "lock delay must be a non-negative tick count"
        );
        ensure!(
            self.input.initial_delay >= 0 && self.input.repeat_delay >= 0,
            "input delays must be non-negative"
        );
        ensure!(self.queue_preview >= 1, "queue preview must hold at least one piece");

        Ok(())
    }
}
