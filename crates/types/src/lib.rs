//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data: the simulation crates (`core`, `input`, `engine`)
//! build on these types, and external collaborators (renderers, drivers) can use them
//! without pulling in any simulation logic.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 visible rows, plus a 2-row hidden buffer
//! above the visible area where pieces spawn and may overhang:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 22 (indexed 0-21, top to bottom; rows 0-1 are hidden)
//! - **Spawn position**: (3, 0)
//!
//! # Timing
//!
//! All durations are expressed in simulation ticks, never wall-clock time:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LOCK_DELAY_TICKS` | 30 | Grounded ticks before a piece locks |
//! | `LOCK_RESET_LIMIT` | 15 | Max lock timer resets per piece |
//! | `SOFT_DROP_MULTIPLIER` | 20 | Gravity multiplier while soft drop is held |
//! | `DEFAULT_INITIAL_DELAY_TICKS` | 6 | DAS: ticks before auto-repeat starts |
//! | `DEFAULT_REPEAT_DELAY_TICKS` | 1 | ARR: ticks between auto-repeats |
//!
//! # Examples
//!
//! ```
//! use stacker_types::{GameAction, PieceKind, Rotation, Spin};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate(Spin::Cw), Rotation::East);
//! assert_eq!(Rotation::North.rotate(Spin::Ccw), Rotation::West);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert!(GameAction::MoveLeft.is_repeatable());
//! ```

use serde::{Deserialize, Serialize};

pub mod config;
pub mod kicks;

pub use config::{BoardConfig, GameConfig, GravityConfig, GravityMode, InputConfig, LockConfig};
pub use kicks::{kick_index, KickTable, KickTables, KICKS_PER_ROTATION};

/// Default board width in cells
pub const DEFAULT_COLUMNS: u8 = 10;

/// Default number of visible rows
pub const DEFAULT_VISIBLE_ROWS: u8 = 20;

/// Rows of spawn/overhang buffer above the visible area
pub const DEFAULT_HIDDEN_ROWS: u8 = 2;

/// Spawn anchor column
pub const SPAWN_COLUMN: i32 = 3;

/// Spawn anchor row (inside the hidden buffer)
pub const SPAWN_ROW: i32 = 0;

/// Number of upcoming pieces visible in the queue
pub const DEFAULT_QUEUE_PREVIEW: usize = 4;

/// Grounded ticks before the active piece locks
pub const LOCK_DELAY_TICKS: f64 = 30.0;

/// Maximum number of lock timer resets per piece
pub const LOCK_RESET_LIMIT: u32 = 15;

/// Gravity multiplier applied while soft drop is held
pub const SOFT_DROP_MULTIPLIER: f64 = 20.0;

/// Ticks between the first auto-repeat fire and the second (DAS)
pub const DEFAULT_INITIAL_DELAY_TICKS: i32 = 6;

/// Ticks between subsequent auto-repeat fires (ARR)
pub const DEFAULT_REPEAT_DELAY_TICKS: i32 = 1;

/// Cleared lines per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Largest bounding box of any piece shape
pub const MAX_SHAPE_SIZE: usize = 4;

/// Gravity in rows per tick, indexed by level
///
/// Levels past the end of the table use the last entry.
pub const GRAVITY_ROWS_PER_TICK: [f64; 30] = [
    1.0 / 48.0,
    1.0 / 43.0,
    1.0 / 38.0,
    1.0 / 33.0,
    1.0 / 28.0,
    1.0 / 23.0,
    1.0 / 18.0,
    1.0 / 13.0,
    1.0 / 8.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 5.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 4.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 3.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0 / 2.0,
    1.0 / 2.0,
    1.0 / 2.0,
    1.0 / 2.0,
    1.0 / 2.0,
    1.0 / 2.0,
    1.0 / 2.0,
    1.0 / 2.0,
    1.0 / 2.0,
    1.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_constants() {
        assert_eq!(LOCK_DELAY_TICKS, 30.0);
        assert_eq!(LOCK_RESET_LIMIT, 15);
        assert_eq!(SOFT_DROP_MULTIPLIER, 20.0);
        assert_eq!(DEFAULT_INITIAL_DELAY_TICKS, 6);
        assert_eq!(DEFAULT_REPEAT_DELAY_TICKS, 1);
    }

    #[test]
    fn gravity_table_is_monotonic() {
        assert!(GRAVITY_ROWS_PER_TICK
            .windows(2)
            .all(|pair| pair[0] <= pair[1]));
        assert_eq!(GRAVITY_ROWS_PER_TICK[GRAVITY_ROWS_PER_TICK.len() - 1], 1.0);
    }

    #[test]
    fn game_action_index_roundtrip() {
        for (i, action) in GameAction::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(GameAction::from_str(action.as_str()), Some(*action));
        }
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(Rotation::from_index(4), Rotation::North);
        assert_eq!(Rotation::from_index(-1), Rotation::West);
        assert_eq!(Rotation::West.rotate(Spin::Cw).index(), 0);
    }
}

/// The seven piece kinds
///
/// - **I**: 4-long bar in a 4x4 box
/// - **O**: 2x2 square
/// - **J, L, S, T, Z**: 3x3 boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in bag order before shuffling
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use stacker_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation direction
///
/// Clockwise is `+1`, counter-clockwise is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Cw,
    Ccw,
}

impl Spin {
    pub fn sign(&self) -> i32 {
        match self {
            Spin::Cw => 1,
            Spin::Ccw => -1,
        }
    }
}

/// Rotation states following the Super Rotation System (SRS)
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: Rotated 90° clockwise (index 1)
/// - **South**: Rotated 180° (index 2)
/// - **West**: Rotated 90° counter-clockwise (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index in `0..4`
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from any integer, taken modulo 4
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use stacker_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        self.rotate(Spin::Cw)
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use stacker_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        self.rotate(Spin::Ccw)
    }

    pub fn rotate(&self, spin: Spin) -> Self {
        Self::from_index(self.index() as i32 + spin.sign())
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Bindable game actions
///
/// Human drivers and bots both express their intent as a set of held actions per tick;
/// the input arbiter turns that into discrete fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left (auto-repeats)
    MoveLeft,
    /// Move piece one cell right (auto-repeats)
    MoveRight,
    /// Accelerate gravity while held
    SoftDrop,
    /// Drop to the lowest valid position and lock immediately
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Swap the active piece with the hold slot
    Hold,
}

impl GameAction {
    pub const COUNT: usize = 7;

    pub const ALL: [GameAction; GameAction::COUNT] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::Hold,
    ];

    /// Dense index for per-action state tables
    pub fn index(&self) -> usize {
        match self {
            GameAction::MoveLeft => 0,
            GameAction::MoveRight => 1,
            GameAction::SoftDrop => 2,
            GameAction::HardDrop => 3,
            GameAction::RotateCw => 4,
            GameAction::RotateCcw => 5,
            GameAction::Hold => 6,
        }
    }

    /// Whether holding the action keeps firing it (DAS/ARR)
    ///
    /// Non-repeatable actions fire once per press.
    pub fn is_repeatable(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
        )
    }

    /// Parse action from camelCase string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use stacker_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateccw"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
        }
    }
}

/// Integer grid coordinate; `y` grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
