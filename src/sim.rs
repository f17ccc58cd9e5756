//! Headless scripted session
//!
//! Drives a [`Game`] with a fixed bot so a whole session can be run, logged and
//! reproduced from a seed without any device input.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `STACKER_CONFIG` | built-in defaults | Path to a JSON [`GameConfig`] |
//! | `STACKER_SEED` | 1 | Piece supply seed |
//! | `STACKER_TICKS` | 3600 | Maximum ticks to simulate |
//! | `STACKER_LOG` | `info` | Log level (`off`, `error`, ..., `trace`) |

use std::fs;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::engine::Game;
use crate::input::HeldActions;
use crate::types::{GameAction, GameConfig};

const DEFAULT_SEED: u64 = 1;
const DEFAULT_TICKS: u64 = 3600;

/// Ticks the bot spends on one piece before giving up on its target column
const PATIENCE_TICKS: u32 = 40;

#[derive(Debug, Clone)]
pub struct SimSettings {
    pub config: GameConfig,
    pub seed: u64,
    pub ticks: u64,
    pub log_level: LevelFilter,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seed: DEFAULT_SEED,
            ticks: DEFAULT_TICKS,
            log_level: LevelFilter::Info,
        }
    }
}

impl SimSettings {
    /// Read settings from `STACKER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unparsable numbers fall back to defaults
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = match lookup("STACKER_CONFIG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            Some(path) => {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path))?;
                GameConfig::from_json_str(&text)
                    .with_context(|| format!("loading config file {}", path))?
            }
            None => GameConfig::default(),
        };

        let seed = lookup("STACKER_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_SEED);
        let ticks = lookup("STACKER_TICKS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_TICKS);
        let log_level = lookup("STACKER_LOG")
            .and_then(|s| LevelFilter::from_str(s.trim()).ok())
            .unwrap_or(LevelFilter::Info);

        Ok(Self {
            config,
            seed,
            ticks,
            log_level,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimReport {
    pub ticks: u64,
    pub pieces_locked: u32,
    pub lines: u32,
    pub level: u32,
    pub game_over: bool,
}

/// Bot that walks each piece to a target column and hard drops it
///
/// Every other piece gets one clockwise turn first. Hard drop is released for a tick
/// after each drop so the next piece sees a fresh press.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDriver {
    piece: Option<u32>,
    target: i32,
    ticks_on_piece: u32,
    cooldown: bool,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `held` for the next update of `game`
    pub fn drive(&mut self, game: &Game, held: &mut HeldActions) {
        held.release_all();
        if self.cooldown {
            self.cooldown = false;
            return;
        }

        let locked = game.pieces_locked();
        if self.piece != Some(locked) {
            self.piece = Some(locked);
            self.ticks_on_piece = 0;
            let span = (game.board().width() as i32 - 3).max(1);
            self.target = (locked as i32 * 3) % span;

            if locked % 2 == 1 {
                held.press(GameAction::RotateCw);
                return;
            }
        }
        self.ticks_on_piece += 1;

        let x = game.active().anchor.x;
        if x == self.target || self.ticks_on_piece > PATIENCE_TICKS {
            held.press(GameAction::HardDrop);
            self.cooldown = true;
        } else if x < self.target {
            held.press(GameAction::MoveRight);
        } else {
            held.press(GameAction::MoveLeft);
        }
    }
}

/// Run a scripted session until game over or the tick limit
pub fn run(settings: &SimSettings) -> Result<SimReport> {
    let mut game = Game::new(settings.config.clone(), settings.seed)?;
    let mut driver = ScriptedDriver::new();
    let mut held = HeldActions::new();
    let mut report = SimReport::default();

    log::info!("session start: seed {}, {} ticks", settings.seed, settings.ticks);

    for tick in 1..=settings.ticks {
        held.set_tick(tick);
        driver.drive(&game, &mut held);
        let result = game.update(1.0, &held);
        report.ticks = tick;

        if result.lines_cleared() > 0 {
            log::info!(
                "tick {}: cleared {} (lines {}, level {})",
                tick,
                result.lines_cleared(),
                game.lines(),
                game.level()
            );
        }
        if result.game_over {
            break;
        }
    }

    report.pieces_locked = game.pieces_locked();
    report.lines = game.lines();
    report.level = game.level();
    report.game_over = game.is_game_over();
    log::info!("session end: {:?}", report);
    Ok(report)
}
