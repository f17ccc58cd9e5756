//! Game engine - the per-tick orchestrator
//!
//! [`Game`] owns the board, active piece, piece supply and every timing state machine.
//! Drivers call [`Game::update`] once per frame with the elapsed ticks and an
//! [`InputSnapshot`](stacker_input::InputSnapshot); the returned [`TickResult`] says what
//! changed. Renderers read accessors or take a [`GameSnapshot`].
//!
//! # Example
//!
//! ```
//! use stacker_engine::Game;
//! use stacker_input::HeldActions;
//! use stacker_types::{GameAction, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default(), 42).unwrap();
//! let mut held = HeldActions::new().with(GameAction::HardDrop);
//! held.step();
//!
//! let result = game.update(1.0, &held);
//! assert!(result.locked);
//! assert_eq!(game.pieces_locked(), 1);
//! ```

pub mod game;
pub mod snapshot;
pub mod tick;

pub use stacker_core as core;
pub use stacker_input as input;
pub use stacker_types as types;

pub use game::Game;
pub use snapshot::{ActiveSnapshot, GameSnapshot, LockSnapshot};
pub use tick::TickResult;
