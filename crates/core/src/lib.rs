//! Core simulation rules - pure, deterministic, and testable
//!
//! Everything here is plain state plus rules. There is no I/O and no clock: time enters
//! only as "elapsed ticks" arguments, and randomness only through the RNG the caller
//! hands to [`Randomizer`].
//!
//! # Module Structure
//!
//! - [`board`]: the grid, cell queries and line clearing
//! - [`collision`]: directional collision predicates between a shape and the board
//! - [`shape`]: square occupancy matrices and quarter-turn rotation
//! - [`piece`]: the active piece, its motion and SRS kicked rotation
//! - [`rng`]: 7-bag randomizer and preview queue
//! - [`hold`]: the hold slot
//! - [`gravity`]: fractional row accumulator
//! - [`lock`]: lock delay state machine
//!
//! # Example
//!
//! ```
//! use stacker_core::{ActivePiece, Board};
//! use stacker_core::types::{PieceKind, Point};
//!
//! let board = Board::new(10, 20, 2);
//! let mut piece = ActivePiece::spawn(PieceKind::T, Point::new(3, 0));
//! assert!(!piece.collides_any(&board));
//!
//! let fallen = piece.to_bottom(&board);
//! assert_eq!(fallen, 20);
//! assert!(piece.is_resting(&board));
//! ```

pub mod board;
pub mod collision;
pub mod gravity;
pub mod hold;
pub mod lock;
pub mod piece;
pub mod rng;
pub mod shape;

pub use stacker_types as types;

pub use board::{Board, ClearedRows};
pub use collision::{Collision, Offsets};
pub use gravity::{base_speed, GravityState};
pub use hold::HoldSlot;
pub use lock::{LockPhase, LockState};
pub use piece::ActivePiece;
pub use rng::{DefaultRng, PieceQueue, Randomizer};
pub use shape::Shape;
