//! Input arbitration (engine-facing).
//!
//! This crate is independent of any device or UI framework. Drivers report held
//! actions through [`InputSnapshot`]; [`InputArbiter`] turns them into per-step
//! decisions with DAS/ARR auto-repeat and opposing-direction arbitration.

pub mod arbiter;
pub mod snapshot;

pub use stacker_types as types;

pub use arbiter::{ActionState, InputArbiter};
pub use snapshot::{HeldActions, InputSnapshot};
