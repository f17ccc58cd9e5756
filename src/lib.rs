//! Stacker (workspace facade crate).
//!
//! The simulation lives in dedicated crates under `crates/`; this package re-exports them as
//! `stacker::{types,core,input,engine}` and hosts the headless `stacker-sim` driver.

pub mod logging;
pub mod sim;

pub use stacker_core as core;
pub use stacker_engine as engine;
pub use stacker_input as input;
pub use stacker_types as types;
