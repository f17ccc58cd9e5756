//! Held-action queries
//!
//! The simulation never sees keys. A driver translates whatever device it reads into
//! "is this action held right now", stamped with a logical tick counter.

use stacker_types::GameAction;

/// Source of held-action state for one simulation step
pub trait InputSnapshot {
    fn is_held(&self, action: GameAction) -> bool;

    /// Monotonic logical tick counter, used to order presses
    fn tick(&self) -> u64;
}

/// Plain set of held actions, for drivers and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldActions {
    held: [bool; GameAction::COUNT],
    tick: u64,
}

impl HeldActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: GameAction) {
        self.held[action.index()] = true;
    }

    pub fn release(&mut self, action: GameAction) {
        self.held[action.index()] = false;
    }

    pub fn release_all(&mut self) {
        self.held = [false; GameAction::COUNT];
    }

    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    /// Advance the tick counter by one
    pub fn step(&mut self) {
        self.tick += 1;
    }

    /// Builder form of [`HeldActions::press`]
    pub fn with(mut self, action: GameAction) -> Self {
        self.press(action);
        self
    }
}

impl InputSnapshot for HeldActions {
    fn is_held(&self, action: GameAction) -> bool {
        self.held[action.index()]
    }

    fn tick(&self) -> u64 {
        self.tick
    }
}
