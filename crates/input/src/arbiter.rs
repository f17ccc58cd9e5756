//! DAS/ARR arbitration over held actions
//!
//! Each action keeps a countdown. The first evaluation after a press fires immediately
//! and loads `initial_delay`; every later fire loads `repeat_delay`. With the defaults
//! (6 and 1) a held move fires on tick 1, then tick 7, then every tick.
//!
//! Single-trigger actions (hard drop, rotations, hold) fire once per press and never
//! repeat.

use stacker_types::{GameAction, InputConfig};

use crate::snapshot::InputSnapshot;

/// Repeat bookkeeping for one action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionState {
    pub down: bool,
    /// Logical tick of the most recent press
    pub pressed_at_tick: u64,
    pub repeat_counter: i32,
    pub repeats: u32,
    pub triggered_once: bool,
}

impl ActionState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone)]
pub struct InputArbiter {
    states: [ActionState; GameAction::COUNT],
    initial_delay: i32,
    repeat_delay: i32,
}

impl InputArbiter {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            states: [ActionState::default(); GameAction::COUNT],
            initial_delay: config.initial_delay,
            repeat_delay: config.repeat_delay,
        }
    }

    /// Sample the snapshot once at the start of a step
    ///
    /// New presses are stamped with the snapshot's tick; released actions lose all
    /// repeat state.
    pub fn begin_tick(&mut self, snapshot: &impl InputSnapshot) {
        let tick = snapshot.tick();
        for action in GameAction::ALL {
            let state = &mut self.states[action.index()];
            match (snapshot.is_held(action), state.down) {
                (true, false) => {
                    state.reset();
                    state.down = true;
                    state.pressed_at_tick = tick;
                }
                (false, true) => state.reset(),
                _ => {}
            }
        }
    }

    /// Raw held state as of the last [`InputArbiter::begin_tick`]
    pub fn is_down(&self, action: GameAction) -> bool {
        self.states[action.index()].down
    }

    pub fn state(&self, action: GameAction) -> &ActionState {
        &self.states[action.index()]
    }

    /// Whether `action` fires this step
    pub fn pressed(&mut self, action: GameAction) -> bool {
        let state = &mut self.states[action.index()];
        if !state.down {
            state.reset();
            return false;
        }

        if !action.is_repeatable() {
            if state.triggered_once {
                return false;
            }
            state.triggered_once = true;
            return true;
        }

        self.count_down(action)
    }

    fn count_down(&mut self, action: GameAction) -> bool {
        let (initial_delay, repeat_delay) = (self.initial_delay, self.repeat_delay);
        let state = &mut self.states[action.index()];

        state.repeat_counter -= 1;
        if state.repeat_counter > 0 {
            return false;
        }

        state.repeat_counter = if state.repeats > 0 {
            repeat_delay
        } else {
            initial_delay
        };
        state.repeats += 1;
        state.triggered_once = true;
        true
    }

    /// Pick between two opposing actions
    ///
    /// With both held, the more recent press wins and only it is evaluated; the other
    /// keeps its state so releasing the winner hands control back to it. Equal press
    /// ticks go to `a`.
    pub fn choose(&mut self, a: GameAction, b: GameAction) -> Option<GameAction> {
        let down_a = self.is_down(a);
        let down_b = self.is_down(b);

        let candidate = match (down_a, down_b) {
            (false, false) => {
                self.states[a.index()].reset();
                self.states[b.index()].reset();
                return None;
            }
            (true, false) => a,
            (false, true) => b,
            (true, true) => {
                let pressed_a = self.states[a.index()].pressed_at_tick;
                let pressed_b = self.states[b.index()].pressed_at_tick;
                if pressed_b > pressed_a {
                    b
                } else {
                    a
                }
            }
        };

        self.pressed(candidate).then_some(candidate)
    }

    /// Drop every action's state, e.g. on restart
    pub fn reset(&mut self) {
        for state in &mut self.states {
            state.reset();
        }
    }
}
