//! Lock delay state machine
//!
//! ```text
//!   Airborne --ground()--> Grounded --advance() past delay--> Locked
//!      ^                      |
//!      +--lift() / try_reset()+
//! ```
//!
//! Time only accumulates while grounded. Leaving `Grounded` for `Airborne` always zeroes
//! the timer. Resets are capped per piece; once the cap is hit the timer keeps running
//! even though the piece may still move.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockPhase {
    #[default]
    Airborne,
    Grounded,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LockState {
    phase: LockPhase,
    reset_count: u32,
    elapsed: f64,
}

impl LockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Piece came to rest: start the timer
    pub fn ground(&mut self) {
        if self.phase == LockPhase::Airborne {
            self.phase = LockPhase::Grounded;
            self.elapsed = 0.0;
        }
    }

    /// Piece is falling again; the reset count is kept
    pub fn lift(&mut self) {
        if self.phase == LockPhase::Grounded {
            self.phase = LockPhase::Airborne;
            self.elapsed = 0.0;
        }
    }

    /// Spend one reset on a grounded move or rotation
    ///
    /// Returns false, leaving the timer running, when not grounded or when `max_resets`
    /// have already been spent.
    pub fn try_reset(&mut self, max_resets: u32) -> bool {
        if self.phase != LockPhase::Grounded || self.reset_count >= max_resets {
            return false;
        }
        self.phase = LockPhase::Airborne;
        self.elapsed = 0.0;
        self.reset_count += 1;
        true
    }

    /// Run the timer for `dt` ticks; returns true on the tick the piece locks
    pub fn advance(&mut self, dt: f64, delay: f64) -> bool {
        if self.phase != LockPhase::Grounded {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= delay {
            self.phase = LockPhase::Locked;
            return true;
        }
        false
    }

    pub fn force_lock(&mut self) {
        self.phase = LockPhase::Locked;
    }

    /// Fresh state for a new piece
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> LockPhase {
        self.phase
    }

    pub fn is_grounded(&self) -> bool {
        self.phase == LockPhase::Grounded
    }

    pub fn is_locked(&self) -> bool {
        self.phase == LockPhase::Locked
    }

    pub fn reset_count(&self) -> u32 {
        self.reset_count
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
