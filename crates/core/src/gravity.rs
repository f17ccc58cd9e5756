//! Gravity accumulator
//!
//! Gravity is measured in rows per tick. Each update adds `speed × elapsed` to a
//! fractional accumulator and the piece falls by the whole rows it holds; the fraction
//! carries into the next update, so slow speeds still move the piece eventually.
//!
//! | Mode       | Multiplier |
//! |------------|------------|
//! | `off`      | 0          |
//! | `relaxed`  | 0.5        |
//! | `normal`   | 1          |
//! | `engaging` | 1.5        |
//! | `spicy`    | 2          |
//! | `instant`  | to bottom  |

use stacker_types::GravityConfig;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GravityState {
    accumulated_rows: f64,
    hard_dropping: bool,
}

/// Rows per tick for `level`, before soft drop
///
/// Levels past the end of the table use its last entry. Instant mode has no finite
/// speed and reports 0 here; the orchestrator handles it separately.
pub fn base_speed(level: u32, config: &GravityConfig) -> f64 {
    let Some(last) = config.rows_per_tick.len().checked_sub(1) else {
        return 0.0;
    };
    let index = (level as usize).min(last);
    config.rows_per_tick[index] * config.mode.multiplier().unwrap_or(0.0)
}

impl GravityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed` ticks worth of fall; nothing accumulates during a hard drop
    pub fn accumulate(
        &mut self,
        config: &GravityConfig,
        level: u32,
        soft_drop_held: bool,
        elapsed: f64,
    ) {
        if self.hard_dropping {
            return;
        }
        let mut speed = base_speed(level, config);
        if soft_drop_held {
            speed *= config.soft_drop_multiplier;
        }
        self.accumulated_rows += speed * elapsed;
    }

    /// Remove and return the whole rows accumulated so far
    pub fn take_whole_rows(&mut self) -> u32 {
        let whole = self.accumulated_rows.floor();
        if whole < 1.0 {
            return 0;
        }
        self.accumulated_rows -= whole;
        whole as u32
    }

    pub fn accumulated_rows(&self) -> f64 {
        self.accumulated_rows
    }

    pub fn is_hard_dropping(&self) -> bool {
        self.hard_dropping
    }

    pub fn set_hard_dropping(&mut self, hard_dropping: bool) {
        self.hard_dropping = hard_dropping;
    }

    /// Forget any partial fall; used when a new piece becomes active
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacker_types::GravityMode;

    fn config(mode: GravityMode) -> GravityConfig {
        GravityConfig {
            mode,
            rows_per_tick: vec![0.25, 0.5, 1.0],
            soft_drop_multiplier: 20.0,
            start_level: 0,
            lines_per_level: 10,
        }
    }

    #[test]
    fn test_base_speed_clamps_level() {
        let cfg = config(GravityMode::Normal);
        assert_eq!(base_speed(0, &cfg), 0.25);
        assert_eq!(base_speed(2, &cfg), 1.0);
        assert_eq!(base_speed(99, &cfg), 1.0);
    }

    #[test]
    fn test_mode_multipliers() {
        assert_eq!(base_speed(1, &config(GravityMode::Off)), 0.0);
        assert_eq!(base_speed(1, &config(GravityMode::Relaxed)), 0.25);
        assert_eq!(base_speed(1, &config(GravityMode::Engaging)), 0.75);
        assert_eq!(base_speed(1, &config(GravityMode::Spicy)), 1.0);
    }

    #[test]
    fn test_fraction_carries_over() {
        let cfg = config(GravityMode::Normal);
        let mut gravity = GravityState::new();

        let mut fallen = 0;
        for _ in 0..3 {
            gravity.accumulate(&cfg, 0, false, 1.0);
            fallen += gravity.take_whole_rows();
        }
        assert_eq!(fallen, 0);

        gravity.accumulate(&cfg, 0, false, 1.0);
        assert_eq!(gravity.take_whole_rows(), 1);
        assert_eq!(gravity.accumulated_rows(), 0.0);
    }

    #[test]
    fn test_soft_drop_multiplies_speed() {
        let cfg = config(GravityMode::Normal);
        let mut gravity = GravityState::new();
        gravity.accumulate(&cfg, 0, true, 1.0);
        assert_eq!(gravity.take_whole_rows(), 5);
    }

    #[test]
    fn test_hard_drop_suspends_accumulation() {
        let cfg = config(GravityMode::Normal);
        let mut gravity = GravityState::new();
        gravity.accumulate(&cfg, 0, false, 2.0);
        gravity.set_hard_dropping(true);
        gravity.accumulate(&cfg, 2, true, 10.0);
        assert_eq!(gravity.accumulated_rows(), 0.5);

        gravity.set_hard_dropping(false);
        gravity.accumulate(&cfg, 0, false, 2.0);
        assert_eq!(gravity.take_whole_rows(), 1);
    }

    #[test]
    fn test_reset_discards_fraction() {
        let cfg = config(GravityMode::Normal);
        let mut gravity = GravityState::new();
        gravity.accumulate(&cfg, 0, false, 3.0);
        gravity.set_hard_dropping(true);
        gravity.reset();
        assert_eq!(gravity, GravityState::default());
    }
}
