//! Per-step report handed to the render boundary

use std::ops::RangeInclusive;

use stacker_core::ClearedRows;

/// What changed during one [`Game::update`](crate::Game::update)
///
/// Consumers redraw only what is flagged. `dirty_rows` covers the rows written by a
/// lock; when lines were cleared it extends to the top of the board, since everything
/// above the cleared rows moved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TickResult {
    pub active_dirty: bool,
    pub board_dirty: bool,
    pub dirty_rows: Option<RangeInclusive<usize>>,
    /// Rows removed by this step's lock, bottom to top
    pub cleared_rows: ClearedRows,
    pub hold_dirty: bool,
    pub queue_dirty: bool,
    /// The active piece is grounded and its lock timer is running
    pub locking: bool,
    /// A piece was committed to the board this step
    pub locked: bool,
    pub game_over: bool,
}

impl TickResult {
    /// Whether anything visible changed
    pub fn any_dirty(&self) -> bool {
        self.active_dirty || self.board_dirty || self.hold_dirty || self.queue_dirty
    }

    pub fn lines_cleared(&self) -> usize {
        self.cleared_rows.len()
    }
}
