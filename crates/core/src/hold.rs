//! Hold slot
//!
//! One piece may be parked per lock: after a hold the slot refuses further swaps until
//! the next piece locks and [`HoldSlot::restore`] is called.

use rand::RngCore;

use stacker_types::PieceKind;

use crate::rng::PieceQueue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldSlot {
    held: Option<PieceKind>,
    can_swap: bool,
    dirty: bool,
}

impl HoldSlot {
    pub fn new() -> Self {
        Self {
            held: None,
            can_swap: true,
            dirty: true,
        }
    }

    /// Park `current` and return the kind that becomes active
    ///
    /// An empty slot takes the active piece and the replacement comes from the queue;
    /// an occupied slot swaps directly. Returns `None` without touching anything when a
    /// swap was already used for this piece.
    pub fn hold_active<R: RngCore>(
        &mut self,
        current: PieceKind,
        queue: &mut PieceQueue<R>,
    ) -> Option<PieceKind> {
        if !self.can_swap {
            return None;
        }

        let next = match self.held.replace(current) {
            Some(previous) => previous,
            None => queue.consume(),
        };
        self.can_swap = false;
        self.dirty = true;
        Some(next)
    }

    /// Allow swapping again; only a lock commit calls this
    pub fn restore(&mut self) {
        if !self.can_swap {
            self.can_swap = true;
            self.dirty = true;
        }
    }

    pub fn can_swap(&self) -> bool {
        self.can_swap
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn reset_dirty(&mut self) {
        self.dirty = false;
    }

    /// Empty the slot for a new session
    pub fn clear(&mut self) {
        self.held = None;
        self.can_swap = true;
        self.dirty = true;
    }
}

impl Default for HoldSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Randomizer;

    #[test]
    fn test_first_hold_pulls_from_queue() {
        let mut queue = PieceQueue::new(4, Randomizer::seeded(11));
        let head = queue.peek();
        let mut hold = HoldSlot::new();

        let next = hold.hold_active(PieceKind::T, &mut queue);
        assert_eq!(next, head);
        assert_eq!(hold.held(), Some(PieceKind::T));
        assert!(!hold.can_swap());
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn test_second_hold_before_lock_is_rejected() {
        let mut queue = PieceQueue::new(4, Randomizer::seeded(11));
        let mut hold = HoldSlot::new();
        hold.hold_active(PieceKind::T, &mut queue);

        let preview: Vec<_> = queue.iter().collect();
        assert_eq!(hold.hold_active(PieceKind::S, &mut queue), None);
        assert_eq!(hold.held(), Some(PieceKind::T));
        assert_eq!(queue.iter().collect::<Vec<_>>(), preview);
    }

    #[test]
    fn test_occupied_slot_swaps_without_touching_queue() {
        let mut queue = PieceQueue::new(4, Randomizer::seeded(11));
        let mut hold = HoldSlot::new();
        hold.hold_active(PieceKind::T, &mut queue);
        hold.restore();

        let preview: Vec<_> = queue.iter().collect();
        assert_eq!(hold.hold_active(PieceKind::Z, &mut queue), Some(PieceKind::T));
        assert_eq!(hold.held(), Some(PieceKind::Z));
        assert_eq!(queue.iter().collect::<Vec<_>>(), preview);
    }

    #[test]
    fn test_restore_marks_dirty_only_on_change() {
        let mut hold = HoldSlot::new();
        hold.reset_dirty();
        hold.restore();
        assert!(!hold.is_dirty());
    }
}
