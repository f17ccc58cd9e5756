//! SRS wall kick data
//!
//! Each table holds 8 rows, one per rotation transition, each with 5 `(dx, dy)` offsets
//! tried in order. The first offset is always `(0, 0)` (no kick); later offsets move the
//! piece progressively further. Offsets are in board coordinates where `y` grows downward,
//! so the vertical component is the negation of the y-up values published for SRS.
//!
//! Reference: https://tetris.wiki/Super_Rotation_System

use serde::{Deserialize, Serialize};

use crate::{PieceKind, Rotation, Spin};

/// Offsets tried per rotation transition
pub const KICKS_PER_ROTATION: usize = 5;

/// Kick table indexed by [`kick_index`]
pub type KickTable = [[(i8, i8); KICKS_PER_ROTATION]; 8];

/// JLSTZ kick table (shared by J, L, S, T, Z)
pub const SRS_JLSTZ_KICKS: KickTable = [
    // 0->1 (N->E, clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0->3 (N->W, counter-clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1->0 (E->N, counter-clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1->2 (E->S, clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 2->1 (S->E, counter-clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 2->3 (S->W, clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 3->2 (W->S, counter-clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 3->0 (W->N, clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// I piece kick table (larger bounding box, different offsets)
pub const SRS_I_KICKS: KickTable = [
    // 0->1 (N->E)
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 0->3 (N->W)
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 1->0 (E->N)
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 1->2 (E->S)
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 2->1 (S->E)
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // 2->3 (S->W)
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 3->2 (W->S)
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 3->0 (W->N)
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
];

/// Kick tables for the whole piece set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickTables {
    pub i: KickTable,
    pub jlstz: KickTable,
}

impl KickTables {
    /// Table used by `kind`
    ///
    /// O shares the JLSTZ table even though it never needs a kick.
    pub fn for_kind(&self, kind: PieceKind) -> &KickTable {
        match kind {
            PieceKind::I => &self.i,
            _ => &self.jlstz,
        }
    }
}

impl Default for KickTables {
    fn default() -> Self {
        Self {
            i: SRS_I_KICKS,
            jlstz: SRS_JLSTZ_KICKS,
        }
    }
}

/// Row of a [`KickTable`] for a transition out of `from`
pub fn kick_index(from: Rotation, spin: Spin) -> usize {
    match (from, spin) {
        (Rotation::North, Spin::Cw) => 0,  // N->E
        (Rotation::North, Spin::Ccw) => 1, // N->W
        (Rotation::East, Spin::Ccw) => 2,  // E->N
        (Rotation::East, Spin::Cw) => 3,   // E->S
        (Rotation::South, Spin::Ccw) => 4, // S->E
        (Rotation::South, Spin::Cw) => 5,  // S->W
        (Rotation::West, Spin::Ccw) => 6,  // W->S
        (Rotation::West, Spin::Cw) => 7,   // W->N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_transition_has_a_distinct_row() {
        let mut seen = [false; 8];
        for from in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
            for spin in [Spin::Cw, Spin::Ccw] {
                let idx = kick_index(from, spin);
                assert!(!seen[idx], "row {} used twice", idx);
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn first_kick_is_always_identity() {
        let tables = KickTables::default();
        for row in tables.i.iter().chain(tables.jlstz.iter()) {
            assert_eq!(row[0], (0, 0));
        }
    }

    #[test]
    fn opposite_transitions_mirror_each_other() {
        // N->E and E->N are inverse moves, so their kicks are negated.
        for table in [SRS_JLSTZ_KICKS, SRS_I_KICKS] {
            let forward = table[kick_index(Rotation::North, Spin::Cw)];
            let back = table[kick_index(Rotation::East, Spin::Ccw)];
            for (f, b) in forward.iter().zip(back.iter()) {
                assert_eq!((f.0, f.1), (-b.0, -b.1));
            }
        }
    }
}
