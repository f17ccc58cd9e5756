//! Active piece - geometry, motion and SRS rotation
//!
//! The piece owns its shape buffer; rotating mutates that buffer and nothing else, so
//! there is never any aliasing between pieces. Every motion consults the board's
//! collision predicates and either commits fully or leaves the piece untouched.

use stacker_types::{kick_index, KickTables, PieceKind, Point, Rotation, Spin};

use crate::board::Board;
use crate::collision::Offsets;
use crate::shape::Shape;

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Board position of the shape's top-left corner
    pub anchor: Point,
    pub shape: Shape,
}

impl ActivePiece {
    /// Fresh piece in spawn orientation at `at`
    ///
    /// Spawning never fails; the caller checks [`ActivePiece::collides_any`] to detect a
    /// blocked spawn.
    pub fn spawn(kind: PieceKind, at: Point) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            anchor: at,
            shape: Shape::for_kind(kind),
        }
    }

    /// Absolute board coordinates of every mino
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(x, y)| (self.anchor.x + x, self.anchor.y + y))
    }

    /// Whether the piece overlaps the stack or leaves the grid where it stands
    pub fn collides_any(&self, board: &Board) -> bool {
        board
            .collides(self.anchor, &self.shape, Offsets::ZERO)
            .any()
    }

    /// Whether the piece is resting on the floor or the stack
    pub fn is_resting(&self, board: &Board) -> bool {
        board.collides_bottom(self.anchor, &self.shape, 1)
    }

    pub fn move_left(&mut self, board: &Board) -> bool {
        if board.collides_left(self.anchor, &self.shape, 1) {
            return false;
        }
        self.anchor.x -= 1;
        true
    }

    pub fn move_right(&mut self, board: &Board) -> bool {
        if board.collides_right(self.anchor, &self.shape, 1) {
            return false;
        }
        self.anchor.x += 1;
        true
    }

    /// Fall up to `max_rows`, stopping early when blocked
    ///
    /// Returns whether the piece is resting afterwards.
    pub fn move_down(&mut self, board: &Board, max_rows: u32) -> bool {
        for _ in 0..max_rows {
            if self.is_resting(board) {
                return true;
            }
            self.anchor.y += 1;
        }
        self.is_resting(board)
    }

    /// Drop straight down until resting; returns the distance fallen
    ///
    /// Terminates because the floor bounds the fall.
    pub fn to_bottom(&mut self, board: &Board) -> u32 {
        let mut distance = 0;
        while !self.is_resting(board) {
            self.anchor.y += 1;
            distance += 1;
        }
        distance
    }

    /// Anchor the piece would land at if hard dropped now
    pub fn ghost_anchor(&self, board: &Board) -> Point {
        let mut ghost = *self;
        ghost.to_bottom(board);
        ghost.anchor
    }

    /// Rotate a quarter turn using the SRS kick table
    ///
    /// Offsets are tried in table order and the first that fits is taken, even if a later
    /// one would also fit. When none fits the piece is left exactly as it was. O pieces
    /// never rotate.
    pub fn try_rotate(&mut self, board: &Board, spin: Spin, kicks: &KickTables) -> bool {
        if self.kind == PieceKind::O {
            return false;
        }

        let candidate = self.shape.rotated(spin);
        let row = &kicks.for_kind(self.kind)[kick_index(self.rotation, spin)];

        for &(dx, dy) in row.iter() {
            let position = self.anchor.offset(dx as i32, dy as i32);
            if board.collides(position, &candidate, Offsets::ZERO).any() {
                continue;
            }

            self.anchor = position;
            self.shape = candidate;
            self.rotation = self.rotation.rotate(spin);
            return true;
        }

        false
    }
}
