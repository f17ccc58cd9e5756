//! Collision predicates between a shape and the board
//!
//! A shape collides in a direction when any of its set cells, shifted `offset` cells that
//! way, leaves the grid or lands on an occupied cell. With an offset of 0 every direction
//! reduces to "does the shape overlap anything right where it is", which is what kick
//! validation uses.

use stacker_types::Point;

use crate::board::Board;
use crate::shape::Shape;

/// Per-direction shift amounts for [`Board::collides`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offsets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Offsets {
    pub const ZERO: Offsets = Offsets {
        top: 0,
        left: 0,
        bottom: 0,
        right: 0,
    };

    /// Same shift in every direction
    pub const fn uniform(offset: i32) -> Self {
        Self {
            top: offset,
            left: offset,
            bottom: offset,
            right: offset,
        }
    }
}

/// Aggregate result of the four directional predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collision {
    pub top: bool,
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
}

impl Collision {
    pub fn any(&self) -> bool {
        self.top || self.left || self.bottom || self.right
    }

    pub fn all(&self) -> bool {
        self.top && self.left && self.bottom && self.right
    }

    /// Blocked both above and below
    pub fn vertical(&self) -> bool {
        self.top && self.bottom
    }

    /// Blocked both left and right
    pub fn horizontal(&self) -> bool {
        self.left && self.right
    }
}

impl Board {
    /// Whether any set cell of `shape` at `position`, shifted by `(dx, dy)`, is blocked
    fn shape_blocked(&self, position: Point, shape: &Shape, dx: i32, dy: i32) -> bool {
        shape
            .cells()
            .any(|(x, y)| !self.is_valid(position.x + x + dx, position.y + y + dy))
    }

    pub fn collides_top(&self, position: Point, shape: &Shape, offset: i32) -> bool {
        self.shape_blocked(position, shape, 0, -offset)
    }

    pub fn collides_bottom(&self, position: Point, shape: &Shape, offset: i32) -> bool {
        self.shape_blocked(position, shape, 0, offset)
    }

    pub fn collides_left(&self, position: Point, shape: &Shape, offset: i32) -> bool {
        self.shape_blocked(position, shape, -offset, 0)
    }

    pub fn collides_right(&self, position: Point, shape: &Shape, offset: i32) -> bool {
        self.shape_blocked(position, shape, offset, 0)
    }

    pub fn collides(&self, position: Point, shape: &Shape, offsets: Offsets) -> Collision {
        Collision {
            top: self.collides_top(position, shape, offsets.top),
            left: self.collides_left(position, shape, offsets.left),
            bottom: self.collides_bottom(position, shape, offsets.bottom),
            right: self.collides_right(position, shape, offsets.right),
        }
    }
}
