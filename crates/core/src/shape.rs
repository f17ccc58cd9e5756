//! Shape module - square occupancy matrices and in-place rotation
//!
//! Each piece kind has a canonical spawn matrix in SRS orientation. Rotating the matrix
//! in place by quarter turns reproduces the SRS rotation states, so the four orientations
//! are never stored separately.

use stacker_types::{PieceKind, Spin, MAX_SHAPE_SIZE};

/// Square `N×N` occupancy matrix with `N` in `1..=4`
///
/// Backed by fixed 4x4 storage so shapes are `Copy` and never allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Canonical spawn orientation for `kind`
    pub fn for_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[
                &[0, 0, 0, 0],
                &[1, 1, 1, 1],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
            ]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
        }
    }

    /// Build a shape from rows of 0/1 values
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, larger than 4x4, or not square. Rotation is only
    /// defined for square matrices, so a non-square shape is a definition bug.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&size),
            "shape size {} outside 1..={}",
            size,
            MAX_SHAPE_SIZE
        );
        assert!(
            rows.iter().all(|row| row.len() == size),
            "shape matrix must be square"
        );

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                cells[y][x] = *value != 0;
            }
        }
        Self { size, cells }
    }

    /// Side length of the bounding box
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell at column `x`, row `y` is set
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[y][x]
    }

    /// Offsets `(x, y)` of every set cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.size).flat_map(move |y| {
            (0..self.size)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i32, y as i32))
        })
    }

    /// First and last rows containing a set cell
    pub fn row_span(&self) -> Option<(i32, i32)> {
        let mut rows = (0..self.size).filter(|&y| self.cells[y][..self.size].iter().any(|c| *c));
        let first = rows.next()?;
        let last = rows.last().unwrap_or(first);
        Some((first as i32, last as i32))
    }

    /// Rotate a quarter turn in place
    ///
    /// Works layer by layer from the outside in, cycling four cells per step.
    pub fn rotate(&mut self, spin: Spin) {
        let n = self.size;
        let m = &mut self.cells;

        for y in 0..n / 2 {
            let last = n - y - 1;
            for x in y..last {
                let offset = x - y;
                let last_offset = last - offset;

                match spin {
                    Spin::Cw => {
                        let tmp = m[last_offset][y];
                        m[last_offset][y] = m[last][last_offset];
                        m[last][last_offset] = m[x][last];
                        m[x][last] = m[y][x];
                        m[y][x] = tmp;
                    }
                    Spin::Ccw => {
                        let tmp = m[y][x];
                        m[y][x] = m[x][last];
                        m[x][last] = m[last][last_offset];
                        m[last][last_offset] = m[last_offset][y];
                        m[last_offset][y] = tmp;
                    }
                }
            }
        }
    }

    /// Rotated copy, leaving `self` untouched
    pub fn rotated(&self, spin: Spin) -> Self {
        let mut copy = *self;
        copy.rotate(spin);
        copy
    }
}
