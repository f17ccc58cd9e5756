//! Board module - manages the game grid
//!
//! The board is a `columns x rows` grid where each cell is empty or filled with a piece kind.
//! The top `hidden_rows` rows are a buffer above the visible playfield where pieces spawn.
//! Uses a flat row-major vector for cache locality; it is sized once and never reallocates.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Cells are only ever written by [`Board::occupy`] and by the compaction in
//! [`Board::clear_full_rows`].

use arrayvec::ArrayVec;

use stacker_types::{BoardConfig, Cell, PieceKind, MAX_SHAPE_SIZE};

use crate::piece::ActivePiece;

/// Rows cleared by a single lock, listed bottom to top
pub type ClearedRows = ArrayVec<usize, MAX_SHAPE_SIZE>;

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: usize,
    rows: usize,
    hidden_rows: usize,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
    dirty: bool,
}

impl Board {
    /// Create an empty board with `hidden_rows` extra rows above `visible_rows`
    pub fn new(columns: u8, visible_rows: u8, hidden_rows: u8) -> Self {
        let columns = columns as usize;
        let rows = visible_rows as usize + hidden_rows as usize;
        Self {
            columns,
            rows,
            hidden_rows: hidden_rows as usize,
            cells: vec![None; columns * rows],
            dirty: false,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.columns, config.visible_rows, config.hidden_rows)
    }

    /// Fill the bottom of the board from text rows, for building fixtures
    ///
    /// `.` is empty; a piece letter fills the cell with that kind. The last string maps
    /// to the bottom row.
    ///
    /// # Panics
    ///
    /// Panics on rows wider than the board, more rows than the board, or unknown characters.
    pub fn with_rows(mut self, rows: &[&str]) -> Self {
        assert!(rows.len() <= self.rows, "too many fixture rows");
        let first = self.rows - rows.len();
        for (i, line) in rows.iter().enumerate() {
            assert!(line.len() <= self.columns, "fixture row wider than board");
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    other => Some(
                        PieceKind::from_str(&other.to_string())
                            .unwrap_or_else(|| panic!("unknown fixture cell {:?}", other)),
                    ),
                };
                self.cells[(first + i) * self.columns + x] = cell;
            }
        }
        self
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.columns + x as usize)
    }

    pub fn width(&self) -> usize {
        self.columns
    }

    /// Total rows, hidden buffer included
    pub fn height(&self) -> usize {
        self.rows
    }

    pub fn hidden_rows(&self) -> usize {
        self.hidden_rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.columns as i32 || y < 0 || y >= self.rows as i32
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y`
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the board.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Write the piece into the grid
    ///
    /// Does not check for collisions; callers validate placement first.
    ///
    /// # Panics
    ///
    /// Panics if any cell of the piece lies outside the grid.
    pub fn occupy(&mut self, piece: &ActivePiece) {
        for (x, y) in piece.cells() {
            let idx = self
                .index(x, y)
                .unwrap_or_else(|| panic!("occupy outside the grid at ({}, {})", x, y));
            self.cells[idx] = Some(piece.kind);
        }
        self.dirty = true;
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Full rows are identified against the board as it was before any shifting: a read
    /// pointer walks bottom to top and every non-full row is copied down to the write
    /// pointer, so no row is ever tested after it has moved.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = self.columns;
        let mut write_y = self.rows;

        for read_y in (0..self.rows).rev() {
            if self.is_row_full(read_y) {
                // Only the first few are reported; compaction continues regardless.
                let _ = cleared_rows.try_push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Vacated rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        if write_y > 0 {
            self.dirty = true;
        }
        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of the visible playfield only
    pub fn visible_cells(&self) -> &[Cell] {
        &self.cells[self.hidden_rows * self.columns..]
    }

    /// Whether any cell changed since the last [`Board::reset_dirty`]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn reset_dirty(&mut self) {
        self.dirty = false;
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.dirty = true;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}
