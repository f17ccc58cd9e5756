use stacker_types::{Cell, PieceKind, Point, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub anchor: Point,
    /// Where the piece would land if hard dropped now
    pub ghost: Point,
    /// Absolute board coordinates of the minos
    pub cells: [(i32, i32); 4],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockSnapshot {
    pub grounded: bool,
    pub elapsed: f64,
    pub resets: u32,
}

/// Owned copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub columns: usize,
    pub rows: usize,
    pub hidden_rows: usize,
    /// Row-major cells, hidden rows included
    pub board: Vec<Cell>,
    pub active: ActiveSnapshot,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub next_queue: Vec<PieceKind>,
    pub level: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub lock: LockSnapshot,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        self.board[y * self.columns + x]
    }

    /// Visible rows only, top to bottom
    pub fn visible_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.board[self.hidden_rows * self.columns..].chunks(self.columns)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
