//! Game orchestrator - owns every subsystem and runs one step per `update`
//!
//! Step order:
//!
//! 1. Clear dirty flags. A finished game reports `game_over` and does nothing else.
//! 2. Sample input; horizontal shift (left vs right arbitration), then at most one
//!    rotation (counter-clockwise wins; a held clockwise press fires on a later step). A
//!    successful shift spends a lock reset when grounded and re-evaluates whether the
//!    piece rests.
//! 3. Hold. A successful swap ends the step.
//! 4. Hard drop: fall to the bottom and lock immediately. Ends the step.
//! 5. Airborne pieces fall under gravity and ground when they come to rest; grounded
//!    pieces run the lock timer and commit when it expires. The timer does not run on the
//!    step a piece grounds, whether it landed or was re-grounded by a lock reset.

use anyhow::{ensure, Result};
use rand::RngCore;

use stacker_core::{
    ActivePiece, Board, DefaultRng, GravityState, HoldSlot, LockState, PieceQueue, Randomizer,
};
use stacker_input::{InputArbiter, InputSnapshot};
use stacker_types::{GameAction, GameConfig, PieceKind, Point, Spin};

use crate::snapshot::{ActiveSnapshot, GameSnapshot, LockSnapshot};
use crate::tick::TickResult;

#[derive(Debug, Clone)]
pub struct Game<R = DefaultRng> {
    config: GameConfig,
    board: Board,
    active: ActivePiece,
    queue: PieceQueue<R>,
    hold: HoldSlot,
    gravity: GravityState,
    lock: LockState,
    input: InputArbiter,
    level: u32,
    lines: u32,
    pieces_locked: u32,
    active_dirty: bool,
    /// Set when the active piece grounded during this update's shift or rotation
    grounded_this_tick: bool,
    game_over: bool,
}

impl Game<DefaultRng> {
    /// New session with a seeded piece supply
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let board = Board::from_config(&config.board);
        Self::with_randomizer(config, board, Randomizer::seeded(seed))
    }

    /// New seeded session starting from a prepared `board`
    ///
    /// The board must match the configured dimensions. A spawn that is already blocked
    /// starts the session in the game-over state.
    pub fn with_board(config: GameConfig, seed: u64, board: Board) -> Result<Self> {
        let expected = &config.board;
        ensure!(
            board.width() == expected.columns as usize
                && board.height() == expected.total_rows()
                && board.hidden_rows() == expected.hidden_rows as usize,
            "board is {}x{} with {} hidden rows, config wants {}x{} with {}",
            board.width(),
            board.height(),
            board.hidden_rows(),
            expected.columns,
            expected.total_rows(),
            expected.hidden_rows
        );
        Self::with_randomizer(config, board, Randomizer::seeded(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// New session drawing pieces with `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        let board = Board::from_config(&config.board);
        Self::with_randomizer(config, board, Randomizer::with_rng(rng))
    }

    fn with_randomizer(
        config: GameConfig,
        board: Board,
        randomizer: Randomizer<R>,
    ) -> Result<Self> {
        config.validate()?;

        let mut queue = PieceQueue::new(config.queue_preview, randomizer);
        let first = queue.consume();

        let mut game = Self {
            board,
            active: ActivePiece::spawn(first, spawn_point(&config)),
            queue,
            hold: HoldSlot::new(),
            gravity: GravityState::new(),
            lock: LockState::new(),
            input: InputArbiter::new(&config.input),
            level: config.gravity.start_level,
            lines: 0,
            pieces_locked: 0,
            active_dirty: true,
            grounded_this_tick: false,
            game_over: false,
            config,
        };
        game.check_spawn();
        Ok(game)
    }

    /// Advance the simulation by `elapsed` ticks
    pub fn update(&mut self, elapsed: f64, input: &impl InputSnapshot) -> TickResult {
        let mut result = TickResult::default();
        self.clear_dirty();

        if self.game_over {
            result.game_over = true;
            return result;
        }

        self.input.begin_tick(input);
        self.apply_shift();
        self.apply_rotation();

        if self.input.pressed(GameAction::Hold) && self.hold_active() {
            return self.finish(result);
        }

        if self.input.pressed(GameAction::HardDrop) {
            self.hard_drop(&mut result);
            return self.finish(result);
        }

        self.apply_gravity(elapsed, &mut result);
        self.finish(result)
    }

    fn clear_dirty(&mut self) {
        self.active_dirty = false;
        self.grounded_this_tick = false;
        self.board.reset_dirty();
        self.queue.reset_dirty();
        self.hold.reset_dirty();
    }

    fn finish(&self, mut result: TickResult) -> TickResult {
        result.active_dirty = self.active_dirty;
        result.board_dirty = self.board.is_dirty();
        result.hold_dirty = self.hold.is_dirty();
        result.queue_dirty = self.queue.is_dirty();
        result.locking = self.lock.is_grounded();
        result.game_over = self.game_over;
        result
    }

    fn apply_shift(&mut self) {
        let moved = match self.input.choose(GameAction::MoveLeft, GameAction::MoveRight) {
            Some(GameAction::MoveLeft) => self.active.move_left(&self.board),
            Some(GameAction::MoveRight) => self.active.move_right(&self.board),
            _ => false,
        };
        if moved {
            self.after_shift();
        }
    }

    /// At most one rotation per update; counter-clockwise wins and clockwise waits
    fn apply_rotation(&mut self) {
        let spin = if self.input.pressed(GameAction::RotateCcw) {
            Spin::Ccw
        } else if self.input.pressed(GameAction::RotateCw) {
            Spin::Cw
        } else {
            return;
        };

        if self
            .active
            .try_rotate(&self.board, spin, &self.config.kicks)
        {
            self.after_shift();
        }
    }

    /// Lock bookkeeping after a successful move or rotation
    fn after_shift(&mut self) {
        self.active_dirty = true;
        if self.lock.is_grounded() {
            self.lock.try_reset(self.config.lock.max_resets);
        }

        if !self.active.is_resting(&self.board) {
            self.lock.lift();
        } else if !self.lock.is_grounded() {
            self.lock.ground();
            self.grounded_this_tick = true;
        }
    }

    fn hold_active(&mut self) -> bool {
        let current = self.active.kind;
        let Some(next) = self.hold.hold_active(current, &mut self.queue) else {
            return false;
        };

        log::debug!("hold {} -> {}", current.as_str(), next.as_str());
        self.gravity.reset();
        self.lock.reset();
        self.spawn(next);
        true
    }

    fn hard_drop(&mut self, result: &mut TickResult) {
        self.gravity.set_hard_dropping(true);
        let distance = self.active.to_bottom(&self.board);
        log::trace!("hard drop {} rows", distance);
        self.lock.force_lock();
        self.commit_lock(result);
    }

    fn apply_gravity(&mut self, elapsed: f64, result: &mut TickResult) {
        if self.lock.is_grounded() {
            if !self.config.lock.enabled {
                self.lock.force_lock();
                self.commit_lock(result);
            } else if !self.grounded_this_tick
                && self.lock.advance(elapsed, self.config.lock.delay_ticks)
            {
                self.commit_lock(result);
            }
            return;
        }

        let before = self.active.anchor;
        if self.config.gravity.mode.is_instant() {
            self.active.to_bottom(&self.board);
        } else {
            let soft_drop = self.input.is_down(GameAction::SoftDrop);
            self.gravity
                .accumulate(&self.config.gravity, self.level, soft_drop, elapsed);
            let rows = self.gravity.take_whole_rows();
            if rows > 0 {
                self.active.move_down(&self.board, rows);
            }
        }
        if self.active.anchor != before {
            self.active_dirty = true;
        }

        if !self.active.is_resting(&self.board) {
            return;
        }

        if self.config.lock.enabled {
            self.lock.ground();
        } else {
            self.lock.force_lock();
            self.commit_lock(result);
        }
    }

    /// Write the active piece into the board and bring in the next one
    fn commit_lock(&mut self, result: &mut TickResult) {
        let (top, bottom) = self
            .active
            .cells()
            .fold((usize::MAX, 0), |(top, bottom), (_, y)| {
                (top.min(y as usize), bottom.max(y as usize))
            });

        self.board.occupy(&self.active);
        let cleared = self.board.clear_full_rows();
        self.pieces_locked += 1;

        // Everything above a cleared row moved, so the dirty span runs to the top.
        let first_dirty = if cleared.is_empty() { top } else { 0 };
        result.locked = true;
        result.dirty_rows = Some(first_dirty..=bottom);
        if !cleared.is_empty() {
            log::debug!("cleared rows {:?}", cleared.as_slice());
            self.add_lines(cleared.len() as u32);
        }
        result.cleared_rows = cleared;

        log::debug!(
            "locked {} at ({}, {})",
            self.active.kind.as_str(),
            self.active.anchor.x,
            self.active.anchor.y
        );

        self.hold.restore();
        self.gravity.reset();
        self.lock.reset();
        let next = self.queue.consume();
        self.spawn(next);
    }

    fn add_lines(&mut self, count: u32) {
        self.lines += count;
        let gravity = &self.config.gravity;
        let level = match gravity.lines_per_level {
            0 => gravity.start_level,
            per_level => gravity.start_level + self.lines / per_level,
        };
        if level != self.level {
            log::debug!("level {} -> {}", self.level, level);
            self.level = level;
        }
    }

    /// Replace the active piece; a blocked spawn ends the game
    fn spawn(&mut self, kind: PieceKind) {
        self.active = ActivePiece::spawn(kind, spawn_point(&self.config));
        self.active_dirty = true;
        self.check_spawn();
    }

    fn check_spawn(&mut self) {
        if self.active.collides_any(&self.board) {
            log::info!(
                "game over: {} blocked at spawn after {} pieces, {} lines",
                self.active.kind.as_str(),
                self.pieces_locked,
                self.lines
            );
            self.game_over = true;
        }
    }

    /// Start a new session on the same piece supply
    pub fn restart(&mut self) {
        log::info!("restart after {} pieces, {} lines", self.pieces_locked, self.lines);

        self.board.clear();
        self.hold.clear();
        self.gravity.reset();
        self.lock.reset();
        self.input.reset();
        self.queue.refill();
        self.level = self.config.gravity.start_level;
        self.lines = 0;
        self.pieces_locked = 0;
        self.game_over = false;

        let next = self.queue.consume();
        self.spawn(next);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn hold(&self) -> &HoldSlot {
        &self.hold
    }

    pub fn queue(&self) -> &PieceQueue<R> {
        &self.queue
    }

    pub fn gravity(&self) -> &GravityState {
        &self.gravity
    }

    pub fn lock(&self) -> &LockState {
        &self.lock
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn ghost_anchor(&self) -> Point {
        self.active.ghost_anchor(&self.board)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut cells = [(0, 0); 4];
        for (slot, cell) in cells.iter_mut().zip(self.active.cells()) {
            *slot = cell;
        }

        GameSnapshot {
            columns: self.board.width(),
            rows: self.board.height(),
            hidden_rows: self.board.hidden_rows(),
            board: self.board.cells().to_vec(),
            active: ActiveSnapshot {
                kind: self.active.kind,
                rotation: self.active.rotation,
                anchor: self.active.anchor,
                ghost: self.ghost_anchor(),
                cells,
            },
            hold: self.hold.held(),
            can_hold: self.hold.can_swap(),
            next_queue: self.queue.iter().collect(),
            level: self.level,
            lines: self.lines,
            pieces_locked: self.pieces_locked,
            lock: LockSnapshot {
                grounded: self.lock.is_grounded(),
                elapsed: self.lock.elapsed(),
                resets: self.lock.reset_count(),
            },
            game_over: self.game_over,
        }
    }
}

fn spawn_point(config: &GameConfig) -> Point {
    Point::new(config.board.spawn_column, config.board.spawn_row)
}
