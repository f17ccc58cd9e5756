//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization algorithm used in modern block stacking games.
//! Each bag contains one of each piece (I, J, L, O, S, T, Z), shuffled with Fisher-Yates.
//! Draws from the bag until it is exhausted, then reshuffles.
//!
//! The random source is a constructor parameter. [`Randomizer::seeded`] uses
//! xoshiro256++, so the same seed always produces the same piece sequence.

use std::collections::VecDeque;

use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use stacker_types::PieceKind;

/// Random source used when none is supplied
pub type DefaultRng = Xoshiro256PlusPlus;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct Randomizer<R = DefaultRng> {
    /// Current permutation of all seven kinds
    bag: [PieceKind; 7],
    /// Index of the next kind to hand out
    cursor: usize,
    rng: R,
}

impl Randomizer<DefaultRng> {
    /// Deterministic randomizer for `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(DefaultRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Randomizer<R> {
    /// Randomizer drawing from `rng`; the first bag is shuffled immediately
    pub fn with_rng(rng: R) -> Self {
        let mut randomizer = Self {
            bag: PieceKind::ALL,
            cursor: 0,
            rng,
        };
        randomizer.shuffle();
        randomizer
    }

    /// Fisher-Yates over the working bag
    fn shuffle(&mut self) {
        log::trace!("shuffling piece bag");
        for i in (1..self.bag.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.bag.swap(i, j);
        }
        self.cursor = 0;
    }

    /// Draw the next piece, reshuffling when the bag runs out
    pub fn draw(&mut self) -> PieceKind {
        if self.cursor >= self.bag.len() {
            self.shuffle();
        }

        let piece = self.bag[self.cursor];
        self.cursor += 1;
        piece
    }

    /// Pieces left before the next reshuffle
    pub fn remaining_in_bag(&self) -> usize {
        self.bag.len() - self.cursor
    }
}

/// Fixed-length preview of upcoming pieces
///
/// Every dequeue appends one fresh draw, so the preview length never changes.
#[derive(Debug, Clone)]
pub struct PieceQueue<R = DefaultRng> {
    preview: VecDeque<PieceKind>,
    randomizer: Randomizer<R>,
    dirty: bool,
}

impl<R: RngCore> PieceQueue<R> {
    /// Queue showing `preview_len` upcoming pieces
    pub fn new(preview_len: usize, mut randomizer: Randomizer<R>) -> Self {
        let preview = (0..preview_len).map(|_| randomizer.draw()).collect();
        Self {
            preview,
            randomizer,
            dirty: true,
        }
    }

    /// Take the head of the queue and refill the tail
    pub fn consume(&mut self) -> PieceKind {
        let next = self.randomizer.draw();
        self.preview.push_back(next);
        self.dirty = true;
        // The queue is never empty: it was just topped up.
        self.preview.pop_front().unwrap_or(next)
    }

    /// Next piece without consuming it
    pub fn peek(&self) -> Option<PieceKind> {
        self.preview.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.preview.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.preview.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preview.is_empty()
    }

    /// Whether the preview changed since the last [`PieceQueue::reset_dirty`]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn reset_dirty(&mut self) {
        self.dirty = false;
    }

    /// Throw the preview away and draw a fresh one
    pub fn refill(&mut self) {
        let len = self.preview.len();
        self.preview.clear();
        for _ in 0..len {
            self.preview.push_back(self.randomizer.draw());
        }
        self.dirty = true;
    }
}
