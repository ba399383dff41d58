//! Injectable randomness for shuffles and wheel spins.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// Highest pocket number on a single-zero wheel.
pub const MAX_POCKET: u8 = 36;

/// A uniform random source used by the engines.
///
/// Engines never call a global generator; they are handed a source at
/// construction so tests can substitute a deterministic one.
pub trait RandomSource {
    /// Shuffles the cards in place with a uniform permutation.
    fn shuffle(&mut self, cards: &mut [Card]);

    /// Returns a pocket number drawn uniformly from `0..=36`.
    fn spin(&mut self) -> u8;
}

/// Seeded ChaCha8 generator.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    /// Creates a source from a seed. Equal seeds replay equal games.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }

    fn spin(&mut self) -> u8 {
        self.rng.random_range(0..=MAX_POCKET)
    }
}

/// Replays a fixed sequence of pockets and leaves card order untouched.
///
/// Once the script runs out, spins land on 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    pockets: VecDeque<u8>,
}

impl ScriptedSource {
    /// Creates a source that returns `pockets` in order.
    #[must_use]
    pub fn new(pockets: &[u8]) -> Self {
        Self {
            pockets: pockets.iter().copied().collect(),
        }
    }

    /// Queues more pockets after the current script.
    pub fn push(&mut self, pocket: u8) {
        self.pockets.push_back(pocket);
    }

    /// Returns the pockets not yet spun.
    #[must_use]
    pub fn remaining(&self) -> Vec<u8> {
        self.pockets.iter().copied().collect()
    }
}

impl RandomSource for ScriptedSource {
    fn shuffle(&mut self, _cards: &mut [Card]) {}

    fn spin(&mut self) -> u8 {
        self.pockets.pop_front().unwrap_or(0).min(MAX_POCKET)
    }
}
