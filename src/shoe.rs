//! The card shoe: one or more shuffled decks drawn from the top.

use alloc::vec::Vec;

use log::{debug, warn};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;
use crate::rng::RandomSource;

/// Returns a standard 52-card deck shuffled by `source`.
pub fn new_shuffled_deck<S: RandomSource + ?Sized>(source: &mut S) -> Vec<Card> {
    let mut cards = ordered_decks(1);
    source.shuffle(&mut cards);
    cards
}

fn ordered_decks(num_decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

    for _ in 0..num_decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards
}

/// A shoe of shuffled cards. The top of the shoe is the end of the vector.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
}

impl Shoe {
    /// Builds and shuffles a shoe with the specified number of decks.
    ///
    /// A deck count of zero is treated as one deck.
    pub fn new<S: RandomSource + ?Sized>(decks: u8, source: &mut S) -> Self {
        let decks = decks.max(1);
        let mut cards = ordered_decks(decks);
        source.shuffle(&mut cards);
        Self { cards, decks }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the shoe is exhausted.
    pub fn try_draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Removes and returns the top card, reshuffling a fresh shoe first if
    /// this one is exhausted.
    pub fn draw<S: RandomSource + ?Sized>(&mut self, source: &mut S) -> Card {
        loop {
            match self.try_draw() {
                Ok(card) => return card,
                Err(err) => {
                    warn!("{err}; reshuffling a fresh shoe");
                    self.reshuffle(source);
                }
            }
        }
    }

    /// Replaces the contents with a freshly shuffled shoe.
    pub fn reshuffle<S: RandomSource + ?Sized>(&mut self, source: &mut S) {
        self.cards = ordered_decks(self.decks);
        source.shuffle(&mut self.cards);
        debug!("shoe reshuffled: {} decks", self.decks);
    }

    /// Replaces the shoe so that cards are drawn in the order given.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards = draws.iter().rev().copied().collect();
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns whether the dealt fraction of the shoe has reached `penetration`.
    ///
    /// A penetration of 0 disables the check.
    #[must_use]
    pub fn needs_reshuffle(&self, penetration: f64) -> bool {
        if penetration <= 0.0 {
            return false;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (self.remaining() as f64 / self.capacity() as f64);

        used_ratio >= penetration
    }
}
