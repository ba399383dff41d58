//! Blackjack engine and round state management.

use alloc::vec::Vec;

use log::info;

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::error::BetError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::rng::{RandomSource, SeededSource};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::dealer_should_hit;
pub use state::BlackjackState;

/// A single-player blackjack engine.
///
/// The game owns the shoe, the random source, the round in progress, and the
/// player's [`Bankroll`]. Stakes are deducted when a round starts and
/// payouts are credited when it resolves. Use [`GameOptions`] to configure
/// decks, dealer rules, and payout rounding.
#[derive(Debug, Clone)]
pub struct BlackjackGame<S = SeededSource> {
    /// Game options.
    options: GameOptions,
    /// Cards in the shoe.
    shoe: Shoe,
    /// Shuffle source.
    source: S,
    /// Player balance and stats.
    bankroll: Bankroll,
    /// Current round state.
    state: BlackjackState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Stake on the current round.
    bet: usize,
    /// Whether the player doubled down this round.
    doubled: bool,
    /// Cards drawn by the dealer after the reveal.
    dealer_drew: Vec<Card>,
    /// Result of the last settled round.
    result: Option<RoundResult>,
}

impl BlackjackGame<SeededSource> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::{Bankroll, BlackjackGame, BlackjackState, GameOptions};
    ///
    /// let game = BlackjackGame::new(GameOptions::default(), Bankroll::new(100), 42);
    /// assert_eq!(game.state(), BlackjackState::Betting);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, bankroll: Bankroll, seed: u64) -> Self {
        Self::with_source(options, bankroll, SeededSource::new(seed))
    }
}

impl<S: RandomSource> BlackjackGame<S> {
    /// Creates a new game drawing its shuffles from `source`.
    pub fn with_source(options: GameOptions, bankroll: Bankroll, mut source: S) -> Self {
        let shoe = Shoe::new(options.decks, &mut source);

        Self {
            options,
            shoe,
            source,
            bankroll,
            state: BlackjackState::Betting,
            player: Hand::new(),
            dealer: DealerHand::new(),
            bet: 0,
            doubled: false,
            dealer_drew: Vec::new(),
            result: None,
        }
    }

    /// Draws a card, reshuffling a fresh shoe if it is empty.
    fn draw(&mut self) -> Card {
        self.shoe.draw(&mut self.source)
    }

    /// Reshuffles the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), BetError> {
        if !self.state.accepts_bets() {
            return Err(BetError::IllegalAction);
        }

        self.shoe.reshuffle(&mut self.source);
        Ok(())
    }

    /// Returns whether the shoe has been dealt past the configured penetration.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.shoe.needs_reshuffle(self.options.penetration)
    }

    /// Checks penetration and reshuffles if needed.
    ///
    /// Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, BetError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            info!("shoe reached penetration {}; reshuffled", self.options.penetration);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> BlackjackState {
        self.state
    }

    /// Returns the player's bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    /// Replaces the bankroll, e.g. after a reset.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub const fn set_bankroll(&mut self, bankroll: Bankroll) -> Result<(), BetError> {
        if !self.state.accepts_bets() {
            return Err(BetError::IllegalAction);
        }
        self.bankroll = bankroll;
        Ok(())
    }

    /// Consumes the game and returns the bankroll.
    #[must_use]
    pub fn into_bankroll(self) -> Bankroll {
        self.bankroll
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the stake on the current round (0 before the first round).
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the player doubled down this round.
    #[must_use]
    pub const fn doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the result of the last settled round.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the shoe, e.g. to stack a known draw order.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Clears the hands and the last result and returns to the
    /// [`Betting`](BlackjackState::Betting) state.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn clear_round(&mut self) -> Result<(), BetError> {
        if !self.state.accepts_bets() {
            return Err(BetError::IllegalAction);
        }

        self.reset_table();
        self.result = None;
        self.state = BlackjackState::Betting;
        Ok(())
    }

    fn reset_table(&mut self) {
        self.player = Hand::new();
        self.dealer.clear();
        self.dealer_drew.clear();
        self.bet = 0;
        self.doubled = false;
    }
}
