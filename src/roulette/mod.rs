//! Roulette engine for a single-zero wheel.

use alloc::vec::Vec;

use log::debug;

use crate::bankroll::Bankroll;
use crate::error::BetError;
use crate::options::RouletteOptions;
use crate::rng::{RandomSource, SeededSource};

mod bet;
mod pocket;
mod spin;
pub mod state;

pub use bet::{Bet, BetType};
pub use pocket::{Color, Pocket, RED_NUMBERS, WHEEL_ORDER};
pub use spin::{BetResult, SpinResult};
pub use state::RouletteState;

/// A single-player roulette table.
///
/// Bets accumulate on the table without touching the balance; the total
/// stake is deducted when the wheel spins and winnings are credited in the
/// same step.
#[derive(Debug, Clone)]
pub struct RouletteGame<S = SeededSource> {
    /// Table limits.
    options: RouletteOptions,
    /// Wheel source.
    source: S,
    /// Player balance and stats.
    bankroll: Bankroll,
    /// Current table state.
    state: RouletteState,
    /// Bets waiting for the next spin, one entry per bet type.
    bets: Vec<Bet>,
    /// Result of the last spin.
    last_spin: Option<SpinResult>,
}

impl RouletteGame<SeededSource> {
    /// Creates a new table with the given seed.
    #[must_use]
    pub fn new(options: RouletteOptions, bankroll: Bankroll, seed: u64) -> Self {
        Self::with_source(options, bankroll, SeededSource::new(seed))
    }
}

impl<S: RandomSource> RouletteGame<S> {
    /// Creates a new table spinning with `source`.
    pub const fn with_source(options: RouletteOptions, bankroll: Bankroll, source: S) -> Self {
        Self {
            options,
            source,
            bankroll,
            state: RouletteState::Betting,
            bets: Vec::new(),
            last_spin: None,
        }
    }

    /// Places a bet for the next spin.
    ///
    /// Betting the same type again adds to the amount already on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, the amount is below
    /// the table minimum (or zero), a new bet type would exceed the table's
    /// bet limit, or all bets together would exceed the balance.
    pub fn place_bet(&mut self, bet_type: BetType, amount: usize) -> Result<(), BetError> {
        if self.state != RouletteState::Betting {
            return Err(BetError::IllegalAction);
        }

        if amount == 0 || amount < self.options.min_bet {
            return Err(BetError::InvalidBet);
        }

        let staked = self.total_staked().saturating_add(amount);
        if staked > self.bankroll.balance {
            return Err(BetError::InsufficientFunds);
        }

        if let Some(existing) = self.bets.iter_mut().find(|bet| bet.bet_type == bet_type) {
            existing.amount += amount;
        } else {
            if self.bets.len() >= self.options.max_bets {
                return Err(BetError::InvalidBet);
            }
            self.bets.push(Bet { bet_type, amount });
        }

        debug!("bet {amount} on {bet_type}, {staked} staked");
        Ok(())
    }

    /// Removes every bet from the table. Nothing was deducted yet, so the
    /// balance is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets.
    pub fn clear_bets(&mut self) -> Result<(), BetError> {
        if self.state != RouletteState::Betting {
            return Err(BetError::IllegalAction);
        }

        self.bets.clear();
        debug!("bets cleared");
        Ok(())
    }

    /// Returns the bets waiting for the next spin.
    #[must_use]
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Returns the sum of all bets on the table.
    #[must_use]
    pub fn total_staked(&self) -> usize {
        self.bets.iter().map(|bet| bet.amount).sum()
    }

    /// Returns the table limits.
    #[must_use]
    pub const fn options(&self) -> &RouletteOptions {
        &self.options
    }

    /// Returns the current table state.
    #[must_use]
    pub const fn state(&self) -> RouletteState {
        self.state
    }

    /// Returns the player's bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    /// Replaces the bankroll, e.g. after a reset. Bets on the table are
    /// cleared since they were sized against the old balance.
    pub fn set_bankroll(&mut self, bankroll: Bankroll) {
        self.bets.clear();
        self.bankroll = bankroll;
    }

    /// Consumes the table and returns the bankroll.
    #[must_use]
    pub fn into_bankroll(self) -> Bankroll {
        self.bankroll
    }

    /// Returns the result of the last spin.
    #[must_use]
    pub const fn last_spin(&self) -> Option<&SpinResult> {
        self.last_spin.as_ref()
    }
}
