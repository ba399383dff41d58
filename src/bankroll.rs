//! Player balance and win/loss counters.

use serde::{Deserialize, Serialize};

use crate::error::BetError;
use crate::result::Outcome;

/// Balance given to a new player, and after a reset.
pub const DEFAULT_STARTING_BALANCE: usize = 1000;

/// A player's balance and lifetime stats.
///
/// This is the record persisted by a [`BankrollStore`](crate::BankrollStore).
/// Counters default to zero when missing so older records still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bankroll {
    /// Money available to bet.
    pub balance: usize,
    /// Rounds or spins won.
    #[serde(default)]
    pub wins: u32,
    /// Rounds or spins lost.
    #[serde(default)]
    pub losses: u32,
    /// Blackjack rounds tied with the dealer.
    #[serde(default)]
    pub pushes: u32,
    /// Blackjack rounds won with a natural.
    #[serde(default)]
    pub blackjacks: u32,
}

impl Bankroll {
    /// Creates a bankroll with the given balance and zeroed counters.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            balance,
            wins: 0,
            losses: 0,
            pushes: 0,
            blackjacks: 0,
        }
    }

    /// Returns whether the balance has run out.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.balance == 0
    }

    /// Removes a stake from the balance.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if the stake exceeds the
    /// balance; the balance is left unchanged.
    pub const fn debit(&mut self, amount: usize) -> Result<(), BetError> {
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Adds a payout to the balance.
    pub const fn credit(&mut self, amount: usize) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Updates the counters for a settled blackjack round.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Blackjack => {
                self.wins += 1;
                self.blackjacks += 1;
            }
            Outcome::Lose => self.losses += 1,
            Outcome::Push => self.pushes += 1,
        }
    }

    /// Updates the counters for a resolved roulette spin. A spin that does
    /// not return more than was staked counts as a loss.
    pub const fn record_spin(&mut self, total_payout: usize, total_staked: usize) {
        if total_payout > total_staked {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    /// Returns the number of decided and tied rounds played.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.wins + self.losses + self.pushes
    }

    /// Returns wins as a percentage of rounds played, or 0 before any round.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let played = self.rounds_played();
        if played == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(played) * 100.0
    }
}

impl Default for Bankroll {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BALANCE)
    }
}
