use alloc::vec::Vec;

use log::info;

use crate::error::BetError;
use crate::rng::RandomSource;

use super::bet::Bet;
use super::pocket::{Color, Pocket};
use super::{RouletteGame, RouletteState};

/// Result for a single bet after a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetResult {
    /// The bet as it stood when the wheel spun.
    pub bet: Bet,
    /// Whether the bet won.
    pub won: bool,
    /// The amount credited for this bet, stake included (0 if lost).
    pub payout: usize,
}

/// Result of a spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinResult {
    /// Winning pocket.
    pub pocket: Pocket,
    /// Color of the winning pocket.
    pub color: Color,
    /// Results for each bet, in the order they were placed.
    pub bets: Vec<BetResult>,
    /// Total amount deducted for the spin.
    pub total_staked: usize,
    /// Total amount credited back.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
}

impl SpinResult {
    /// Returns whether the spin paid back more than was staked.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.total_payout > self.total_staked
    }
}

impl<S: RandomSource> RouletteGame<S> {
    /// Spins the wheel and resolves every bet on the table.
    ///
    /// The total stake is deducted, the outcome is drawn uniformly from
    /// 0-36, winning bets are paid stake plus stake times odds, and the
    /// table returns to betting with no bets.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, there are no bets,
    /// or the balance no longer covers them.
    pub fn spin(&mut self) -> Result<SpinResult, BetError> {
        if self.state != RouletteState::Betting {
            return Err(BetError::IllegalAction);
        }

        if self.bets.is_empty() {
            return Err(BetError::InvalidBet);
        }

        let total_staked = self.total_staked();
        self.bankroll.debit(total_staked)?;

        self.state = RouletteState::Spinning;
        let pocket = Pocket::new(self.source.spin()).unwrap_or(Pocket::ZERO);

        self.state = RouletteState::Resolved;
        let bets: Vec<BetResult> = self
            .bets
            .drain(..)
            .map(|bet| {
                let payout = bet.payout(pocket);
                BetResult {
                    bet,
                    won: payout > 0,
                    payout,
                }
            })
            .collect();

        let total_payout = bets.iter().map(|result| result.payout).sum();
        self.bankroll.credit(total_payout);
        self.bankroll.record_spin(total_payout, total_staked);

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total_payout as isize - total_staked as isize;

        let result = SpinResult {
            pocket,
            color: pocket.color(),
            bets,
            total_staked,
            total_payout,
            net,
        };

        info!(
            "wheel landed on {pocket}: staked {total_staked}, paid {total_payout}, balance {}",
            self.bankroll.balance
        );

        self.last_spin = Some(result.clone());
        self.state = RouletteState::Betting;
        Ok(result)
    }
}
