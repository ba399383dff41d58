use log::{debug, info};

use crate::error::ActionError;
use crate::hand::DealerHand;
use crate::options::RoundingMode;
use crate::result::{Outcome, RoundResult};
use crate::rng::RandomSource;

use super::{BlackjackGame, BlackjackState};

/// Total at which the dealer stops drawing.
const DEALER_STANDS_ON: u8 = 17;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Returns whether the dealer must draw another card.
///
/// The dealer draws below 17 and stands on hard 17 and above. On soft 17 the
/// dealer stands when `stand_on_soft_17` is set and draws otherwise.
#[must_use]
pub fn dealer_should_hit(hand: &DealerHand, stand_on_soft_17: bool) -> bool {
    let total = hand.total();
    total < DEALER_STANDS_ON || (total == DEALER_STANDS_ON && hand.is_soft() && !stand_on_soft_17)
}

impl<S: RandomSource> BlackjackGame<S> {
    /// Dealer plays their hand according to the rules, then the round is
    /// settled.
    ///
    /// The dealer reveals the hole card and draws until [`dealer_should_hit`]
    /// says to stand. Returns the settled round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn state.
    pub fn dealer_play(&mut self) -> Result<RoundResult, ActionError> {
        if self.state != BlackjackState::DealerTurn {
            return Err(ActionError::IllegalAction);
        }

        self.dealer.reveal_hole();

        while dealer_should_hit(&self.dealer, self.options.stand_on_soft_17) {
            let card = self.draw();
            self.dealer.add_card(card);
            self.dealer_drew.push(card);
            debug!("dealer draws {card}, total {}", self.dealer.total());
        }

        Ok(self.settle())
    }

    fn outcome(&self) -> Outcome {
        let player_natural = self.player.is_blackjack();
        let dealer_natural = self.dealer.is_blackjack();
        let player_total = self.player.total();
        let dealer_total = self.dealer.total();

        if self.player.is_bust() {
            Outcome::Lose
        } else if player_natural && dealer_natural {
            Outcome::Push
        } else if player_natural {
            Outcome::Blackjack
        } else if dealer_natural {
            Outcome::Lose
        } else if self.dealer.is_bust() || player_total > dealer_total {
            Outcome::Win
        } else if player_total < dealer_total {
            Outcome::Lose
        } else {
            Outcome::Push
        }
    }

    /// Amount credited back for `outcome`, stake included.
    fn payout(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Win => self.bet * 2,
            Outcome::Push => self.bet,
            Outcome::Lose => 0,
            Outcome::Blackjack => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let winnings = (self.bet as f64) * self.options.blackjack_pays;
                self.bet + round_amount(winnings, self.options.rounding_blackjack)
            }
        }
    }

    /// Compares the hands, pays out, updates the counters, and moves to
    /// [`Resolved`](BlackjackState::Resolved).
    pub(super) fn settle(&mut self) -> RoundResult {
        self.dealer.reveal_hole();
        let outcome = self.outcome();
        let payout = self.payout(outcome);

        self.bankroll.credit(payout);
        self.bankroll.record(outcome);

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = payout as isize - self.bet as isize;

        let result = RoundResult {
            outcome,
            bet: self.bet,
            doubled: self.doubled,
            payout,
            net,
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
            dealer_drew: self.dealer_drew.clone(),
        };

        info!(
            "round settled: {:?} ({} vs {}), net {net}, balance {}",
            outcome, result.player_total, result.dealer_total, self.bankroll.balance
        );

        self.state = BlackjackState::Resolved;
        self.result = Some(result.clone());
        result
    }
}
