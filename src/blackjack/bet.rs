use log::{debug, warn};

use crate::error::BetError;
use crate::rng::RandomSource;

use super::{BlackjackGame, BlackjackState};

impl<S: RandomSource> BlackjackGame<S> {
    /// Stakes `bet` and deals a new round.
    ///
    /// The stake is deducted from the balance immediately; it is returned
    /// with any winnings when the round resolves. Cards are dealt player,
    /// dealer, player, dealer. If either side holds a natural, the dealer
    /// reveals the hole card and the round resolves at once.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, the bet is zero,
    /// or the bet exceeds the balance. The game is left unchanged.
    pub fn start_round(&mut self, bet: usize) -> Result<(), BetError> {
        if !self.state.accepts_bets() {
            return Err(BetError::IllegalAction);
        }

        if bet == 0 {
            return Err(BetError::InvalidBet);
        }

        self.bankroll.debit(bet)?;

        if let Err(err) = self.check_and_reshuffle() {
            warn!("reshuffle skipped: {err}");
        }

        self.reset_table();
        self.result = None;
        self.bet = bet;

        let card = self.draw();
        self.player.add_card(card);
        let card = self.draw();
        self.dealer.add_card(card);
        let card = self.draw();
        self.player.add_card(card);
        let card = self.draw();
        self.dealer.add_card(card);

        debug!(
            "dealt round: bet {bet}, player {}, dealer shows {}",
            self.player.total(),
            self.dealer.visible_total()
        );

        if self.player.is_blackjack() || self.dealer.is_blackjack() {
            self.settle();
        } else {
            self.state = BlackjackState::PlayerTurn;
        }

        Ok(())
    }
}
