use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{BLACKJACK, HandStatus};
use crate::rng::RandomSource;

use super::{BlackjackGame, BlackjackState};

impl<S: RandomSource> BlackjackGame<S> {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if !matches!(self.state, BlackjackState::PlayerTurn) {
            return Err(ActionError::IllegalAction);
        }
        Ok(())
    }

    /// Finishes the player's turn after a card lands on the hand.
    fn after_player_card(&mut self) {
        match self.player.status() {
            HandStatus::Bust => {
                self.settle();
            }
            HandStatus::Stand => {
                self.state = BlackjackState::DealerTurn;
            }
            HandStatus::Active
                if self.options.auto_stand_on_21 && self.player.total() == BLACKJACK =>
            {
                self.player.set_status(HandStatus::Stand);
                self.state = BlackjackState::DealerTurn;
            }
            HandStatus::Active | HandStatus::Blackjack => {}
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust resolves the round as a loss; otherwise the turn continues.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw();
        self.player.add_card(card);
        debug!("player hits {card}, total {}", self.player.total());

        self.after_player_card();

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.player.set_status(HandStatus::Stand);
        self.state = BlackjackState::DealerTurn;
        debug!("player stands on {}", self.player.total());

        Ok(())
    }

    /// Returns whether the player may double down right now, funds included.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.state == BlackjackState::PlayerTurn
            && self.player.len() == 2
            && self.options.double.allows(self.player.total())
            && self.bankroll.balance >= self.bet
    }

    /// Player action: Double down (double the stake, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand already has
    /// more than two cards or its total may not double, or the balance cannot
    /// cover a second stake.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        // Can only double as the first action on the opening two cards
        if self.player.len() != 2 || !self.options.double.allows(self.player.total()) {
            return Err(ActionError::IllegalAction);
        }

        self.bankroll
            .debit(self.bet)
            .map_err(|_| ActionError::InsufficientFunds)?;
        self.bet *= 2;
        self.doubled = true;

        let card = self.draw();
        self.player.add_card(card);
        debug!(
            "player doubles to {} and draws {card}, total {}",
            self.bet,
            self.player.total()
        );

        if self.player.status() == HandStatus::Active {
            self.player.set_status(HandStatus::Stand);
        }
        self.after_player_card();

        Ok(card)
    }
}
