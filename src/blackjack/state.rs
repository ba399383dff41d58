//! Blackjack round state.

/// Blackjack round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlackjackState {
    /// Waiting for a stake to start the next round.
    #[default]
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled and the result is available.
    Resolved,
}

impl BlackjackState {
    /// Returns whether a new round may be started.
    #[must_use]
    pub const fn accepts_bets(self) -> bool {
        matches!(self, Self::Betting | Self::Resolved)
    }
}
