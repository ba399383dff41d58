//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when staking money: starting a blackjack round or
/// placing, clearing, and spinning roulette bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The action is not valid in the current game state.
    #[error("action not allowed in the current game state")]
    IllegalAction,
    /// Bet amount is zero, below the table minimum, or there is nothing to spin on.
    #[error("invalid bet")]
    InvalidBet,
    /// The stake exceeds the available balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during blackjack player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not valid in the current game state.
    #[error("action not allowed in the current game state")]
    IllegalAction,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// The shoe has no cards left to draw.
///
/// The blackjack engine recovers from this by reshuffling a fresh shoe; it is
/// never surfaced to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct EmptyDeckError;
