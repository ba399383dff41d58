//! Blackjack round results.

use alloc::vec::Vec;

use crate::card::Card;

/// How a blackjack round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total). Pays 1:1.
    Win,
    /// Player loses (player busts, dealer has the higher total or a natural).
    Lose,
    /// Push (tie). The stake is returned.
    Push,
    /// Player wins with a natural against a dealer without one. Pays 3:2.
    Blackjack,
}

/// Result of a settled blackjack round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The final stake, including a double down.
    pub bet: usize,
    /// Whether the player doubled down.
    pub doubled: bool,
    /// The amount credited back to the balance (stake plus winnings).
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Cards the dealer drew after revealing the hole card.
    pub dealer_drew: Vec<Card>,
}
