//! Player and dealer hands.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// The best total of a set of cards and whether an ace still counts as 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandValue {
    /// Highest total not above 21, or the lowest total if every count busts.
    pub total: u8,
    /// An ace is counted as 11 in `total`.
    pub soft: bool,
}

impl HandValue {
    /// Scores `cards`, dropping aces from 11 to 1 one at a time while the
    /// total is over 21.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut total: u8 = 0;
        let mut high_aces: u8 = 0;

        for card in cards {
            total = total.saturating_add(card.rank.points());
            high_aces += u8::from(card.is_ace());
        }

        while total > BLACKJACK && high_aces > 0 {
            total -= 10;
            high_aces -= 1;
        }

        Self {
            total,
            soft: high_aces > 0,
        }
    }
}

/// Where a player hand stands in the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandStatus {
    /// Still taking cards.
    #[default]
    Active,
    /// Stood, or doubled without busting.
    Stand,
    /// Over 21.
    Bust,
    /// Two-card 21.
    Blackjack,
}

/// The player's hand.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
}

impl Hand {
    /// Creates an empty, active hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Adds a card. Going over 21 marks the hand bust; 21 on the first two
    /// cards marks it a blackjack.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        if self.is_bust() {
            self.status = HandStatus::Bust;
        } else if self.is_blackjack() {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Overrides the status, e.g. when the player stands.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Scores the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        HandValue::of(&self.cards)
    }

    /// Best total, see [`HandValue`].
    #[must_use]
    pub fn total(&self) -> u8 {
        self.value().total
    }

    /// An ace still counts as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.value().soft
    }

    /// Two cards totaling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == BLACKJACK
    }

    /// Over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// No cards dealt yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand: the first card is dealt face up, the second stays
/// face down until revealed.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    hand: Hand,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates an empty hand with the hole card hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// All cards, including a hidden hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// The face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Whether the hole card is face up.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Turns the hole card face up.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Total a player can see: the up card alone until the hole is revealed.
    #[must_use]
    pub fn visible_total(&self) -> u8 {
        if self.hole_revealed {
            return self.total();
        }
        self.up_card().map_or(0, |card| card.rank.points())
    }

    /// Full total, hole card included.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.hand.total()
    }

    /// An ace still counts as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.hand.is_soft()
    }

    /// Two cards totaling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// No cards dealt yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Empties the hand and hides the next hole card.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
