//! Roulette bet types and their payouts.

use core::fmt;

use super::pocket::{Color, Pocket};

/// The outside bets offered at the table, plus a straight bet on zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetType {
    /// Any red number.
    Red,
    /// Any black number.
    Black,
    /// Any even number except zero.
    Even,
    /// Any odd number.
    Odd,
    /// 19 through 36.
    High,
    /// 1 through 18.
    Low,
    /// 1 through 12.
    Dozen1,
    /// 13 through 24.
    Dozen2,
    /// 25 through 36.
    Dozen3,
    /// Zero only.
    Zero,
}

impl BetType {
    /// Every bet type in table order.
    pub const ALL: [Self; 10] = [
        Self::Red,
        Self::Black,
        Self::Even,
        Self::Odd,
        Self::High,
        Self::Low,
        Self::Dozen1,
        Self::Dozen2,
        Self::Dozen3,
        Self::Zero,
    ];

    /// Maps a table key (`1`-`9`, `0`) to its bet type.
    ///
    /// ```
    /// use casinors::BetType;
    ///
    /// assert_eq!(BetType::from_key('1'), Some(BetType::Red));
    /// assert_eq!(BetType::from_key('0'), Some(BetType::Zero));
    /// assert_eq!(BetType::from_key('x'), None);
    /// ```
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::Red),
            '2' => Some(Self::Black),
            '3' => Some(Self::Even),
            '4' => Some(Self::Odd),
            '5' => Some(Self::High),
            '6' => Some(Self::Low),
            '7' => Some(Self::Dozen1),
            '8' => Some(Self::Dozen2),
            '9' => Some(Self::Dozen3),
            '0' => Some(Self::Zero),
            _ => None,
        }
    }

    /// Returns the table key for this bet type.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Red => '1',
            Self::Black => '2',
            Self::Even => '3',
            Self::Odd => '4',
            Self::High => '5',
            Self::Low => '6',
            Self::Dozen1 => '7',
            Self::Dozen2 => '8',
            Self::Dozen3 => '9',
            Self::Zero => '0',
        }
    }

    /// Returns the winnings paid per unit staked (the "to 1" odds).
    #[must_use]
    pub const fn odds(self) -> usize {
        match self {
            Self::Red | Self::Black | Self::Even | Self::Odd | Self::High | Self::Low => 1,
            Self::Dozen1 | Self::Dozen2 | Self::Dozen3 => 2,
            Self::Zero => 35,
        }
    }

    /// Returns whether a bet of this type wins on `pocket`.
    #[must_use]
    pub fn wins_on(self, pocket: Pocket) -> bool {
        let n = pocket.number();
        match self {
            Self::Red => pocket.color() == Color::Red,
            Self::Black => pocket.color() == Color::Black,
            Self::Even => n != 0 && n % 2 == 0,
            Self::Odd => n % 2 == 1,
            Self::High => (19..=36).contains(&n),
            Self::Low => (1..=18).contains(&n),
            Self::Dozen1 => (1..=12).contains(&n),
            Self::Dozen2 => (13..=24).contains(&n),
            Self::Dozen3 => (25..=36).contains(&n),
            Self::Zero => n == 0,
        }
    }

    /// Returns the label shown on the table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Black => "Black",
            Self::Even => "Even",
            Self::Odd => "Odd",
            Self::High => "High (19-36)",
            Self::Low => "Low (1-18)",
            Self::Dozen1 => "1st Dozen",
            Self::Dozen2 => "2nd Dozen",
            Self::Dozen3 => "3rd Dozen",
            Self::Zero => "Zero",
        }
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Money staked on one bet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bet {
    /// What the bet covers.
    pub bet_type: BetType,
    /// Amount staked.
    pub amount: usize,
}

impl Bet {
    /// Returns the amount credited back if the bet wins on `pocket`, stake
    /// included, or 0 if it loses.
    #[must_use]
    pub fn payout(&self, pocket: Pocket) -> usize {
        if self.bet_type.wins_on(pocket) {
            self.amount + self.amount * self.bet_type.odds()
        } else {
            0
        }
    }
}
