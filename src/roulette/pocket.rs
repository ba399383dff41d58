//! Wheel pockets and colors for a single-zero wheel.

use core::fmt;

use crate::rng::MAX_POCKET;

/// Red numbers on a European wheel. Every other non-zero number is black.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Pocket numbers in the order they sit around a European wheel, starting at 0.
pub const WHEEL_ORDER: [u8; 37] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

/// Pocket color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Black.
    Black,
    /// Green (zero).
    Green,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Black => "black",
            Self::Green => "green",
        })
    }
}

/// A pocket on the wheel, numbered 0 through 36.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pocket(u8);

impl Pocket {
    /// The green zero pocket.
    pub const ZERO: Self = Self(0);

    /// Returns the pocket with the given number, or `None` above 36.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number > MAX_POCKET {
            None
        } else {
            Some(Self(number))
        }
    }

    /// Returns the pocket number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Returns whether this is the zero pocket.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the pocket color.
    #[must_use]
    pub fn color(self) -> Color {
        if self.is_zero() {
            Color::Green
        } else if RED_NUMBERS.contains(&self.0) {
            Color::Red
        } else {
            Color::Black
        }
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.color())
    }
}
