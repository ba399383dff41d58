//! Game configuration options.

/// Conditions under which doubling down is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down allowed on any two-card hand.
    #[default]
    Any,
    /// Double down allowed only on 9 or 10.
    NineOrTen,
    /// Double down allowed only on 9 through 11.
    NineThrough11,
    /// Double down not allowed.
    None,
}

impl DoubleOption {
    /// Returns whether a hand with the given total may double.
    #[must_use]
    pub fn allows(self, total: u8) -> bool {
        match self {
            Self::Any => true,
            Self::NineOrTen => total == 9 || total == 10,
            Self::NineThrough11 => (9..=11).contains(&total),
            Self::None => false,
        }
    }
}

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use casinors::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_blackjack_pays(1.5)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Double down conditions.
    pub double: DoubleOption,
    /// Whether a player hand reaching 21 stands automatically.
    pub auto_stand_on_21: bool,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Deck penetration (fraction of the shoe played before reshuffle).
    /// 0 to disable reshuffling between rounds.
    pub penetration: f64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            blackjack_pays: 1.5,
            stand_on_soft_17: true,
            double: DoubleOption::Any,
            auto_stand_on_21: false,
            rounding_blackjack: RoundingMode::Down,
            penetration: 0.75,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the double down conditions.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::{DoubleOption, GameOptions};
    ///
    /// let options = GameOptions::default().with_double(DoubleOption::NineThrough11);
    /// assert_eq!(options.double, DoubleOption::NineThrough11);
    /// ```
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }

    /// Sets whether a hand reaching 21 stands on its own.
    #[must_use]
    pub const fn with_auto_stand_on_21(mut self, auto_stand: bool) -> Self {
        self.auto_stand_on_21 = auto_stand;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }
}

/// Table limits for a roulette game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouletteOptions {
    /// Smallest amount accepted for a single bet.
    pub min_bet: usize,
    /// Maximum number of distinct bet types on the table at once.
    pub max_bets: usize,
}

impl Default for RouletteOptions {
    fn default() -> Self {
        Self {
            min_bet: 1,
            max_bets: 10,
        }
    }
}

impl RouletteOptions {
    /// Sets the table minimum.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::RouletteOptions;
    ///
    /// let options = RouletteOptions::default().with_min_bet(5);
    /// assert_eq!(options.min_bet, 5);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum number of distinct bets per spin.
    #[must_use]
    pub const fn with_max_bets(mut self, max_bets: usize) -> Self {
        self.max_bets = max_bets;
        self
    }
}
