//! Roulette table state.

/// Roulette table state.
///
/// A spin passes through [`Spinning`](Self::Spinning) and
/// [`Resolved`](Self::Resolved) within a single call and always returns the
/// table to [`Betting`](Self::Betting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouletteState {
    /// Bets accumulate.
    #[default]
    Betting,
    /// The wheel is drawing an outcome.
    Spinning,
    /// Bets are being paid out.
    Resolved,
}
