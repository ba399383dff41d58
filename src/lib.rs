//! Blackjack and roulette engines with persistent bankrolls and optional
//! `no_std` support.
//!
//! The crate provides a [`BlackjackGame`] and a [`RouletteGame`]. Both own a
//! [`Bankroll`] for the duration of a session and draw randomness from an
//! injected [`RandomSource`], so front ends (the terminal binaries and the
//! browser bindings) share exactly the same rules. Persist the bankroll
//! between sessions with a [`BankrollStore`].
//!
//! # Example
//!
//! ```no_run
//! use casinors::{Bankroll, BlackjackGame, GameOptions};
//!
//! let mut game = BlackjackGame::new(GameOptions::default(), Bankroll::new(1000), 42);
//! game.start_round(10).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod blackjack;
pub mod card;
#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod cli;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod rng;
pub mod roulette;
pub mod shoe;
pub mod store;

// Re-export main types
pub use bankroll::{Bankroll, DEFAULT_STARTING_BALANCE};
pub use blackjack::{BlackjackGame, BlackjackState};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, EmptyDeckError};
pub use hand::{DealerHand, Hand, HandStatus, HandValue};
pub use options::{DoubleOption, GameOptions, RoundingMode, RouletteOptions};
pub use result::{Outcome, RoundResult};
pub use rng::{RandomSource, ScriptedSource, SeededSource};
pub use roulette::{
    Bet, BetResult, BetType, Color, Pocket, RouletteGame, RouletteState, SpinResult, WHEEL_ORDER,
};
pub use shoe::{Shoe, new_shuffled_deck};
#[cfg(feature = "std")]
pub use store::{FileStore, StoreError};
pub use store::{BankrollStore, MemoryStore};
