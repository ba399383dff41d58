//! Bankroll persistence.
//!
//! Engines never touch storage. Front ends load a [`Bankroll`] at session
//! start, hand it to a game, and save it back after every resolution.

#[cfg(feature = "std")]
use std::fs;
#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

use core::convert::Infallible;

use log::info;
#[cfg(feature = "std")]
use log::warn;
#[cfg(feature = "std")]
use thiserror::Error;

use crate::bankroll::{Bankroll, DEFAULT_STARTING_BALANCE};

/// Durable storage for a single player's bankroll.
pub trait BankrollStore {
    /// Error returned when a write fails.
    type Error;

    /// Balance given to a fresh bankroll.
    fn starting_balance(&self) -> usize;

    /// Loads the persisted bankroll.
    ///
    /// Falls back to a fresh bankroll at [`starting_balance`](Self::starting_balance)
    /// when nothing is stored or the stored record cannot be read.
    fn load(&mut self) -> Bankroll;

    /// Persists the bankroll.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    fn save(&mut self, bankroll: &Bankroll) -> Result<(), Self::Error>;

    /// Replaces the stored bankroll with a fresh one and returns it.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    fn reset(&mut self) -> Result<Bankroll, Self::Error> {
        let fresh = Bankroll::new(self.starting_balance());
        self.save(&fresh)?;
        info!("bankroll reset to {}", fresh.balance);
        Ok(fresh)
    }
}

/// Keeps the bankroll in memory. Useful for tests and embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    starting_balance: usize,
    saved: Option<Bankroll>,
    saves: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new(starting_balance: usize) -> Self {
        Self {
            starting_balance,
            saved: None,
            saves: 0,
        }
    }

    /// Returns the last saved bankroll, if any.
    #[must_use]
    pub const fn saved(&self) -> Option<&Bankroll> {
        self.saved.as_ref()
    }

    /// Returns how many times the bankroll was saved.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.saves
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BALANCE)
    }
}

impl BankrollStore for MemoryStore {
    type Error = Infallible;

    fn starting_balance(&self) -> usize {
        self.starting_balance
    }

    fn load(&mut self) -> Bankroll {
        self.saved
            .unwrap_or_else(|| Bankroll::new(self.starting_balance))
    }

    fn save(&mut self, bankroll: &Bankroll) -> Result<(), Self::Error> {
        self.saved = Some(*bankroll);
        self.saves += 1;
        Ok(())
    }
}

/// Errors that can occur while writing the bankroll file.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be written.
    #[error("failed to write bankroll file: {0}")]
    Io(#[from] io::Error),
    /// The bankroll could not be encoded.
    #[error("failed to encode bankroll: {0}")]
    Format(#[from] serde_json::Error),
}

/// Stores the bankroll as a JSON file.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
    starting_balance: usize,
}

#[cfg(feature = "std")]
impl FileStore {
    /// Default file for blackjack sessions.
    pub const BLACKJACK_FILE: &'static str = "blackjack_stats.json";
    /// Default file for roulette sessions.
    pub const ROULETTE_FILE: &'static str = "roulette_stats.json";

    /// Creates a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>, starting_balance: usize) -> Self {
        Self {
            path: path.into(),
            starting_balance,
        }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(feature = "std")]
impl BankrollStore for FileStore {
    type Error = StoreError;

    fn starting_balance(&self) -> usize {
        self.starting_balance
    }

    fn load(&mut self) -> Bankroll {
        let fresh = Bankroll::new(self.starting_balance);

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return fresh,
            Err(err) => {
                warn!("could not read {}: {err}", self.path.display());
                return fresh;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(bankroll) => bankroll,
            Err(err) => {
                warn!(
                    "ignoring corrupt bankroll in {}: {err}",
                    self.path.display()
                );
                fresh
            }
        }
    }

    fn save(&mut self, bankroll: &Bankroll) -> Result<(), Self::Error> {
        let contents = serde_json::to_string(bankroll)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
