//! Shared plumbing for the terminal front ends.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use alloc::string::String;

use clap::Args;

use crate::bankroll::{Bankroll, DEFAULT_STARTING_BALANCE};
use crate::blackjack::BlackjackGame;
use crate::error::BetError;
use crate::rng::RandomSource;
use crate::store::{BankrollStore, FileStore};

/// Command-line flags common to both games.
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// File holding the bankroll between sessions.
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Balance for a new or reset bankroll.
    #[arg(long, default_value_t = DEFAULT_STARTING_BALANCE)]
    pub starting_balance: usize,

    /// Seed for the random source (defaults to the current time).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start over with a fresh bankroll.
    #[arg(long)]
    pub reset: bool,
}

impl SessionArgs {
    /// Returns the explicit seed, or one derived from the clock.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        })
    }

    /// Opens the store, falling back to `default_file` in the working directory.
    #[must_use]
    pub fn store(&self, default_file: &str) -> FileStore {
        let path = self
            .state_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_file));
        FileStore::new(path, self.starting_balance)
    }

    /// Loads the bankroll, honoring `--reset`.
    pub fn load_bankroll(&self, store: &mut FileStore) -> Bankroll {
        if self.reset {
            match store.reset() {
                Ok(bankroll) => return bankroll,
                Err(err) => log::error!("could not reset bankroll: {err}"),
            }
        }
        store.load()
    }
}

/// Installs the terminal logger. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// Saves the bankroll, reporting a failure without ending the session.
pub fn save_or_warn<St: BankrollStore>(store: &mut St, bankroll: &Bankroll)
where
    St::Error: core::fmt::Display,
{
    if let Err(err) = store.save(bankroll) {
        log::error!("could not save bankroll: {err}");
        println!("Warning: progress could not be saved ({err}).");
    }
}

/// Starts a blackjack round and saves the bankroll with the stake already
/// deducted, so an interrupted session cannot take it back.
///
/// # Errors
///
/// Returns the [`BetError`] from [`BlackjackGame::start_round`]; nothing is
/// saved in that case.
pub fn deal_and_save<S, St>(
    game: &mut BlackjackGame<S>,
    store: &mut St,
    bet: usize,
) -> Result<(), BetError>
where
    S: RandomSource,
    St: BankrollStore,
    St::Error: core::fmt::Display,
{
    game.start_round(bet)?;
    save_or_warn(store, game.bankroll());
    Ok(())
}

/// Prints a prompt and reads one trimmed, lowercased line.
///
/// Returns `None` on end of input or when stdout can no longer be written.
#[must_use]
pub fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    if let Err(err) = io::stdout().flush() {
        log::warn!("stdout closed: {err}");
        return None;
    }

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

/// Wraps text in an ANSI color code.
#[must_use]
pub fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

/// Prints the end-of-session stats block.
pub fn print_stats(title: &str, bankroll: &Bankroll, show_pushes: bool) {
    let rule = "=".repeat(40);
    println!("\n{rule}");
    println!("{title} statistics");
    println!("{rule}");
    println!("Bankroll: ${}", bankroll.balance);
    println!("Wins: {}", bankroll.wins);
    println!("Losses: {}", bankroll.losses);
    if show_pushes {
        println!("Pushes: {}", bankroll.pushes);
        println!("Blackjacks: {}", bankroll.blackjacks);
    }
    println!("Win Rate: {:.1}%", bankroll.win_rate());
    println!("{rule}\n");
}
