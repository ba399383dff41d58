//! Terminal roulette.

use clap::Parser;

use casinors::cli::{SessionArgs, colorize, init_logging, print_stats, prompt_line, save_or_warn};
use casinors::{
    BankrollStore, BetType, Color, FileStore, Pocket, RouletteGame, RouletteOptions, SpinResult,
};

/// Play single-zero roulette: colors, parity, halves, dozens, and zero.
#[derive(Debug, Parser)]
#[command(name = "roulette", version)]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,

    /// Smallest accepted bet.
    #[arg(long, default_value_t = 1)]
    min_bet: usize,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let mut store = cli.session.store(FileStore::ROULETTE_FILE);
    let bankroll = cli.session.load_bankroll(&mut store);
    let options = RouletteOptions::default().with_min_bet(cli.min_bet);
    let mut game = RouletteGame::new(options, bankroll, cli.session.seed());

    println!("Welcome to Roulette!");
    println!("- Red/Black/Even/Odd/High/Low pay 1:1");
    println!("- Dozens pay 2:1");
    println!("- Zero pays 35:1");

    while !game.bankroll().is_broke() {
        print_table(&game);

        let Some(choice) =
            prompt_line("Select bet type (0-9), 's' to spin, 'c' to clear, 'q' to quit: ")
        else {
            break;
        };

        match choice.as_str() {
            "q" | "quit" => break,
            "s" | "spin" => match game.spin() {
                Ok(result) => {
                    print_spin(&result);
                    save_or_warn(&mut store, game.bankroll());
                }
                Err(err) => println!("Cannot spin: {err} (place a bet first)"),
            },
            "c" | "clear" => match game.clear_bets() {
                Ok(()) => println!("Bets cleared!"),
                Err(err) => println!("Cannot clear bets: {err}"),
            },
            key => {
                let mut chars = key.chars();
                let bet_type = match (chars.next(), chars.next()) {
                    (Some(key), None) => BetType::from_key(key),
                    _ => None,
                };
                let Some(bet_type) = bet_type else {
                    println!("Invalid choice!");
                    continue;
                };
                place_bet(&mut game, bet_type);
            }
        }
    }

    if game.bankroll().is_broke() {
        println!("You're broke! Game over.");
        print_stats("Roulette", game.bankroll(), false);
        // The next session starts with a fresh bankroll.
        if let Err(err) = store.reset() {
            println!("Warning: bankroll could not be reset ({err}).");
        }
        return;
    }

    save_or_warn(&mut store, game.bankroll());
    print_stats("Roulette", game.bankroll(), false);
    println!("Thanks for playing!");
}

fn place_bet(game: &mut RouletteGame, bet_type: BetType) {
    let available = game.bankroll().balance.saturating_sub(game.total_staked());
    let Some(input) = prompt_line(&format!("Bet amount on {bet_type} (max ${available}): $")) else {
        return;
    };

    let Ok(amount) = input.parse::<usize>() else {
        println!("Invalid amount!");
        return;
    };

    match game.place_bet(bet_type, amount) {
        Ok(()) => println!("Bet ${amount} on {bet_type}"),
        Err(err) => println!("Bet rejected: {err}"),
    }
}

fn print_table(game: &RouletteGame) {
    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!(
        "Bankroll: ${}   Current bets: ${}",
        game.bankroll().balance,
        game.total_staked()
    );

    if !game.bets().is_empty() {
        println!("YOUR BETS:");
        for (index, bet) in game.bets().iter().enumerate() {
            println!("  {}. ${} on {}", index + 1, bet.amount, bet.bet_type);
        }
    }

    println!("BETTING OPTIONS:");
    for pair in BetType::ALL.chunks(2) {
        let line: Vec<String> = pair
            .iter()
            .map(|bet_type| {
                format!(
                    "[{}] {:<14} ({}:1)",
                    bet_type.key(),
                    bet_type.label(),
                    bet_type.odds()
                )
            })
            .collect();
        println!("  {}", line.join("   "));
    }
    println!("{rule}");
}

fn print_spin(result: &SpinResult) {
    println!("\nRESULT: {}!", format_pocket(result.pocket));

    let winners: Vec<_> = result.bets.iter().filter(|bet| bet.won).collect();
    if winners.is_empty() {
        println!("No winning bets this round.");
    } else {
        println!("WINNING BETS:");
        for winner in winners {
            println!(
                "  ${} on {} -> ${}",
                winner.bet.amount, winner.bet.bet_type, winner.payout
            );
        }
        println!("Total win: ${}", result.total_payout);
    }
}

fn format_pocket(pocket: Pocket) -> String {
    let code = match pocket.color() {
        Color::Red => "31",
        Color::Black => "37",
        Color::Green => "32",
    };
    colorize(&pocket.to_string().to_uppercase(), code)
}
