//! Terminal blackjack.

use clap::Parser;

use casinors::cli::{
    SessionArgs, colorize, deal_and_save, init_logging, print_stats, prompt_line, save_or_warn,
};
use casinors::{
    BankrollStore, BlackjackGame, BlackjackState, Card, DealerHand, FileStore, GameOptions, Hand,
    Outcome, RoundResult,
};

/// Play blackjack against the dealer. Dealer stands on all 17s; blackjack pays 3:2.
#[derive(Debug, Parser)]
#[command(name = "blackjack", version)]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,

    /// Number of decks in the shoe.
    #[arg(long, default_value_t = 2)]
    decks: u8,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let mut store = cli.session.store(FileStore::BLACKJACK_FILE);
    let bankroll = cli.session.load_bankroll(&mut store);
    let options = GameOptions::default().with_decks(cli.decks);
    let mut game = BlackjackGame::new(options, bankroll, cli.session.seed());

    println!("Welcome to Blackjack! (type 'q' to quit)");
    println!("- Dealer stands on all 17s");
    println!("- Blackjack pays 3:2");

    while !game.bankroll().is_broke() {
        let balance = game.bankroll().balance;
        let Some(bet) = prompt_bet(balance) else {
            break;
        };

        if game.check_and_reshuffle() == Ok(true) {
            println!("Shoe reshuffled.");
        }

        if let Err(err) = deal_and_save(&mut game, &mut store, bet) {
            println!("Bet error: {err}");
            continue;
        }

        if !play_player_turn(&mut game) {
            // Quitting mid-round forfeits the stake already on the table.
            save_or_warn(&mut store, game.bankroll());
            print_stats("Blackjack", game.bankroll(), true);
            return;
        }

        if game.state() == BlackjackState::DealerTurn {
            if let Err(err) = game.dealer_play() {
                println!("Dealer error: {err}");
            }
        }

        if let Some(result) = game.result() {
            print_table(&game, true);
            print_result(result);
        }
        save_or_warn(&mut store, game.bankroll());
    }

    if game.bankroll().is_broke() {
        println!("You're broke! Game over.");
        print_stats("Blackjack", game.bankroll(), true);
        // The next session starts with a fresh bankroll.
        if let Err(err) = store.reset() {
            println!("Warning: bankroll could not be reset ({err}).");
        }
        return;
    }

    save_or_warn(&mut store, game.bankroll());
    print_stats("Blackjack", game.bankroll(), true);
    println!("Thanks for playing!");
}

fn prompt_bet(balance: usize) -> Option<usize> {
    loop {
        let input = prompt_line(&format!("Place your bet (1-{balance}, or 'q' to quit): $"))?;
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a valid number!"),
        }
    }
}

/// Runs player actions until the turn ends. Returns `false` if the player quits.
fn play_player_turn(game: &mut BlackjackGame) -> bool {
    while game.state() == BlackjackState::PlayerTurn {
        print_table(game, false);
        println!("{}", format_actions(game));

        let Some(action) = prompt_line("Your choice: ") else {
            return false;
        };

        let result = match action.as_str() {
            "h" | "hit" => game.hit().map(|card| println!("You drew: {card}")),
            "s" | "stand" => game.stand(),
            "d" | "double" => game
                .double_down()
                .map(|card| println!("You doubled down and drew: {card}")),
            "q" | "quit" => return false,
            _ => {
                println!("Invalid choice!");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Action error: {err}");
        }
    }
    true
}

fn print_table(game: &BlackjackGame, reveal: bool) {
    println!("\n{}", "=".repeat(50));
    println!(
        "Bankroll: ${}   Bet: ${}   Shoe: {} cards",
        game.bankroll().balance,
        game.bet(),
        game.cards_remaining()
    );

    let dealer = game.dealer_hand();
    let dealer_total = if reveal || dealer.is_hole_revealed() {
        dealer.total().to_string()
    } else {
        "?".to_string()
    };
    println!("Dealer: {} (value {dealer_total})", format_dealer(dealer, reveal));

    let hand = game.player_hand();
    println!("You:    {} (value {})", format_hand(hand), hand.total());
    if hand.is_blackjack() {
        println!("        BLACKJACK!");
    } else if hand.is_bust() {
        println!("        BUSTED!");
    }
    println!("{}", "=".repeat(50));
}

fn print_result(result: &RoundResult) {
    let totals = format!("({} vs {})", result.player_total, result.dealer_total);
    match result.outcome {
        Outcome::Blackjack => println!("BLACKJACK! You win ${}!", result.net),
        Outcome::Win => println!("You win ${}! {totals}", result.net),
        Outcome::Push => println!("Push! It's a tie {totals}"),
        Outcome::Lose if result.player_total > 21 => println!("You busted! Dealer wins!"),
        Outcome::Lose => println!("Dealer wins! {totals}"),
    }
}

fn format_actions(game: &BlackjackGame) -> String {
    let mut parts = vec![
        format_action("hit", "h", true),
        format_action("stand", "s", true),
    ];
    parts.push(format_action("double", "d", game.can_double()));
    parts.push(format_action("quit", "q", true));
    format!("Options: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn format_dealer(dealer: &DealerHand, reveal: bool) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if reveal || dealer.is_hole_revealed() {
        dealer
            .cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("[?]".to_string());
        }
        parts.join(" ")
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}
