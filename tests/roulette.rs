//! Roulette engine integration tests.

use casinors::{
    Bankroll, BetError, BetType, Color, Pocket, RandomSource, RouletteGame, RouletteOptions,
    RouletteState, ScriptedSource, SeededSource, WHEEL_ORDER, roulette::RED_NUMBERS,
};

fn table(balance: usize, pockets: &[u8]) -> RouletteGame<ScriptedSource> {
    RouletteGame::with_source(
        RouletteOptions::default(),
        Bankroll::new(balance),
        ScriptedSource::new(pockets),
    )
}

#[test]
fn pocket_colors_follow_the_wheel() {
    assert_eq!(Pocket::ZERO.color(), Color::Green);
    assert_eq!(Pocket::new(1).unwrap().color(), Color::Red);
    assert_eq!(Pocket::new(2).unwrap().color(), Color::Black);
    assert_eq!(Pocket::new(36).unwrap().color(), Color::Red);
    assert!(Pocket::new(37).is_none());

    let reds = (1..=36)
        .filter(|n| Pocket::new(*n).unwrap().color() == Color::Red)
        .count();
    assert_eq!(reds, RED_NUMBERS.len());
    assert_eq!(reds, 18);
}

#[test]
fn wheel_order_covers_every_pocket_once() {
    let mut numbers = WHEEL_ORDER.to_vec();
    numbers.sort_unstable();
    assert_eq!(numbers, (0..=36).collect::<Vec<u8>>());
    assert_eq!(WHEEL_ORDER[0], 0);
}

#[test]
fn red_bet_loses_on_black() {
    let mut game = table(100, &[2]);
    game.place_bet(BetType::Red, 10).unwrap();

    let result = game.spin().unwrap();
    assert_eq!(result.pocket.number(), 2);
    assert_eq!(result.color, Color::Black);
    assert_eq!(result.total_payout, 0);
    assert_eq!(result.net, -10);
    assert!(!result.is_win());
    assert_eq!(game.bankroll().balance, 90);
    assert_eq!(game.bankroll().losses, 1);
}

#[test]
fn zero_bet_pays_35_to_1() {
    let mut game = table(100, &[0]);
    game.place_bet(BetType::Zero, 10).unwrap();

    let result = game.spin().unwrap();
    assert_eq!(result.color, Color::Green);
    assert_eq!(result.total_payout, 360);
    assert_eq!(result.net, 350);
    assert_eq!(game.bankroll().balance, 450);
    assert_eq!(game.bankroll().wins, 1);
}

#[test]
fn zero_loses_even_money_bets() {
    let mut game = table(100, &[0]);
    for bet_type in [
        BetType::Red,
        BetType::Black,
        BetType::Even,
        BetType::Odd,
        BetType::High,
        BetType::Low,
    ] {
        game.place_bet(bet_type, 5).unwrap();
    }

    let result = game.spin().unwrap();
    assert!(result.bets.iter().all(|bet| !bet.won));
    assert_eq!(game.bankroll().balance, 70);
}

#[test]
fn dozens_pay_2_to_1() {
    let mut game = table(100, &[13, 12, 36]);

    game.place_bet(BetType::Dozen2, 10).unwrap();
    assert_eq!(game.spin().unwrap().total_payout, 30);

    game.place_bet(BetType::Dozen1, 10).unwrap();
    assert_eq!(game.spin().unwrap().total_payout, 30);

    game.place_bet(BetType::Dozen1, 10).unwrap();
    game.place_bet(BetType::Dozen3, 10).unwrap();
    let result = game.spin().unwrap();
    assert_eq!(result.total_payout, 30);
    assert_eq!(result.net, 10);
    assert_eq!(game.bankroll().balance, 150);
}

#[test]
fn mixed_bets_resolve_independently() {
    let mut game = table(100, &[19]);
    game.place_bet(BetType::Red, 10).unwrap();
    game.place_bet(BetType::Odd, 10).unwrap();
    game.place_bet(BetType::Low, 10).unwrap();

    let result = game.spin().unwrap();
    let outcomes: Vec<(BetType, bool)> = result
        .bets
        .iter()
        .map(|bet| (bet.bet.bet_type, bet.won))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            (BetType::Red, true),
            (BetType::Odd, true),
            (BetType::Low, false),
        ]
    );
    assert_eq!(result.total_staked, 30);
    assert_eq!(result.total_payout, 40);
    assert_eq!(game.bankroll().balance, 110);
}

#[test]
fn placing_bets_does_not_touch_balance() {
    let mut game = table(100, &[]);
    game.place_bet(BetType::Black, 40).unwrap();
    game.place_bet(BetType::Even, 20).unwrap();

    assert_eq!(game.bankroll().balance, 100);
    assert_eq!(game.total_staked(), 60);
    assert_eq!(game.bets().len(), 2);
}

#[test]
fn same_type_bets_accumulate() {
    let mut game = table(100, &[]);
    game.place_bet(BetType::Red, 10).unwrap();
    game.place_bet(BetType::Red, 15).unwrap();

    assert_eq!(game.bets().len(), 1);
    assert_eq!(game.bets()[0].amount, 25);
}

#[test]
fn bets_over_balance_are_rejected() {
    let mut game = table(100, &[]);
    game.place_bet(BetType::Red, 80).unwrap();

    assert_eq!(
        game.place_bet(BetType::Black, 30).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(
        game.place_bet(BetType::Red, 21).unwrap_err(),
        BetError::InsufficientFunds
    );
    game.place_bet(BetType::Black, 20).unwrap();
    assert_eq!(game.total_staked(), 100);
}

#[test]
fn bet_limits_are_enforced() {
    let mut game = RouletteGame::with_source(
        RouletteOptions::default().with_min_bet(5).with_max_bets(2),
        Bankroll::new(100),
        ScriptedSource::default(),
    );

    assert_eq!(
        game.place_bet(BetType::Red, 0).unwrap_err(),
        BetError::InvalidBet
    );
    assert_eq!(
        game.place_bet(BetType::Red, 4).unwrap_err(),
        BetError::InvalidBet
    );

    game.place_bet(BetType::Red, 5).unwrap();
    game.place_bet(BetType::Odd, 5).unwrap();
    assert_eq!(
        game.place_bet(BetType::Zero, 5).unwrap_err(),
        BetError::InvalidBet
    );

    // Topping up an existing bet does not count against the limit.
    game.place_bet(BetType::Odd, 5).unwrap();
    assert_eq!(game.total_staked(), 15);
}

#[test]
fn clear_then_spin_is_rejected() {
    let mut game = table(100, &[7]);
    game.place_bet(BetType::Red, 10).unwrap();
    game.clear_bets().unwrap();

    assert!(game.bets().is_empty());
    assert_eq!(game.spin().unwrap_err(), BetError::InvalidBet);
    assert_eq!(game.bankroll().balance, 100);
    assert_eq!(game.bankroll().rounds_played(), 0);
}

#[test]
fn spin_returns_table_to_betting() {
    let mut game = table(100, &[5]);
    game.place_bet(BetType::Odd, 10).unwrap();

    let result = game.spin().unwrap();
    assert_eq!(game.state(), RouletteState::Betting);
    assert!(game.bets().is_empty());
    assert_eq!(game.last_spin(), Some(&result));

    game.place_bet(BetType::Even, 10).unwrap();
    assert_eq!(game.total_staked(), 10);
}

#[test]
fn set_bankroll_clears_bets() {
    let mut game = table(100, &[]);
    game.place_bet(BetType::High, 50).unwrap();

    game.set_bankroll(Bankroll::new(20));
    assert!(game.bets().is_empty());
    assert_eq!(game.into_bankroll(), Bankroll::new(20));
}

#[test]
fn losing_everything_leaves_player_broke() {
    let mut game = table(50, &[0]);
    game.place_bet(BetType::Red, 50).unwrap();
    game.spin().unwrap();

    assert!(game.bankroll().is_broke());
    assert_eq!(
        game.place_bet(BetType::Red, 1).unwrap_err(),
        BetError::InsufficientFunds
    );
}

#[test]
fn seeded_wheel_stays_on_the_table() {
    let mut game = RouletteGame::new(RouletteOptions::default(), Bankroll::new(1000), 11);
    for _ in 0..50 {
        game.place_bet(BetType::Zero, 1).unwrap();
        let result = game.spin().unwrap();
        assert!(result.pocket.number() <= 36);
    }
    assert_eq!(game.bankroll().rounds_played(), 50);
}

#[test]
fn bet_keys_round_trip() {
    for bet_type in BetType::ALL {
        assert_eq!(BetType::from_key(bet_type.key()), Some(bet_type));
    }
    assert_eq!(BetType::from_key('x'), None);
    assert_eq!(BetType::Dozen3.odds(), 2);
    assert_eq!(BetType::High.to_string(), "High (19-36)");
}

#[test]
fn over_balance_bets_are_always_rejected() {
    for balance in 0..=50 {
        for amount in 0..=60 {
            let mut game = table(balance, &[]);
            let result = game.place_bet(BetType::Red, amount);

            if amount == 0 {
                assert_eq!(result, Err(BetError::InvalidBet));
            } else if amount > balance {
                assert_eq!(result, Err(BetError::InsufficientFunds));
            } else {
                assert_eq!(result, Ok(()));
                // Whatever is left over is the most a second bet can take.
                let room = balance - amount;
                assert_eq!(
                    game.place_bet(BetType::Black, room + 1),
                    Err(BetError::InsufficientFunds)
                );
                assert!(game.total_staked() <= balance);
            }
            assert_eq!(game.bankroll().balance, balance);
        }
    }
}

#[test]
fn seeded_wheel_reaches_every_pocket_evenly() {
    const SPINS: usize = 3700;

    let mut source = SeededSource::new(2024);
    let mut counts = [0_usize; 37];
    for _ in 0..SPINS {
        counts[usize::from(source.spin())] += 1;
    }

    // 100 expected per pocket; the bounds sit about five deviations out.
    for (pocket, count) in counts.iter().enumerate() {
        assert!(
            (50..=150).contains(count),
            "pocket {pocket} came up {count} times"
        );
    }
    assert_eq!(counts.iter().sum::<usize>(), SPINS);
}

#[test]
fn seeded_table_lands_on_every_pocket() {
    let mut game = RouletteGame::new(RouletteOptions::default(), Bankroll::new(10_000), 5);
    let mut seen = [false; 37];
    for _ in 0..2000 {
        game.place_bet(BetType::Zero, 1).unwrap();
        seen[usize::from(game.spin().unwrap().pocket.number())] = true;
    }
    assert!(seen.iter().all(|hit| *hit));
}
