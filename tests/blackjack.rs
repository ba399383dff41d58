//! Blackjack engine integration tests.

#![expect(clippy::float_cmp)]

use casinors::{
    ActionError, Bankroll, BetError, BlackjackGame, BlackjackState, Card, DECK_SIZE, DealerHand,
    DoubleOption, EmptyDeckError, GameOptions, Hand, HandStatus, Outcome, Rank, RoundingMode,
    ScriptedSource, SeededSource, Shoe, Suit, blackjack::dealer_should_hit, new_shuffled_deck,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// A table that never reshuffles on its own, so stacked shoes deal as written.
fn table(balance: usize, options: GameOptions) -> BlackjackGame<ScriptedSource> {
    BlackjackGame::with_source(
        options.with_penetration(0.0),
        Bankroll::new(balance),
        ScriptedSource::default(),
    )
}

fn dealer_with(cards: &[Card]) -> DealerHand {
    let mut dealer = DealerHand::new();
    for card in cards {
        dealer.add_card(*card);
    }
    dealer
}

#[test]
fn hand_totals_count_aces_soft_then_hard() {
    let mut aces = Hand::new();
    aces.add_card(card(Suit::Hearts, Rank::Ace));
    aces.add_card(card(Suit::Spades, Rank::Ace));
    assert_eq!(aces.total(), 12);
    assert!(aces.is_soft());
    assert_eq!(aces.status(), HandStatus::Active);

    let mut natural = Hand::new();
    natural.add_card(card(Suit::Hearts, Rank::Ace));
    natural.add_card(card(Suit::Spades, Rank::King));
    assert_eq!(natural.total(), 21);
    assert!(natural.is_blackjack());
    assert_eq!(natural.status(), HandStatus::Blackjack);

    let mut bust = Hand::new();
    bust.add_card(card(Suit::Hearts, Rank::Ten));
    bust.add_card(card(Suit::Clubs, Rank::Ten));
    bust.add_card(card(Suit::Diamonds, Rank::Five));
    assert_eq!(bust.total(), 25);
    assert!(bust.is_bust());
    assert_eq!(bust.status(), HandStatus::Bust);

    let mut three_card_21 = Hand::new();
    three_card_21.add_card(card(Suit::Hearts, Rank::Seven));
    three_card_21.add_card(card(Suit::Clubs, Rank::Seven));
    three_card_21.add_card(card(Suit::Spades, Rank::Seven));
    assert_eq!(three_card_21.total(), 21);
    assert!(!three_card_21.is_blackjack());
}

#[test]
fn dealer_hand_hides_hole_until_revealed() {
    let mut dealer = dealer_with(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Six),
    ]);

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_total(), 11);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_total(), 17);
    assert!(dealer.is_soft());
}

#[test]
fn dealer_hits_16_and_stands_on_17() {
    let sixteen = dealer_with(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Six),
    ]);
    assert!(dealer_should_hit(&sixteen, true));

    let hard_17 = dealer_with(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Seven),
    ]);
    assert!(!dealer_should_hit(&hard_17, true));
    assert!(!dealer_should_hit(&hard_17, false));

    let soft_17 = dealer_with(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Six),
    ]);
    assert!(!dealer_should_hit(&soft_17, true));
    assert!(dealer_should_hit(&soft_17, false));
}

#[test]
fn natural_pays_three_to_two_at_once() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Spades, Rank::Ace),    // player
        card(Suit::Hearts, Rank::Nine),   // dealer up
        card(Suit::Clubs, Rank::King),    // player
        card(Suit::Diamonds, Rank::Seven), // dealer hole
    ]);

    game.start_round(10).unwrap();
    assert_eq!(game.state(), BlackjackState::Resolved);
    assert!(game.dealer_hand().is_hole_revealed());

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::Blackjack);
    assert_eq!(result.payout, 25);
    assert_eq!(result.net, 15);
    assert_eq!(game.bankroll().balance, 115);
    assert_eq!(game.bankroll().wins, 1);
    assert_eq!(game.bankroll().blackjacks, 1);
}

#[test]
fn blackjack_payout_follows_rounding_mode() {
    for (mode, expected) in [(RoundingMode::Down, 107), (RoundingMode::Up, 108)] {
        let mut game = table(100, GameOptions::default().with_rounding_blackjack(mode));
        game.shoe_mut().stack(&[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::Queen),
            card(Suit::Diamonds, Rank::Seven),
        ]);

        game.start_round(5).unwrap();
        assert_eq!(game.bankroll().balance, expected);
    }
}

#[test]
fn both_naturals_push() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::King),
        card(Suit::Diamonds, Rank::Queen),
    ]);

    game.start_round(10).unwrap();

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.net, 0);
    assert_eq!(game.bankroll().balance, 100);
    assert_eq!(game.bankroll().pushes, 1);
}

#[test]
fn dealer_natural_ends_round_before_player_acts() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::King),
    ]);

    game.start_round(10).unwrap();
    assert_eq!(game.state(), BlackjackState::Resolved);
    assert_eq!(game.result().unwrap().outcome, Outcome::Lose);
    assert_eq!(game.bankroll().balance, 90);
    assert_eq!(game.hit().unwrap_err(), ActionError::IllegalAction);
}

#[test]
fn basic_round_flow() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Hearts, Rank::Eight),  // player
        card(Suit::Clubs, Rank::Six),     // dealer up
        card(Suit::Diamonds, Rank::Seven), // player
        card(Suit::Spades, Rank::Ten),    // dealer hole
        card(Suit::Hearts, Rank::Four),   // player hit
        card(Suit::Clubs, Rank::Five),    // dealer draw
    ]);

    game.start_round(10).unwrap();
    assert_eq!(game.state(), BlackjackState::PlayerTurn);
    assert_eq!(game.bankroll().balance, 90);
    assert_eq!(game.dealer_hand().visible_total(), 6);

    let hit_card = game.hit().unwrap();
    assert_eq!(hit_card.rank, Rank::Four);
    assert_eq!(game.state(), BlackjackState::PlayerTurn);
    assert_eq!(game.player_hand().total(), 19);

    game.stand().unwrap();
    assert_eq!(game.state(), BlackjackState::DealerTurn);

    let result = game.dealer_play().unwrap();
    assert_eq!(result.dealer_drew, vec![card(Suit::Clubs, Rank::Five)]);
    assert_eq!(result.dealer_total, 21);
    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(game.state(), BlackjackState::Resolved);
    assert_eq!(game.bankroll().balance, 90);
    assert_eq!(game.bankroll().losses, 1);
}

#[test]
fn dealer_bust_pays_even_money() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::King), // dealer draw
    ]);

    game.start_round(10).unwrap();
    game.stand().unwrap();

    let result = game.dealer_play().unwrap();
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.dealer_total, 26);
    assert_eq!(result.payout, 20);
    assert_eq!(game.bankroll().balance, 110);
}

#[test]
fn equal_totals_push() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Eight),
    ]);

    game.start_round(10).unwrap();
    game.stand().unwrap();

    let result = game.dealer_play().unwrap();
    assert!(result.dealer_drew.is_empty());
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(game.bankroll().balance, 100);
}

#[test]
fn bust_resolves_round_as_loss() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Hearts, Rank::King), // player hit
    ]);

    game.start_round(10).unwrap();
    game.hit().unwrap();

    assert_eq!(game.state(), BlackjackState::Resolved);
    assert!(game.player_hand().is_bust());
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.result().unwrap().outcome, Outcome::Lose);
    assert_eq!(game.bankroll().balance, 90);
    assert_eq!(game.dealer_play().unwrap_err(), ActionError::IllegalAction);
}

#[test]
fn double_down_doubles_stake_and_stands() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Hearts, Rank::Six),   // player
        card(Suit::Clubs, Rank::Ten),    // dealer up
        card(Suit::Diamonds, Rank::Five), // player
        card(Suit::Spades, Rank::Seven), // dealer hole
        card(Suit::Hearts, Rank::Ten),   // double draw
    ]);

    game.start_round(20).unwrap();
    assert!(game.can_double());

    let drawn = game.double_down().unwrap();
    assert_eq!(drawn.rank, Rank::Ten);
    assert_eq!(game.state(), BlackjackState::DealerTurn);
    assert_eq!(game.bet(), 40);
    assert!(game.doubled());
    assert_eq!(game.bankroll().balance, 60);

    let result = game.dealer_play().unwrap();
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.bet, 40);
    assert!(result.doubled);
    assert_eq!(result.net, 40);
    assert_eq!(game.bankroll().balance, 140);
}

#[test]
fn double_down_bust_loses_both_stakes() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Hearts, Rank::Queen),
    ]);

    game.start_round(10).unwrap();
    game.double_down().unwrap();

    assert_eq!(game.state(), BlackjackState::Resolved);
    assert_eq!(game.result().unwrap().net, -20);
    assert_eq!(game.bankroll().balance, 80);
}

#[test]
fn double_down_rejected_without_funds() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::Four),
        card(Suit::Spades, Rank::Three),
    ]);

    game.start_round(60).unwrap();
    assert!(!game.can_double());
    assert_eq!(
        game.double_down().unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(game.bankroll().balance, 40);
    assert_eq!(game.bet(), 60);
    assert_eq!(game.state(), BlackjackState::PlayerTurn);
}

#[test]
fn double_down_rejected_after_hit_or_on_disallowed_total() {
    let mut game = table(100, GameOptions::default().with_double(DoubleOption::NineOrTen));
    game.shoe_mut().stack(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Hearts, Rank::Two),
    ]);

    game.start_round(10).unwrap();
    assert_eq!(game.double_down().unwrap_err(), ActionError::IllegalAction);

    game.hit().unwrap();
    assert_eq!(game.player_hand().total(), 10);
    assert_eq!(game.double_down().unwrap_err(), ActionError::IllegalAction);
    assert_eq!(game.bankroll().balance, 90);
}

#[test]
fn auto_stand_on_21_moves_to_dealer() {
    let mut game = table(100, GameOptions::default().with_auto_stand_on_21(true));
    game.shoe_mut().stack(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Hearts, Rank::King),
    ]);

    game.start_round(10).unwrap();
    game.hit().unwrap();
    assert_eq!(game.player_hand().total(), 21);
    assert_eq!(game.state(), BlackjackState::DealerTurn);
}

#[test]
fn bet_errors_leave_game_unchanged() {
    let mut game = table(100, GameOptions::default());

    assert_eq!(game.start_round(0).unwrap_err(), BetError::InvalidBet);
    assert_eq!(
        game.start_round(101).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(game.state(), BlackjackState::Betting);
    assert_eq!(game.bankroll().balance, 100);
    assert!(game.player_hand().is_empty());
}

#[test]
fn actions_rejected_outside_their_state() {
    let mut game = table(100, GameOptions::default());
    assert_eq!(game.hit().unwrap_err(), ActionError::IllegalAction);
    assert_eq!(game.stand().unwrap_err(), ActionError::IllegalAction);
    assert_eq!(game.double_down().unwrap_err(), ActionError::IllegalAction);
    assert_eq!(game.dealer_play().unwrap_err(), ActionError::IllegalAction);

    game.shoe_mut().stack(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Seven),
    ]);
    game.start_round(10).unwrap();

    assert_eq!(game.start_round(10).unwrap_err(), BetError::IllegalAction);
    assert_eq!(game.clear_round().unwrap_err(), BetError::IllegalAction);
    assert_eq!(game.reshuffle().unwrap_err(), BetError::IllegalAction);
    assert_eq!(
        game.set_bankroll(Bankroll::new(5)).unwrap_err(),
        BetError::IllegalAction
    );
    assert_eq!(game.dealer_play().unwrap_err(), ActionError::IllegalAction);
}

#[test]
fn clear_round_returns_to_betting() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::King),
        card(Suit::Diamonds, Rank::Seven),
    ]);
    game.start_round(10).unwrap();
    assert!(game.state().accepts_bets());

    game.clear_round().unwrap();
    assert_eq!(game.state(), BlackjackState::Betting);
    assert!(game.result().is_none());
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert_eq!(game.bet(), 0);
    assert_eq!(game.bankroll().balance, 115);
}

#[test]
fn empty_shoe_reshuffles_mid_round() {
    let mut game = table(100, GameOptions::default());
    game.shoe_mut().stack(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Seven),
    ]);

    game.start_round(10).unwrap();
    assert_eq!(game.cards_remaining(), 0);

    // A scripted source leaves the fresh shoe in deck order: the king of
    // spades is on top.
    let drawn = game.hit().unwrap();
    assert_eq!(drawn, card(Suit::Spades, Rank::King));
    assert_eq!(game.cards_remaining(), 2 * DECK_SIZE - 1);
    assert_eq!(game.result().unwrap().outcome, Outcome::Lose);
}

#[test]
fn reshuffle_when_penetration_reached() {
    let options = GameOptions::default().with_decks(1).with_penetration(0.5);
    let mut game =
        BlackjackGame::with_source(options, Bankroll::new(100), ScriptedSource::default());
    game.shoe_mut().stack(&[card(Suit::Hearts, Rank::Two); 10]);

    assert!(game.needs_reshuffle());
    assert!(game.check_and_reshuffle().unwrap());
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert!(!game.check_and_reshuffle().unwrap());
}

#[test]
fn equal_seeds_deal_equal_rounds() {
    let mut first = BlackjackGame::new(GameOptions::default(), Bankroll::new(100), 7);
    let mut second = BlackjackGame::new(GameOptions::default(), Bankroll::new(100), 7);

    first.start_round(10).unwrap();
    second.start_round(10).unwrap();

    assert_eq!(first.player_hand().cards(), second.player_hand().cards());
    assert_eq!(first.dealer_hand().cards(), second.dealer_hand().cards());
    assert_eq!(first.state(), second.state());
}

#[test]
fn shuffled_deck_is_a_permutation() {
    let mut source = SeededSource::new(3);
    let mut deck = new_shuffled_deck(&mut source);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut ordered: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|suit| Rank::ALL.iter().map(move |rank| Card::new(*suit, *rank)))
        .collect();

    let key = |card: &Card| (card.suit as u8, card.rank);
    deck.sort_by_key(key);
    ordered.sort_by_key(key);
    assert_eq!(deck, ordered);
}

#[test]
fn shoe_draws_from_the_top() {
    let mut source = ScriptedSource::default();
    let mut shoe = Shoe::new(0, &mut source);
    assert_eq!(shoe.decks(), 1);
    assert_eq!(shoe.capacity(), DECK_SIZE);

    shoe.stack(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
    ]);
    assert_eq!(shoe.try_draw(), Ok(card(Suit::Hearts, Rank::Two)));
    assert_eq!(shoe.try_draw(), Ok(card(Suit::Clubs, Rank::Three)));
    assert_eq!(shoe.try_draw(), Err(EmptyDeckError));

    let six_decks = Shoe::new(6, &mut source);
    assert_eq!(six_decks.remaining(), 6 * DECK_SIZE);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(4)
        .with_blackjack_pays(1.2)
        .with_stand_on_soft_17(false)
        .with_double(DoubleOption::NineThrough11)
        .with_auto_stand_on_21(true)
        .with_rounding_blackjack(RoundingMode::Nearest)
        .with_penetration(0.5);

    assert_eq!(options.decks, 4);
    assert_eq!(options.blackjack_pays, 1.2);
    assert!(!options.stand_on_soft_17);
    assert_eq!(options.double, DoubleOption::NineThrough11);
    assert!(options.auto_stand_on_21);
    assert_eq!(options.rounding_blackjack, RoundingMode::Nearest);
    assert_eq!(options.penetration, 0.5);

    let defaults = GameOptions::default();
    assert_eq!(defaults.decks, 2);
    assert_eq!(defaults.blackjack_pays, 1.5);
    assert!(defaults.stand_on_soft_17);
}

#[test]
fn over_balance_stakes_are_always_rejected() {
    for balance in 0..=50 {
        for bet in 0..=60 {
            let mut game = BlackjackGame::new(GameOptions::default(), Bankroll::new(balance), 9);
            let result = game.start_round(bet);

            if bet == 0 {
                assert_eq!(result, Err(BetError::InvalidBet));
            } else if bet > balance {
                assert_eq!(result, Err(BetError::InsufficientFunds));
            } else {
                assert_eq!(result, Ok(()));
                continue;
            }
            assert_eq!(game.bankroll().balance, balance);
            assert_eq!(game.state(), BlackjackState::Betting);
        }
    }
}

#[test]
fn double_down_needs_a_second_full_stake() {
    for balance in 1..=50 {
        for bet in 1..=balance {
            let mut game = table(balance, GameOptions::default());
            game.shoe_mut().stack(&[
                card(Suit::Hearts, Rank::Five),
                card(Suit::Clubs, Rank::Two),
                card(Suit::Diamonds, Rank::Four),
                card(Suit::Spades, Rank::Three),
                card(Suit::Hearts, Rank::Two),
            ]);
            game.start_round(bet).unwrap();
            let left = balance - bet;

            if bet > left {
                assert!(!game.can_double());
                assert_eq!(
                    game.double_down().unwrap_err(),
                    ActionError::InsufficientFunds
                );
                assert_eq!(game.bankroll().balance, left);
                assert_eq!(game.bet(), bet);
            } else {
                assert!(game.can_double());
                game.double_down().unwrap();
                assert_eq!(game.bankroll().balance, left - bet);
                assert_eq!(game.bet(), 2 * bet);
            }
        }
    }
}
