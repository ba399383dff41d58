use casinors::{
    Bankroll, BankrollStore, BetResult, BetType, BlackjackGame, BlackjackState, Card, Color,
    DEFAULT_STARTING_BALANCE, DealerHand, GameOptions, Hand, Outcome, RoundResult, RouletteGame,
    RouletteOptions, SpinResult, Suit, WHEEL_ORDER,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

const BLACKJACK_KEY: &str = "casinors.blackjack";
const ROULETTE_KEY: &str = "casinors.roulette";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = getItem)]
    fn storage_get(key: &str) -> Result<Option<String>, JsValue>;

    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = setItem)]
    fn storage_set(key: &str, value: &str) -> Result<(), JsValue>;
}

/// Bankroll kept in the browser's `localStorage`, one key per game.
struct LocalStorageStore {
    key: &'static str,
    starting_balance: usize,
}

impl BankrollStore for LocalStorageStore {
    type Error = JsValue;

    fn starting_balance(&self) -> usize {
        self.starting_balance
    }

    fn load(&mut self) -> Bankroll {
        storage_get(self.key)
            .ok()
            .flatten()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_else(|| Bankroll::new(self.starting_balance))
    }

    fn save(&mut self, bankroll: &Bankroll) -> Result<(), Self::Error> {
        let json = serde_json::to_string(bankroll).map_err(js_err)?;
        storage_set(self.key, &json)
    }
}

#[wasm_bindgen]
pub struct WasmBlackjack {
    game: BlackjackGame,
    store: LocalStorageStore,
}

#[wasm_bindgen]
impl WasmBlackjack {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        let mut store = LocalStorageStore {
            key: BLACKJACK_KEY,
            starting_balance: DEFAULT_STARTING_BALANCE,
        };
        let bankroll = store.load();
        Self {
            game: BlackjackGame::new(GameOptions::default(), bankroll, u64::from(seed)),
            store,
        }
    }

    pub fn start_round(&mut self, bet: u32) -> Result<(), JsValue> {
        self.game.start_round(bet as usize).map_err(js_err)?;
        self.persist()
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.game.hit().map_err(js_err)?;
        self.persist()
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.game.stand().map_err(js_err)
    }

    pub fn double_down(&mut self) -> Result<(), JsValue> {
        self.game.double_down().map_err(js_err)?;
        self.persist()
    }

    pub fn dealer_play(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.dealer_play().map_err(js_err)?;
        self.persist()?;
        to_js_value(&JsRoundResult::from(&result))
    }

    pub fn clear_round(&mut self) -> Result<(), JsValue> {
        self.game.clear_round().map_err(js_err)
    }

    pub fn reset_bankroll(&mut self) -> Result<(), JsValue> {
        let fresh = self.store.reset()?;
        self.game.set_bankroll(fresh).map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.state();
        let snapshot = BlackjackSnapshot {
            state: state_to_str(state),
            bankroll: JsBankroll::from(self.game.bankroll()),
            bet: self.game.bet() as u32,
            doubled: self.game.doubled(),
            can_double: self.game.can_double(),
            player: JsHand::from(self.game.player_hand()),
            dealer: JsDealer::from(self.game.dealer_hand()),
            result: self.game.result().map(JsRoundResult::from),
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

impl WasmBlackjack {
    /// Saves after every balance change, so reloading mid-round keeps the
    /// stake already on the table.
    fn persist(&mut self) -> Result<(), JsValue> {
        self.store.save(self.game.bankroll())
    }
}

#[wasm_bindgen]
pub struct WasmRoulette {
    game: RouletteGame,
    store: LocalStorageStore,
}

#[wasm_bindgen]
impl WasmRoulette {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        let mut store = LocalStorageStore {
            key: ROULETTE_KEY,
            starting_balance: DEFAULT_STARTING_BALANCE,
        };
        let bankroll = store.load();
        Self {
            game: RouletteGame::new(RouletteOptions::default(), bankroll, u64::from(seed)),
            store,
        }
    }

    /// Places a bet using the table keys shared with the terminal game.
    pub fn place_bet(&mut self, key: char, amount: u32) -> Result<(), JsValue> {
        let bet_type =
            BetType::from_key(key).ok_or_else(|| JsValue::from_str("unknown bet type"))?;
        self.game
            .place_bet(bet_type, amount as usize)
            .map_err(js_err)
    }

    pub fn clear_bets(&mut self) -> Result<(), JsValue> {
        self.game.clear_bets().map_err(js_err)
    }

    pub fn spin(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.spin().map_err(js_err)?;
        self.store.save(self.game.bankroll())?;
        to_js_value(&JsSpinResult::from(&result))
    }

    pub fn reset_bankroll(&mut self) -> Result<(), JsValue> {
        let fresh = self.store.reset()?;
        self.game.set_bankroll(fresh);
        Ok(())
    }

    /// Pocket numbers in wheel order, for drawing the wheel.
    pub fn wheel_order(&self) -> Vec<u8> {
        WHEEL_ORDER.to_vec()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = RouletteSnapshot {
            bankroll: JsBankroll::from(self.game.bankroll()),
            bets: self
                .game
                .bets()
                .iter()
                .map(|bet| JsBet {
                    key: bet.bet_type.key(),
                    label: bet.bet_type.label(),
                    amount: bet.amount as u32,
                })
                .collect(),
            total_staked: self.game.total_staked() as u32,
            last_spin: self.game.last_spin().map(JsSpinResult::from),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct BlackjackSnapshot {
    state: &'static str,
    bankroll: JsBankroll,
    bet: u32,
    doubled: bool,
    can_double: bool,
    player: JsHand,
    dealer: JsDealer,
    result: Option<JsRoundResult>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct RouletteSnapshot {
    bankroll: JsBankroll,
    bets: Vec<JsBet>,
    total_staked: u32,
    last_spin: Option<JsSpinResult>,
}

#[derive(Serialize)]
struct JsBankroll {
    balance: u32,
    wins: u32,
    losses: u32,
    pushes: u32,
    blackjacks: u32,
}

impl From<&Bankroll> for JsBankroll {
    fn from(bankroll: &Bankroll) -> Self {
        Self {
            balance: bankroll.balance as u32,
            wins: bankroll.wins,
            losses: bankroll.losses,
            pushes: bankroll.pushes,
            blackjacks: bankroll.blackjacks,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    total: u8,
    is_soft: bool,
    is_blackjack: bool,
    is_bust: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            total: hand.total(),
            is_soft: hand.is_soft(),
            is_blackjack: hand.is_blackjack(),
            is_bust: hand.is_bust(),
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    cards: Vec<Option<JsCard>>,
    visible_total: u8,
    hole_revealed: bool,
}

impl From<&DealerHand> for JsDealer {
    fn from(dealer: &DealerHand) -> Self {
        let hole_revealed = dealer.is_hole_revealed();
        let cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if hole_revealed || index == 0 {
                    Some(card_to_js(*card))
                } else {
                    None
                }
            })
            .collect();

        Self {
            cards,
            visible_total: dealer.visible_total(),
            hole_revealed,
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    bet: u32,
    doubled: bool,
    payout: u32,
    net: i32,
    player_total: u8,
    dealer_total: u8,
}

impl From<&RoundResult> for JsRoundResult {
    fn from(result: &RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            bet: result.bet as u32,
            doubled: result.doubled,
            payout: result.payout as u32,
            net: result.net as i32,
            player_total: result.player_total,
            dealer_total: result.dealer_total,
        }
    }
}

#[derive(Serialize)]
struct JsBet {
    key: char,
    label: &'static str,
    amount: u32,
}

#[derive(Serialize)]
struct JsBetResult {
    key: char,
    label: &'static str,
    amount: u32,
    won: bool,
    payout: u32,
}

impl From<&BetResult> for JsBetResult {
    fn from(result: &BetResult) -> Self {
        Self {
            key: result.bet.bet_type.key(),
            label: result.bet.bet_type.label(),
            amount: result.bet.amount as u32,
            won: result.won,
            payout: result.payout as u32,
        }
    }
}

#[derive(Serialize)]
struct JsSpinResult {
    number: u8,
    color: &'static str,
    bets: Vec<JsBetResult>,
    total_staked: u32,
    total_payout: u32,
    net: i32,
}

impl From<&SpinResult> for JsSpinResult {
    fn from(result: &SpinResult) -> Self {
        Self {
            number: result.pocket.number(),
            color: color_to_str(result.color),
            bets: result.bets.iter().map(JsBetResult::from).collect(),
            total_staked: result.total_staked as u32,
            total_payout: result.total_payout as u32,
            net: result.net as i32,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn color_to_str(color: Color) -> &'static str {
    match color {
        Color::Red => "Red",
        Color::Black => "Black",
        Color::Green => "Green",
    }
}

fn state_to_str(state: BlackjackState) -> &'static str {
    match state {
        BlackjackState::Betting => "Betting",
        BlackjackState::PlayerTurn => "PlayerTurn",
        BlackjackState::DealerTurn => "DealerTurn",
        BlackjackState::Resolved => "Resolved",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "Win",
        Outcome::Lose => "Lose",
        Outcome::Push => "Push",
        Outcome::Blackjack => "Blackjack",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
