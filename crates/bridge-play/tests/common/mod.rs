#![allow(dead_code)]

use bridge_core::{Board, Card, Contract, Hand, Seat, Strain, Vulnerability};
use bridge_play::{DealRecord, PlayConfig, PlayInput, Session};
use once_cell::sync::OnceCell;
use proptest::prelude::*;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test-friendly subscriber once. Level comes from `TEST_LOG`,
/// then `RUST_LOG`, then "warn".
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn sample_deals() -> Vec<DealRecord> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tests/deals/sample_deals.yaml");
    DealRecord::load_all(&path).unwrap()
}

pub fn sample_input(name: &str) -> PlayInput {
    sample_deals()
        .into_iter()
        .find(|d| d.name.as_deref() == Some(name))
        .unwrap()
        .to_input()
        .unwrap()
}

pub fn card(s: &str) -> Card {
    s.parse().unwrap()
}

/// Every card still in a hand, on the table or in a finished trick.
pub fn all_cards(session: &Session) -> Vec<Card> {
    let state = session.state();
    let mut cards: Vec<Card> = state.hands.iter().flat_map(|h| h.cards.clone()).collect();
    cards.extend(state.trick.cards());
    cards.extend(state.history.iter().flat_map(|t| t.cards()));
    cards.sort();
    cards
}

pub fn sorted_deck() -> Vec<Card> {
    let mut deck = Card::full_deck();
    deck.sort();
    deck
}

/// Drive a session to the end. Human seats play the legal card at
/// `picks[i] % legal.len()`, cycling through `picks`; every ticket fires at
/// once.
pub fn play_out(session: &mut Session, picks: &[usize]) {
    let mut turn = 0;
    // 52 plays plus 12 trick clears.
    for _ in 0..64 {
        if session.is_over() {
            return;
        }
        if let Some(seat) = session.state().to_act().filter(|&s| session.is_human(s)) {
            let legal = session.legal_plays_for(seat);
            let pick = picks.get(turn % picks.len().max(1)).copied().unwrap_or(0);
            session.play(seat, legal[pick % legal.len()]).unwrap();
            turn += 1;
        } else {
            let ticket = session.next_ticket().unwrap();
            assert!(session.fire(ticket));
        }
    }
    assert!(session.is_over(), "hand did not finish");
}

pub fn deal() -> impl Strategy<Value = Board> {
    Just(Card::full_deck()).prop_shuffle().prop_map(|deck| {
        let hand = |seat: Seat| {
            let mut hand = Hand::new(deck[seat.idx() * 13..(seat.idx() + 1) * 13].to_vec());
            hand.sort();
            hand
        };
        Board::new(
            Seat::North,
            Vulnerability::None,
            [hand(Seat::North), hand(Seat::East), hand(Seat::South), hand(Seat::West)],
        )
    })
}

pub fn contract() -> impl Strategy<Value = Contract> {
    (
        1u8..=7,
        prop::sample::select(Strain::ALL.to_vec()),
        prop::sample::select(Seat::ALL.to_vec()),
    )
        .prop_map(|(level, strain, declarer)| Contract::new(level, strain, declarer))
}

pub fn instant_session(board: Board, contract: Contract, humans: Vec<Seat>) -> Session {
    let input = PlayInput {
        board,
        contract,
        opening_lead: None,
        auction: None,
    };
    Session::new(input, PlayConfig::instant().with_human_seats(humans)).unwrap()
}
