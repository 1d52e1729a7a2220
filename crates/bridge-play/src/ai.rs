//! Heuristic card selection for the simulated defenders.
//!
//! The heuristic only looks at the current trick, its own hand and relative
//! suit lengths. It does no card counting and no search. Rules are tried in
//! priority order and the first one that produces a card decides.
//!
//! "Lowest" always means lowest rank; equal ranks in different suits go to
//! the suit that sorts first (clubs, then diamonds, hearts, spades). This
//! keeps every choice total and deterministic.

use crate::rules::{card_beats, current_winner, effective_value, legal_plays};
use bridge_core::{Card, Hand, Rank, Seat, Suit};
use serde::Serialize;
use std::fmt;

/// What a seat can see when it is asked to play.
#[derive(Debug, Clone, Copy)]
pub struct SeatView<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    /// Plays so far in the current trick, in order.
    pub trick: &'a [(Seat, Card)],
    pub trump: Option<Suit>,
}

/// Which heuristic rule produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AiRule {
    OnlyCard,
    LeadLongSuit,
    CoverHonor,
    PartnerWinning,
    WinCheaply,
    Ruff,
    Lowest,
}

impl fmt::Display for AiRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AiRule::OnlyCard => "only card",
            AiRule::LeadLongSuit => "lead long suit",
            AiRule::CoverHonor => "cover an honor",
            AiRule::PartnerWinning => "partner winning",
            AiRule::WinCheaply => "win cheaply",
            AiRule::Ruff => "ruff low",
            AiRule::Lowest => "lowest card",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub card: Card,
    pub rule: AiRule,
}

/// Seam between the session controller and whatever picks cards for
/// non-human seats.
pub trait CardPlayer: Send + Sync {
    /// Pick a legal card for `view.seat`. `None` only for an empty hand.
    fn choose(&self, view: &SeatView<'_>) -> Option<Decision>;
}

/// The fixed heuristic defender.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPlayer;

impl CardPlayer for HeuristicPlayer {
    fn choose(&self, view: &SeatView<'_>) -> Option<Decision> {
        choose_card(view)
    }
}

struct Context<'a> {
    view: &'a SeatView<'a>,
    legal: Vec<Card>,
    led: Option<Suit>,
    following: bool,
}

type Rule = fn(&Context<'_>) -> Option<Card>;

const RULES: [(AiRule, Rule); 7] = [
    (AiRule::OnlyCard, only_card),
    (AiRule::LeadLongSuit, lead_long_suit),
    (AiRule::CoverHonor, cover_honor),
    (AiRule::PartnerWinning, partner_winning),
    (AiRule::WinCheaply, win_cheaply),
    (AiRule::Ruff, ruff_low),
    (AiRule::Lowest, lowest_legal),
];

/// Run the heuristic rules in priority order.
pub fn choose_card(view: &SeatView<'_>) -> Option<Decision> {
    let led = view.trick.first().map(|(_, card)| card.suit);
    let legal = legal_plays(view.hand, led);
    if legal.is_empty() {
        return None;
    }
    let ctx = Context {
        view,
        following: led.is_some_and(|suit| view.hand.has_suit(suit)),
        legal,
        led,
    };

    RULES
        .iter()
        .find_map(|&(rule, apply)| apply(&ctx).map(|card| Decision { card, rule }))
}

fn lowest(cards: impl IntoIterator<Item = Card>) -> Option<Card> {
    cards.into_iter().min_by_key(|c| (c.rank, c.suit))
}

fn only_card(ctx: &Context<'_>) -> Option<Card> {
    match ctx.legal.as_slice() {
        [card] => Some(*card),
        _ => None,
    }
}

/// On lead: longest non-trump suit, fourth highest from four or more,
/// otherwise the lowest card of the suit.
fn lead_long_suit(ctx: &Context<'_>) -> Option<Card> {
    if ctx.led.is_some() {
        return None;
    }
    let hand = ctx.view.hand;
    let mut best: Option<(Suit, u8)> = None;
    for suit in Suit::PLAY_ORDER {
        if Some(suit) == ctx.view.trump {
            continue;
        }
        let len = hand.length(suit);
        if len > 0 && best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((suit, len));
        }
    }
    let (suit, len) = best?;
    if len >= 4 {
        hand.cards_in(suit).get(3).copied()
    } else {
        hand.lowest_in(suit)
    }
}

/// Second hand covers an honor led (ten or higher) with the cheapest higher
/// honor, and otherwise plays low.
fn cover_honor(ctx: &Context<'_>) -> Option<Card> {
    let [(_, led_card)] = ctx.view.trick else {
        return None;
    };
    if !ctx.following || led_card.rank < Rank::Ten {
        return None;
    }
    let cover = lowest(
        ctx.legal
            .iter()
            .copied()
            .filter(|c| c.rank > led_card.rank && c.rank >= Rank::Ten),
    );
    cover.or_else(|| lowest(ctx.legal.iter().copied()))
}

/// Partner has the trick: follow low, or when void discard rather than ruff.
/// With nothing but trumps, prefer one that stays under partner's card.
fn partner_winning(ctx: &Context<'_>) -> Option<Card> {
    let trump = ctx.view.trump;
    let (winner, best) = current_winner(ctx.view.trick, trump)?;
    if winner != ctx.view.seat.partner() {
        return None;
    }
    let legal = || ctx.legal.iter().copied();
    if ctx.following {
        return lowest(legal());
    }
    let led = ctx.led?;
    lowest(legal().filter(|c| Some(c.suit) != trump))
        .or_else(|| lowest(legal().filter(|&c| !card_beats(c, best, led, trump))))
        .or_else(|| lowest(legal()))
}

/// Following suit: cheapest card that takes the lead, else the lowest.
fn win_cheaply(ctx: &Context<'_>) -> Option<Card> {
    if !ctx.following {
        return None;
    }
    let led = ctx.led?;
    let trump = ctx.view.trump;
    let (_, best) = current_winner(ctx.view.trick, trump)?;
    let best_value = effective_value(best, led, trump);
    let winners = ctx
        .legal
        .iter()
        .copied()
        .filter(|&c| effective_value(c, led, trump) > best_value);
    lowest(winners).or_else(|| lowest(ctx.legal.iter().copied()))
}

fn ruff_low(ctx: &Context<'_>) -> Option<Card> {
    if ctx.led.is_none() || ctx.following {
        return None;
    }
    ctx.view.hand.lowest_in(ctx.view.trump?)
}

fn lowest_legal(ctx: &Context<'_>) -> Option<Card> {
    lowest(ctx.legal.iter().copied())
}
