//! Legal-play and trick-resolution rules. Everything here is pure.

use crate::trick::Trick;
use bridge_core::{Card, Hand, Rank, Seat, Suit};

/// Cards `hand` may play to a trick led in `led_suit`.
///
/// On lead (`None`) every card is legal. Otherwise the hand must follow suit
/// when it can; a void hand may play anything, with no duty to trump.
pub fn legal_plays(hand: &Hand, led_suit: Option<Suit>) -> Vec<Card> {
    match led_suit {
        Some(led) if hand.has_suit(led) => hand
            .cards
            .iter()
            .copied()
            .filter(|c| c.suit == led)
            .collect(),
        _ => hand.cards.clone(),
    }
}

/// Trick-taking strength of `card` in a trick led in `led`.
///
/// `None` means the card can never win (a discard). Trumps compare above
/// every led-suit card; when trump is the led suit it ranks as the led suit.
pub fn effective_value(card: Card, led: Suit, trump: Option<Suit>) -> Option<(bool, Rank)> {
    if card.suit == led {
        Some((false, card.rank))
    } else if Some(card.suit) == trump {
        Some((true, card.rank))
    } else {
        None
    }
}

/// True if `challenger` would take the trick from `incumbent`.
pub fn card_beats(challenger: Card, incumbent: Card, led: Suit, trump: Option<Suit>) -> bool {
    effective_value(challenger, led, trump) > effective_value(incumbent, led, trump)
}

/// The seat and card currently winning a (possibly partial) trick.
pub fn current_winner(plays: &[(Seat, Card)], trump: Option<Suit>) -> Option<(Seat, Card)> {
    let led = plays.first()?.1.suit;
    plays
        .iter()
        .copied()
        .filter_map(|(seat, card)| effective_value(card, led, trump).map(|v| (v, seat, card)))
        .max_by_key(|&(value, _, _)| value)
        .map(|(_, seat, card)| (seat, card))
}

/// Winner of `trick` under `trump`. `None` only for an empty trick.
pub fn trick_winner(trick: &Trick, trump: Option<Suit>) -> Option<Seat> {
    current_winner(&trick.plays, trump).map(|(seat, _)| seat)
}
