use crate::rules::trick_winner;
use bridge_core::{Card, Seat, Suit};
use serde::{Deserialize, Serialize};

/// Cards played to one trick, in playing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Trick {
    pub plays: Vec<(Seat, Card)>,
}

impl Trick {
    pub fn new() -> Self {
        Self {
            plays: Vec::with_capacity(4),
        }
    }

    pub fn from_plays(plays: Vec<(Seat, Card)>) -> Self {
        Self { plays }
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    pub fn leader(&self) -> Option<Seat> {
        self.plays.first().map(|&(seat, _)| seat)
    }

    /// Suit of the first card played, if any.
    pub fn led_suit(&self) -> Option<Suit> {
        self.plays.first().map(|(_, card)| card.suit)
    }

    /// Seat after the last one to play. `None` before the lead and once full.
    pub fn next_to_play(&self) -> Option<Seat> {
        match self.plays.last() {
            Some(&(seat, _)) if !self.is_complete() => Some(seat.next()),
            _ => None,
        }
    }

    pub fn winner(&self, trump: Option<Suit>) -> Option<Seat> {
        trick_winner(self, trump)
    }

    pub fn push(&mut self, seat: Seat, card: Card) {
        self.plays.push((seat, card));
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.plays.iter().map(|&(_, card)| card)
    }

    pub fn card_of(&self, seat: Seat) -> Option<Card> {
        self.plays
            .iter()
            .find(|&&(s, _)| s == seat)
            .map(|&(_, card)| card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::Rank;

    #[test]
    fn test_trick_accessors() {
        let mut trick = Trick::new();
        assert_eq!(trick.led_suit(), None);
        assert_eq!(trick.leader(), None);

        trick.push(Seat::West, Card::new(Suit::Hearts, Rank::Four));
        trick.push(Seat::North, Card::new(Suit::Clubs, Rank::Ace));
        assert_eq!(trick.led_suit(), Some(Suit::Hearts));
        assert_eq!(trick.leader(), Some(Seat::West));
        assert_eq!(trick.card_of(Seat::North), Some(Card::new(Suit::Clubs, Rank::Ace)));
        assert_eq!(trick.card_of(Seat::East), None);
        assert!(!trick.is_complete());
        assert_eq!(trick.next_to_play(), Some(Seat::East));

        trick.push(Seat::East, Card::new(Suit::Hearts, Rank::King));
        trick.push(Seat::South, Card::new(Suit::Hearts, Rank::Two));
        assert!(trick.is_complete());
        assert_eq!(trick.next_to_play(), None);
        assert_eq!(trick.winner(None), Some(Seat::East));
        assert_eq!(trick.winner(Some(Suit::Clubs)), Some(Seat::North));
    }
}
