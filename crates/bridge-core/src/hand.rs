use crate::card::Card;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};

/// The cards currently held by one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Build a hand from four per-suit holdings ("AKT63", "Q8", "", "K62").
    pub fn from_holdings(spades: &str, hearts: &str, diamonds: &str, clubs: &str) -> Self {
        crate::io::hand_parser::parse_hand(spades, hearts, diamonds, clubs)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove `card`, returning whether it was held.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn hcp(&self) -> u8 {
        self.cards.iter().map(|c| c.rank.hcp()).sum()
    }

    pub fn length(&self, suit: Suit) -> u8 {
        self.cards.iter().filter(|c| c.suit == suit).count() as u8
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit == suit)
    }

    /// Cards held in `suit`, highest first.
    pub fn cards_in(&self, suit: Suit) -> Vec<Card> {
        let mut cards: Vec<Card> = self.cards.iter().copied().filter(|c| c.suit == suit).collect();
        cards.sort_by(|a, b| b.rank.cmp(&a.rank));
        cards
    }

    /// Ranks held in `suit` as a display string, e.g. "AKT63". Empty for a void.
    pub fn holding(&self, suit: Suit) -> String {
        self.cards_in(suit).iter().map(|c| c.rank.to_char()).collect()
    }

    /// Suit lengths in spades, hearts, diamonds, clubs order.
    pub fn distribution(&self) -> [u8; 4] {
        [
            self.length(Suit::Spades),
            self.length(Suit::Hearts),
            self.length(Suit::Diamonds),
            self.length(Suit::Clubs),
        ]
    }

    pub fn sort(&mut self) {
        self.cards.sort_by(|a, b| {
            if a.suit != b.suit {
                // Reverse suit order: S, H, D, C
                b.suit.cmp(&a.suit)
            } else {
                b.rank.cmp(&a.rank)
            }
        });
    }

    pub fn lowest_in(&self, suit: Suit) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| c.suit == suit)
            .min_by_key(|c| c.rank)
    }
}
