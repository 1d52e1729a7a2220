use crate::rank::Rank;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single playing card. Identity is the `(suit, rank)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Every card of the pack, clubs first, each suit in ascending rank.
    pub fn full_deck() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.to_char(), self.rank.to_char())
    }
}

impl FromStr for Card {
    type Err = ();

    /// Accepts suit-first ("SA", "H10") or rank-first ("AS", "10H").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '1')
            .collect();
        let [a, b] = chars.as_slice() else {
            return Err(());
        };
        if let (Some(suit), Some(rank)) = (Suit::from_char(*a), Rank::from_char(*b)) {
            return Ok(Card::new(suit, rank));
        }
        if let (Some(rank), Some(suit)) = (Rank::from_char(*a), Suit::from_char(*b)) {
            return Ok(Card::new(suit, rank));
        }
        Err(())
    }
}
