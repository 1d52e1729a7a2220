use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Denomination of a contract: a trump suit or no-trump. Suit strains share
/// their discriminant with [`Suit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strain {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Strain {
    /// Bidding order, lowest first.
    pub const ALL: [Strain; 5] = [
        Strain::Clubs,
        Strain::Diamonds,
        Strain::Hearts,
        Strain::Spades,
        Strain::NoTrump,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn from_suit(suit: Suit) -> Self {
        Strain::ALL[suit as usize]
    }

    /// The trump suit, `None` at no-trump.
    pub fn to_suit(self) -> Option<Suit> {
        Suit::ALL.get(self.idx()).copied()
    }

    pub fn to_char(self) -> char {
        self.to_suit().map_or('N', Suit::to_char)
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Strain::NoTrump),
            other => Suit::from_char(other).map(Strain::from_suit),
        }
    }

    /// Points per odd trick. No-trump's first trick is worth 40, which the
    /// scorer adds separately.
    pub fn trick_value(self) -> i32 {
        match self.to_suit() {
            Some(suit) if suit.is_minor() => 20,
            _ => 30,
        }
    }

    pub fn symbol(self) -> &'static str {
        self.to_suit().map_or("NT", Suit::symbol)
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_suit() {
            Some(suit) => write!(f, "{}", suit.to_char()),
            None => write!(f, "NT"),
        }
    }
}
