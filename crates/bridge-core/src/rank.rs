use serde::{Deserialize, Serialize};
use std::fmt;

/// Card rank. Discriminants are the pip values, so the derived order is the
/// trick-taking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

impl Rank {
    /// Low to high.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    fn offset(self) -> usize {
        self as usize - 2
    }

    pub fn to_char(self) -> char {
        RANK_CHARS[self.offset()]
    }

    /// `T` and `0` both read as the ten, so "10" works once the `1` is
    /// dropped by the caller.
    pub fn from_char(c: char) -> Option<Self> {
        let c = match c.to_ascii_uppercase() {
            '0' => 'T',
            other => other,
        };
        RANK_CHARS
            .iter()
            .position(|&r| r == c)
            .map(|i| Rank::ALL[i])
    }

    /// Milton Work count: A=4, K=3, Q=2, J=1.
    pub fn hcp(self) -> u8 {
        self.offset().saturating_sub(Rank::Ten.offset()) as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
