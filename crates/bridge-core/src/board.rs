use crate::card::Card;
use crate::error::DealError;
use crate::hand::Hand;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One of the four compass positions, in clockwise playing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Seat {
    #[default]
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partnership {
    NS,
    EW,
}

impl Partnership {
    pub fn contains(self, seat: Seat) -> bool {
        seat.partnership() == self
    }

    pub fn idx(self) -> usize {
        match self {
            Partnership::NS => 0,
            Partnership::EW => 1,
        }
    }

    pub fn opponents(self) -> Self {
        match self {
            Partnership::NS => Partnership::EW,
            Partnership::EW => Partnership::NS,
        }
    }

    pub fn seats(self) -> [Seat; 2] {
        match self {
            Partnership::NS => [Seat::North, Seat::South],
            Partnership::EW => [Seat::East, Seat::West],
        }
    }
}

impl fmt::Display for Partnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partnership::NS => write!(f, "North-South"),
            Partnership::EW => write!(f, "East-West"),
        }
    }
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub fn partnership(self) -> Partnership {
        match self {
            Seat::North | Seat::South => Partnership::NS,
            Seat::East | Seat::West => Partnership::EW,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Seat::North => Seat::East,
            Seat::East => Seat::South,
            Seat::South => Seat::West,
            Seat::West => Seat::North,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Seat::North => 0,
            Seat::East => 1,
            Seat::South => 2,
            Seat::West => 3,
        }
    }

    pub fn partner(self) -> Self {
        match self {
            Seat::North => Seat::South,
            Seat::South => Seat::North,
            Seat::East => Seat::West,
            Seat::West => Seat::East,
        }
    }

    /// Left-hand opponent (next in clockwise order).
    pub fn lho(self) -> Self {
        self.next()
    }

    /// Right-hand opponent (previous in clockwise order).
    pub fn rho(self) -> Self {
        self.partner().next()
    }

    pub fn to_char(self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Seat::North),
            'E' => Some(Seat::East),
            'S' => Some(Seat::South),
            'W' => Some(Seat::West),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Vulnerability {
    #[default]
    None,
    NS,
    EW,
    Both,
}

impl Vulnerability {
    pub fn is_vulnerable(self, seat: Seat) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::NS => seat.partnership() == Partnership::NS,
            Vulnerability::EW => seat.partnership() == Partnership::EW,
            Vulnerability::Both => true,
        }
    }
}

/// A recorded deal: four hands plus the board's dealer and vulnerability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub dealer: Seat,
    pub vulnerability: Vulnerability,
    /// Indexed by `Seat::idx`.
    pub hands: [Hand; 4],
}

impl Board {
    pub fn new(dealer: Seat, vulnerability: Vulnerability, hands: [Hand; 4]) -> Self {
        Self {
            dealer,
            vulnerability,
            hands,
        }
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.idx()]
    }

    /// Check that every seat holds 13 cards and no card is dealt twice.
    /// Together these make the 52 cards exhaustive.
    pub fn validate(&self) -> Result<(), DealError> {
        let mut seen: HashSet<Card> = HashSet::with_capacity(52);
        for seat in Seat::ALL {
            let hand = self.hand(seat);
            if hand.len() != 13 {
                return Err(DealError::WrongCardCount {
                    seat,
                    count: hand.len(),
                });
            }
            for &card in &hand.cards {
                if !seen.insert(card) {
                    return Err(DealError::DuplicateCard { card });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Rank;
    use crate::suit::Suit;

    fn suit_per_seat() -> [Hand; 4] {
        [
            Hand::from_holdings("AKQJT98765432", "", "", ""),
            Hand::from_holdings("", "AKQJT98765432", "", ""),
            Hand::from_holdings("", "", "AKQJT98765432", ""),
            Hand::from_holdings("", "", "", "AKQJT98765432"),
        ]
    }

    #[test]
    fn test_seat_rotation() {
        assert_eq!(Seat::North.next(), Seat::East);
        assert_eq!(Seat::West.next(), Seat::North);
        assert_eq!(Seat::South.lho(), Seat::West);
        assert_eq!(Seat::South.rho(), Seat::East);
        assert_eq!(Seat::East.partner(), Seat::West);
    }

    #[test]
    fn test_seat_char() {
        assert_eq!(Seat::North.to_char(), 'N');
        assert_eq!(Seat::from_char('w'), Some(Seat::West));
        assert_eq!(Seat::from_char('X'), None);
    }

    #[test]
    fn test_partnership() {
        assert_eq!(Seat::North.partnership(), Partnership::NS);
        assert_eq!(Seat::West.partnership(), Partnership::EW);
        assert!(Partnership::NS.contains(Seat::South));
        assert!(!Partnership::NS.contains(Seat::East));
        assert_eq!(Partnership::EW.opponents(), Partnership::NS);
        assert_eq!(Partnership::EW.seats(), [Seat::East, Seat::West]);
    }

    #[test]
    fn test_vulnerability() {
        assert!(Vulnerability::NS.is_vulnerable(Seat::North));
        assert!(!Vulnerability::NS.is_vulnerable(Seat::East));
        assert!(Vulnerability::Both.is_vulnerable(Seat::West));
        assert!(!Vulnerability::None.is_vulnerable(Seat::South));
    }

    #[test]
    fn test_validate_accepts_full_deal() {
        let board = Board::new(Seat::North, Vulnerability::None, suit_per_seat());
        assert_eq!(board.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_short_hand() {
        let mut hands = suit_per_seat();
        hands[1].remove(Card::new(Suit::Hearts, Rank::Two));
        let board = Board::new(Seat::North, Vulnerability::None, hands);
        assert_eq!(
            board.validate(),
            Err(DealError::WrongCardCount {
                seat: Seat::East,
                count: 12
            })
        );
    }

    #[test]
    fn test_validate_rejects_duplicate() {
        let mut hands = suit_per_seat();
        hands[1].remove(Card::new(Suit::Hearts, Rank::Two));
        hands[1].cards.push(Card::new(Suit::Spades, Rank::Ace));
        let board = Board::new(Seat::North, Vulnerability::None, hands);
        assert_eq!(
            board.validate(),
            Err(DealError::DuplicateCard {
                card: Card::new(Suit::Spades, Rank::Ace)
            })
        );
    }
}
