use crate::board::{Partnership, Seat};
use crate::error::ContractParseError;
use crate::strain::Strain;
use crate::suit::Suit;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DoubleStatus {
    #[default]
    Undoubled,
    Doubled,
    Redoubled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    pub level: u8,
    pub strain: Strain,
    pub doubled: DoubleStatus,
    pub declarer: Seat,
}

fn contract_regex() -> &'static Regex {
    static CONTRACT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^(\d)\s*(NT|N|S|H|D|C)\s*(XX|X)?$").unwrap()
    });
    &CONTRACT_REGEX
}

impl Contract {
    pub fn new(level: u8, strain: Strain, declarer: Seat) -> Self {
        Self {
            level,
            strain,
            doubled: DoubleStatus::Undoubled,
            declarer,
        }
    }

    /// Parse a recorded contract such as "4S", "3NT", "3 N", "4 S X" or "6HXX".
    pub fn parse(text: &str, declarer: Seat) -> Result<Self, ContractParseError> {
        let normalized = text.trim().to_ascii_uppercase();
        let caps = contract_regex()
            .captures(&normalized)
            .ok_or_else(|| ContractParseError::Malformed(text.to_string()))?;

        let level: u8 = caps[1]
            .parse()
            .map_err(|_| ContractParseError::Malformed(text.to_string()))?;
        if !(1..=7).contains(&level) {
            return Err(ContractParseError::LevelOutOfRange(level));
        }
        let strain = caps[2]
            .chars()
            .next()
            .and_then(Strain::from_char)
            .ok_or_else(|| ContractParseError::Malformed(text.to_string()))?;
        let doubled = match caps.get(3).map(|m| m.as_str()) {
            Some("XX") => DoubleStatus::Redoubled,
            Some(_) => DoubleStatus::Doubled,
            None => DoubleStatus::Undoubled,
        };

        Ok(Self {
            level,
            strain,
            doubled,
            declarer,
        })
    }

    /// Tricks the declaring side needs: bid level plus book.
    pub fn target(&self) -> u8 {
        self.level + 6
    }

    pub fn trump(&self) -> Option<Suit> {
        self.strain.to_suit()
    }

    pub fn partnership(&self) -> Partnership {
        self.declarer.partnership()
    }

    pub fn dummy(&self) -> Seat {
        self.declarer.partner()
    }

    /// The seat on declarer's left makes the opening lead.
    pub fn opening_leader(&self) -> Seat {
        self.declarer.lho()
    }

    pub fn is_game(&self) -> bool {
        match self.strain {
            Strain::NoTrump => self.level >= 3,
            Strain::Hearts | Strain::Spades => self.level >= 4,
            Strain::Clubs | Strain::Diamonds => self.level >= 5,
        }
    }

    pub fn is_slam(&self) -> bool {
        self.level >= 6
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level, self.strain)?;
        match self.doubled {
            DoubleStatus::Undoubled => {}
            DoubleStatus::Doubled => write!(f, "X")?,
            DoubleStatus::Redoubled => write!(f, "XX")?,
        }
        write!(f, " by {}", self.declarer.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contract() {
        let c = Contract::parse("4S", Seat::South).unwrap();
        assert_eq!(c.level, 4);
        assert_eq!(c.strain, Strain::Spades);
        assert_eq!(c.trump(), Some(Suit::Spades));
        assert_eq!(c.target(), 10);
        assert_eq!(c.doubled, DoubleStatus::Undoubled);

        let c = Contract::parse("3nt", Seat::North).unwrap();
        assert_eq!(c.strain, Strain::NoTrump);
        assert_eq!(c.trump(), None);
        assert_eq!(c.target(), 9);

        let c = Contract::parse("3 N", Seat::North).unwrap();
        assert_eq!(c.strain, Strain::NoTrump);

        let c = Contract::parse("4 S X", Seat::North).unwrap();
        assert_eq!(c.doubled, DoubleStatus::Doubled);

        let c = Contract::parse("6HXX", Seat::North).unwrap();
        assert_eq!(c.doubled, DoubleStatus::Redoubled);
        assert_eq!(c.target(), 12);
    }

    #[test]
    fn test_parse_contract_errors() {
        assert_eq!(
            Contract::parse("8S", Seat::North),
            Err(ContractParseError::LevelOutOfRange(8))
        );
        assert_eq!(
            Contract::parse("0C", Seat::North),
            Err(ContractParseError::LevelOutOfRange(0))
        );
        assert!(matches!(
            Contract::parse("four spades", Seat::North),
            Err(ContractParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_seats_around_declarer() {
        let c = Contract::new(4, Strain::Hearts, Seat::South);
        assert_eq!(c.opening_leader(), Seat::West);
        assert_eq!(c.dummy(), Seat::North);
        assert_eq!(c.partnership(), Partnership::NS);

        let c = Contract::new(2, Strain::Clubs, Seat::West);
        assert_eq!(c.opening_leader(), Seat::North);
    }

    #[test]
    fn test_contract_display() {
        let c = Contract::parse("3NTX", Seat::East).unwrap();
        assert_eq!(c.to_string(), "3NTX by East");
        assert!(c.is_game());
    }
}
