use crate::board::Seat;
use crate::card::Card;
use thiserror::Error;

/// A deal that breaks the four-hands-of-thirteen invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("{seat} holds {count} cards, expected 13")]
    WrongCardCount { seat: Seat, count: usize },
    #[error("{card} appears more than once in the deal")]
    DuplicateCard { card: Card },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractParseError {
    #[error("unrecognised contract {0:?}")]
    Malformed(String),
    #[error("contract level {0} is outside 1..=7")]
    LevelOutOfRange(u8),
}
