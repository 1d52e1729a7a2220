use bridge_core::{Card, ContractParseError, DealError, Seat, Suit};
use thiserror::Error;

/// Why a play was refused. A refused play never changes the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("the hand is over")]
    GameOver,
    #[error("the last trick is still being gathered")]
    TrickSettling,
    #[error("it is {}'s turn, not {}'s", .expected.name(), .attempted.name())]
    NotYourTurn { expected: Seat, attempted: Seat },
    #[error("{} is played by the computer", .0.name())]
    NotHumanSeat(Seat),
    #[error("{} does not hold {card}", .seat.name())]
    CardNotHeld { seat: Seat, card: Card },
    #[error("{} must follow to the {led} lead", .seat.name())]
    MustFollowSuit { seat: Seat, led: Suit },
    #[error("{} must open with the recorded lead {expected}", .seat.name())]
    NotRecordedLead { seat: Seat, expected: Card },
}

/// Construction input that cannot start a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error("recorded opening lead {card} is not in {}'s hand", .leader.name())]
    OpeningLeadNotHeld { card: Card, leader: Seat },
}

/// A deal record that cannot be turned into session input.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read deal file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid deal file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{field}: unrecognised seat {value:?}")]
    Seat { field: &'static str, value: String },
    #[error("unrecognised opening lead {0:?}")]
    OpeningLead(String),
    #[error("unrecognised call in auction {0:?}")]
    Auction(String),
    #[error(transparent)]
    Contract(#[from] ContractParseError),
    #[error("record has neither a contract nor an auction that reaches one")]
    NoContract,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_spell_out_seats() {
        let err = PlayError::NotYourTurn {
            expected: Seat::North,
            attempted: Seat::South,
        };
        assert_eq!(err.to_string(), "it is North's turn, not South's");
        assert_eq!(
            PlayError::NotHumanSeat(Seat::East).to_string(),
            "East is played by the computer"
        );
        let card: Card = "HT".parse().unwrap();
        assert_eq!(
            PlayError::NotRecordedLead { seat: Seat::West, expected: card }.to_string(),
            "West must open with the recorded lead HT"
        );
    }
}
