pub mod suit;
pub mod rank;
pub mod strain;
pub mod card;
pub mod hand;
pub mod board;
pub mod call;
pub mod auction;
pub mod contract;
pub mod score;
pub mod error;
pub mod io;

pub use suit::{Suit, SuitColor};
pub use rank::Rank;
pub use strain::Strain;
pub use card::Card;
pub use hand::Hand;
pub use board::{Board, Partnership, Seat, Vulnerability};
pub use call::Call;
pub use auction::Auction;
pub use contract::{Contract, DoubleStatus};
pub use score::ContractResult;
pub use error::{ContractParseError, DealError};
pub use io::hand_parser::parse_hand;
