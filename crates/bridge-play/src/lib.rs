//! Card play for a recorded bridge deal: the rules, a heuristic defender and
//! the session state machine that ties them together.

pub mod ai;
pub mod config;
pub mod error;
pub mod pacing;
pub mod record;
pub mod rules;
pub mod session;
pub mod trick;

pub use ai::{choose_card, AiRule, CardPlayer, Decision, HeuristicPlayer, SeatView};
pub use config::{ConfigError, PlayConfig};
pub use error::{PlayError, RecordError, SetupError};
pub use pacing::{Deferred, Ticket};
pub use record::{DealRecord, HoldingRecord};
pub use rules::{card_beats, current_winner, effective_value, legal_plays, trick_winner};
pub use session::{Phase, PlayInput, PlayOutcome, PlayState, Session, SessionView};
pub use trick::Trick;
