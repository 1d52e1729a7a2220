use crate::board::Seat;
use crate::call::Call;
use crate::contract::{Contract, DoubleStatus};
use serde::{Deserialize, Serialize};

/// A recorded auction. Kept for display; it never affects play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Auction {
    pub dealer: Seat,
    pub calls: Vec<Call>,
}

impl Auction {
    pub fn new(dealer: Seat) -> Self {
        Self {
            dealer,
            calls: Vec::new(),
        }
    }

    /// Parse space- or comma-separated calls like "1S P 2S P P P".
    /// Returns `None` if any token is not a call.
    pub fn parse(dealer: Seat, calls: &str) -> Option<Self> {
        let mut auction = Self::new(dealer);
        for token in calls.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            auction.add_call(token.parse().ok()?);
        }
        Some(auction)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Seat, Call)> + '_ {
        let mut seat = self.dealer;
        self.calls.iter().map(move |&call| {
            let caller = seat;
            seat = seat.next();
            (caller, call)
        })
    }

    pub fn add_call(&mut self, call: Call) {
        self.calls.push(call);
    }

    pub fn is_finished(&self) -> bool {
        if self.calls.len() < 4 {
            return false;
        }
        let last_three = &self.calls[self.calls.len() - 3..];
        last_three.iter().all(|c| matches!(c, Call::Pass))
    }

    /// The contract the auction arrives at. Declarer is the first player of
    /// the winning side to have named the final strain.
    pub fn final_contract(&self) -> Option<Contract> {
        let mut last_bid = None;
        let mut doubled = DoubleStatus::Undoubled;
        // [side][strain] -> first player of that side to bid the strain
        let mut first_bidders = [[None; 5]; 2];

        for (seat, call) in self.iter() {
            match call {
                Call::Bid { level, strain } => {
                    let side = seat.partnership().idx();
                    let first = *first_bidders[side][strain.idx()].get_or_insert(seat);
                    last_bid = Some((level, strain, first));
                    doubled = DoubleStatus::Undoubled;
                }
                Call::Double => doubled = DoubleStatus::Doubled,
                Call::Redouble => doubled = DoubleStatus::Redoubled,
                Call::Pass => {}
            }
        }

        last_bid.map(|(level, strain, declarer)| Contract {
            level,
            strain,
            doubled,
            declarer,
        })
    }
}
