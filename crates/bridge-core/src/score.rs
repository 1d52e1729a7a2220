//! Outcome of a played contract and its duplicate score.

use crate::contract::{Contract, DoubleStatus};
use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractResult {
    Made { overtricks: u8 },
    Down { undertricks: u8 },
}

impl ContractResult {
    pub fn from_tricks(contract: &Contract, declarer_tricks: u8) -> Self {
        let target = contract.target();
        if declarer_tricks >= target {
            ContractResult::Made {
                overtricks: declarer_tricks - target,
            }
        } else {
            ContractResult::Down {
                undertricks: target - declarer_tricks,
            }
        }
    }

    pub fn is_made(self) -> bool {
        matches!(self, ContractResult::Made { .. })
    }

    /// Duplicate score from the declaring side's point of view.
    pub fn score(self, contract: &Contract, vulnerable: bool) -> i32 {
        match self {
            ContractResult::Made { overtricks } => {
                making_score(contract, overtricks as i32, vulnerable)
            }
            ContractResult::Down { undertricks } => {
                -undertrick_penalty(contract.doubled, undertricks as i32, vulnerable)
            }
        }
    }
}

impl fmt::Display for ContractResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractResult::Made { overtricks: 0 } => write!(f, "="),
            ContractResult::Made { overtricks } => write!(f, "+{overtricks}"),
            ContractResult::Down { undertricks } => write!(f, "down {undertricks}"),
        }
    }
}

fn double_factor(doubled: DoubleStatus) -> i32 {
    match doubled {
        DoubleStatus::Undoubled => 1,
        DoubleStatus::Doubled => 2,
        DoubleStatus::Redoubled => 4,
    }
}

fn making_score(contract: &Contract, overtricks: i32, vulnerable: bool) -> i32 {
    let level = contract.level as i32;
    let base = match contract.strain {
        Strain::NoTrump => 40 + (level - 1) * 30,
        strain => level * strain.trick_value(),
    };
    let trick_score = base * double_factor(contract.doubled);

    let game_bonus = match (trick_score >= 100, vulnerable) {
        (true, true) => 500,
        (true, false) => 300,
        (false, _) => 50,
    };

    let slam_bonus = match (contract.level, vulnerable) {
        (6, false) => 500,
        (6, true) => 750,
        (7, false) => 1000,
        (7, true) => 1500,
        _ => 0,
    };

    let overtrick_value = match (contract.doubled, vulnerable) {
        (DoubleStatus::Undoubled, _) => contract.strain.trick_value(),
        (DoubleStatus::Doubled, false) => 100,
        (DoubleStatus::Doubled, true) => 200,
        (DoubleStatus::Redoubled, false) => 200,
        (DoubleStatus::Redoubled, true) => 400,
    };

    let insult = match contract.doubled {
        DoubleStatus::Undoubled => 0,
        DoubleStatus::Doubled => 50,
        DoubleStatus::Redoubled => 100,
    };

    trick_score + game_bonus + slam_bonus + overtricks * overtrick_value + insult
}

fn undertrick_penalty(doubled: DoubleStatus, undertricks: i32, vulnerable: bool) -> i32 {
    let doubled_penalty = |n: i32| -> i32 {
        if vulnerable {
            200 + (n - 1) * 300
        } else {
            match n {
                1 => 100,
                2 => 300,
                3 => 500,
                n => 500 + (n - 3) * 300,
            }
        }
    };
    match doubled {
        DoubleStatus::Undoubled => undertricks * if vulnerable { 100 } else { 50 },
        DoubleStatus::Doubled => doubled_penalty(undertricks),
        DoubleStatus::Redoubled => doubled_penalty(undertricks) * 2,
    }
}
