//! Typed deal records as stored alongside an article, and their conversion
//! into session input.

use crate::error::RecordError;
use crate::session::PlayInput;
use bridge_core::{parse_hand, Auction, Board, Card, Contract, Hand, Seat, Vulnerability};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One seat's cards, one rank string per suit. Missing suits are voids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HoldingRecord {
    pub spades: String,
    pub hearts: String,
    pub diamonds: String,
    pub clubs: String,
}

impl HoldingRecord {
    pub fn to_hand(&self) -> Hand {
        let mut hand = parse_hand(&self.spades, &self.hearts, &self.diamonds, &self.clubs);
        hand.sort();
        hand
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dealer: Option<String>,
    #[serde(default)]
    pub vulnerability: Vulnerability,
    pub north: HoldingRecord,
    pub east: HoldingRecord,
    pub south: HoldingRecord,
    pub west: HoldingRecord,
    /// e.g. "4S", "3NT", "5DX". Falls back to the auction's final contract.
    #[serde(default)]
    pub contract: Option<String>,
    #[serde(default)]
    pub declarer: Option<String>,
    #[serde(default)]
    pub opening_lead: Option<String>,
    /// Space- or comma-separated calls starting with the dealer.
    #[serde(default)]
    pub auction: Option<String>,
}

fn parse_seat(field: &'static str, value: &str) -> Result<Seat, RecordError> {
    value
        .trim()
        .chars()
        .next()
        .and_then(Seat::from_char)
        .ok_or_else(|| RecordError::Seat {
            field,
            value: value.to_string(),
        })
}

impl DealRecord {
    pub fn from_yaml_str(yaml: &str) -> Result<Vec<DealRecord>, RecordError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load_all(path: &Path) -> Result<Vec<DealRecord>, RecordError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn title(&self) -> String {
        self.name.clone().unwrap_or_else(|| "Untitled deal".to_string())
    }

    /// Convert to typed session input. Card counts are checked later, when
    /// the session is built.
    pub fn to_input(&self) -> Result<PlayInput, RecordError> {
        let dealer = match &self.dealer {
            Some(d) => parse_seat("dealer", d)?,
            None => Seat::North,
        };

        let auction = self
            .auction
            .as_deref()
            .map(|calls| {
                Auction::parse(dealer, calls).ok_or_else(|| RecordError::Auction(calls.to_string()))
            })
            .transpose()?;
        let auctioned = auction.as_ref().and_then(Auction::final_contract);

        let contract = match (&self.contract, auctioned) {
            (Some(text), auctioned) => {
                let declarer = match &self.declarer {
                    Some(d) => parse_seat("declarer", d)?,
                    None => auctioned.map(|c| c.declarer).ok_or(RecordError::NoContract)?,
                };
                Contract::parse(text, declarer)?
            }
            (None, Some(contract)) => contract,
            (None, None) => return Err(RecordError::NoContract),
        };

        let opening_lead = self
            .opening_lead
            .as_deref()
            .map(|lead| {
                lead.parse::<Card>()
                    .map_err(|_| RecordError::OpeningLead(lead.to_string()))
            })
            .transpose()?;

        let board = Board::new(
            dealer,
            self.vulnerability,
            [
                self.north.to_hand(),
                self.east.to_hand(),
                self.south.to_hand(),
                self.west.to_hand(),
            ],
        );

        Ok(PlayInput {
            board,
            contract,
            opening_lead,
            auction,
        })
    }
}
