//! Deferred actions and the generation guard that keeps stale ones out.
//!
//! The engine never sleeps. It hands out a [`Ticket`] for each deferred
//! action (an AI decision, or clearing a finished trick from the table); the
//! presentation layer waits `ticket.delay` however it likes and then hands
//! the ticket back. A ticket issued before a `restart` or `undo` carries an
//! old generation and is refused.

use bridge_core::Seat;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Deferred {
    /// Ask the card player for `Seat`'s card and play it.
    AiPlay(Seat),
    /// Take the completed trick off the table and let the winner lead.
    ClearTrick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub generation: u64,
    pub action: Deferred,
    pub delay: Duration,
}

/// The two single-slot timers a session can have outstanding.
#[derive(Debug, Clone, Default)]
pub(crate) struct Pending {
    generation: u64,
    ai: Option<Ticket>,
    clear: Option<Ticket>,
}

impl Pending {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Invalidate everything outstanding.
    pub fn bump(&mut self) {
        self.generation += 1;
        self.ai = None;
        self.clear = None;
    }

    pub fn ai(&self) -> Option<Ticket> {
        self.ai
    }

    pub fn clear(&self) -> Option<Ticket> {
        self.clear
    }

    pub fn schedule(&mut self, action: Deferred, delay: Duration) -> Ticket {
        let ticket = Ticket {
            generation: self.generation,
            action,
            delay,
        };
        match action {
            Deferred::AiPlay(_) => self.ai = Some(ticket),
            Deferred::ClearTrick => self.clear = Some(ticket),
        }
        ticket
    }

    /// Take the slot `ticket` was issued for, if `ticket` is still the live one.
    pub fn redeem(&mut self, ticket: Ticket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        let slot = match ticket.action {
            Deferred::AiPlay(_) => &mut self.ai,
            Deferred::ClearTrick => &mut self.clear,
        };
        if *slot == Some(ticket) {
            *slot = None;
            true
        } else {
            false
        }
    }
}
