//! The per-deal play state machine.
//!
//! A [`Session`] owns everything about one deal in progress. It is mutated
//! only through [`Session::play`], [`Session::fire`], [`Session::undo`] and
//! [`Session::restart`]. Timed actions (AI thinking, a finished trick
//! lingering on the table) come back in as [`Ticket`]s; see [`crate::pacing`].

use crate::ai::{CardPlayer, HeuristicPlayer, SeatView};
use crate::config::PlayConfig;
use crate::error::{PlayError, SetupError};
use crate::pacing::{Deferred, Pending, Ticket};
use crate::rules::legal_plays;
use crate::trick::Trick;
use bridge_core::{Auction, Board, Card, Contract, ContractResult, Hand, Partnership, Seat};
use serde::Serialize;
use tracing::{debug, info, warn};

const TRICKS_PER_DEAL: usize = 13;

/// Everything needed to start (and restart) a deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayInput {
    pub board: Board,
    pub contract: Contract,
    /// The lead actually made at the table, if recorded. The opening leader
    /// must play it, whether computer or human.
    pub opening_lead: Option<Card>,
    /// Display only. Never consulted during play.
    pub auction: Option<Auction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    AwaitingPlay(Seat),
    /// The fourth card is down and counted; the trick is still on show.
    TrickSettling { winner: Seat },
    GameOver,
}

/// The part of a session that undo snapshots and restores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayState {
    /// Remaining cards, indexed by `Seat::idx`.
    pub hands: [Hand; 4],
    pub trick: Trick,
    /// Completed tricks in order.
    pub history: Vec<Trick>,
    pub phase: Phase,
    /// Indexed by `Partnership::idx`.
    pub tricks_won: [u8; 2],
    pub status: String,
}

impl PlayState {
    fn initial(input: &PlayInput) -> Self {
        let leader = input.contract.opening_leader();
        Self {
            hands: input.board.hands.clone(),
            trick: Trick::new(),
            history: Vec::with_capacity(TRICKS_PER_DEAL),
            phase: Phase::AwaitingPlay(leader),
            tricks_won: [0; 2],
            status: format!("{} to lead", leader.name()),
        }
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.idx()]
    }

    pub fn tricks_played(&self) -> usize {
        self.history.len()
    }

    pub fn tricks_won_by(&self, side: Partnership) -> u8 {
        self.tricks_won[side.idx()]
    }

    pub fn last_trick(&self) -> Option<&Trick> {
        self.history.last()
    }

    pub fn to_act(&self) -> Option<Seat> {
        match self.phase {
            Phase::AwaitingPlay(seat) => Some(seat),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

/// What an accepted play led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayOutcome {
    /// The trick continues with `next`.
    Played { next: Seat },
    /// The trick is complete. Hand `ticket` back to [`Session::fire`] to
    /// clear it and let `winner` lead.
    TrickWon { winner: Seat, ticket: Ticket },
    /// That was the thirteenth trick.
    HandOver { result: ContractResult },
}

/// Read-only snapshot for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub contract: Contract,
    pub auction: Option<Auction>,
    pub hands: [Hand; 4],
    pub human_seats: Vec<Seat>,
    pub trick: Trick,
    pub last_trick: Option<Trick>,
    pub phase: Phase,
    pub to_act: Option<Seat>,
    /// Legal cards for the seat to act, when that seat is human.
    pub legal: Vec<Card>,
    pub declarer_tricks: u8,
    pub defender_tricks: u8,
    pub tricks_played: usize,
    pub game_over: bool,
    pub can_undo: bool,
    pub status: String,
}

pub struct Session {
    input: PlayInput,
    config: PlayConfig,
    human: [bool; 4],
    player: Box<dyn CardPlayer>,
    state: PlayState,
    undo_stack: Vec<PlayState>,
    pending: Pending,
}

impl Session {
    /// Start a deal. The deal must be a full 52 cards and a recorded opening
    /// lead must be held by the opening leader.
    pub fn new(input: PlayInput, config: PlayConfig) -> Result<Self, SetupError> {
        input.board.validate()?;
        let leader = input.contract.opening_leader();
        if let Some(card) = input.opening_lead {
            if !input.board.hand(leader).contains(card) {
                return Err(SetupError::OpeningLeadNotHeld { card, leader });
            }
        }

        let mut human = [false; 4];
        match &config.human_seats {
            Some(seats) => seats.iter().for_each(|seat| human[seat.idx()] = true),
            None => input
                .contract
                .partnership()
                .seats()
                .iter()
                .for_each(|seat| human[seat.idx()] = true),
        }

        info!(contract = %input.contract, leader = %leader, "starting deal");
        Ok(Self {
            state: PlayState::initial(&input),
            input,
            config,
            human,
            player: Box::new(HeuristicPlayer),
            undo_stack: Vec::new(),
            pending: Pending::default(),
        })
    }

    /// Replace the heuristic with another card player.
    pub fn with_player(mut self, player: impl CardPlayer + 'static) -> Self {
        self.player = Box::new(player);
        self
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn contract(&self) -> &Contract {
        &self.input.contract
    }

    pub fn input(&self) -> &PlayInput {
        &self.input
    }

    pub fn config(&self) -> &PlayConfig {
        &self.config
    }

    pub fn is_human(&self, seat: Seat) -> bool {
        self.human[seat.idx()]
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn history(&self) -> &[Trick] {
        &self.state.history
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() && self.pending.ai().is_none()
    }

    pub fn ai_pending(&self) -> bool {
        self.pending.ai().is_some()
    }

    /// Current pacing generation. Tickets from older generations are dead.
    pub fn generation(&self) -> u64 {
        self.pending.generation()
    }

    fn declaring_side(&self) -> Partnership {
        self.input.contract.partnership()
    }

    /// Cards `seat` may play right now. Empty unless it is `seat`'s turn.
    pub fn legal_plays_for(&self, seat: Seat) -> Vec<Card> {
        match self.state.phase {
            Phase::AwaitingPlay(to_act) if to_act == seat => match self.recorded_lead(seat) {
                Some(lead) => vec![lead],
                None => legal_plays(self.state.hand(seat), self.state.trick.led_suit()),
            },
            _ => Vec::new(),
        }
    }

    /// Final outcome, once all thirteen tricks are played.
    pub fn result(&self) -> Option<ContractResult> {
        self.is_over().then(|| {
            ContractResult::from_tricks(
                &self.input.contract,
                self.state.tricks_won_by(self.declaring_side()),
            )
        })
    }

    /// Duplicate score for the declaring side, once the hand is over.
    pub fn score(&self) -> Option<i32> {
        let contract = &self.input.contract;
        let vulnerable = self
            .input
            .board
            .vulnerability
            .is_vulnerable(contract.declarer);
        self.result().map(|result| result.score(contract, vulnerable))
    }

    pub fn view(&self) -> SessionView {
        let side = self.declaring_side();
        let to_act = self.state.to_act();
        let legal = match to_act {
            Some(seat) if self.is_human(seat) => self.legal_plays_for(seat),
            _ => Vec::new(),
        };
        SessionView {
            contract: self.input.contract,
            auction: self.input.auction.clone(),
            hands: self.state.hands.clone(),
            human_seats: Seat::ALL.into_iter().filter(|&s| self.is_human(s)).collect(),
            trick: self.state.trick.clone(),
            last_trick: self.state.last_trick().cloned(),
            phase: self.state.phase,
            to_act,
            legal,
            declarer_tricks: self.state.tricks_won_by(side),
            defender_tricks: self.state.tricks_won_by(side.opponents()),
            tricks_played: self.state.tricks_played(),
            game_over: self.is_over(),
            can_undo: self.can_undo(),
            status: self.state.status.clone(),
        }
    }

    fn check_play(&self, seat: Seat, card: Card) -> Result<(), PlayError> {
        let expected = match self.state.phase {
            Phase::GameOver => return Err(PlayError::GameOver),
            Phase::TrickSettling { .. } => return Err(PlayError::TrickSettling),
            Phase::AwaitingPlay(expected) => expected,
        };
        if seat != expected {
            return Err(PlayError::NotYourTurn {
                expected,
                attempted: seat,
            });
        }
        let hand = self.state.hand(seat);
        if !hand.contains(card) {
            return Err(PlayError::CardNotHeld { seat, card });
        }
        if let Some(expected) = self.recorded_lead(seat).filter(|&lead| lead != card) {
            return Err(PlayError::NotRecordedLead { seat, expected });
        }
        match self.state.trick.led_suit() {
            Some(led) if card.suit != led && hand.has_suit(led) => {
                Err(PlayError::MustFollowSuit { seat, led })
            }
            _ => Ok(()),
        }
    }

    /// A human play. Refused plays change nothing.
    pub fn play(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, PlayError> {
        let checked = self.check_play(seat, card).and_then(|()| {
            if self.is_human(seat) {
                Ok(())
            } else {
                Err(PlayError::NotHumanSeat(seat))
            }
        });
        if let Err(err) = checked {
            debug!(seat = %seat, card = %card, error = %err, "play refused");
            return Err(err);
        }

        self.undo_stack.push(self.state.clone());
        Ok(self.apply(seat, card))
    }

    fn apply(&mut self, seat: Seat, card: Card) -> PlayOutcome {
        let state = &mut self.state;
        state.hands[seat.idx()].remove(card);
        state.trick.push(seat, card);
        debug!(seat = %seat, card = %card, "card played");

        if !state.trick.is_complete() {
            let next = seat.next();
            state.phase = Phase::AwaitingPlay(next);
            state.status = format!("{} to play", next.name());
            return PlayOutcome::Played { next };
        }

        let trick = std::mem::take(&mut state.trick);
        let winner = trick.winner(self.input.contract.trump()).unwrap_or(seat);
        state.tricks_won[winner.partnership().idx()] += 1;
        state.history.push(trick);
        info!(
            winner = %winner,
            trick = state.history.len(),
            ns = state.tricks_won[Partnership::NS.idx()],
            ew = state.tricks_won[Partnership::EW.idx()],
            "trick complete"
        );

        if state.history.len() == TRICKS_PER_DEAL {
            let result = self.finish();
            return PlayOutcome::HandOver { result };
        }

        state.phase = Phase::TrickSettling { winner };
        state.status = format!("{} wins the trick", winner.name());
        let ticket = self
            .pending
            .schedule(Deferred::ClearTrick, self.config.trick_clear_delay());
        PlayOutcome::TrickWon { winner, ticket }
    }

    fn finish(&mut self) -> ContractResult {
        let contract = self.input.contract;
        let side = contract.partnership();
        let taken = self.state.tricks_won_by(side);
        let result = ContractResult::from_tricks(&contract, taken);
        let vulnerable = self
            .input
            .board
            .vulnerability
            .is_vulnerable(contract.declarer);
        let score = result.score(&contract, vulnerable);

        self.state.phase = Phase::GameOver;
        self.state.status = format!("{contract} {result} ({taken} tricks): {side} {score:+}");
        info!(contract = %contract, result = %result, score, "hand over");
        result
    }

    /// Schedule a decision for the seat to act if it is computer-controlled
    /// and nothing is already pending for it.
    pub fn maybe_trigger_ai(&mut self) -> Option<Ticket> {
        let seat = self.state.to_act()?;
        if self.is_human(seat) || self.pending.ai().is_some() {
            return None;
        }
        let ticket = self
            .pending
            .schedule(Deferred::AiPlay(seat), self.config.ai_delay());
        debug!(seat = %seat, generation = ticket.generation, "ai decision scheduled");
        Some(ticket)
    }

    /// The action the presentation layer should wait on next, if any.
    pub fn next_ticket(&mut self) -> Option<Ticket> {
        self.pending
            .clear()
            .or_else(|| self.pending.ai())
            .or_else(|| self.maybe_trigger_ai())
    }

    /// Carry out a deferred action. Returns false, changing nothing, for a
    /// ticket that is stale or already used.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if !self.pending.redeem(ticket) {
            debug!(
                ticket = ticket.generation,
                current = self.pending.generation(),
                action = ?ticket.action,
                "discarding stale ticket"
            );
            return false;
        }

        match ticket.action {
            Deferred::ClearTrick => match self.state.phase {
                Phase::TrickSettling { winner } => {
                    self.state.phase = Phase::AwaitingPlay(winner);
                    self.state.status = format!("{} to lead", winner.name());
                    true
                }
                _ => false,
            },
            Deferred::AiPlay(seat) => self.play_ai(seat),
        }
    }

    fn play_ai(&mut self, seat: Seat) -> bool {
        if self.state.to_act() != Some(seat) || self.is_human(seat) {
            return false;
        }

        let card = match self.recorded_lead(seat) {
            Some(card) => {
                debug!(seat = %seat, card = %card, "using recorded opening lead");
                card
            }
            None => {
                let view = SeatView {
                    seat,
                    hand: self.state.hand(seat),
                    trick: &self.state.trick.plays,
                    trump: self.input.contract.trump(),
                };
                let Some(decision) = self.player.choose(&view) else {
                    warn!(seat = %seat, "card player had nothing to play");
                    return false;
                };
                debug!(seat = %seat, card = %decision.card, rule = %decision.rule, "ai chose");
                decision.card
            }
        };

        if let Err(err) = self.check_play(seat, card) {
            warn!(seat = %seat, card = %card, error = %err, "card player chose an illegal card");
            return false;
        }
        self.apply(seat, card);
        true
    }

    fn recorded_lead(&self, seat: Seat) -> Option<Card> {
        let first_card = self.state.history.is_empty() && self.state.trick.is_empty();
        self.input
            .opening_lead
            .filter(|&card| first_card && self.state.hand(seat).contains(card))
    }

    /// Step back to just before the last human play. Does nothing while an
    /// AI decision is pending or when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.pending.ai().is_some() {
            debug!("undo ignored while ai decision is pending");
            return false;
        }
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.state = previous;
        self.pending.bump();
        info!(tricks = self.state.tricks_played(), "undo");
        true
    }

    /// Back to the opening lead of the same deal.
    pub fn restart(&mut self) {
        self.state = PlayState::initial(&self.input);
        self.undo_stack.clear();
        self.pending.bump();
        info!(contract = %self.input.contract, "restart");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::{parse_hand, Strain, Vulnerability};

    fn c(s: &str) -> Card {
        s.parse().unwrap()
    }

    // North/South hold every spade and heart; East/West every diamond and club.
    fn split_deal() -> Board {
        Board::new(
            Seat::North,
            Vulnerability::None,
            [
                parse_hand("AKQJT98", "AKQJT9", "", ""),
                parse_hand("", "", "AKQJT98", "AKQJT9"),
                parse_hand("765432", "8765432", "", ""),
                parse_hand("", "", "765432", "8765432"),
            ],
        )
    }

    fn session(contract: &str, declarer: Seat) -> Session {
        let input = PlayInput {
            board: split_deal(),
            contract: Contract::parse(contract, declarer).unwrap(),
            opening_lead: None,
            auction: None,
        };
        Session::new(input, PlayConfig::instant()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let session = session("4S", Seat::South);
        assert_eq!(session.phase(), Phase::AwaitingPlay(Seat::West));
        assert!(session.is_human(Seat::North) && session.is_human(Seat::South));
        assert!(!session.is_human(Seat::East) && !session.is_human(Seat::West));
        assert_eq!(session.contract().strain, Strain::Spades);
        assert!(session.legal_plays_for(Seat::North).is_empty());
        assert_eq!(session.legal_plays_for(Seat::West).len(), 13);
        assert_eq!(session.result(), None);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_human_cannot_play_for_defender() {
        let mut session = session("4S", Seat::South);
        let before = session.state().clone();
        assert_eq!(
            session.play(Seat::West, c("D7")),
            Err(PlayError::NotHumanSeat(Seat::West))
        );
        assert_eq!(
            session.play(Seat::North, c("SA")),
            Err(PlayError::NotYourTurn {
                expected: Seat::West,
                attempted: Seat::North
            })
        );
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_ai_opening_lead_then_human_follows() {
        let mut session = session("4S", Seat::South);
        let ticket = session.next_ticket().unwrap();
        assert_eq!(ticket.action, Deferred::AiPlay(Seat::West));
        assert_eq!(session.maybe_trigger_ai(), None);
        assert!(session.fire(ticket));

        // West's longest non-trump suit is clubs (7): fourth highest is the 5.
        assert_eq!(session.state().trick.plays, vec![(Seat::West, c("C5"))]);
        assert_eq!(session.phase(), Phase::AwaitingPlay(Seat::North));
        assert_eq!(session.legal_plays_for(Seat::North).len(), 13);
        assert!(!session.fire(ticket));
    }

    #[test]
    fn test_rejected_card_leaves_state_unchanged() {
        let mut session = session("4S", Seat::North);
        // East leads the fourth highest of seven diamonds.
        let ticket = session.next_ticket().unwrap();
        assert!(session.fire(ticket));
        assert_eq!(session.state().trick.plays, vec![(Seat::East, c("DJ"))]);

        let before = session.state().clone();
        assert_eq!(
            session.play(Seat::South, c("SA")),
            Err(PlayError::CardNotHeld {
                seat: Seat::South,
                card: c("SA")
            })
        );
        assert_eq!(session.state(), &before);
        assert!(!session.can_undo());

        assert_eq!(
            session.play(Seat::South, c("S2")),
            Ok(PlayOutcome::Played { next: Seat::West })
        );
        assert!(session.can_undo());
    }
}
