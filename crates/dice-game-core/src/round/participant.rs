//! The human side of a round.

use crate::dice::{Die, DieId};
use crate::draw::RevealedDraw;
use crate::error::RoundError;
use crate::protocol::{DrawPurpose, DrawRequest, Party, RoundOutcome};
use std::collections::VecDeque;
use std::fmt;

/// The participant walked away; the round is discarded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aborted;

impl From<Aborted> for RoundError {
    fn from(_: Aborted) -> Self {
        RoundError::Aborted
    }
}

/// A die the participant may pick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DieOption<'a> {
    pub id: DieId,
    pub die: &'a Die,
}

/// Something the participant should be told about
#[derive(Clone, Copy, Debug)]
pub enum RoundEvent<'a> {
    DrawRevealed {
        purpose: DrawPurpose,
        draw: &'a RevealedDraw,
    },
    FirstMover(Party),
    DieChosen {
        party: Party,
        id: DieId,
        die: &'a Die,
    },
    Rolled {
        party: Party,
        face: u32,
    },
    Finished {
        human: u32,
        computer: u32,
        outcome: RoundOutcome,
    },
}

impl fmt::Display for RoundEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundEvent::DrawRevealed { purpose, draw } => write!(
                f,
                "{}: my number is {} (KEY={})",
                purpose,
                draw.value(),
                draw.key().to_hex().to_uppercase()
            ),
            RoundEvent::FirstMover(Party::Human) => write!(f, "You make the first move."),
            RoundEvent::FirstMover(Party::Computer) => write!(f, "I make the first move."),
            RoundEvent::DieChosen {
                party: Party::Human,
                die,
                ..
            } => write!(f, "You choose the [{}] dice.", die),
            RoundEvent::DieChosen {
                party: Party::Computer,
                die,
                ..
            } => write!(f, "I choose the [{}] dice.", die),
            RoundEvent::Rolled {
                party: Party::Human,
                face,
            } => write!(f, "Your roll result is {}.", face),
            RoundEvent::Rolled {
                party: Party::Computer,
                face,
            } => write!(f, "My roll result is {}.", face),
            RoundEvent::Finished {
                human,
                computer,
                outcome,
            } => match outcome {
                RoundOutcome::HumanWins => write!(f, "You win ({} > {})!", human, computer),
                RoundOutcome::ComputerWins => write!(f, "I win ({} < {})!", human, computer),
                RoundOutcome::Tie => write!(f, "It's a tie ({} = {}).", human, computer),
            },
        }
    }
}

/// Whoever plays against the computer.
///
/// Implementations handle their own input problems: invalid entries are
/// re-prompted, help requests are answered in place, and only an explicit
/// exit surfaces as [`Aborted`].
pub trait Participant {
    /// Pick a value in `0..request.range` after seeing the commitment
    fn contribute(&mut self, request: &DrawRequest) -> Result<u32, Aborted>;

    /// Pick one of the offered dice
    fn choose_die(&mut self, options: &[DieOption<'_>]) -> Result<DieId, Aborted>;

    /// Receive a progress notification
    fn observe(&mut self, event: &RoundEvent<'_>);
}

/// Participant that replays preset answers, for tests and demos.
///
/// Running out of answers behaves like an exit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedParticipant {
    contributions: VecDeque<u32>,
    choices: VecDeque<DieId>,
    requests: Vec<DrawRequest>,
    log: Vec<String>,
}

impl ScriptedParticipant {
    pub fn new(
        contributions: impl IntoIterator<Item = u32>,
        choices: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            contributions: contributions.into_iter().collect(),
            choices: choices.into_iter().map(DieId::new).collect(),
            requests: Vec::new(),
            log: Vec::new(),
        }
    }

    /// Draw requests seen so far, in order
    pub fn requests(&self) -> &[DrawRequest] {
        &self.requests
    }

    /// Rendered events seen so far, in order
    pub fn log(&self) -> &[String] {
        &self.log
    }
}

impl Participant for ScriptedParticipant {
    fn contribute(&mut self, request: &DrawRequest) -> Result<u32, Aborted> {
        self.requests.push(request.clone());
        self.contributions.pop_front().ok_or(Aborted)
    }

    fn choose_die(&mut self, _options: &[DieOption<'_>]) -> Result<DieId, Aborted> {
        self.choices.pop_front().ok_or(Aborted)
    }

    fn observe(&mut self, event: &RoundEvent<'_>) {
        self.log.push(event.to_string());
    }
}
