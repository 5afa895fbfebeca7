//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifies one round in logs, draw requests, and the summary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RoundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One side of the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Human,
    Computer,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Human => write!(f, "you"),
            Party::Computer => write!(f, "computer"),
        }
    }
}

/// What a fair draw decides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawPurpose {
    FirstMover,
    ComputerDie,
    ComputerRoll,
    HumanRoll,
}

impl DrawPurpose {
    /// Human-readable context shown next to the draw
    pub fn label(&self) -> &'static str {
        match self {
            DrawPurpose::FirstMover => "who makes the first move",
            DrawPurpose::ComputerDie => "the computer's die",
            DrawPurpose::ComputerRoll => "the computer's roll",
            DrawPurpose::HumanRoll => "your roll",
        }
    }
}

impl fmt::Display for DrawPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Round result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    HumanWins,
    ComputerWins,
    Tie,
}

impl RoundOutcome {
    /// Compare the two rolled faces; the higher face wins
    pub fn from_faces(human: u32, computer: u32) -> Self {
        match human.cmp(&computer) {
            std::cmp::Ordering::Greater => RoundOutcome::HumanWins,
            std::cmp::Ordering::Less => RoundOutcome::ComputerWins,
            std::cmp::Ordering::Equal => RoundOutcome::Tie,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::HumanWins => "You win",
            RoundOutcome::ComputerWins => "Computer wins",
            RoundOutcome::Tie => "Tie",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
