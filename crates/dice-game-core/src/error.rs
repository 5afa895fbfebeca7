//! Error types for configuration, draws, and rounds.

use crate::dice::DieId;
use thiserror::Error;

/// Errors in the dice supplied before a game starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least {required} dice are required, got {found}")]
    TooFewDice { found: usize, required: usize },

    #[error("a die must have at least one face")]
    EmptyDie,

    #[error("die faces must be positive integers, got {face}")]
    NonPositiveFace { face: u32 },

    #[error("invalid face value {input:?}: expected a positive integer")]
    MalformedFace { input: String },

    #[error("die {faces} has all faces identical")]
    DegenerateDie { faces: String },

    #[error("dice {first} and {second} are identical")]
    DuplicateDice { first: DieId, second: DieId },
}

/// Errors from a single fair draw
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("draw range must be positive, got {range}")]
    InvalidRange { range: u32 },

    #[error("cannot draw over {size} options")]
    RangeTooLarge { size: usize },

    #[error("contribution {contribution} is outside 0..{range}")]
    ContributionOutOfRange { contribution: u32, range: u32 },

    #[error("entropy source failed: {0}")]
    Entropy(String),
}

/// Errors that end a round before it reaches its outcome
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("fair draw failed: {0}")]
    Draw(#[from] DrawError),

    #[error("die {0} is not one of the offered options")]
    InvalidChoice(DieId),

    #[error("round aborted by the player")]
    Aborted,

    #[error("round was discarded after an earlier failure")]
    Discarded,
}

impl RoundError {
    /// Whether this error comes from a broken collaborator contract rather
    /// than an explicit abort or entropy failure.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            RoundError::InvalidChoice(_)
                | RoundError::Draw(DrawError::InvalidRange { .. })
                | RoundError::Draw(DrawError::ContributionOutOfRange { .. })
        )
    }
}
