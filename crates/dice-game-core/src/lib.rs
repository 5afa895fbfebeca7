//! Dice Game Core Library
//!
//! This crate provides the commit-reveal fair draw protocol, the dice model,
//! and the round state machine for a two-party non-transitive dice game.

pub mod crypto;
pub mod dice;
pub mod draw;
pub mod error;
pub mod protocol;
pub mod round;

pub use crypto::{Commitment, SecretKey};
pub use dice::{DiceSet, Die, DieId, ProbabilityMatrix, WinRatio};
pub use draw::{CommittedDraw, EntropySource, RevealedDraw, RngSource, ScriptedSource};
pub use error::{ConfigError, DrawError, RoundError};
pub use protocol::{
    DrawPurpose, DrawRequest, DrawTranscript, Party, RoundId, RoundOutcome, RoundSummary,
};
pub use round::{
    Aborted, DieOption, Participant, Phase, Round, RoundEvent, RoundState, ScriptedParticipant,
};
