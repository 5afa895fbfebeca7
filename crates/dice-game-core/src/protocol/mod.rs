//! Protocol types and messages.

mod messages;
mod types;

pub use messages::{DrawRequest, DrawTranscript, RoundSummary};
pub use types::{DrawPurpose, Party, RoundId, RoundOutcome};
