//! Round orchestration.
//!
//! A round sequences several fair draws: who moves first, the computer's
//! die, then one roll for each side. The [`Participant`] trait is the seam
//! to whoever sits on the human side of the table.

mod orchestrator;
mod participant;
mod state;

pub use orchestrator::Round;
pub use participant::{Aborted, DieOption, Participant, RoundEvent, ScriptedParticipant};
pub use state::{Phase, RoundState};
