//! Round phases and the per-round record.

use crate::dice::DieId;
use crate::protocol::{Party, RoundOutcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phases of a round, in the only order they can occur
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    SelectingFirstMover,
    SelectingDice,
    RollingComputer,
    RollingPlayer,
    Comparing,
    Done,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::SelectingFirstMover => "selecting first mover",
            Phase::SelectingDice => "selecting dice",
            Phase::RollingComputer => "rolling computer",
            Phase::RollingPlayer => "rolling player",
            Phase::Comparing => "comparing",
            Phase::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of what a round has decided so far
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub first_mover: Option<Party>,
    pub human_die: Option<DieId>,
    pub computer_die: Option<DieId>,
    pub human_roll: Option<u32>,
    pub computer_roll: Option<u32>,
    pub outcome: Option<RoundOutcome>,
}

/// Dice held by each side once selection is over
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Picks {
    pub first: Party,
    pub human: DieId,
    pub computer: DieId,
}

/// Internal stage: the phase plus the data decided so far
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Stage {
    FirstMover,
    Dice {
        first: Party,
    },
    ComputerRoll {
        picks: Picks,
    },
    HumanRoll {
        picks: Picks,
        computer_roll: u32,
    },
    Compare {
        picks: Picks,
        computer_roll: u32,
        human_roll: u32,
    },
    Done {
        picks: Picks,
        computer_roll: u32,
        human_roll: u32,
        outcome: RoundOutcome,
    },
}

impl Stage {
    pub fn phase(&self) -> Phase {
        match self {
            Stage::FirstMover => Phase::SelectingFirstMover,
            Stage::Dice { .. } => Phase::SelectingDice,
            Stage::ComputerRoll { .. } => Phase::RollingComputer,
            Stage::HumanRoll { .. } => Phase::RollingPlayer,
            Stage::Compare { .. } => Phase::Comparing,
            Stage::Done { .. } => Phase::Done,
        }
    }

    pub fn state(&self) -> RoundState {
        let mut state = RoundState::default();
        let (picks, computer_roll, human_roll, outcome) = match *self {
            Stage::FirstMover => return state,
            Stage::Dice { first } => {
                state.first_mover = Some(first);
                return state;
            }
            Stage::ComputerRoll { picks } => (picks, None, None, None),
            Stage::HumanRoll {
                picks,
                computer_roll,
            } => (picks, Some(computer_roll), None, None),
            Stage::Compare {
                picks,
                computer_roll,
                human_roll,
            } => (picks, Some(computer_roll), Some(human_roll), None),
            Stage::Done {
                picks,
                computer_roll,
                human_roll,
                outcome,
            } => (picks, Some(computer_roll), Some(human_roll), Some(outcome)),
        };
        state.first_mover = Some(picks.first);
        state.human_die = Some(picks.human);
        state.computer_die = Some(picks.computer);
        state.computer_roll = computer_roll;
        state.human_roll = human_roll;
        state.outcome = outcome;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_are_ordered() {
        assert!(Phase::SelectingFirstMover < Phase::SelectingDice);
        assert!(Phase::SelectingDice < Phase::RollingComputer);
        assert!(Phase::RollingComputer < Phase::RollingPlayer);
        assert!(Phase::RollingPlayer < Phase::Comparing);
        assert!(Phase::Comparing < Phase::Done);
    }

    #[test]
    fn test_stage_state_snapshot() {
        let picks = Picks {
            first: Party::Computer,
            human: DieId::new(1),
            computer: DieId::new(0),
        };
        let state = Stage::HumanRoll {
            picks,
            computer_roll: 7,
        }
        .state();
        assert_eq!(state.first_mover, Some(Party::Computer));
        assert_eq!(state.human_die, Some(DieId::new(1)));
        assert_eq!(state.computer_die, Some(DieId::new(0)));
        assert_eq!(state.computer_roll, Some(7));
        assert_eq!(state.human_roll, None);
        assert_eq!(state.outcome, None);

        assert_eq!(Stage::FirstMover.state(), RoundState::default());
    }
}
