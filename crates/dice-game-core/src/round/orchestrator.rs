//! Round state machine.

use super::participant::{DieOption, Participant, RoundEvent};
use super::state::{Phase, Picks, RoundState, Stage};
use crate::dice::{DiceSet, Die, DieId};
use crate::draw::{CommittedDraw, EntropySource};
use crate::error::{DrawError, RoundError};
use crate::protocol::{
    DrawPurpose, DrawRequest, DrawTranscript, Party, RoundId, RoundOutcome, RoundSummary,
};
use tracing::{debug, info, warn};

/// One round of the dice game.
///
/// Phases only move forward. The first failed step discards the round:
/// its phase no longer advances and every later step is refused.
pub struct Round<S> {
    id: RoundId,
    dice: DiceSet,
    source: S,
    stage: Stage,
    draws: Vec<DrawTranscript>,
    discarded: bool,
}

impl<S: EntropySource> Round<S> {
    pub fn new(dice: DiceSet, source: S) -> Self {
        Self::with_id(RoundId::new(), dice, source)
    }

    pub fn with_id(id: RoundId, dice: DiceSet, source: S) -> Self {
        Self {
            id,
            dice,
            source,
            stage: Stage::FirstMover,
            draws: Vec::new(),
            discarded: false,
        }
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.stage.phase()
    }

    pub fn state(&self) -> RoundState {
        self.stage.state()
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    /// Whether an earlier step failed and the round can no longer advance
    pub fn is_discarded(&self) -> bool {
        self.discarded
    }

    /// Transcripts of every draw revealed so far, including any revealed
    /// during a step that later failed
    pub fn draws(&self) -> &[DrawTranscript] {
        &self.draws
    }

    /// The finished round, once the phase is [`Phase::Done`]
    pub fn summary(&self) -> Option<RoundSummary> {
        let Stage::Done {
            picks,
            computer_roll,
            human_roll,
            outcome,
        } = self.stage
        else {
            return None;
        };
        Some(RoundSummary {
            round_id: self.id,
            first_mover: picks.first,
            human_die: self.die(picks.human).clone(),
            computer_die: self.die(picks.computer).clone(),
            human_roll,
            computer_roll,
            outcome,
            draws: self.draws.clone(),
        })
    }

    /// Drive the round to completion
    pub fn run<P: Participant + ?Sized>(
        mut self,
        player: &mut P,
    ) -> Result<RoundSummary, RoundError> {
        loop {
            if let Some(summary) = self.summary() {
                return Ok(summary);
            }
            self.step(player)?;
        }
    }

    /// Advance by one phase and return the new phase
    pub fn step<P: Participant + ?Sized>(
        &mut self,
        player: &mut P,
    ) -> Result<Phase, RoundError> {
        if self.discarded {
            return Err(RoundError::Discarded);
        }
        let mut draws = Vec::new();
        let outcome = self.advance(player, &mut draws);
        self.draws.extend(draws);
        let next = match outcome {
            Ok(next) => next,
            Err(e) => {
                self.discarded = true;
                if e == RoundError::Aborted {
                    info!(round = %self.id, phase = %self.phase(), "round aborted by player");
                } else {
                    warn!(round = %self.id, phase = %self.phase(), error = %e, "round discarded");
                }
                return Err(e);
            }
        };
        if next != self.stage {
            info!(round = %self.id, from = %self.phase(), to = %next.phase(), "phase transition");
        }
        self.stage = next;
        Ok(self.phase())
    }

    fn advance<P: Participant + ?Sized>(
        &mut self,
        player: &mut P,
        draws: &mut Vec<DrawTranscript>,
    ) -> Result<Stage, RoundError> {
        let stage = self.stage;
        let next = match stage {
            Stage::FirstMover => {
                let result = self.fair_draw(DrawPurpose::FirstMover, 2, player, draws)?;
                let first = if result == 1 {
                    Party::Computer
                } else {
                    Party::Human
                };
                player.observe(&RoundEvent::FirstMover(first));
                Stage::Dice { first }
            }
            Stage::Dice { first } => {
                let all: Vec<DieId> = self.dice.ids().collect();
                let (human, computer) = match first {
                    Party::Human => {
                        let human = self.human_pick(&all, player)?;
                        let rest = without(&all, human);
                        (human, self.computer_pick(&rest, player, draws)?)
                    }
                    Party::Computer => {
                        let computer = self.computer_pick(&all, player, draws)?;
                        let rest = without(&all, computer);
                        (self.human_pick(&rest, player)?, computer)
                    }
                };
                debug_assert_ne!(self.die(human), self.die(computer));
                Stage::ComputerRoll {
                    picks: Picks {
                        first,
                        human,
                        computer,
                    },
                }
            }
            Stage::ComputerRoll { picks } => {
                let computer_roll = self.roll(
                    Party::Computer,
                    picks.computer,
                    DrawPurpose::ComputerRoll,
                    player,
                    draws,
                )?;
                Stage::HumanRoll {
                    picks,
                    computer_roll,
                }
            }
            Stage::HumanRoll {
                picks,
                computer_roll,
            } => {
                let human_roll =
                    self.roll(Party::Human, picks.human, DrawPurpose::HumanRoll, player, draws)?;
                Stage::Compare {
                    picks,
                    computer_roll,
                    human_roll,
                }
            }
            Stage::Compare {
                picks,
                computer_roll,
                human_roll,
            } => {
                let outcome = RoundOutcome::from_faces(human_roll, computer_roll);
                player.observe(&RoundEvent::Finished {
                    human: human_roll,
                    computer: computer_roll,
                    outcome,
                });
                Stage::Done {
                    picks,
                    computer_roll,
                    human_roll,
                    outcome,
                }
            }
            done @ Stage::Done { .. } => done,
        };
        Ok(next)
    }

    /// Run one commit-reveal draw over `0..range` with the player
    fn fair_draw<P: Participant + ?Sized>(
        &mut self,
        purpose: DrawPurpose,
        range: u32,
        player: &mut P,
        draws: &mut Vec<DrawTranscript>,
    ) -> Result<u32, RoundError> {
        let committed = CommittedDraw::begin(range, &mut self.source)?;
        debug!(
            round = %self.id,
            %purpose,
            range,
            commitment = %committed.commitment(),
            "committed"
        );

        let request = DrawRequest {
            round_id: self.id,
            purpose,
            range,
            commitment: *committed.commitment(),
        };
        let contribution = player.contribute(&request)?;
        let revealed = committed.accept_contribution(contribution)?;
        debug!(
            round = %self.id,
            %purpose,
            value = revealed.value(),
            contribution,
            result = revealed.result(),
            "revealed"
        );

        player.observe(&RoundEvent::DrawRevealed {
            purpose,
            draw: &revealed,
        });
        draws.push(DrawTranscript::new(purpose, &revealed));
        Ok(revealed.result())
    }

    fn human_pick<P: Participant + ?Sized>(
        &self,
        options: &[DieId],
        player: &mut P,
    ) -> Result<DieId, RoundError> {
        let offered: Vec<DieOption<'_>> = options
            .iter()
            .map(|&id| DieOption {
                id,
                die: self.die(id),
            })
            .collect();
        let id = player.choose_die(&offered)?;
        if !options.contains(&id) {
            return Err(RoundError::InvalidChoice(id));
        }
        player.observe(&RoundEvent::DieChosen {
            party: Party::Human,
            id,
            die: self.die(id),
        });
        Ok(id)
    }

    /// The computer's pick goes through a fair draw like every other choice
    fn computer_pick<P: Participant + ?Sized>(
        &mut self,
        options: &[DieId],
        player: &mut P,
        draws: &mut Vec<DrawTranscript>,
    ) -> Result<DieId, RoundError> {
        let range = range_of(options.len())?;
        let index = self.fair_draw(DrawPurpose::ComputerDie, range, player, draws)?;
        let id = options[index as usize];
        player.observe(&RoundEvent::DieChosen {
            party: Party::Computer,
            id,
            die: self.die(id),
        });
        Ok(id)
    }

    fn roll<P: Participant + ?Sized>(
        &mut self,
        party: Party,
        id: DieId,
        purpose: DrawPurpose,
        player: &mut P,
        draws: &mut Vec<DrawTranscript>,
    ) -> Result<u32, RoundError> {
        let range = range_of(self.die(id).face_count())?;
        let index = self.fair_draw(purpose, range, player, draws)?;
        let face = self.die(id).faces()[index as usize];
        player.observe(&RoundEvent::Rolled { party, face });
        Ok(face)
    }

    fn die(&self, id: DieId) -> &Die {
        &self.dice.dice()[id.index()]
    }
}

fn without(ids: &[DieId], taken: DieId) -> Vec<DieId> {
    ids.iter().copied().filter(|&id| id != taken).collect()
}

fn range_of(size: usize) -> Result<u32, DrawError> {
    u32::try_from(size).map_err(|_| DrawError::RangeTooLarge { size })
}
