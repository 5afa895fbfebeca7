//! Dice model and win probabilities.

mod die;
mod probability;

pub use die::{DiceSet, Die, DieId, MIN_DICE};
pub use probability::{win_ratio, ProbabilityMatrix, WinRatio};
