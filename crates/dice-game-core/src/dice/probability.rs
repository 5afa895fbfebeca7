//! Pairwise win probabilities between dice.

use super::{DiceSet, Die};

/// Exact fraction of face pairs in which one die beats another
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinRatio {
    pub wins: u64,
    pub total: u64,
}

impl WinRatio {
    pub fn as_f64(&self) -> f64 {
        self.wins as f64 / self.total as f64
    }
}

/// Count the face pairs where `a` shows a strictly higher face than `b`
pub fn win_ratio(a: &Die, b: &Die) -> WinRatio {
    let wins = a
        .faces()
        .iter()
        .map(|fa| b.faces().iter().filter(|&fb| fa > fb).count() as u64)
        .sum();
    WinRatio {
        wins,
        total: (a.face_count() * b.face_count()) as u64,
    }
}

/// Win probability of each row die against each column die.
///
/// Diagonal cells are `None`: a die never plays against itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityMatrix {
    cells: Vec<Vec<Option<WinRatio>>>,
}

impl ProbabilityMatrix {
    pub fn compute(dice: &DiceSet) -> Self {
        let cells = dice
            .iter()
            .map(|(i, a)| {
                dice.iter()
                    .map(|(j, b)| (i != j).then(|| win_ratio(a, b)))
                    .collect()
            })
            .collect();
        Self { cells }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<WinRatio> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<WinRatio>]> {
        self.cells.iter().map(Vec::as_slice)
    }
}
