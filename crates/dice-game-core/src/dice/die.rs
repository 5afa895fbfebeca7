//! Validated dice and the set of dice in play.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum number of dice a game needs
pub const MIN_DICE: usize = 3;

/// A die: an ordered, immutable list of positive faces, not all equal
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Die {
    faces: Vec<u32>,
}

impl Die {
    /// Create a die, rejecting empty, non-positive, and degenerate face lists
    pub fn new(faces: Vec<u32>) -> Result<Self, ConfigError> {
        let first = *faces.first().ok_or(ConfigError::EmptyDie)?;
        if let Some(&face) = faces.iter().find(|&&f| f == 0) {
            return Err(ConfigError::NonPositiveFace { face });
        }
        if faces.iter().all(|&f| f == first) {
            return Err(ConfigError::DegenerateDie {
                faces: join_faces(&faces),
            });
        }
        Ok(Self { faces })
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Face at `index`, or `None` past the last face
    pub fn face(&self, index: usize) -> Option<u32> {
        self.faces.get(index).copied()
    }

    pub fn faces(&self) -> &[u32] {
        &self.faces
    }
}

fn join_faces(faces: &[u32]) -> String {
    faces
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join_faces(&self.faces))
    }
}

impl FromStr for Die {
    type Err = ConfigError;

    /// Parse the comma-separated form, e.g. `2,2,4,4,9,9`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let faces = s
            .split(',')
            .map(str::trim)
            .map(|part| {
                part.parse::<u32>().map_err(|_| ConfigError::MalformedFace {
                    input: part.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(faces)
    }
}

impl TryFrom<Vec<u32>> for Die {
    type Error = ConfigError;

    fn try_from(faces: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(faces)
    }
}

impl From<Die> for Vec<u32> {
    fn from(die: Die) -> Self {
        die.faces
    }
}

/// Identity of a die: its position in the [`DiceSet`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DieId(usize);

impl DieId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for DieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The dice available to a game: at least [`MIN_DICE`], pairwise distinct
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    pub fn new(dice: Vec<Die>) -> Result<Self, ConfigError> {
        if dice.len() < MIN_DICE {
            return Err(ConfigError::TooFewDice {
                found: dice.len(),
                required: MIN_DICE,
            });
        }
        for (i, a) in dice.iter().enumerate() {
            if let Some(j) = dice[i + 1..].iter().position(|b| a == b) {
                return Err(ConfigError::DuplicateDice {
                    first: DieId(i),
                    second: DieId(i + 1 + j),
                });
            }
        }
        Ok(Self { dice })
    }

    pub fn ids(&self) -> impl Iterator<Item = DieId> + '_ {
        (0..self.dice.len()).map(DieId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DieId, &Die)> {
        self.dice.iter().enumerate().map(|(i, d)| (DieId(i), d))
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn die(faces: &[u32]) -> Die {
        Die::new(faces.to_vec()).unwrap()
    }

    #[test]
    fn test_parse_die() {
        let d: Die = "2,2,4,4,9,9".parse().unwrap();
        assert_eq!(d.faces(), &[2, 2, 4, 4, 9, 9]);
        assert_eq!(d.face_count(), 6);
        assert_eq!(d.face(4), Some(9));
        assert_eq!(d.face(6), None);
        assert_eq!(d.to_string(), "2,2,4,4,9,9");
    }

    #[test]
    fn test_degenerate_die_rejected() {
        assert_eq!(
            "5,5,5".parse::<Die>(),
            Err(ConfigError::DegenerateDie {
                faces: "5,5,5".to_string()
            })
        );
        // A single face is degenerate too.
        assert!(matches!(
            Die::new(vec![3]),
            Err(ConfigError::DegenerateDie { .. })
        ));
    }

    #[test]
    fn test_malformed_faces_rejected() {
        assert!(matches!(
            "1,2,x".parse::<Die>(),
            Err(ConfigError::MalformedFace { input }) if input == "x"
        ));
        assert!(matches!(
            "1,-2,3".parse::<Die>(),
            Err(ConfigError::MalformedFace { .. })
        ));
        assert!(matches!(
            "1,2.5,3".parse::<Die>(),
            Err(ConfigError::MalformedFace { .. })
        ));
        assert!(matches!(
            "".parse::<Die>(),
            Err(ConfigError::MalformedFace { .. })
        ));
    }

    #[test]
    fn test_zero_face_rejected() {
        assert_eq!(
            Die::new(vec![0, 1, 2]),
            Err(ConfigError::NonPositiveFace { face: 0 })
        );
        assert_eq!(Die::new(vec![]), Err(ConfigError::EmptyDie));
    }

    #[test]
    fn test_dice_set_requires_three() {
        let err = DiceSet::new(vec![die(&[1, 2]), die(&[2, 3])]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TooFewDice {
                found: 2,
                required: 3
            }
        );
    }

    #[test]
    fn test_dice_set_rejects_duplicates() {
        let err = DiceSet::new(vec![die(&[1, 2]), die(&[2, 3]), die(&[1, 2])]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateDice {
                first: DieId::new(0),
                second: DieId::new(2)
            }
        );
    }

    #[test]
    fn test_same_faces_different_order_are_distinct() {
        let set = DiceSet::new(vec![die(&[1, 2]), die(&[2, 1]), die(&[3, 4])]).unwrap();
        assert_eq!(set.dice().len(), 3);
        assert_eq!(set.dice()[1].faces(), &[2, 1]);
        let ids: Vec<DieId> = set.ids().collect();
        assert_eq!(ids, vec![DieId::new(0), DieId::new(1), DieId::new(2)]);
    }

    #[test]
    fn test_die_serde_validates() {
        let d: Die = serde_json::from_str("[1,4,4]").unwrap();
        assert_eq!(d, die(&[1, 4, 4]));
        assert!(serde_json::from_str::<Die>("[5,5,5]").is_err());
    }
}
