//! Protocol messages exchanged with the player and kept for audit.

use crate::crypto::{Commitment, SecretKey};
use crate::dice::Die;
use crate::draw::RevealedDraw;
use crate::protocol::{DrawPurpose, Party, RoundId, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Shown to the player before they contribute: the committed HMAC and range
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub round_id: RoundId,
    pub purpose: DrawPurpose,
    pub range: u32,
    pub commitment: Commitment,
}

/// Audit record of one revealed draw
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawTranscript {
    pub purpose: DrawPurpose,
    pub range: u32,
    pub commitment: Commitment,
    /// Hex-encoded HMAC key, disclosed after the contribution
    pub key: String,
    pub value: u32,
    pub contribution: u32,
    pub result: u32,
}

impl DrawTranscript {
    pub fn new(purpose: DrawPurpose, draw: &RevealedDraw) -> Self {
        Self {
            purpose,
            range: draw.range(),
            commitment: *draw.commitment(),
            key: draw.key().to_hex(),
            value: draw.value(),
            contribution: draw.contribution(),
            result: draw.result(),
        }
    }

    /// Re-check the record independently of the draw that produced it
    pub fn verify(&self) -> bool {
        let Ok(key) = self.key.parse::<SecretKey>() else {
            return false;
        };
        self.range > 0
            && self.value < self.range
            && self.contribution < self.range
            && self.commitment.verify(&key, self.value)
            && u64::from(self.result)
                == (u64::from(self.value) + u64::from(self.contribution)) % u64::from(self.range)
    }
}

/// Everything that happened in a finished round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_id: RoundId,
    pub first_mover: Party,
    pub human_die: Die,
    pub computer_die: Die,
    pub human_roll: u32,
    pub computer_roll: u32,
    pub outcome: RoundOutcome,
    pub draws: Vec<DrawTranscript>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{begin_draw, ScriptedSource};

    fn transcript() -> DrawTranscript {
        let mut source = ScriptedSource::new([5]);
        let draw = begin_draw(6, &mut source)
            .unwrap()
            .accept_contribution(4)
            .unwrap();
        DrawTranscript::new(DrawPurpose::HumanRoll, &draw)
    }

    #[test]
    fn test_transcript_verifies() {
        let t = transcript();
        assert_eq!(t.result, 3);
        assert!(t.verify());
    }

    #[test]
    fn test_tampered_transcript_fails() {
        let mut t = transcript();
        t.value = 4;
        assert!(!t.verify());

        let mut t = transcript();
        t.result = 0;
        assert!(!t.verify());

        let mut t = transcript();
        t.key = "zz".to_string();
        assert!(!t.verify());
    }

    #[test]
    fn test_transcript_serialization() {
        let t = transcript();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"purpose\":\"human_roll\""));
        assert!(json.contains(&t.commitment.to_string()));

        let deserialized: DrawTranscript = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, t);
        assert!(deserialized.verify());
    }
}
