//! The two phases of a fair draw.

use super::source::EntropySource;
use crate::crypto::{Commitment, SecretKey};
use crate::error::DrawError;
use std::fmt;

/// Uniform value in `0..range` by rejection sampling raw 32-bit words.
///
/// Words at or above the largest multiple of `range` that fits in 2^32 are
/// discarded and redrawn, so every residue is equally likely.
pub fn uniform_below<S: EntropySource + ?Sized>(
    range: u32,
    source: &mut S,
) -> Result<u32, DrawError> {
    if range == 0 {
        return Err(DrawError::InvalidRange { range });
    }
    let space = 1u64 << 32;
    let limit = space - space % u64::from(range);
    loop {
        let raw = source.next_u32()?;
        if u64::from(raw) < limit {
            return Ok(raw % range);
        }
        tracing::trace!(raw, range, "rejected biased word");
    }
}

/// Start a draw over `0..range`: fix a secret value and publish its commitment
pub fn begin_draw<S: EntropySource + ?Sized>(
    range: u32,
    source: &mut S,
) -> Result<CommittedDraw, DrawError> {
    CommittedDraw::begin(range, source)
}

/// A draw whose value is fixed and committed but not yet disclosed.
///
/// Only the commitment and range are readable. The key and value leave this
/// type only through [`CommittedDraw::accept_contribution`]; dropping it
/// discards them unrevealed.
pub struct CommittedDraw {
    range: u32,
    key: SecretKey,
    value: u32,
    commitment: Commitment,
}

impl CommittedDraw {
    pub fn begin<S: EntropySource + ?Sized>(
        range: u32,
        source: &mut S,
    ) -> Result<Self, DrawError> {
        if range == 0 {
            return Err(DrawError::InvalidRange { range });
        }
        let key = source.fill_key()?;
        let value = uniform_below(range, source)?;
        let commitment = Commitment::new(&key, value);
        Ok(Self {
            range,
            key,
            value,
            commitment,
        })
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Combine the other party's contribution and disclose the secret.
    ///
    /// An out-of-range contribution consumes the draw without revealing it.
    pub fn accept_contribution(self, contribution: u32) -> Result<RevealedDraw, DrawError> {
        if contribution >= self.range {
            return Err(DrawError::ContributionOutOfRange {
                contribution,
                range: self.range,
            });
        }
        // Widen before adding so ranges near u32::MAX cannot overflow.
        let result =
            ((u64::from(self.value) + u64::from(contribution)) % u64::from(self.range)) as u32;
        Ok(RevealedDraw {
            range: self.range,
            key: self.key,
            value: self.value,
            contribution,
            commitment: self.commitment,
            result,
        })
    }
}

impl fmt::Debug for CommittedDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommittedDraw")
            .field("range", &self.range)
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

/// A completed draw with its secret disclosed for audit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealedDraw {
    range: u32,
    key: SecretKey,
    value: u32,
    contribution: u32,
    commitment: Commitment,
    result: u32,
}

impl RevealedDraw {
    pub fn range(&self) -> u32 {
        self.range
    }

    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    /// The committing party's value
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The other party's value
    pub fn contribution(&self) -> u32 {
        self.contribution
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// `(value + contribution) mod range`
    pub fn result(&self) -> u32 {
        self.result
    }

    /// Recompute the commitment from the disclosed key and value
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.key, self.value)
            && self.value < self.range
            && self.result
                == ((u64::from(self.value) + u64::from(self.contribution)) % u64::from(self.range))
                    as u32
    }
}
