//! Entropy sources for fair draws.

use crate::crypto::{SecretKey, KEY_LEN};
use crate::error::DrawError;
use rand::rngs::OsRng;
use rand::RngCore;
use std::collections::VecDeque;

/// Source of raw randomness for draws.
///
/// Injected into the round so tests can substitute fixed output.
pub trait EntropySource {
    /// Next raw 32-bit word, before any range reduction
    fn next_u32(&mut self) -> Result<u32, DrawError>;

    /// Fresh key material for one draw
    fn fill_key(&mut self) -> Result<SecretKey, DrawError>;
}

/// Entropy from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl RngSource<OsRng> {
    /// Operating system entropy, used for real games
    pub fn os() -> Self {
        Self(OsRng)
    }
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: RngCore> EntropySource for RngSource<R> {
    fn next_u32(&mut self) -> Result<u32, DrawError> {
        let mut bytes = [0u8; 4];
        self.0
            .try_fill_bytes(&mut bytes)
            .map_err(|e| DrawError::Entropy(e.to_string()))?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn fill_key(&mut self) -> Result<SecretKey, DrawError> {
        let mut bytes = [0u8; KEY_LEN];
        self.0
            .try_fill_bytes(&mut bytes)
            .map_err(|e| DrawError::Entropy(e.to_string()))?;
        Ok(SecretKey::from_bytes(bytes))
    }
}

/// Scripted source returning preset words, for deterministic draws.
///
/// Keys are derived from a counter so every draw still gets a distinct key.
/// Running out of words is reported as an entropy failure.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    words: VecDeque<u32>,
    keys_issued: u8,
    words_consumed: usize,
}

impl ScriptedSource {
    pub fn new(words: impl IntoIterator<Item = u32>) -> Self {
        Self {
            words: words.into_iter().collect(),
            keys_issued: 0,
            words_consumed: 0,
        }
    }

    /// Queue more words after the existing ones
    pub fn push(&mut self, word: u32) {
        self.words.push_back(word);
    }

    /// Number of words handed out so far
    pub fn words_consumed(&self) -> usize {
        self.words_consumed
    }
}

impl EntropySource for ScriptedSource {
    fn next_u32(&mut self) -> Result<u32, DrawError> {
        let word = self
            .words
            .pop_front()
            .ok_or_else(|| DrawError::Entropy("scripted source exhausted".to_string()))?;
        self.words_consumed += 1;
        Ok(word)
    }

    fn fill_key(&mut self) -> Result<SecretKey, DrawError> {
        self.keys_issued = self.keys_issued.wrapping_add(1);
        Ok(SecretKey::from_bytes([self.keys_issued; KEY_LEN]))
    }
}
