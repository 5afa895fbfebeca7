//! Cryptographic primitives for the fair draw protocol.
//!
//! This module provides:
//! - SecretKey, the per-draw HMAC key
//! - Commitment, the HMAC digest published before the opponent moves

mod commitment;

pub use commitment::{Commitment, SecretKey, KEY_LEN};
