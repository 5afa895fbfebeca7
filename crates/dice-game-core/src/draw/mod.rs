//! Commit-reveal fair draw protocol.
//!
//! A draw produces a value in `0..range` that neither party controls alone:
//! the committing party fixes a secret value and publishes its HMAC, the
//! other party then contributes a value of their own, and the result is the
//! sum of both modulo `range`. Revealing the key afterwards lets anyone check
//! the committed value was fixed before the contribution was known.

mod protocol;
mod source;

pub use protocol::{begin_draw, uniform_below, CommittedDraw, RevealedDraw};
pub use source::{EntropySource, RngSource, ScriptedSource};
