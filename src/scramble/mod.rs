//! The convergence engine: random frames that lock in one matching character at a time.

mod engine;
mod pacing;
mod random;

pub(crate) use engine::{Frame, Scrambler};
pub(crate) use pacing::Scramble;
pub(crate) use random::RandomSource;

#[cfg(test)]
pub(crate) use random::ScriptedSource;
