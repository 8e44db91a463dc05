use super::random::RandomSource;
use crate::charset::CharacterPool;
use crate::phrase::Phrase;
use std::fmt::{self, Write};

/// One displayed snapshot of a phrase being unscrambled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Frame(Vec<char>);

#[cfg(test)]
impl Frame {
    pub(crate) fn chars(&self) -> &[char] {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
impl From<&str> for Frame {
    fn from(text: &str) -> Self {
        Self(text.chars().collect())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|ch| f.write_char(*ch))
    }
}

/// Drives a frame towards its phrase, one resampling step at a time.
///
/// Positions that match the phrase are locked in: they are never resampled again.
#[derive(Debug)]
pub(crate) struct Scrambler<R> {
    phrase: Phrase,
    pool: CharacterPool,
    frame: Vec<char>,
    rng: R,
    steps: usize,
}

impl<R: RandomSource> Scrambler<R> {
    /// Create a scrambler with every position of the frame sampled at random.
    pub(crate) fn new(phrase: Phrase, pool: CharacterPool, mut rng: R) -> Result<Self, ScrambleError> {
        if pool.is_empty() {
            return Err(ScrambleError::EmptyPool);
        }
        debug_assert!(phrase.chars().iter().all(|ch| pool.contains(*ch)), "phrase must be drawn from its pool");

        let frame = phrase.chars().iter().map(|_| pool.sample(&mut rng)).collect();
        Ok(Self { phrase, pool, frame, rng, steps: 0 })
    }

    /// Resample every position that doesn't match yet.
    ///
    /// Returns `None` without touching anything once the frame equals the phrase.
    pub(crate) fn step(&mut self) -> Option<Frame> {
        if self.is_done() {
            return None;
        }
        for (current, target) in self.frame.iter_mut().zip(self.phrase.chars()) {
            if current != target {
                *current = self.pool.sample(&mut self.rng);
            }
        }
        self.steps += 1;
        Some(self.frame())
    }

    pub(crate) fn is_done(&self) -> bool {
        self.frame == self.phrase.chars()
    }

    pub(crate) fn frame(&self) -> Frame {
        Frame(self.frame.clone())
    }

    /// The number of positions that currently match the phrase.
    pub(crate) fn locked(&self) -> usize {
        self.frame.iter().zip(self.phrase.chars()).filter(|(current, target)| current == target).count()
    }

    /// The number of steps taken so far.
    pub(crate) fn steps(&self) -> usize {
        self.steps
    }
}

/// Errors that can occur when setting up a scramble
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ScrambleError {
    #[error("the character pool is empty: pass a phrase or pick at least one character set")]
    EmptyPool,
}
