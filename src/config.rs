use crate::charset::CharacterClasses;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::time::Duration;

/// The default number of animation ticks per second.
pub(crate) const DEFAULT_SPEED_FACTOR: u32 = 20;

/// Everything that shapes a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
    /// How fast the animation ticks.
    pub speed_factor: SpeedFactor,
    /// Which characters seed the pool.
    pub classes: CharacterClasses,
    /// Whether a built-in phrase may be used when none is given.
    pub default_phrase: bool,
    /// Seed for the random source, for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed_factor: SpeedFactor::default(),
            classes: CharacterClasses::default(),
            default_phrase: true,
            seed: None,
        }
    }
}

/// Animation ticks per second. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SpeedFactor(NonZeroU32);

impl SpeedFactor {
    pub(crate) fn new(ticks_per_second: u32) -> Result<Self, ConfigError> {
        NonZeroU32::new(ticks_per_second).map(Self).ok_or(ConfigError::InvalidSpeedFactor(ticks_per_second.to_string()))
    }

    /// The pause between two frames.
    pub(crate) fn tick(&self) -> Duration {
        Duration::from_secs(1) / self.0.get()
    }
}

impl Default for SpeedFactor {
    fn default() -> Self {
        Self(NonZeroU32::new(DEFAULT_SPEED_FACTOR).unwrap_or(NonZeroU32::MIN))
    }
}

impl FromStr for SpeedFactor {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = input.trim().parse().map_err(|_| ConfigError::InvalidSpeedFactor(input.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for SpeedFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when building the configuration
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("speed factor must be a positive integer, got '{0}'")]
    InvalidSpeedFactor(String),
}
