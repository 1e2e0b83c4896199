//! Word guess configuration

use crate::core::Word;
use crate::wordlists::{SECRETS, loader::words_from_slice};
use std::fmt;
use std::str::FromStr;

/// Attempts allowed per session
///
/// Only the two supported limits are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxAttempts {
    Six,
    #[default]
    Ten,
}

impl MaxAttempts {
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        match self {
            Self::Six => 6,
            Self::Ten => 10,
        }
    }
}

impl FromStr for MaxAttempts {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "6" => Ok(Self::Six),
            "10" => Ok(Self::Ten),
            other => Err(format!("attempts must be 6 or 10, got '{other}'")),
        }
    }
}

impl fmt::Display for MaxAttempts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Where a session's secret comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Same secret every session
    Fixed(Word),
    /// Uniform draw from a word list, optionally seeded for reproducible draws
    Random { words: Vec<Word>, seed: Option<u64> },
}

impl SecretSource {
    /// Random draw from the embedded secret list
    #[must_use]
    pub fn embedded(seed: Option<u64>) -> Self {
        Self::Random {
            words: words_from_slice(SECRETS),
            seed,
        }
    }
}

impl Default for SecretSource {
    fn default() -> Self {
        Self::embedded(None)
    }
}

/// Configuration for the word guess game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordGuessConfig {
    pub max_attempts: MaxAttempts,
    pub secret: SecretSource,
}

impl WordGuessConfig {
    #[must_use]
    pub const fn new(max_attempts: MaxAttempts, secret: SecretSource) -> Self {
        Self {
            max_attempts,
            secret,
        }
    }

    /// Config with a fixed secret and the default attempt limit
    #[must_use]
    pub fn fixed(secret: Word) -> Self {
        Self::new(MaxAttempts::default(), SecretSource::Fixed(secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_attempts_default_is_ten() {
        assert_eq!(MaxAttempts::default(), MaxAttempts::Ten);
        assert_eq!(MaxAttempts::default().get(), 10);
        assert_eq!(MaxAttempts::Six.get(), 6);
    }

    #[test]
    fn max_attempts_parses_only_supported_values() {
        assert_eq!("6".parse::<MaxAttempts>(), Ok(MaxAttempts::Six));
        assert_eq!("10".parse::<MaxAttempts>(), Ok(MaxAttempts::Ten));
        assert!("7".parse::<MaxAttempts>().is_err());
        assert!("ten".parse::<MaxAttempts>().is_err());
    }

    #[test]
    fn default_secret_source_uses_embedded_list() {
        match SecretSource::default() {
            SecretSource::Random { words, seed } => {
                assert_eq!(words.len(), SECRETS.len());
                assert_eq!(seed, None);
            }
            SecretSource::Fixed(_) => panic!("expected a random source"),
        }
    }
}
