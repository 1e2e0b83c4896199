//! Letters-in-common feedback for a guess
//!
//! Feedback is the set of distinct letters shared by the secret and the guess,
//! ordered by where each letter first appears in the secret. Anchoring on the
//! secret keeps the order stable across different guesses.

use super::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Distinct letters shared by a secret and a guess, in secret order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonLetters(Vec<u8>);

impl CommonLetters {
    /// Calculate the letters `guess` has in common with `secret`
    ///
    /// # Examples
    /// ```
    /// use word_arcade::core::{CommonLetters, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("lemon").unwrap();
    /// assert_eq!(CommonLetters::calculate(&secret, &guess).to_string(), "L E");
    /// ```
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        let in_guess: FxHashSet<u8> = guess.chars().iter().copied().collect();
        let mut seen = FxHashSet::default();

        let letters = secret
            .chars()
            .iter()
            .copied()
            .filter(|letter| in_guess.contains(letter) && seen.insert(*letter))
            .collect();

        Self(letters)
    }

    /// The shared letters as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CommonLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &letter) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common(secret: &str, guess: &str) -> String {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        CommonLetters::calculate(&secret, &guess).to_string()
    }

    #[test]
    fn ordered_by_secret_not_guess() {
        // ELBOW lists E before L; APPLE has L first
        assert_eq!(common("APPLE", "ELBOW"), "L E");
        assert_eq!(common("APPLE", "LEMON"), "L E");
        assert_eq!(common("APPLE", "NOBLE"), "L E");
        assert_eq!(common("APPLE", "EAGLE"), "A L E");
    }

    #[test]
    fn duplicates_collapse() {
        // P appears twice in APPLE and twice in PUPPY, reported once
        assert_eq!(common("APPLE", "PUPPY"), "P");
        let secret = Word::new("APPLE").unwrap();
        let guess = Word::new("PAPAL").unwrap();
        assert_eq!(CommonLetters::calculate(&secret, &guess).letters(), b"APL");
    }

    #[test]
    fn nothing_in_common_renders_empty() {
        let secret = Word::new("APPLE").unwrap();
        let guess = Word::new("DUMBS").unwrap();
        let letters = CommonLetters::calculate(&secret, &guess);
        assert!(letters.is_empty());
        assert_eq!(letters.to_string(), "");
    }

    #[test]
    fn identical_words_share_every_distinct_letter() {
        let word = Word::new("APPLE").unwrap();
        let letters = CommonLetters::calculate(&word, &word);
        assert_eq!(letters.len(), 4);
        assert_eq!(letters.to_string(), "A P L E");
    }

    #[test]
    fn anagram_keeps_secret_order() {
        assert_eq!(common("CRANE", "NACRE"), "C R A N E");
    }
}
