//! Secret and guess word representation
//!
//! A Word is a normalized, validated 5-letter uppercase ASCII word. Raw input is
//! trimmed and uppercased before it is checked.

use std::fmt;

/// Number of letters in every secret and guess
pub const WORD_LENGTH: usize = 5;

/// A 5-letter uppercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word must contain only letters A-Z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from raw input
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased before it
    /// is checked, so input whose uppercase form is plain A-Z is accepted.
    ///
    /// # Errors
    /// Returns `WordError` if, after trimming and uppercasing:
    /// - Length is not exactly 5
    /// - It still contains non-ASCII characters
    /// - It contains anything other than letters (digits, punctuation, inner spaces)
    ///
    /// # Examples
    /// ```
    /// use word_arcade::core::Word;
    ///
    /// let word = Word::new("  apple\n").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(Word::new("apples").is_err());
    /// assert!(Word::new("appl3").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, WordError> {
        let text = raw.as_ref().trim().to_uppercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Check whether raw input is an admissible guess
///
/// Total over any input; never panics and has no side effects.
///
/// # Examples
/// ```
/// use word_arcade::core::is_valid_guess;
///
/// assert!(is_valid_guess("apple"));
/// assert!(!is_valid_guess("ap-le"));
/// assert!(!is_valid_guess(""));
/// ```
#[must_use]
pub fn is_valid_guess(raw: &str) -> bool {
    Word::new(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("APPLE").unwrap();
        assert_eq!(word.text(), "APPLE");
        assert_eq!(word.chars(), b"APPLE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("apple").unwrap().text(), "APPLE");
        assert_eq!(Word::new("ApPlE").unwrap().text(), "APPLE");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  crane \r\n").unwrap().text(), "CRANE");
        assert_eq!(Word::new("\tcrane").unwrap(), Word::new("CRANE").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new("apples"), Err(WordError::InvalidLength(6))));
        assert!(matches!(Word::new("APP"), Err(WordError::InvalidLength(3))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
        assert!(matches!(Word::new("   "), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("appl3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ap-le"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ap le"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("appl!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_folds_before_checking() {
        // "ß" uppercases to "SS", leaving five plain letters
        assert_eq!(Word::new("maße").unwrap().text(), "MASSE");
        assert!(is_valid_guess("maße"));
    }

    #[test]
    fn word_creation_non_ascii() {
        assert_eq!(Word::new("applé"), Err(WordError::NonAscii));
        assert_eq!(Word::new("ÀPPLE"), Err(WordError::NonAscii));
        assert!(!is_valid_guess("applé"));
    }

    #[test]
    fn is_valid_guess_examples() {
        assert!(is_valid_guess("apple"));
        assert!(is_valid_guess(" MANGO "));
        assert!(!is_valid_guess("appl3"));
        assert!(!is_valid_guess("ap-le"));
        assert!(!is_valid_guess("apples"));
        assert!(!is_valid_guess("app"));
        assert!(!is_valid_guess(""));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "lemon".parse().unwrap();
        assert_eq!(format!("{word}"), "LEMON");
        assert!("lem0n".parse::<Word>().is_err());
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(
            WordError::InvalidLength(6).to_string(),
            "Word must be exactly 5 letters, got 6"
        );
        assert_eq!(
            WordError::InvalidCharacters.to_string(),
            "Word must contain only letters A-Z"
        );
    }
}
