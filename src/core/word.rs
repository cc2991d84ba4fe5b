//! Wordle word representation
//!
//! A Word stores a 5-letter uppercase word as bytes for clue calculation.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word and every clue
pub const WORD_LENGTH: usize = 5;

/// Number of distinct letters (A-Z)
pub(crate) const ALPHABET: usize = 26;

/// A 5-letter Wordle word
///
/// Input is normalized to uppercase. Words are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_best_guess::core::Word;
    ///
    /// let word = Word::new("raise").unwrap();
    /// assert_eq!(word.text(), "RAISE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self { text, letters })
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
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Histogram of letters, indexed by `letter - b'A'`
    #[inline]
    pub(crate) fn letter_counts(&self) -> [u8; ALPHABET] {
        let mut counts = [0u8; ALPHABET];
        for &letter in &self.letters {
            counts[letter_index(letter)] += 1;
        }
        counts
    }
}

#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
