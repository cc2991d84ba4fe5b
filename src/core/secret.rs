//! Precomputed secret word
//!
//! Clue calculation needs the letter histogram of the secret. A solution set is
//! scored against thousands of guesses, so the histogram is built once per secret.

use super::word::{ALPHABET, Word};

/// A secret word together with its letter histogram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    word: Word,
    counts: [u8; ALPHABET],
}

impl Secret {
    #[must_use]
    pub fn new(word: Word) -> Self {
        let counts = word.letter_counts();
        Self { word, counts }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Letter histogram, indexed by `letter - b'A'`
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &[u8; ALPHABET] {
        &self.counts
    }

    /// Precompute every word of a solution set
    #[must_use]
    pub fn from_words(words: &[Word]) -> Vec<Self> {
        words.iter().cloned().map(Self::new).collect()
    }
}

impl From<Word> for Secret {
    fn from(word: Word) -> Self {
        Self::new(word)
    }
}
