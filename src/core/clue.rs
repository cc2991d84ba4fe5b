//! Wordle clue calculation and representation
//!
//! A clue encodes the feedback for a guess using base-3 encoding:
//! - 0 = Miss (`X`, letter not available in the secret)
//! - 1 = Present (`?`, letter in the secret, wrong position)
//! - 2 = Hit (`!`, correct letter, correct position)
//!
//! The clue is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::secret::Secret;
use super::word::{ALPHABET, WORD_LENGTH, Word, letter_index};
use std::fmt;
use thiserror::Error;

/// Number of distinct clues (3^5)
pub const CLUE_COUNT: usize = 243;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter absent (or all occurrences already accounted for)
    Miss,
    /// Letter present at another position
    Present,
    /// Correct letter, correct position
    Hit,
}

impl Mark {
    /// Symbol used in clue strings
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hit => '!',
            Self::Present => '?',
            Self::Miss => 'X',
        }
    }

    /// Parse a single clue symbol (`x` is accepted in lower case)
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '!' => Some(Self::Hit),
            '?' => Some(Self::Present),
            'X' | 'x' => Some(Self::Miss),
            _ => None,
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Miss,
        }
    }
}

/// Error type for malformed clue strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    #[error("Clue must be exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("Invalid clue symbol '{0}' (expected '!', '?' or 'X')")]
    InvalidSymbol(char),
}

/// Feedback for a guess against a secret
///
/// Represents the per-position marks as a single byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clue(u8);

impl Clue {
    /// All hits (solved)
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a clue from a raw value, `None` unless it is below [`CLUE_COUNT`]
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < CLUE_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw clue value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this clue means the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Calculate the clue when `guess` is played and `secret` is the target
    ///
    /// Duplicate letters are accounted for in two passes:
    /// 1. Exact position matches become hits and consume one occurrence from the secret
    /// 2. Remaining positions become present while unconsumed occurrences remain, else miss
    ///
    /// # Examples
    /// ```
    /// use wordle_best_guess::core::{Clue, Word};
    ///
    /// let guess = Word::new("abase").unwrap();
    /// let secret = Word::new("abide").unwrap();
    /// assert_eq!(Clue::calculate(&guess, &secret).to_string(), "!!XX!");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        Self::from_counts(guess, secret.letters(), secret.letter_counts())
    }

    /// Calculate the clue against a secret whose letter tally is precomputed
    ///
    /// Always equal to [`Clue::calculate`] with the secret's word.
    #[inline]
    #[must_use]
    pub fn against(guess: &Word, secret: &Secret) -> Self {
        Self::from_counts(guess, secret.word().letters(), *secret.counts())
    }

    fn from_counts(
        guess: &Word,
        secret: &[u8; WORD_LENGTH],
        mut available: [u8; ALPHABET],
    ) -> Self {
        let guess = guess.letters();
        let mut result = [0u8; WORD_LENGTH];

        // Allow: Index needed to compare guess[i] with secret[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                result[i] = Mark::Hit.digit();
                available[letter_index(guess[i])] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == 0 {
                let count = &mut available[letter_index(guess[i])];
                if *count > 0 {
                    result[i] = Mark::Present.digit();
                    *count -= 1;
                }
            }
        }

        Self::encode(result)
    }

    fn encode(digits: [u8; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for digit in digits {
            value += digit * multiplier;
            multiplier *= 3;
        }
        Self(value)
    }

    /// Per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Count the number of hits
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Hit).count()
    }

    /// Count the number of present marks
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Parse a clue string like `"!?XX!"`
    ///
    /// # Errors
    /// Returns `ClueError` for a wrong length or a symbol outside `!`, `?`, `X`.
    pub fn parse(s: &str) -> Result<Self, ClueError> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(ClueError::InvalidLength(len));
        }

        let mut digits = [0u8; WORD_LENGTH];
        for (digit, ch) in digits.iter_mut().zip(s.chars()) {
            *digit = Mark::from_symbol(ch)
                .ok_or(ClueError::InvalidSymbol(ch))?
                .digit();
        }

        Ok(Self::encode(digits))
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Clue {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Check that `s` is a 5-symbol clue over `!`, `?` and `X`
#[must_use]
pub fn is_valid_clue(s: &str) -> bool {
    Clue::parse(s).is_ok()
}

/// Keep the candidates that would produce `clue` if `guess` were played against them
///
/// Candidate order is preserved.
#[must_use]
pub fn filter_by_clue(guess: &Word, clue: Clue, candidates: &[Word]) -> Vec<Word> {
    candidates
        .iter()
        .filter(|&candidate| Clue::calculate(guess, candidate) == clue)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn clue_of(guess: &str, secret: &str) -> String {
        Clue::calculate(&word(guess), &word(secret)).to_string()
    }

    #[test]
    fn raw_values_outside_the_clue_range_are_rejected() {
        assert_eq!(Clue::new(0).map(Clue::value), Some(0));
        assert_eq!(Clue::new(242), Some(Clue::SOLVED));
        assert_eq!(Clue::new(243), None);
        assert_eq!(Clue::new(250), None);
        assert_eq!(Clue::new(u8::MAX), None);
    }

    #[test]
    fn solved_constant() {
        assert!(Clue::SOLVED.is_solved());
        assert_eq!(Clue::SOLVED.count_hits(), 5);
        assert_eq!(Clue::SOLVED.to_string(), "!!!!!");
    }

    #[test]
    fn clue_all_miss() {
        let clue = Clue::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(clue.value(), 0);
        assert_eq!(clue.to_string(), "XXXXX");
    }

    #[test]
    fn clue_of_word_against_itself_is_solved() {
        for w in ["crane", "speed", "aaaaa", "abase", "xylyl"] {
            assert_eq!(Clue::calculate(&word(w), &word(w)), Clue::SOLVED);
        }
    }

    #[test]
    fn clue_abase_against_abide() {
        assert_eq!(clue_of("abase", "abide"), "!!XX!");
    }

    #[test]
    fn clue_speed_against_erase() {
        // ERASE has two E's and one S: both E's and the S are present, P and D miss
        let clue = Clue::calculate(&word("speed"), &word("erase"));
        assert_eq!(clue.to_string(), "?X??X");
        assert_eq!(clue.count_present(), 3);
        assert_eq!(clue.count_hits(), 0);
    }

    #[test]
    fn clue_duplicate_guess_letter_not_over_credited() {
        // ABIDE has one A: the hit at position 0 consumes it, the second A misses
        assert_eq!(clue_of("abase", "abide"), "!!XX!");
        // SPEED has two E's: only the first two of EERIE's three E's are credited
        assert_eq!(clue_of("eerie", "speed"), "??XXX");
        // ROBOT vs FLOOR: first O present, second O hit
        assert_eq!(clue_of("robot", "floor"), "??X!X");
    }

    #[test]
    fn clue_marks_never_exceed_secret_letter_count() {
        let words = ["speed", "erase", "eerie", "geese", "abase", "abide", "llama"];
        for g in words {
            for s in words {
                let guess = word(g);
                let secret = word(s);
                let marks = Clue::calculate(&guess, &secret).marks();
                for letter in b'A'..=b'Z' {
                    let credited = (0..WORD_LENGTH)
                        .filter(|&i| guess.letter_at(i) == letter && marks[i] != Mark::Miss)
                        .count();
                    let in_secret = secret.letters().iter().filter(|&&l| l == letter).count();
                    assert!(credited <= in_secret, "{g} vs {s} over-credits {letter}");
                }
            }
        }
    }

    #[test]
    fn clue_against_secret_matches_naive() {
        let words: Vec<Word> = ["speed", "erase", "crane", "abase", "abide", "geese", "robot"]
            .into_iter()
            .map(word)
            .collect();
        for guess in &words {
            for secret in &words {
                assert_eq!(
                    Clue::against(guess, &Secret::new(secret.clone())),
                    Clue::calculate(guess, secret)
                );
            }
        }
    }

    #[test]
    fn parse_and_display() {
        let clue = Clue::parse("!?XX!").unwrap();
        assert_eq!(clue.to_string(), "!?XX!");
        assert_eq!(Clue::parse("!?xx!").unwrap(), clue);
        // ! = 2, ? = 1: 2 + 1×3 + 2×81 = 167
        assert_eq!(clue.value(), 167);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(Clue::parse("!!!!"), Err(ClueError::InvalidLength(4)));
        assert_eq!(Clue::parse("!!!!!!"), Err(ClueError::InvalidLength(6)));
        assert_eq!(Clue::parse("!!G!!"), Err(ClueError::InvalidSymbol('G')));
        assert!(Clue::parse("").is_err());
    }

    #[test]
    fn valid_clue_strings() {
        assert!(is_valid_clue("XXXXX"));
        assert!(is_valid_clue("!!!!!"));
        assert!(is_valid_clue("?x!X?"));
        assert!(!is_valid_clue("XXXX"));
        assert!(!is_valid_clue("XXXXY"));
        assert!(!is_valid_clue("GYG--"));
    }

    #[test]
    fn filter_keeps_true_secret() {
        let candidates: Vec<Word> = ["abide", "badly", "abase", "aback", "adieu", "raise"]
            .into_iter()
            .map(word)
            .collect();
        for guess in &candidates {
            for secret in &candidates {
                let clue = Clue::calculate(guess, secret);
                let remaining = filter_by_clue(guess, clue, &candidates);
                assert!(remaining.contains(secret));
                assert!(
                    remaining
                        .iter()
                        .all(|w| Clue::calculate(guess, w) == clue)
                );
            }
        }
    }

    #[test]
    fn filter_preserves_order() {
        let candidates: Vec<Word> = ["aback", "abase", "abide"].into_iter().map(word).collect();
        let clue = Clue::parse("XXXXX").unwrap();
        let remaining = filter_by_clue(&word("lowly"), clue, &candidates);
        assert_eq!(remaining, candidates);
    }
}
