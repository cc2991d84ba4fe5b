//! Word list loading
//!
//! Reads word lists from files or converts the embedded constants.

use crate::config::WordSource;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::{SOLUTIONS, WORDS};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no valid words", path.display())]
    Empty { path: PathBuf },
}

/// Dictionary and solution list for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    /// Legal guesses
    pub dictionary: Vec<Word>,
    /// Plausible secrets
    pub solutions: Vec<Word>,
}

impl WordLists {
    /// Load both lists from their sources
    ///
    /// # Errors
    /// Returns `LoadError` if a file cannot be read or has no valid words.
    pub fn load(words: &WordSource, solutions: &WordSource) -> Result<Self, LoadError> {
        let dictionary = match words {
            WordSource::Embedded => words_from_slice(WORDS),
            WordSource::File(path) => load_from_file(path)?,
        };
        let solutions = match solutions {
            WordSource::Embedded => words_from_slice(SOLUTIONS),
            WordSource::File(path) => load_from_file(path)?,
        };

        let known: FxHashSet<&Word> = dictionary.iter().collect();
        let outside = solutions.iter().filter(|w| !known.contains(w)).count();
        if outside > 0 {
            warn!(count = outside, "solutions missing from the dictionary");
        }

        info!(
            dictionary = dictionary.len(),
            solutions = solutions.len(),
            "word lists loaded"
        );

        Ok(Self {
            dictionary,
            solutions,
        })
    }

    /// The embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            dictionary: words_from_slice(WORDS),
            solutions: words_from_slice(SOLUTIONS),
        }
    }
}

/// Load words from a file, one per line
///
/// Blank lines are skipped, invalid entries are skipped with a warning and
/// repeated words keep their first occurrence.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Empty`
/// if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_best_guess::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(&content, path);
    if words.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(words)
}

fn parse_lines(content: &str, path: &Path) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) => {
                if seen.insert(word.clone()) {
                    words.push(word);
                }
            }
            Err(e) => warn!(path = %path.display(), line = line_no + 1, entry = trimmed, "skipping: {e}"),
        }
    }

    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_best_guess::wordlists::loader::words_from_slice;
/// use wordle_best_guess::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
