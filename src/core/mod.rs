//! Core domain types for Wordle
//!
//! Words, clues and the clue engine. Everything here is pure and single-threaded;
//! the ranking and search layers build on it.

mod clue;
mod secret;
mod word;

pub use clue::{CLUE_COUNT, Clue, ClueError, Mark, filter_by_clue, is_valid_clue};
pub use secret::Secret;
pub use word::{WORD_LENGTH, Word, WordError};
