//! Word lists for Wordle guess evaluation
//!
//! Provides the dictionary and solution list embedded at build time, and
//! loading of replacement lists from files.

mod embedded;
pub mod loader;

pub use embedded::{SOLUTIONS, SOLUTIONS_COUNT, WORDS, WORDS_COUNT};
pub use loader::{LoadError, WordLists};
