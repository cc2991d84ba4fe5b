//! Wordle best guess
//!
//! Evaluates Wordle guesses by how well they partition the remaining
//! solutions: single-guess ranking, multi-guess clue tables and an exhaustive
//! search of two-guess openings on a worker pool.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_best_guess::core::{Clue, Word};
//!
//! let guess = Word::new("abase").unwrap();
//! let secret = Word::new("abide").unwrap();
//!
//! let clue = Clue::calculate(&guess, &secret);
//! assert_eq!(clue.to_string(), "!!XX!");
//! ```

// Core domain types
pub mod core;

// Partitioning and ranking
pub mod solver;

// Parallel pair search
pub mod search;

// Run configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
