//! Interactive play mode
//!
//! The program guesses and the user answers each guess with a clue. After
//! every clue the live solution set is filtered and the next guess is the top
//! ranked word for what remains.

use crate::core::{Clue, Word, filter_by_clue};
use crate::output::formatters::clue_to_emoji;
use crate::solver::{RankFn, rank};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Opening guess when the dictionary contains it
pub const OPENING_GUESS: &str = "raise";

/// What a clue led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The last guess was the secret
    Solved { guesses: usize },
    /// No solution matches the clues given so far
    NoCandidates,
    /// The live set was narrowed and a new guess chosen
    Next {
        candidates: Vec<Word>,
        guess: Word,
        worst_case: usize,
    },
}

/// How a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { guesses: usize },
    NoCandidates,
    Quit,
}

/// State of one interactive game
#[derive(Debug, Clone)]
pub struct PlaySession<'a> {
    dictionary: &'a [Word],
    live: Vec<Word>,
    guess: Word,
    guesses: usize,
}

impl<'a> PlaySession<'a> {
    /// Start a game with the opening guess
    ///
    /// Opens with [`OPENING_GUESS`] if it is in the dictionary, otherwise with
    /// the top ranked word. Returns `None` if either list is empty.
    #[must_use]
    pub fn new(dictionary: &'a [Word], solutions: &[Word]) -> Option<Self> {
        if dictionary.is_empty() || solutions.is_empty() {
            return None;
        }

        let opening = Word::new(OPENING_GUESS)
            .ok()
            .filter(|w| dictionary.contains(w))
            .or_else(|| {
                rank(dictionary, 1, solutions, RankFn::Stat, false)
                    .into_iter()
                    .next()
                    .map(|record| record.guess)
            })?;

        Some(Self {
            dictionary,
            live: solutions.to_vec(),
            guess: opening,
            guesses: 1,
        })
    }

    /// The guess awaiting a clue
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Guesses made so far, including the current one
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    /// Solutions consistent with every clue so far
    #[must_use]
    pub fn live(&self) -> &[Word] {
        &self.live
    }

    /// Apply the clue for the current guess
    pub fn respond(&mut self, clue: Clue) -> Step {
        if clue.is_solved() {
            return Step::Solved {
                guesses: self.guesses,
            };
        }

        self.live = filter_by_clue(&self.guess, clue, &self.live);
        debug!(guess = %self.guess, %clue, remaining = self.live.len(), "clue applied");

        let (guess, worst_case) = match self.live.as_slice() {
            [] => return Step::NoCandidates,
            [only] => (only.clone(), 1),
            live => {
                let Some(best) = rank(self.dictionary, 1, live, RankFn::Stat, false)
                    .into_iter()
                    .next()
                else {
                    return Step::NoCandidates;
                };
                let worst_case = best.max();
                (best.guess, worst_case)
            }
        };

        self.guess = guess.clone();
        self.guesses += 1;

        Step::Next {
            candidates: self.live.clone(),
            guess,
            worst_case,
        }
    }
}

/// Run a game reading clues from `input` and writing to `output`
///
/// Ends when the secret is found, when no solution fits the clues, or at the
/// end of input.
///
/// # Errors
/// Returns any I/O error from reading or writing.
pub fn run_play<R, W>(mut session: PlaySession<'_>, input: R, mut output: W) -> io::Result<PlayOutcome>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Let's play Wordle!\n")?;
    writeln!(output, "When prompted for a clue type a 5-letter string of the form:")?;
    writeln!(output, "X - not in answer (Gray in Wordle)")?;
    writeln!(output, "! - correct letter in correct position (Green in Wordle)")?;
    writeln!(output, "? - correct letter in wrong position (Yellow in Wordle)")?;
    writeln!(output, "I guess '{}'.", session.guess())?;

    let mut lines = input.lines();
    loop {
        write!(output, "Clue: ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(PlayOutcome::Quit);
        };

        let Ok(clue) = line.trim().to_uppercase().parse::<Clue>() else {
            writeln!(output, "That's not a valid clue.")?;
            continue;
        };

        writeln!(output, "{} {}", session.guess(), clue_to_emoji(clue))?;

        match session.respond(clue) {
            Step::Solved { guesses } => {
                writeln!(output, "I win. It took me {guesses} guesses.")?;
                return Ok(PlayOutcome::Won { guesses });
            }
            Step::NoCandidates => {
                writeln!(output, "No words fit those clues.")?;
                return Ok(PlayOutcome::NoCandidates);
            }
            Step::Next {
                candidates,
                guess,
                worst_case,
            } => {
                let listed: Vec<&str> = candidates.iter().map(Word::text).collect();
                writeln!(output, "I've narrowed it down to {} words.", candidates.len())?;
                writeln!(output, "One of: {}", listed.join(", "))?;
                writeln!(output, "I'm going to guess '{guess}', now.")?;
                writeln!(
                    output,
                    "Because that will narrow it down to no more than {worst_case} words in the worst case."
                )?;
            }
        }
    }
}
