//! Wordle best guess - CLI
//!
//! Ranks first guesses, prints clue tables, searches guess pairs and plays
//! interactively.

use anyhow::{Context, Result, anyhow};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_best_guess::{
    commands::{PlayOutcome, PlaySession, run_play, run_rank},
    config::{Config, Mode, WordSource, rank_fn_from_flags, select_mode},
    output::{print_pair_search, print_rank_result, print_table},
    search::{DEFAULT_WORKERS, search_pairs},
    solver::clue_table,
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "best-guess",
    about = "Evaluate the best first word for a Wordle game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Rank guesses by expected size of partitions
    #[arg(long, conflicts_with = "worst")]
    expected: bool,

    /// Rank guesses by worst-case size of partitions
    #[arg(long)]
    worst: bool,

    /// Hard mode: only guess words that remain possible
    #[arg(long)]
    hard: bool,

    /// Sample words during processing
    #[arg(long, global = true)]
    telemetry: bool,

    /// Show the top N guesses
    #[arg(
        long,
        value_name = "N",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "10",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    top: Option<usize>,

    /// Optimize for a combination of N words (1 or 2)
    #[arg(
        long,
        value_name = "N",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "2",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=2)
    )]
    multi: Option<usize>,

    /// Show the solution table for a multi-guess solution
    #[arg(long, value_name = "GUESS1,GUESS2", value_delimiter = ',', num_args = 1..)]
    table: Option<Vec<String>>,

    /// Dictionary of legal guesses, one word per line (default: embedded)
    #[arg(long, value_name = "PATH", global = true)]
    words: Option<PathBuf>,

    /// Solution list, one word per line (default: embedded)
    #[arg(long, value_name = "PATH", global = true)]
    solutions: Option<PathBuf>,

    /// Worker threads for the pair search
    #[arg(long, value_name = "N", default_value_t = DEFAULT_WORKERS)]
    workers: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively: the program guesses, you give the clues
    Play,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mode = select_mode(self.multi, self.table.as_deref())?;

        let config = Config {
            rank_fn: rank_fn_from_flags(self.expected, self.worst),
            hard_mode: self.hard,
            mode,
            telemetry: self.telemetry,
            words: WordSource::from(self.words.clone()),
            solutions: WordSource::from(self.solutions.clone()),
            ..Config::default()
        }
        .with_top(self.top)?
        .with_workers(self.workers)?;

        Ok(config)
    }
}

fn init_tracing(telemetry: bool) -> Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if telemetry {
        filter = filter.add_directive("wordle_best_guess=debug".parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;
    init_tracing(config.telemetry)?;

    let lists = WordLists::load(&config.words, &config.solutions)
        .context("failed to load word lists")?;

    match cli.command {
        Some(Commands::Play) => run_play_command(&lists),
        None => run_mode(&config, &lists),
    }
}

fn run_mode(config: &Config, lists: &WordLists) -> Result<()> {
    match &config.mode {
        Mode::Pairs => {
            let result = search_pairs(&lists.solutions, config.search_options())
                .context("pair search failed")?;
            print_pair_search(&result);
        }
        Mode::Table(guesses) => {
            print_table(&clue_table(guesses, &lists.solutions));
        }
        Mode::Rank => {
            let result = run_rank(config, lists);
            print_rank_result(&result, config.show_top);
        }
    }
    Ok(())
}

fn run_play_command(lists: &WordLists) -> Result<()> {
    let session = PlaySession::new(&lists.dictionary, &lists.solutions)
        .ok_or_else(|| anyhow!("cannot play with an empty word list"))?;

    let outcome = run_play(session, io::stdin().lock(), io::stdout().lock())
        .context("interactive session failed")?;
    info!(?outcome, "session ended");

    if outcome == PlayOutcome::NoCandidates {
        return Err(anyhow!("no solution matches the clues given"));
    }
    Ok(())
}
