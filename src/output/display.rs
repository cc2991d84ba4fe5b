//! Display functions for command results

use super::formatters::{join_words, record_line, table_line, trial_guesses};
use crate::commands::RankResult;
use crate::search::PairSearch;
use crate::solver::{TableRow, Trial};
use colored::Colorize;

/// Print the optimal first guess and, if requested, the top records
pub fn print_rank_result(result: &RankResult, show_top: bool) {
    let Some(best) = result.best() else {
        println!("{}", "No guesses to rank.".red());
        return;
    };

    println!(
        "Optimal first guess is '{}' with at most {} words remaining",
        best.guess.text().bright_yellow().bold(),
        best.max_set.len()
    );

    if !show_top {
        return;
    }

    let mode = if result.hard_mode { " (hard mode)" } else { "" };
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " Top {} of {} solutions by {}{mode}",
        result.records.len(),
        result.total_solutions,
        result.rank_fn.name().bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, record) in result.records.iter().enumerate() {
        println!("{}", record_line(i + 1, record, result.rank_fn));
        println!("     largest group: {}", join_words(&record.max_set, " ").dimmed());
    }
}

/// Print a clue table, one row per pattern
pub fn print_table(rows: &[TableRow]) {
    for row in rows {
        println!("{}", table_line(row));
    }
}

fn print_trial(title: &str, trial: &Trial) {
    println!("{}: {}\n", title.bright_cyan().bold(), trial_guesses(trial));
    println!("  Expected: {}\n", trial.expected);
    println!("  Max: {}\n", trial.max);
}

/// Print both bests of a pair search
pub fn print_pair_search(result: &PairSearch) {
    print_trial("Min-Max", &result.best_max);
    print_trial("Expected", &result.best_expected);
    println!(
        "{}",
        format!(
            "Evaluated {} pairs in {:.2}s",
            result.evaluated,
            result.duration.as_secs_f64()
        )
        .dimmed()
    );
}
