//! Display functions for command results

use super::formatters::{colorize_guess, feedback_to_glyphs, score_bar};
use crate::commands::{BenchmarkResult, RankResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            colorize_guess(&step.guess, &step.feedback),
            feedback_to_glyphs(&step.feedback)
        );

        if verbose {
            println!(
                "  Masks:      green {}  yellow {}  black {}",
                step.feedback.green.to_string().bright_green(),
                step.feedback.yellow.to_string().bright_yellow(),
                step.feedback.absent.to_string().bright_black(),
            );
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} rounds", result.rounds.len())
                .red()
                .bold()
        );
    }
}

/// Print the top starter words of a ranked corpus
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} words)",
        "TOP STARTER WORDS".bright_cyan().bold(),
        result.corpus_size
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    let max_frequency = result
        .entries
        .first()
        .map_or(1, |entry| entry.frequency.max(1));

    for (i, entry) in result.entries.iter().enumerate() {
        let bar = score_bar(entry.frequency as f64, max_frequency as f64, 24);
        println!(
            "  {:>3}. {}  unique {}  [{}] {}",
            i + 1,
            entry.word.bright_white().bold(),
            entry.uniqueness,
            bar.green(),
            entry.frequency.to_string().bright_yellow(),
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({} failed)",
        result.solved.to_string().green(),
        result.failed
    );
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_rounds.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_rounds.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Round distribution:".bright_cyan().bold());
    let mut rounds: Vec<_> = result.distribution.iter().collect();
    rounds.sort_unstable();
    for (round, count) in rounds {
        let bar = score_bar(*count as f64, result.total_words as f64, 30);
        println!("   {round}: [{}] {count}", bar.cyan());
    }
    println!();
}
