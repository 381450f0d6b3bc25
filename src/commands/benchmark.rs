//! Benchmark command
//!
//! Solves many target words and aggregates round counts. Targets run in
//! parallel; the narrowing core is pure, so sessions share nothing but the
//! read-only base corpus.

use crate::core::Word;
use crate::solver::{Session, SessionState};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Rounds spent solving one target, and whether it was found
fn solve_one(corpus: &[Word], target: &Word, round_limit: usize) -> (usize, bool) {
    let Ok(mut session) = Session::new(corpus.to_vec()) else {
        return (0, false);
    };

    for round in 1..=round_limit {
        let Some(guess) = session.suggestion().cloned() else {
            return (round - 1, false);
        };

        if guess == *target {
            return (round, true);
        }

        match session.apply_guess(&guess, target) {
            Ok(SessionState::Exhausted) => return (round, false),
            Ok(_) => {}
            Err(_) => return (round, false),
        }
    }

    (round_limit, false)
}

/// Run the solver against each target word and collect statistics
///
/// `round_limit` caps the guesses per target (classic Wordle allows 6).
/// With `show_progress` a progress bar tracks completed targets.
#[must_use]
pub fn run_benchmark(
    corpus: &[Word],
    targets: &[Word],
    round_limit: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let progress = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    let outcomes: Vec<(usize, bool)> = targets
        .par_iter()
        .map(|target| {
            let outcome = solve_one(corpus, target, round_limit);
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            outcome
        })
        .collect();

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    let duration = start.elapsed();
    let total_words = targets.len();

    let mut total_rounds = 0;
    let mut solved = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for &(rounds, success) in &outcomes {
        total_rounds += rounds;
        if success {
            solved += 1;
        }
        min_rounds = min_rounds.min(rounds);
        max_rounds = max_rounds.max(rounds);
        *distribution.entry(rounds).or_insert(0) += 1;
    }

    if total_words == 0 {
        min_rounds = 0;
    }

    BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        average_rounds: if total_words == 0 {
            0.0
        } else {
            total_rounds as f64 / total_words as f64
        },
        min_rounds,
        max_rounds,
        distribution,
        duration,
        words_per_second: if duration.as_secs_f64() > 0.0 {
            total_words as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}
