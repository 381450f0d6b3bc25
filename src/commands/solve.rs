//! Word solving command
//!
//! Auto-solves a specific target word and returns the narrowing path.

use crate::core::{Feedback, Word};
use crate::solver::{Session, SessionState};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub target: String,
    pub rounds: Vec<RoundStep>,
}

/// A single narrowing round in the solution path
pub struct RoundStep {
    pub guess: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a target word by repeatedly guessing the top-ranked candidate
///
/// Each round scores the guess against the target, narrows the candidate
/// list with the resulting feedback, and re-ranks. An exhausted candidate
/// list (target outside the corpus) ends the run with `success: false`
/// rather than an error.
///
/// # Errors
///
/// Returns an error if the target word is malformed or its length differs
/// from the corpus word length.
pub fn solve_word(config: SolveConfig, corpus: &[Word]) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut session =
        Session::new(corpus.to_vec()).map_err(|e| format!("Cannot start session: {e}"))?;

    if target.len() != session.word_len() {
        return Err(format!(
            "Target length {} does not match corpus word length {}",
            target.len(),
            session.word_len()
        ));
    }

    let mut rounds: Vec<RoundStep> = Vec::new();
    let mut success = false;

    for _ in 0..config.max_rounds {
        let candidates_before = session.candidates().len();

        let Some(guess) = session.suggestion().cloned() else {
            break;
        };

        let feedback =
            Feedback::score(&guess, &target).map_err(|e| format!("Scoring failed: {e}"))?;
        let state = session
            .apply(&feedback)
            .map_err(|e| format!("Narrowing failed: {e}"))?;

        let won = feedback.is_win();
        rounds.push(RoundStep {
            guess: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: session.candidates().len(),
        });

        if won {
            success = true;
            break;
        }

        if state == SessionState::Exhausted {
            break;
        }
    }

    Ok(SolveResult {
        success,
        target: config.target,
        rounds,
    })
}
