//! Word-list narrowing engine
//!
//! A Wordle-style solver that ranks words by letter-frequency heuristics and
//! iteratively narrows the candidate set with per-guess feedback until the
//! target is isolated.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_narrow::core::{Feedback, Word};
//! use wordle_narrow::solver::{Session, SessionState};
//!
//! let corpus: Vec<Word> = ["RAISE", "NOISY", "MOIST", "PUIST"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let mut session = Session::new(corpus).unwrap();
//! let guess = session.suggestion().unwrap().clone();
//!
//! let target = Word::new("PUIST").unwrap();
//! let feedback = Feedback::score(&guess, &target).unwrap();
//! session.apply(&feedback).unwrap();
//! ```

// Core domain types
pub mod core;

// Narrowing algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
