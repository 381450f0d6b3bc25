//! Narrowing session
//!
//! Drives repeated guess → feedback → narrow → re-rank cycles over a
//! shrinking candidate list. The session owns the current corpus as explicit
//! local state; every round produces a fresh list rather than mutating the
//! old one in place. The frequency table is built once from the starting
//! corpus and reused for every re-rank.

use crate::core::{Feedback, FrequencyTable, MaskError, Word};
use crate::solver::{filter, scorer};
use std::fmt;

/// Resting states of a narrowing session
///
/// `Initialized` and `Narrowed` from the state machine are transient: a new
/// session ranks its corpus immediately, and each `apply` resolves the
/// narrowed list straight into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// More than one candidate remains; the caller picks the next guess
    AwaitingGuess,
    /// Exactly one candidate remains, or the caller declared victory
    Solved,
    /// No candidates remain: inconsistent feedback or a target outside the
    /// corpus. Reportable, never a panic.
    Exhausted,
}

/// Error type for session construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyCorpus,
    MixedLengths { expected: usize, found: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "Cannot start a session with an empty corpus"),
            Self::MixedLengths { expected, found } => {
                write!(
                    f,
                    "Corpus mixes word lengths: expected {expected}, found {found}"
                )
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// A solving session over a fixed-length word corpus
pub struct Session {
    word_len: usize,
    table: FrequencyTable,
    candidates: Vec<Word>,
    rounds: usize,
    state: SessionState,
}

impl Session {
    /// Start a session: build the frequency table and rank the corpus
    ///
    /// # Errors
    /// Returns `SessionError` if the corpus is empty or mixes word lengths.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::Word;
    /// use wordle_narrow::solver::{Session, SessionState};
    ///
    /// let corpus: Vec<Word> = ["RAISE", "NOISY", "PUIST"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let session = Session::new(corpus).unwrap();
    /// assert_eq!(session.state(), SessionState::AwaitingGuess);
    /// assert!(session.suggestion().is_some());
    /// ```
    pub fn new(corpus: Vec<Word>) -> Result<Self, SessionError> {
        let Some(first) = corpus.first() else {
            return Err(SessionError::EmptyCorpus);
        };
        let word_len = first.len();

        if let Some(odd) = corpus.iter().find(|word| word.len() != word_len) {
            return Err(SessionError::MixedLengths {
                expected: word_len,
                found: odd.len(),
            });
        }

        let table = FrequencyTable::build(&corpus);
        let candidates = scorer::rank(&corpus, &table);
        let state = if candidates.len() == 1 {
            SessionState::Solved
        } else {
            SessionState::AwaitingGuess
        };

        Ok(Self {
            word_len,
            table,
            candidates,
            rounds: 0,
            state,
        })
    }

    /// The session's fixed word length
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Number of feedback rounds applied so far
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Current candidates, best starter first
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// The session-wide frequency table (built once, read-only)
    #[must_use]
    pub const fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Top-ranked candidate, if any remain
    #[must_use]
    pub fn suggestion(&self) -> Option<&Word> {
        self.candidates.first()
    }

    /// Narrow the candidates with one round of feedback and re-rank
    ///
    /// # Errors
    /// Returns `MaskError::LengthMismatch` when the feedback masks were built
    /// for a different word length than this session's.
    pub fn apply(&mut self, feedback: &Feedback) -> Result<SessionState, MaskError> {
        // Feedback fields are public, so both masks need checking
        for mask in [&feedback.green, &feedback.yellow] {
            if mask.len() != self.word_len {
                return Err(MaskError::LengthMismatch {
                    expected: self.word_len,
                    found: mask.len(),
                });
            }
        }

        let narrowed = filter::narrow(&self.candidates, feedback);
        self.candidates = scorer::rank(&narrowed, &self.table);
        self.rounds += 1;
        self.state = match self.candidates.len() {
            0 => SessionState::Exhausted,
            1 => SessionState::Solved,
            _ => SessionState::AwaitingGuess,
        };

        Ok(self.state)
    }

    /// Score a guess against a known target and apply the feedback
    ///
    /// Oracle convenience for auto-solving and benchmarks.
    ///
    /// # Errors
    /// Returns `MaskError::LengthMismatch` when guess or target lengths
    /// differ from the session's word length.
    pub fn apply_guess(&mut self, guess: &Word, target: &Word) -> Result<SessionState, MaskError> {
        if guess.len() != self.word_len {
            return Err(MaskError::LengthMismatch {
                expected: self.word_len,
                found: guess.len(),
            });
        }
        let feedback = Feedback::score(guess, target)?;
        self.apply(&feedback)
    }

    /// Caller declares victory (the guess was confirmed correct externally)
    pub const fn declare_solved(&mut self) {
        self.state = SessionState::Solved;
    }
}
