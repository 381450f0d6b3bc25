//! Narrowing algorithms
//!
//! Frequency-based scoring, mask filtering, and the session that drives
//! repeated guess → feedback → narrow → re-rank cycles.

pub mod filter;
pub mod scorer;
mod session;

pub use scorer::StarterScore;
pub use session::{Session, SessionError, SessionState};
