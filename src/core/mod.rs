//! Core domain types for word-list narrowing
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod frequency;
mod letters;
mod mask;
mod word;

pub use frequency::FrequencyTable;
pub use letters::LetterSet;
pub use mask::{Feedback, Mask, MaskError};
pub use word::{Word, WordError};
