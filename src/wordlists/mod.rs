//! Word lists and dictionary loading
//!
//! Provides an embedded demo dictionary compiled into the binary, a loader
//! for external dictionary files, and random target selection for practice
//! games.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::prelude::IndexedRandom;

/// Pick a uniformly random word from a corpus
///
/// Used for demo/practice target selection only; the narrowing core never
/// draws randomness. Returns `None` on an empty corpus.
#[must_use]
pub fn pick_random(corpus: &[Word]) -> Option<&Word> {
    corpus.choose(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for &word in WORDS {
            assert!(seen.insert(word), "Word '{word}' appears twice");
        }
    }

    #[test]
    fn pick_random_returns_corpus_member() {
        let words = words_from_slice(&WORDS[..20]);

        for _ in 0..10 {
            let picked = pick_random(&words).unwrap();
            assert!(words.contains(picked));
        }
    }

    #[test]
    fn pick_random_empty_corpus() {
        assert!(pick_random(&[]).is_none());
    }
}
