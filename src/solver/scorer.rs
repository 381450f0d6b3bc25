//! Starter-word scoring
//!
//! Good opening guesses cover many distinct letters, and among equally
//! diverse words the ones built from common letters probe more of the corpus.
//! The composite key orders by uniqueness first, frequency second.

use crate::core::{FrequencyTable, Word};
use std::cmp::Reverse;

/// Composite ranking key for opening guesses
///
/// Ordered lexicographically: uniqueness is primary, frequency breaks ties.
/// The derived `Ord` relies on field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StarterScore {
    /// Count of distinct letters, in `[1, word length]`
    pub uniqueness: usize,
    /// Sum of corpus-wide counts over every letter occurrence
    pub frequency: u64,
}

/// Count of distinct letters in a word
#[must_use]
pub fn uniqueness_score(word: &Word) -> usize {
    word.letters().len()
}

/// Sum of table counts over every letter occurrence in the word
///
/// Repeats count once per occurrence against the same table value, so a word
/// doubling a high-frequency letter is rewarded twice.
#[must_use]
pub fn frequency_score(word: &Word, table: &FrequencyTable) -> u64 {
    word.bytes().iter().map(|&letter| table.count(letter)).sum()
}

/// Composite starter score for a word
///
/// # Examples
/// ```
/// use wordle_narrow::core::{FrequencyTable, Word};
/// use wordle_narrow::solver::scorer::starter_score;
///
/// let corpus = vec![Word::new("AAAAA").unwrap(), Word::new("BBBCC").unwrap()];
/// let table = FrequencyTable::build(&corpus);
/// let score = starter_score(&Word::new("AABBB").unwrap(), &table);
/// assert_eq!(score.uniqueness, 2);
/// assert_eq!(score.frequency, 19);
/// ```
#[must_use]
pub fn starter_score(word: &Word, table: &FrequencyTable) -> StarterScore {
    StarterScore {
        uniqueness: uniqueness_score(word),
        frequency: frequency_score(word, table),
    }
}

/// Rank a corpus by starter score, best first
///
/// The sort is stable, so words with equal composite scores keep their
/// original corpus order. That makes ranking deterministic across runs.
#[must_use]
pub fn rank(corpus: &[Word], table: &FrequencyTable) -> Vec<Word> {
    let mut ranked = corpus.to_vec();
    ranked.sort_by_cached_key(|word| Reverse(starter_score(word, table)));
    ranked
}
