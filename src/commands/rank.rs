//! Starter ranking command
//!
//! Ranks a corpus by starter score and reports the top entries.

use crate::core::{FrequencyTable, Word};
use crate::solver::scorer;

/// One ranked starter word with its score components
pub struct RankEntry {
    pub word: String,
    pub uniqueness: usize,
    pub frequency: u64,
}

/// Result of ranking a corpus
pub struct RankResult {
    pub corpus_size: usize,
    pub entries: Vec<RankEntry>,
}

/// Rank a corpus by starter score and keep the top `count` entries
#[must_use]
pub fn rank_starters(corpus: &[Word], count: usize) -> RankResult {
    let table = FrequencyTable::build(corpus);
    let ranked = scorer::rank(corpus, &table);

    let entries = ranked
        .iter()
        .take(count)
        .map(|word| {
            let score = scorer::starter_score(word, &table);
            RankEntry {
                word: word.text().to_string(),
                uniqueness: score.uniqueness,
                frequency: score.frequency,
            }
        })
        .collect();

    RankResult {
        corpus_size: corpus.len(),
        entries,
    }
}
