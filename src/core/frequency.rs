//! Letter frequency histogram
//!
//! Counts letter occurrences across a whole corpus. Every letter is
//! queryable; letters that never occur report 0 rather than being absent,
//! so downstream score sums never see a missing key.

use super::Word;

/// Occurrence counts for each letter `A..=Z` across a corpus
///
/// Built once per solving session and read-only afterward; narrowed corpora
/// are re-ranked against the original table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 26],
}

impl FrequencyTable {
    /// Build a table from a corpus
    ///
    /// A word contributes once per occurrence, not once per distinct letter:
    /// "AABBB" adds 2 to A and 3 to B. An empty corpus yields all zeros.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{FrequencyTable, Word};
    ///
    /// let corpus = vec![Word::new("AAAAA").unwrap(), Word::new("BBBCC").unwrap()];
    /// let table = FrequencyTable::build(&corpus);
    /// assert_eq!(table.count(b'A'), 5);
    /// assert_eq!(table.count(b'B'), 3);
    /// assert_eq!(table.count(b'Z'), 0);
    /// ```
    #[must_use]
    pub fn build(corpus: &[Word]) -> Self {
        let mut counts = [0u64; 26];
        for word in corpus {
            for &letter in word.bytes() {
                counts[usize::from(letter - b'A')] += 1;
            }
        }
        Self { counts }
    }

    /// Occurrence count for a letter, 0 if it never occurs
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u64 {
        debug_assert!(letter.is_ascii_uppercase(), "letter must be A..=Z");
        self.counts[(letter - b'A') as usize]
    }

    /// Total letter occurrences across the corpus
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
