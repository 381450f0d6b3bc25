//! Dictionary loading utilities
//!
//! Loads newline-separated dictionary files, keeping only pure-alphabetic
//! words of the requested length. Absence of qualifying words is a value
//! (`None`), not an error, so callers can fall back to another length or
//! source.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of a given length from a dictionary file
///
/// Lines are trimmed, case-normalized, and filtered to pure-alphabetic words
/// of exactly `letter_count` letters; duplicates are dropped, keeping the
/// first occurrence. Returns `Ok(None)` when the file holds no qualifying
/// words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_narrow::wordlists::loader::load_dictionary;
///
/// let words = load_dictionary(5, "/usr/share/dict/words")
///     .unwrap()
///     .expect("no 5-letter words");
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(
    letter_count: usize,
    path: P,
) -> io::Result<Option<Vec<Word>>> {
    let content = fs::read_to_string(path)?;

    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.len() == letter_count {
                Word::new(trimmed).ok()
            } else {
                None
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect();

    Ok((!words.is_empty()).then_some(words))
}

/// Convert an embedded string slice to a Word vector
///
/// Invalid entries are skipped.
///
/// # Examples
/// ```
/// use wordle_narrow::wordlists::loader::words_from_slice;
/// use wordle_narrow::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
