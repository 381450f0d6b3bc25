//! Word representation
//!
//! A Word is an immutable uppercase alphabetic string. Unlike classic Wordle
//! the length is not fixed at 5; it is whatever length the session's
//! dictionary was loaded with, so the length lives in the data rather than
//! the type.

use super::LetterSet;
use std::fmt;

/// An uppercase alphabetic word of session-fixed length
///
/// Construction normalizes case and validates content. All words in a corpus
/// share the same length; that invariant is enforced where corpora are
/// assembled, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains non-alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is uppercased before validation, so `"raise"` and `"RAISE"`
    /// construct equal words.
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty, non-ASCII, or contains
    /// anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::Word;
    ///
    /// let word = Word::new("raise").unwrap();
    /// assert_eq!(word.text(), "RAISE");
    ///
    /// assert!(Word::new("ra1se").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (`b'A'..=b'Z'`)
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; empty input is rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.text.as_bytes().contains(&letter)
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.text.bytes().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("RAISE").unwrap();
        assert_eq!(word.text(), "RAISE");
        assert_eq!(word.bytes(), b"RAISE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("raise").unwrap();
        assert_eq!(word.text(), "RAISE");

        let word2 = Word::new("RaIsE").unwrap();
        assert_eq!(word2.text(), "RAISE");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("puzzle").unwrap().len(), 6);
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("rai5e").is_err()); // Number
        assert!(Word::new("rai e").is_err()); // Space
        assert!(Word::new("rais!").is_err()); // Punctuation
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("raise").unwrap();
        assert_eq!(word.letter_at(0), b'R');
        assert_eq!(word.letter_at(4), b'E');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("raise").unwrap();
        assert!(word.has_letter(b'R'));
        assert!(word.has_letter(b'E'));
        assert!(!word.has_letter(b'Z'));
    }

    #[test]
    fn word_letters_distinct() {
        let word = Word::new("AABBB").unwrap();
        let letters = word.letters();
        assert_eq!(letters.len(), 2);
        assert!(letters.contains(b'A'));
        assert!(letters.contains(b'B'));
        assert!(!letters.contains(b'C'));
    }

    #[test]
    fn word_display_and_equality() {
        let word1 = Word::new("raise").unwrap();
        let word2 = Word::new("RAISE").unwrap();
        let word3 = Word::new("arose").unwrap();

        assert_eq!(format!("{word1}"), "RAISE");
        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
