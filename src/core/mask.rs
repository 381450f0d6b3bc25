//! Guess feedback: positional masks and the absent-letter set
//!
//! Comparing a guess against a target yields three pieces of feedback:
//! a green mask (letters confirmed at their position), a yellow mask
//! (letters present but misplaced), and a black set (letters absent from the
//! target entirely). A mask slot is either a letter or a placeholder; the
//! string form uses `-` for the placeholder, e.g. `"-B---"`.
//!
//! The black set is a plain set-difference of guess letters minus target
//! letters. With repeated letters this can disagree with canonical Wordle's
//! multiset accounting; the green → yellow → black filter order relies on
//! exactly these semantics, so they are kept as-is.

use super::{LetterSet, Word};
use std::fmt;

/// Placeholder character in the string form of a mask
pub const PLACEHOLDER: char = '-';

/// A positional letter mask
///
/// One slot per letter of the word; `Some(letter)` constrains that position,
/// `None` imposes nothing. Green and yellow masks share this representation
/// and differ only in how the filter interprets a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    slots: Vec<Option<u8>>,
}

/// Error type for mask construction and pattern parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Guess and target (or pattern) lengths differ; caller contract violation
    LengthMismatch { expected: usize, found: usize },
    /// Pattern string contains a character other than `G`, `Y`, or `-`
    InvalidPattern(char),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "Length mismatch: expected {expected} letters, got {found}")
            }
            Self::InvalidPattern(ch) => {
                write!(f, "Invalid pattern character '{ch}' (use G, Y, or -)")
            }
        }
    }
}

impl std::error::Error for MaskError {}

fn check_lengths(guess: &Word, target: &Word) -> Result<(), MaskError> {
    if guess.len() == target.len() {
        Ok(())
    } else {
        Err(MaskError::LengthMismatch {
            expected: target.len(),
            found: guess.len(),
        })
    }
}

impl Mask {
    /// Build the green (positional match) mask for a guess against a target
    ///
    /// A slot holds `guess[i]` iff `guess[i] == target[i]`.
    ///
    /// # Errors
    /// Returns `MaskError::LengthMismatch` when the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{Mask, Word};
    ///
    /// let guess = Word::new("ABCDE").unwrap();
    /// let target = Word::new("BBBBB").unwrap();
    /// let mask = Mask::green(&guess, &target).unwrap();
    /// assert_eq!(mask.to_string(), "-B---");
    /// ```
    pub fn green(guess: &Word, target: &Word) -> Result<Self, MaskError> {
        check_lengths(guess, target)?;

        let slots = guess
            .bytes()
            .iter()
            .zip(target.bytes())
            .map(|(&g, &t)| (g == t).then_some(g))
            .collect();

        Ok(Self { slots })
    }

    /// Build the yellow (weak match) mask for a guess against a target
    ///
    /// A slot holds `guess[i]` iff `guess[i] != target[i]` and `guess[i]`
    /// occurs anywhere in the target.
    ///
    /// # Errors
    /// Returns `MaskError::LengthMismatch` when the lengths differ.
    pub fn yellow(guess: &Word, target: &Word) -> Result<Self, MaskError> {
        check_lengths(guess, target)?;

        let slots = guess
            .bytes()
            .iter()
            .zip(target.bytes())
            .map(|(&g, &t)| (g != t && target.has_letter(g)).then_some(g))
            .collect();

        Ok(Self { slots })
    }

    /// An all-placeholder mask of the given length
    #[must_use]
    pub fn unconstrained(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the mask has zero slots
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a letter
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// True if no slot holds a letter (the mask filters nothing)
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.constraint_count() == 0
    }

    /// The set of letters appearing in the mask
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.slots.iter().flatten().copied().collect()
    }

    /// Check whether a word satisfies every constrained slot
    ///
    /// True iff at every position where the mask holds a letter, the word has
    /// that same letter. Placeholder slots impose nothing, so an
    /// unconstrained mask matches every word.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.slots
            .iter()
            .zip(word.bytes())
            .all(|(slot, &letter)| slot.is_none_or(|required| required == letter))
    }

    /// Parse a mask from its string form, e.g. `"-B---"`
    ///
    /// # Errors
    /// Returns `MaskError::InvalidPattern` for anything other than letters
    /// and `-` placeholders.
    pub fn parse(s: &str) -> Result<Self, MaskError> {
        let slots = s
            .chars()
            .map(|ch| match ch {
                PLACEHOLDER => Ok(None),
                ch if ch.is_ascii_alphabetic() => Ok(Some(ch.to_ascii_uppercase() as u8)),
                ch => Err(MaskError::InvalidPattern(ch)),
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { slots })
    }

    /// Iterate the slots
    pub fn slots(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.slots.iter().copied()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(letter) => write!(f, "{}", *letter as char)?,
                None => write!(f, "{PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}

/// The complete feedback a player receives for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Letters confirmed at their position
    pub green: Mask,
    /// Letters present in the target but misplaced
    pub yellow: Mask,
    /// Letters absent from the target (set-difference semantics)
    pub absent: LetterSet,
}

impl Feedback {
    /// Score a guess against a known target, producing all three feedback parts
    ///
    /// # Errors
    /// Returns `MaskError::LengthMismatch` when guess and target lengths differ.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{Feedback, Word};
    ///
    /// let guess = Word::new("RAISE").unwrap();
    /// let target = Word::new("PUIST").unwrap();
    /// let feedback = Feedback::score(&guess, &target).unwrap();
    ///
    /// assert_eq!(feedback.green.to_string(), "--IS-");
    /// assert_eq!(feedback.yellow.to_string(), "-----");
    /// assert_eq!(feedback.absent.to_string(), "{A,E,R}");
    /// ```
    pub fn score(guess: &Word, target: &Word) -> Result<Self, MaskError> {
        let green = Mask::green(guess, target)?;
        let yellow = Mask::yellow(guess, target)?;
        let absent = guess.letters().difference(target.letters());

        Ok(Self {
            green,
            yellow,
            absent,
        })
    }

    /// Build feedback from a player-reported color pattern like `"GY-G-"`
    ///
    /// Accepts `G`/`g` for green, `Y`/`y` for yellow, and `-`/`_` for black.
    /// A letter marked black at one position but green or yellow at another
    /// is present in the target, so it stays out of the absent set.
    ///
    /// # Errors
    /// Returns `MaskError::LengthMismatch` when the pattern length differs
    /// from the guess, or `MaskError::InvalidPattern` on other characters.
    pub fn from_pattern(guess: &Word, pattern: &str) -> Result<Self, MaskError> {
        let marks: Vec<char> = pattern.chars().collect();
        if marks.len() != guess.len() {
            return Err(MaskError::LengthMismatch {
                expected: guess.len(),
                found: marks.len(),
            });
        }

        let mut green_slots = Vec::with_capacity(guess.len());
        let mut yellow_slots = Vec::with_capacity(guess.len());
        let mut grays = LetterSet::new();

        for (&letter, mark) in guess.bytes().iter().zip(marks) {
            match mark {
                'G' | 'g' => {
                    green_slots.push(Some(letter));
                    yellow_slots.push(None);
                }
                'Y' | 'y' => {
                    green_slots.push(None);
                    yellow_slots.push(Some(letter));
                }
                '-' | '_' => {
                    green_slots.push(None);
                    yellow_slots.push(None);
                    grays.insert(letter);
                }
                ch => return Err(MaskError::InvalidPattern(ch)),
            }
        }

        let green = Mask { slots: green_slots };
        let yellow = Mask { slots: yellow_slots };
        let present = green.letters();
        let absent = grays
            .difference(present)
            .difference(yellow.letters());

        Ok(Self {
            green,
            yellow,
            absent,
        })
    }

    /// True if every position is green (the guess is the target)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.green.constraint_count() == self.green.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn green_mask_marks_positional_matches() {
        let mask = Mask::green(&word("ABCDE"), &word("BBBBB")).unwrap();
        assert_eq!(mask.to_string(), "-B---");
        assert_eq!(mask.constraint_count(), 1);
    }

    #[test]
    fn green_mask_of_word_against_itself_is_full() {
        let w = word("RAISE");
        let mask = Mask::green(&w, &w).unwrap();
        assert_eq!(mask.to_string(), "RAISE");
        assert_eq!(mask.constraint_count(), 5);
    }

    #[test]
    fn yellow_mask_marks_misplaced_letters() {
        let mask = Mask::yellow(&word("ABCDE"), &word("EXXXX")).unwrap();
        assert_eq!(mask.to_string(), "----E");
    }

    #[test]
    fn green_and_yellow_never_share_a_position() {
        let pairs = [
            ("RAISE", "PUIST"),
            ("SPEED", "ERASE"),
            ("ROBOT", "FLOOR"),
            ("AAAAA", "AAAAA"),
        ];

        for (g, t) in pairs {
            let green = Mask::green(&word(g), &word(t)).unwrap();
            let yellow = Mask::yellow(&word(g), &word(t)).unwrap();

            for (gs, ys) in green.slots().zip(yellow.slots()) {
                assert!(
                    gs.is_none() || ys.is_none(),
                    "{g} vs {t}: position both green and yellow"
                );
            }
        }
    }

    #[test]
    fn mask_length_mismatch_rejected() {
        let result = Mask::green(&word("ABCD"), &word("ABCDE"));
        assert_eq!(
            result,
            Err(MaskError::LengthMismatch {
                expected: 5,
                found: 4
            })
        );
        assert!(Mask::yellow(&word("ABCDEF"), &word("ABCDE")).is_err());
    }

    #[test]
    fn mask_matches_constrained_positions() {
        let mask = Mask::parse("A----").unwrap();
        assert!(mask.matches(&word("AAAAA")));
        assert!(mask.matches(&word("ABCDE")));
        assert!(!mask.matches(&word("BBBBB")));

        let mask2 = Mask::parse("-B---").unwrap();
        assert!(!mask2.matches(&word("AAAAA")));
        assert!(mask2.matches(&word("BBBBB")));
    }

    #[test]
    fn unconstrained_mask_matches_everything() {
        let mask = Mask::unconstrained(5);
        assert!(mask.is_unconstrained());
        assert!(mask.matches(&word("AAAAA")));
        assert!(mask.matches(&word("ZEBRA")));
    }

    #[test]
    fn mask_parse_roundtrip() {
        let mask = Mask::parse("-b--E").unwrap();
        assert_eq!(mask.to_string(), "-B--E");
        assert!(Mask::parse("-?---").is_err());
    }

    #[test]
    fn mask_letters_collects_constraints() {
        let mask = Mask::parse("A-B-A").unwrap();
        let letters = mask.letters();
        assert_eq!(letters.len(), 2);
        assert!(letters.contains(b'A'));
        assert!(letters.contains(b'B'));
    }

    #[test]
    fn feedback_score_raise_vs_puist() {
        let feedback = Feedback::score(&word("RAISE"), &word("PUIST")).unwrap();

        assert_eq!(feedback.green.to_string(), "--IS-");
        assert_eq!(feedback.yellow.to_string(), "-----");
        assert_eq!(feedback.absent.to_string(), "{A,E,R}");
        assert!(!feedback.is_win());
    }

    #[test]
    fn feedback_score_mound_vs_puist() {
        let feedback = Feedback::score(&word("MOUND"), &word("PUIST")).unwrap();

        assert_eq!(feedback.green.to_string(), "-----");
        assert_eq!(feedback.yellow.to_string(), "--U--");
        assert_eq!(feedback.absent.to_string(), "{D,M,N,O}");
    }

    #[test]
    fn feedback_absent_is_set_difference() {
        // Guess letter repeated, present once in target: set semantics keep
        // it out of the absent set entirely
        let feedback = Feedback::score(&word("SPEED"), &word("ERASE")).unwrap();
        assert!(!feedback.absent.contains(b'E'));
        assert!(feedback.absent.contains(b'P'));
        assert!(feedback.absent.contains(b'D'));
    }

    #[test]
    fn feedback_win_detected() {
        let w = word("RAISE");
        let feedback = Feedback::score(&w, &w).unwrap();
        assert!(feedback.is_win());
    }

    #[test]
    fn feedback_length_mismatch_rejected() {
        assert!(Feedback::score(&word("ABCD"), &word("ABCDE")).is_err());
    }

    #[test]
    fn feedback_from_pattern_basic() {
        let feedback = Feedback::from_pattern(&word("RAISE"), "--GG-").unwrap();

        assert_eq!(feedback.green.to_string(), "--IS-");
        assert_eq!(feedback.yellow.to_string(), "-----");
        assert_eq!(feedback.absent.to_string(), "{A,E,R}");
    }

    #[test]
    fn feedback_from_pattern_yellow_and_gray() {
        let feedback = Feedback::from_pattern(&word("MOUND"), "--Y--").unwrap();

        assert_eq!(feedback.green.to_string(), "-----");
        assert_eq!(feedback.yellow.to_string(), "--U--");
        assert_eq!(feedback.absent.to_string(), "{D,M,N,O}");
    }

    #[test]
    fn feedback_from_pattern_repeated_letter_stays_present() {
        // Second E marked gray, first E green: E is in the target, so it
        // must not land in the absent set
        let feedback = Feedback::from_pattern(&word("EAGLE"), "G----").unwrap();
        assert!(!feedback.absent.contains(b'E'));
        assert!(feedback.absent.contains(b'A'));
    }

    #[test]
    fn feedback_from_pattern_rejects_bad_input() {
        assert!(matches!(
            Feedback::from_pattern(&word("RAISE"), "--GG"),
            Err(MaskError::LengthMismatch { .. })
        ));
        assert!(matches!(
            Feedback::from_pattern(&word("RAISE"), "--GGX"),
            Err(MaskError::InvalidPattern('X'))
        ));
    }

    #[test]
    fn feedback_from_pattern_all_green_is_win() {
        let feedback = Feedback::from_pattern(&word("RAISE"), "GGGGG").unwrap();
        assert!(feedback.is_win());
        assert!(feedback.absent.is_empty());
    }
}
