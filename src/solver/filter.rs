//! Corpus narrowing filters
//!
//! Each filter is a pure function from a corpus to a (possibly) smaller one;
//! the input is never mutated. `narrow` composes the three feedback stages in
//! a fixed order: green positional match, yellow rejection plus inclusion,
//! black exclusion. Each stage only removes words, so the composition is
//! monotonically non-increasing.
//!
//! The stage order must stay green → yellow → black: the black set uses
//! set-difference semantics (see `core::mask`), and this order is what keeps
//! repeated-letter feedback from eliminating valid candidates.

use crate::core::{Feedback, LetterSet, Mask, Word};

/// Keep words matching the green mask
///
/// An unconstrained mask keeps the corpus unchanged.
#[must_use]
pub fn keep_matching(corpus: &[Word], green: &Mask) -> Vec<Word> {
    corpus
        .iter()
        .filter(|word| green.matches(word))
        .cloned()
        .collect()
}

/// Remove words matching the yellow mask
///
/// A yellow letter is confirmed NOT at its position, so any candidate
/// placing it there is eliminated.
#[must_use]
pub fn reject_matching(corpus: &[Word], yellow: &Mask) -> Vec<Word> {
    corpus
        .iter()
        .filter(|word| !yellow.matches(word))
        .cloned()
        .collect()
}

/// Keep words containing every letter of the set
#[must_use]
pub fn require_letters(corpus: &[Word], letters: LetterSet) -> Vec<Word> {
    corpus
        .iter()
        .filter(|word| letters.is_subset_of(word.letters()))
        .cloned()
        .collect()
}

/// Keep words containing none of the letters of the set
#[must_use]
pub fn exclude_letters(corpus: &[Word], letters: LetterSet) -> Vec<Word> {
    corpus
        .iter()
        .filter(|word| !letters.intersects(word.letters()))
        .cloned()
        .collect()
}

/// Apply one round of feedback to a corpus
///
/// Stages, in order:
/// 1. green mask (if it carries any constraint): keep matching words
/// 2. yellow mask (if it carries any constraint): reject words placing a
///    yellow letter at its flagged position, then require every yellow letter
///    somewhere in the word
/// 3. black set (if non-empty): exclude words containing any absent letter
///
/// # Examples
/// ```
/// use wordle_narrow::core::{Feedback, Word};
/// use wordle_narrow::solver::filter::narrow;
///
/// let corpus: Vec<Word> = ["ABCDE", "BBBBB", "AAAAA"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let feedback = Feedback::score(
///     &Word::new("ABXXX").unwrap(),
///     &Word::new("ABCDE").unwrap(),
/// )
/// .unwrap();
///
/// let narrowed = narrow(&corpus, &feedback);
/// assert_eq!(narrowed.len(), 1);
/// assert_eq!(narrowed[0].text(), "ABCDE");
/// ```
#[must_use]
pub fn narrow(corpus: &[Word], feedback: &Feedback) -> Vec<Word> {
    let mut remaining = corpus.to_vec();

    if !feedback.green.is_unconstrained() {
        remaining = keep_matching(&remaining, &feedback.green);
    }

    if !feedback.yellow.is_unconstrained() {
        remaining = reject_matching(&remaining, &feedback.yellow);
        remaining = require_letters(&remaining, feedback.yellow.letters());
    }

    if !feedback.absent.is_empty() {
        remaining = exclude_letters(&remaining, feedback.absent);
    }

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn keep_matching_filters_by_green_mask() {
        let words = corpus(&["ABCDE", "BBBBB", "AAAAA"]);
        let mask = Mask::parse("A----").unwrap();

        assert_eq!(texts(&keep_matching(&words, &mask)), vec!["ABCDE", "AAAAA"]);
    }

    #[test]
    fn keep_matching_unconstrained_is_noop() {
        let words = corpus(&["ABCDE", "BBBBB"]);
        let mask = Mask::unconstrained(5);

        assert_eq!(keep_matching(&words, &mask), words);
    }

    #[test]
    fn keep_matching_is_idempotent() {
        let words = corpus(&["ABCDE", "BBBBB", "AAAAA", "ABBBB"]);
        let mask = Mask::parse("A----").unwrap();

        let once = keep_matching(&words, &mask);
        let twice = keep_matching(&once, &mask);
        assert_eq!(once, twice);
    }

    #[test]
    fn reject_matching_drops_yellow_positions() {
        // Yellow B at position 1: any word with B there is out
        let words = corpus(&["ABCDE", "BBBBB", "ACBDE"]);
        let mask = Mask::parse("-B---").unwrap();

        assert_eq!(texts(&reject_matching(&words, &mask)), vec!["ACBDE"]);
    }

    #[test]
    fn require_letters_keeps_supersets() {
        let words = corpus(&["ABCDE", "BBBBB", "AAAAA"]);
        let required: LetterSet = [b'A', b'B'].into_iter().collect();

        assert_eq!(texts(&require_letters(&words, required)), vec!["ABCDE"]);
    }

    #[test]
    fn exclude_letters_removes_any_overlap() {
        let words = corpus(&["A", "AB", "ABCDE", "AAAAA"]);
        let excluded: LetterSet = [b'B'].into_iter().collect();

        assert_eq!(texts(&exclude_letters(&words, excluded)), vec!["A", "AAAAA"]);
    }

    #[test]
    fn exclude_empty_set_keeps_everything() {
        let words = corpus(&["ABCDE", "BBBBB"]);
        assert_eq!(exclude_letters(&words, LetterSet::EMPTY), words);
    }

    #[test]
    fn narrow_applies_all_stages() {
        let words = corpus(&["PUIST", "NOISY", "MOIST", "RAISE", "STAIR"]);
        let feedback = Feedback::score(
            &Word::new("RAISE").unwrap(),
            &Word::new("PUIST").unwrap(),
        )
        .unwrap();

        // RAISE and STAIR carry excluded letters; the rest keep I and S in place
        let narrowed = narrow(&words, &feedback);
        assert_eq!(texts(&narrowed), vec!["PUIST", "NOISY", "MOIST"]);
    }

    #[test]
    fn narrow_never_grows_the_corpus() {
        let words = corpus(&["PUIST", "NOISY", "MOIST", "RAISE", "STAIR", "SUITE"]);

        for target in &words {
            for guess in &words {
                let feedback = Feedback::score(guess, target).unwrap();
                let narrowed = narrow(&words, &feedback);
                assert!(narrowed.len() <= words.len());
                // The true target always survives its own feedback
                assert!(narrowed.contains(target), "{guess} vs {target}");
            }
        }
    }

    #[test]
    fn narrow_black_only_round() {
        // Guess shares no letters with target: only the black stage fires
        let words = corpus(&["ABCDE", "FGHIJ"]);
        let feedback = Feedback::score(
            &Word::new("ABCDE").unwrap(),
            &Word::new("FGHIJ").unwrap(),
        )
        .unwrap();

        // Everything containing A..E goes away
        assert_eq!(texts(&narrow(&words, &feedback)), vec!["FGHIJ"]);
    }

    #[test]
    fn narrow_can_exhaust_the_corpus() {
        let words = corpus(&["AAAAA", "ABCDE"]);
        let feedback = Feedback::score(
            &Word::new("AXXXX").unwrap(),
            &Word::new("ZZZZZ").unwrap(),
        )
        .unwrap();

        // A and X excluded: nothing survives
        assert!(narrow(&words, &feedback).is_empty());
    }
}
