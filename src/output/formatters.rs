//! Formatting utilities for terminal output

use crate::core::Feedback;
use colored::Colorize;

/// Format feedback as a glyph string, one square per position
///
/// Green positions render 🟩, yellow 🟨, everything else ⬛.
#[must_use]
pub fn feedback_to_glyphs(feedback: &Feedback) -> String {
    let mut result = String::with_capacity(feedback.green.len() * 4);

    for (green, yellow) in feedback.green.slots().zip(feedback.yellow.slots()) {
        result.push(if green.is_some() {
            '🟩'
        } else if yellow.is_some() {
            '🟨'
        } else {
            '⬛'
        });
    }

    result
}

/// Render a guess with per-letter feedback coloring
#[must_use]
pub fn colorize_guess(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.green.slots().zip(feedback.yellow.slots()))
        .map(|(ch, (green, yellow))| {
            let s = ch.to_string();
            if green.is_some() {
                s.bright_green().bold().to_string()
            } else if yellow.is_some() {
                s.bright_yellow().bold().to_string()
            } else {
                s.bright_black().to_string()
            }
        })
        .collect()
}

/// Render a score bar proportional to `value / max`
#[must_use]
pub fn score_bar(value: f64, max: f64, width: usize) -> String {
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
    }

    #[test]
    fn glyphs_for_mixed_feedback() {
        // RAISE vs PUIST: I and S green, nothing yellow
        let glyphs = feedback_to_glyphs(&feedback("RAISE", "PUIST"));
        assert_eq!(glyphs, "⬛⬛🟩🟩⬛");
    }

    #[test]
    fn glyphs_all_green_on_win() {
        let glyphs = feedback_to_glyphs(&feedback("RAISE", "RAISE"));
        assert_eq!(glyphs, "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn glyphs_show_yellow() {
        // MOUND vs PUIST: U yellow at position 2
        let glyphs = feedback_to_glyphs(&feedback("MOUND", "PUIST"));
        assert_eq!(glyphs, "⬛⬛🟨⬛⬛");
    }

    #[test]
    fn score_bar_empty_and_full() {
        assert_eq!(score_bar(0.0, 100.0, 10), "░░░░░░░░░░");
        assert_eq!(score_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(score_bar(50.0, 100.0, 10), "█████░░░░░");
    }
}
