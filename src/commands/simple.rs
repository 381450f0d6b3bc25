//! Interactive CLI mode
//!
//! Text-based loop: the solver suggests a guess, the player reports the
//! colors Wordle showed them, and the candidate list narrows. Feedback
//! rounds are kept as a replayable history so `undo` can rebuild the
//! session from the base corpus.

use crate::core::{Feedback, Word};
use crate::solver::{Session, SessionState};
use std::io::{self, Write};

/// Run the interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure reading user input, or if the corpus
/// cannot start a session.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(corpus: &[Word]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Word Narrower - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses ranked by letter uniqueness and frequency.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g for green (correct position)");
    println!("  - Use Y/y for yellow (in the word, wrong position)");
    println!("  - Use -/_ for black (not in the word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last round\n");

    let mut history: Vec<Feedback> = Vec::new();

    loop {
        let session = replay(corpus, &history)?;
        let turn = history.len() + 1;

        match session.state() {
            SessionState::Exhausted => {
                println!("\n❌ No candidates remain! Your feedback may be incorrect.");
                println!("Type 'undo' to go back, or 'new' to start over.\n");

                match get_user_input("Command")?.as_str() {
                    "undo" | "u" => {
                        history.pop();
                        println!("✓ Undone! Back to turn {}\n", history.len() + 1);
                    }
                    "new" | "n" => {
                        history.clear();
                        println!("\n🔄 New game started!\n");
                    }
                    "quit" | "q" | "exit" => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    _ => {}
                }
                continue;
            }
            SessionState::Solved => {
                let answer = session
                    .suggestion()
                    .ok_or("Solved session with no candidate")?;
                print_victory(answer, turn);

                if !ask_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                history.clear();
                continue;
            }
            SessionState::AwaitingGuess => {}
        }

        let guess = session
            .suggestion()
            .ok_or("No valid guesses available")?
            .clone();
        let candidates_count = session.candidates().len();

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {candidates_count} candidates remaining");
        println!("────────────────────────────────────────────────────────────");
        println!("\n📊 Suggested guess: {}", guess.text());

        if candidates_count <= 10 {
            println!("\nRemaining candidates:");
            for candidate in session.candidates().iter().take(10) {
                println!("  • {}", candidate.text());
            }
        }
        println!();

        loop {
            let input = get_user_input("Enter feedback (G/Y/-, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    println!("\n🔄 New game started!\n");
                    break;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        println!("✓ Undone! Back to turn {}\n", history.len() + 1);
                        break;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" | "solved" => {
                    print_victory(&guess, turn);
                    if ask_play_again()? {
                        history.clear();
                        break;
                    }
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                pattern => match Feedback::from_pattern(&guess, pattern) {
                    Ok(feedback) => {
                        use crate::output::formatters::{colorize_guess, feedback_to_glyphs};
                        println!(
                            "   {} {}\n",
                            colorize_guess(guess.text(), &feedback),
                            feedback_to_glyphs(&feedback)
                        );
                        history.push(feedback);
                        break;
                    }
                    Err(e) => {
                        println!("❌ {e}\n");
                    }
                },
            }
        }
    }
}

/// Rebuild a session by replaying the feedback history over the base corpus
fn replay(corpus: &[Word], history: &[Feedback]) -> Result<Session, String> {
    let mut session =
        Session::new(corpus.to_vec()).map_err(|e| format!("Cannot start session: {e}"))?;

    for feedback in history {
        session
            .apply(feedback)
            .map_err(|e| format!("Narrowing failed: {e}"))?;
    }

    Ok(session)
}

fn print_victory(answer: &Word, turn: usize) {
    use colored::Colorize;

    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        format!("   🎉  Solved: {}  🎉   ", answer.text())
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    let rounds = turn.saturating_sub(1).max(1);
    println!(
        "\n  Narrowed to the answer in {} {}\n",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "round" } else { "rounds" }
    );
}

fn ask_play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
///
/// A closed stdin reads as an explicit quit so the loop cannot spin on EOF.
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(normalize_input(bytes_read, &input))
}

/// Map a raw line read to a command string; zero bytes read means stdin closed
fn normalize_input(bytes_read: usize, input: &str) -> String {
    if bytes_read == 0 {
        "quit".to_string()
    } else {
        input.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn replay_rebuilds_session_from_history() {
        let words = corpus(&["PUIST", "MUIST", "NOISY", "RAISE", "MOIST"]);
        let guess = Word::new("RAISE").unwrap();
        let target = Word::new("PUIST").unwrap();
        let feedback = Feedback::score(&guess, &target).unwrap();

        let session = replay(&words, &[feedback.clone()]).unwrap();
        assert_eq!(session.rounds(), 1);
        assert!(session.candidates().iter().any(|w| w.text() == "PUIST"));

        // Popping the history and replaying restores the previous view
        let session = replay(&words, &[]).unwrap();
        assert_eq!(session.candidates().len(), 5);
    }

    #[test]
    fn replay_empty_corpus_is_error() {
        assert!(replay(&[], &[]).is_err());
    }

    #[test]
    fn closed_stdin_reads_as_quit() {
        assert_eq!(normalize_input(0, ""), "quit");
    }

    #[test]
    fn normalize_input_trims_lines() {
        assert_eq!(normalize_input(7, "  win \n"), "win");
        assert_eq!(normalize_input(1, "\n"), "");
    }
}
