//! Word narrower - CLI
//!
//! Frequency-heuristic Wordle solver with auto-solve, ranking, practice, and
//! interactive modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_narrow::{
    commands::{SolveConfig, rank_starters, run_benchmark, run_simple, solve_word},
    core::Word,
    output::{print_benchmark_result, print_rank_result, print_solve_result},
    wordlists::{WORDS, loader::load_dictionary, loader::words_from_slice, pick_random},
};

#[derive(Parser)]
#[command(
    name = "wordle_narrow",
    about = "Wordle solver that narrows candidate lists with letter-frequency heuristics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (bundled 5-letter list) or path to a dictionary file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Word length to solve for (file wordlists only; builtin is 5)
    #[arg(short = 'l', long, global = true, default_value = "5")]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: suggests guesses, you report the colors (default)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Pick a random target and solve it (practice demo)
    Play {
        /// Show candidate counts per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the top starter words for the loaded corpus
    Rank {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "15")]
        count: usize,
    },

    /// Benchmark the solver over many targets
    Benchmark {
        /// Number of targets to test (taken from the corpus)
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Round limit per target
        #[arg(short = 'r', long, default_value = "6")]
        rounds: usize,
    },
}

/// Load the corpus named by the -w flag
///
/// A dictionary with no words of the requested length is reported to the
/// user as an error here; the loader itself treats it as an absent value.
fn load_corpus(wordlist: &str, length: usize) -> Result<Vec<Word>> {
    match wordlist {
        "builtin" => {
            if length != 5 {
                bail!("The builtin wordlist has only 5-letter words; use -w <path> for length {length}");
            }
            Ok(words_from_slice(WORDS))
        }
        path => {
            let words = load_dictionary(length, path)
                .with_context(|| format!("Failed to read wordlist '{path}'"))?;
            words.with_context(|| format!("No {length}-letter words in '{path}'"))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.wordlist, cli.length)?;

    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&corpus).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, &corpus),
        Commands::Play { verbose } => run_play_command(verbose, &corpus),
        Commands::Rank { count } => {
            print_rank_result(&rank_starters(&corpus, count));
            Ok(())
        }
        Commands::Benchmark { count, rounds } => {
            run_benchmark_command(count, rounds, &corpus);
            Ok(())
        }
    }
}

fn run_solve_command(word: &str, verbose: bool, corpus: &[Word]) -> Result<()> {
    let config = SolveConfig::new(word.to_string());
    let result = solve_word(config, corpus).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_play_command(verbose: bool, corpus: &[Word]) -> Result<()> {
    let target = pick_random(corpus).context("Corpus is empty")?;
    println!("Picked a random target from {} words...", corpus.len());

    run_solve_command(target.text(), verbose, corpus)
}

fn run_benchmark_command(count: usize, rounds: usize, corpus: &[Word]) {
    let targets: Vec<Word> = corpus.iter().take(count).cloned().collect();
    println!("Running benchmark on {} targets...", targets.len());

    let result = run_benchmark(corpus, &targets, rounds, true);
    print_benchmark_result(&result);
}
