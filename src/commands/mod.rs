//! Command implementations

pub mod benchmark;
pub mod rank;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use rank::{RankEntry, RankResult, rank_starters};
pub use simple::run_simple;
pub use solve::{RoundStep, SolveConfig, SolveResult, solve_word};
