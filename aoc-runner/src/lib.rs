//! Advent of Code solution runner
//!
//! Fetches the puzzle input (through an on-disk cache), runs the provided
//! solutions and optionally submits their answers.
//!
//! # Example
//!
//! ```no_run
//! use aoc_runner::Runner;
//!
//! fn main() {
//!     let result = Runner::new(2015, 1)
//!         .part1(|input: &[u8]| input.len())
//!         .part2(|input: &[u8]| String::from_utf8_lossy(input).lines().count())
//!         .run();
//!
//!     if let Err(e) = result {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```
//!
//! Run the binary with `--submit` to submit answers and `--clean` to drop the
//! cached input first. The session cookie is read from `AOC_SESSION` unless
//! `--session-env` names another variable.

mod cache;
mod cli;
mod config;
mod error;
mod logging;
mod output;
mod runner;

pub use cache::InputCache;
pub use cli::Args;
pub use config::{Config, default_cache_dir};
pub use error::{CacheError, RunnerError};
pub use output::OutputFormatter;
pub use runner::{PartResult, RunReport, Runner, format_answer};

pub use aoc_http_client;
