//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::RunnerError;
use aoc_http_client::{PuzzleKey, SessionSource};
use std::path::{Path, PathBuf};

/// Sub-directory of the user cache directory holding puzzle inputs
const CACHE_SUBDIR: &str = "aoc";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Puzzle being solved
    pub key: PuzzleKey,
    /// Cache directory path
    pub cache_dir: PathBuf,
    /// Where the session cookie is read from
    pub session: SessionSource,
    /// Whether to submit answers
    pub submit: bool,
    /// Whether to drop the cached input before fetching
    pub clean: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Default configuration for a puzzle: user cache dir, `AOC_SESSION`, no submission
    pub fn new(key: PuzzleKey) -> Result<Self, RunnerError> {
        Ok(Config {
            key,
            cache_dir: default_cache_dir()?,
            session: SessionSource::default(),
            submit: false,
            clean: false,
            quiet: false,
        })
    }

    /// Build config from CLI args
    pub fn from_args(key: PuzzleKey, args: Args) -> Result<Self, RunnerError> {
        let cache_dir = match args.cache_dir {
            Some(dir) => expand_tilde(&dir),
            None => default_cache_dir()?,
        };

        Ok(Config {
            key,
            cache_dir,
            session: SessionSource::env(args.session_env),
            submit: args.submit,
            clean: args.clean,
            quiet: args.quiet,
        })
    }
}

/// `{user cache dir}/aoc`
pub fn default_cache_dir() -> Result<PathBuf, RunnerError> {
    dirs::cache_dir()
        .map(|dir| dir.join(CACHE_SUBDIR))
        .ok_or_else(|| RunnerError::Config("Could not determine the user cache directory".to_string()))
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
