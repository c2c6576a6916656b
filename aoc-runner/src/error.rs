//! Error types for the runner

use aoc_http_client::{AocError, PuzzleKey};
use std::path::PathBuf;
use thiserror::Error;

/// Main runner error type
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cache error
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// HTTP client error
    #[error(transparent)]
    Http(#[from] AocError),
}

/// Cache-specific errors, tagged with the stage that failed
#[derive(Error, Debug)]
pub enum CacheError {
    /// Reading an existing cache file failed
    #[error("Failed to read cached input {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Downloading the input after a cache miss failed
    #[error("Failed to fetch input for {key}")]
    Fetch {
        key: PuzzleKey,
        #[source]
        source: AocError,
    },

    /// Creating the cache directory or writing the file failed
    #[error("Failed to cache input at {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deleting a cache file failed
    #[error("Failed to remove cached input {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
