//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// No session token could be resolved; raised before any request is sent
    #[error("No session key found for authentication: {0}")]
    MissingSession(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Advent of Code returned non-200 status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// The request could not be completed (connection, send or body read)
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The submitted answer was rejected as wrong
    #[error("Incorrect answer")]
    IncorrectAnswer,

    /// Answer level outside of 1..=2
    #[error("Invalid answer level {0}: expected 1 or 2")]
    InvalidLevel(u8),

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Failed to read the response body
    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
