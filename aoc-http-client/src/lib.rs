//! AOC HTTP Client Library
//!
//! This library builds authenticated requests for the Advent of Code website,
//! downloads puzzle inputs and submits answers.
//!
//! # Features
//!
//! - Request descriptions ([`AocRequest`]) that resolve the session only when prepared
//! - Session from a fixed string or a named environment variable (default `AOC_SESSION`)
//! - Puzzle input download as raw bytes or UTF-8 text
//! - Answer submission classified as correct, incorrect or a transport error
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::{AocClient, AocRequest, Level, SubmissionOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Session read from AOC_SESSION when each request is prepared
//! let request = AocRequest::new(2015, 1);
//!
//! // Fetch puzzle input
//! let input = client.get_input_string(&request.build_input_request())?;
//!
//! // Submit an answer
//! let outcome = client.submit_answer(&request.build_submit_request(Level::PartOne, "42"))?;
//! match outcome {
//!     SubmissionOutcome::Correct => println!("Correct!"),
//!     SubmissionOutcome::Incorrect => println!("Incorrect"),
//!     SubmissionOutcome::TransportError { message, .. } => println!("Failed: {}", message),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod request;
mod response;
mod session;

pub use client::{AocClient, AocClientBuilder};
pub use error::AocError;
pub use request::{AocRequest, InputRequest, Level, PuzzleKey, SubmitRequest};
pub use response::{SubmissionOutcome, WRONG_ANSWER_MARKER, classify_submission_body};
pub use session::{DEFAULT_SESSION_ENV, SessionSource};

pub use reqwest::StatusCode;
