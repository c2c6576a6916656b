//! Submission response classification

use crate::error::AocError;
use std::io::BufRead;

/// Text the site puts on the page when an answer is wrong
pub const WRONG_ANSWER_MARKER: &str = "That's not the right answer;";

/// Result of an answer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// No wrong-answer marker was found in a 200 response
    Correct,
    /// The response contained the wrong-answer marker
    Incorrect,
    /// The submission did not get a usable answer from the site
    ///
    /// Either a non-200 status (the body is not inspected) or a failure to
    /// connect, send or read the response, in which case `status` is `None`.
    TransportError {
        /// The status code that was received, if any
        status: Option<reqwest::StatusCode>,
        /// Human-readable description of the failure
        message: String,
    },
}

impl SubmissionOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        Self::TransportError {
            status: Some(status),
            message: status.to_string(),
        }
    }

    pub(crate) fn from_failure(status: Option<reqwest::StatusCode>, error: impl std::fmt::Display) -> Self {
        Self::TransportError {
            status,
            message: error.to_string(),
        }
    }

    /// Convert to a `Result`, mapping `Incorrect` to [`AocError::IncorrectAnswer`]
    /// and `TransportError` to [`AocError::InvalidStatus`] when a status was
    /// received, [`AocError::Transport`] otherwise
    pub fn into_result(self) -> Result<(), AocError> {
        match self {
            Self::Correct => Ok(()),
            Self::Incorrect => Err(AocError::IncorrectAnswer),
            Self::TransportError {
                status: Some(status),
                ..
            } => Err(AocError::InvalidStatus { status }),
            Self::TransportError { status: None, message } => Err(AocError::Transport(message)),
        }
    }
}

/// Classify a 200 submission response body
///
/// The body is read one line at a time and reading stops at the first line
/// containing [`WRONG_ANSWER_MARKER`]. Anything else, including "answered too
/// recently" or "already complete" pages, counts as `Correct`.
pub fn classify_submission_body<R: BufRead>(body: R) -> Result<SubmissionOutcome, AocError> {
    let marker = WRONG_ANSWER_MARKER.as_bytes();
    for line in body.split(b'\n') {
        let line = line?;
        if line.windows(marker.len()).any(|window| window == marker) {
            return Ok(SubmissionOutcome::Incorrect);
        }
    }
    Ok(SubmissionOutcome::Correct)
}
