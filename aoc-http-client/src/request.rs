//! Addressed, authenticated request descriptions
//!
//! These types only describe a request. Nothing is resolved or sent until an
//! [`AocClient`](crate::AocClient) prepares or dispatches them.

use crate::error::AocError;
use crate::session::SessionSource;
use std::fmt;

/// Identifies a single puzzle: a year and a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleKey {
    /// The AOC year (e.g., 2015)
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
}

impl PuzzleKey {
    pub fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }

    /// URL path segments addressing this puzzle, without the endpoint suffix
    pub(crate) fn path_segments(&self) -> [String; 3] {
        [self.year.to_string(), "day".to_string(), self.day.to_string()]
    }
}

impl fmt::Display for PuzzleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/day/{}", self.year, self.day)
    }
}

/// Which half of a daily puzzle an answer is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    PartOne = 1,
    PartTwo = 2,
}

impl Level {
    /// Both levels in order
    pub const ALL: [Level; 2] = [Level::PartOne, Level::PartTwo];

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = AocError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::PartOne),
            2 => Ok(Level::PartTwo),
            other => Err(AocError::InvalidLevel(other)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A puzzle address plus the session source used to authenticate
///
/// # Example
///
/// ```
/// use aoc_http_client::{AocRequest, Level};
///
/// let input = AocRequest::new(2015, 7)
///     .with_session_key("my_session_cookie")
///     .build_input_request();
/// assert_eq!(input.key().year, 2015);
///
/// let submit = AocRequest::new(2015, 7)
///     .with_session_key_from_env("MY_AOC_SESSION")
///     .build_submit_request(Level::PartOne, "123");
/// assert_eq!(submit.answer(), "123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AocRequest {
    key: PuzzleKey,
    session: SessionSource,
}

impl AocRequest {
    /// Create a request for the given puzzle, reading the session from `AOC_SESSION`
    pub fn new(year: u16, day: u8) -> Self {
        Self::for_key(PuzzleKey::new(year, day))
    }

    /// Create a request for the given puzzle key, reading the session from `AOC_SESSION`
    pub fn for_key(key: PuzzleKey) -> Self {
        Self {
            key,
            session: SessionSource::default(),
        }
    }

    /// Use a fixed session key
    pub fn with_session_key(mut self, session: impl Into<String>) -> Self {
        self.session = SessionSource::fixed(session);
        self
    }

    /// Read the session key from the named environment variable
    pub fn with_session_key_from_env(mut self, env_name: impl Into<String>) -> Self {
        self.session = SessionSource::env(env_name);
        self
    }

    /// Use an already constructed session source
    pub fn with_session_source(mut self, session: SessionSource) -> Self {
        self.session = session;
        self
    }

    pub fn key(&self) -> PuzzleKey {
        self.key
    }

    pub fn session(&self) -> &SessionSource {
        &self.session
    }

    /// Describe a puzzle input download
    pub fn build_input_request(&self) -> InputRequest {
        InputRequest { base: self.clone() }
    }

    /// Describe an answer submission for the given level
    pub fn build_submit_request(&self, level: Level, answer: impl Into<String>) -> SubmitRequest {
        SubmitRequest {
            base: self.clone(),
            level,
            answer: answer.into(),
        }
    }
}

/// Request for `GET /{year}/day/{day}/input`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    base: AocRequest,
}

impl InputRequest {
    pub fn key(&self) -> PuzzleKey {
        self.base.key
    }

    pub fn session(&self) -> &SessionSource {
        &self.base.session
    }
}

/// Request for `POST /{year}/day/{day}/answer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    base: AocRequest,
    level: Level,
    answer: String,
}

impl SubmitRequest {
    pub fn key(&self) -> PuzzleKey {
        self.base.key
    }

    pub fn session(&self) -> &SessionSource {
        &self.base.session
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Form fields sent as the request body, in wire order
    pub(crate) fn form(&self) -> [(&'static str, String); 2] {
        [
            ("level", self.level.to_string()),
            ("answer", self.answer.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_try_from() {
        assert_eq!(Level::try_from(1).unwrap(), Level::PartOne);
        assert_eq!(Level::try_from(2).unwrap(), Level::PartTwo);
        assert!(matches!(Level::try_from(0), Err(AocError::InvalidLevel(0))));
        assert!(matches!(Level::try_from(3), Err(AocError::InvalidLevel(3))));
    }

    #[test]
    fn test_puzzle_key_display() {
        assert_eq!(PuzzleKey::new(2015, 7).to_string(), "2015/day/7");
    }

    #[test]
    fn test_default_session_source_is_env() {
        let request = AocRequest::new(2015, 7);
        assert_eq!(request.session(), &SessionSource::env("AOC_SESSION"));
    }

    #[test]
    fn test_last_session_setter_wins() {
        let request = AocRequest::new(2015, 7)
            .with_session_key("foo")
            .with_session_key_from_env("OTHER_VAR");
        assert_eq!(request.session(), &SessionSource::env("OTHER_VAR"));

        let request = request.with_session_key("bar");
        assert_eq!(request.session(), &SessionSource::fixed("bar"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_submit_request_keeps_fields(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            level in 1u8..=2u8,
            answer in "[ -~]{0,20}",
        ) {
            let level = Level::try_from(level).unwrap();
            let request = AocRequest::new(year, day).build_submit_request(level, answer.clone());

            prop_assert_eq!(request.key(), PuzzleKey::new(year, day));
            prop_assert_eq!(request.level(), level);
            prop_assert_eq!(request.answer(), answer.as_str());
            let form = request.form();
            prop_assert_eq!(form[0].0, "level");
            prop_assert_eq!(form[0].1.clone(), level.as_u8().to_string());
            prop_assert_eq!(form[1].0, "answer");
            prop_assert_eq!(form[1].1.clone(), answer);
        }

        #[test]
        fn prop_level_rejects_out_of_range(value in 3u8..=255u8) {
            prop_assert!(matches!(Level::try_from(value), Err(AocError::InvalidLevel(v)) if v == value));
        }
    }
}
