//! AOC HTTP client implementation

use crate::error::AocError;
use crate::request::{InputRequest, PuzzleKey, SubmitRequest};
use crate::response::{SubmissionOutcome, classify_submission_body};
use crate::session::SessionSource;
use reqwest::StatusCode;
use reqwest::blocking::Request;
use reqwest::header::{COOKIE, HeaderValue};
use std::io::BufReader;
use zeroize::Zeroize;

/// The main AOC HTTP client
///
/// This client turns [`InputRequest`] and [`SubmitRequest`] descriptions into
/// authenticated HTTP requests and dispatches them.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::{AocClient, AocRequest, Level, SubmissionOutcome};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
///
/// // Session is read from AOC_SESSION when the request is prepared
/// let input = client.get_input(&AocRequest::new(2015, 1).build_input_request())?;
/// println!("Input: {} bytes", input.len());
///
/// let request = AocRequest::new(2015, 1).build_submit_request(Level::PartOne, "42");
/// match client.submit_answer(&request)? {
///     SubmissionOutcome::Correct => println!("Correct!"),
///     SubmissionOutcome::Incorrect => println!("Try again"),
///     SubmissionOutcome::TransportError { message, .. } => println!("Failed: {}", message),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl AocClient {
    /// Create a new AOC client with rustls-tls configuration
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_http_client::AocClient;
    ///
    /// let client = AocClient::new().expect("Failed to create client");
    /// ```
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// The base URL all puzzle paths are resolved against
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Create a secure cookie header value from a session string
    ///
    /// This function creates a HeaderValue with the sensitive flag set to true
    /// and zeroizes the temporary string after use.
    fn create_cookie_header(session: &SessionSource) -> Result<HeaderValue, AocError> {
        let token = session.require()?;
        let mut cookie_string = format!("session={}", token.as_str());
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()));
        cookie_string.zeroize();

        let mut sensitive_header = header_value?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Build `{base}/{year}/day/{day}/{endpoint}`
    fn puzzle_url(&self, key: PuzzleKey, endpoint: &str) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&key.path_segments())
            .push(endpoint);
        Ok(url)
    }

    /// Build the HTTP request for an input download without sending it
    ///
    /// The session is resolved here; an empty session fails with
    /// `AocError::MissingSession`.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_http_client::{AocClient, AocRequest};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// let request = AocRequest::new(2015, 7).with_session_key("foo").build_input_request();
    /// let http = client.prepare_input_request(&request)?;
    /// assert_eq!(http.method(), "GET");
    /// assert_eq!(http.url().path(), "/2015/day/7/input");
    /// # Ok(())
    /// # }
    /// ```
    pub fn prepare_input_request(&self, request: &InputRequest) -> Result<Request, AocError> {
        let cookie_header = Self::create_cookie_header(request.session())?;
        let url = self.puzzle_url(request.key(), "input")?;

        Ok(self.client.get(url).header(COOKIE, cookie_header).build()?)
    }

    /// Build the HTTP request for an answer submission without sending it
    ///
    /// The body is `level=<1|2>&answer=<urlencoded answer>` with
    /// `Content-Type: application/x-www-form-urlencoded`.
    pub fn prepare_submit_request(&self, request: &SubmitRequest) -> Result<Request, AocError> {
        let cookie_header = Self::create_cookie_header(request.session())?;
        let url = self.puzzle_url(request.key(), "answer")?;

        Ok(self
            .client
            .post(url)
            .header(COOKIE, cookie_header)
            .form(&request.form())
            .build()?)
    }

    /// Fetch puzzle input bytes
    ///
    /// # Errors
    ///
    /// * `AocError::MissingSession` - No session token; nothing was sent
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - Any status other than 200
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::{AocClient, AocRequest};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// let request = AocRequest::new(2015, 1).build_input_request();
    ///
    /// let input = client.get_input(&request)?;
    /// println!("Input length: {} bytes", input.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_input(&self, request: &InputRequest) -> Result<Vec<u8>, AocError> {
        let http_request = self.prepare_input_request(request)?;
        tracing::debug!(puzzle = %request.key(), "fetching puzzle input");

        let response = self.client.execute(http_request)?;
        if response.status() != StatusCode::OK {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }

    /// Fetch puzzle input as a UTF-8 string
    ///
    /// # Errors
    ///
    /// Same as [`AocClient::get_input`], plus `AocError::Encoding` when the
    /// body is not valid UTF-8.
    pub fn get_input_string(&self, request: &InputRequest) -> Result<String, AocError> {
        String::from_utf8(self.get_input(request)?).map_err(|_| AocError::Encoding)
    }

    /// Submit an answer for a puzzle part
    ///
    /// A 200 response is scanned line by line for the wrong-answer marker. Any
    /// other status is returned as `SubmissionOutcome::TransportError` without
    /// looking at the body. Connection failures and unreadable bodies are also
    /// reported as `SubmissionOutcome::TransportError`, with no status.
    ///
    /// # Errors
    ///
    /// * `AocError::MissingSession` - No session token; nothing was sent
    /// * `AocError::ClientInit` / `AocError::Request` - The request could not be built
    pub fn submit_answer(&self, request: &SubmitRequest) -> Result<SubmissionOutcome, AocError> {
        let http_request = self.prepare_submit_request(request)?;
        tracing::debug!(
            puzzle = %request.key(),
            level = %request.level(),
            "submitting answer"
        );

        let response = match self.client.execute(http_request) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(puzzle = %request.key(), error = %e, "answer submission failed");
                return Ok(SubmissionOutcome::from_failure(e.status(), e));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(SubmissionOutcome::from_status(status));
        }

        match classify_submission_body(BufReader::new(response)) {
            Err(AocError::Io(e)) => Ok(SubmissionOutcome::from_failure(None, e)),
            result => result,
        }
    }
}

/// Builder for configuring an AOC HTTP client
///
/// This builder allows customization of the base URL and HTTP client
/// configuration (timeouts, proxies, ...). No timeout is set by default.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Custom base URL for testing
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .build()?;
///
/// // Custom timeout
/// let client = AocClient::builder()
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(30))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// This is useful for testing with mock servers. The URL is parsed and
    /// validated at builder time.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { client, base_url })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
