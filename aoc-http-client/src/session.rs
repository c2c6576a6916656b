//! Session token sources

use crate::error::AocError;
use zeroize::Zeroizing;

/// Environment variable read when no other session source is configured
pub const DEFAULT_SESSION_ENV: &str = "AOC_SESSION";

/// Where the session cookie value comes from
///
/// The token is looked up every time a request is prepared, so an environment
/// variable set after the source was created is still picked up.
#[derive(Clone, PartialEq, Eq)]
pub enum SessionSource {
    /// Read the named environment variable
    Env(String),
    /// Use a fixed token supplied by the caller
    Fixed(Zeroizing<String>),
}

impl SessionSource {
    /// Source reading the named environment variable
    pub fn env(name: impl Into<String>) -> Self {
        Self::Env(name.into())
    }

    /// Source returning the given token
    pub fn fixed(token: impl Into<String>) -> Self {
        Self::Fixed(Zeroizing::new(token.into()))
    }

    /// Resolve the token
    ///
    /// An unset variable resolves to an empty string; emptiness is checked by
    /// [`SessionSource::require`].
    pub fn resolve(&self) -> Zeroizing<String> {
        match self {
            Self::Env(name) => Zeroizing::new(std::env::var(name).unwrap_or_default()),
            Self::Fixed(token) => token.clone(),
        }
    }

    /// Resolve the token, failing if it is empty
    pub fn require(&self) -> Result<Zeroizing<String>, AocError> {
        let token = self.resolve();
        if token.is_empty() {
            return Err(AocError::MissingSession(self.describe()));
        }
        Ok(token)
    }

    fn describe(&self) -> String {
        match self {
            Self::Env(name) => format!("environment variable {} is unset or empty", name),
            Self::Fixed(_) => "provided session key is empty".to_string(),
        }
    }
}

impl std::fmt::Debug for SessionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env(name) => f.debug_tuple("Env").field(name).finish(),
            Self::Fixed(_) => f.debug_tuple("Fixed").field(&"<redacted>").finish(),
        }
    }
}

impl Default for SessionSource {
    fn default() -> Self {
        Self::env(DEFAULT_SESSION_ENV)
    }
}
