use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default GroupMeet API base URL
pub const GROUPMEET_DEFAULT_BASE: &str = "http://localhost:5000";
/// Name of the server's session cookie
pub const SESSION_COOKIE: &str = "session";
/// Environment variable holding the API base URL
pub const ENV_BASE_URL: &str = "GROUPMEET_BASE_URL";
/// Environment variable holding the session cookie value
pub const ENV_SESSION: &str = "GROUPMEET_SESSION";

/// Configuration for the GroupMeet client
///
/// Debug output automatically redacts the session via [`SecretString`].
#[derive(Clone, Debug)]
pub struct GroupmeetConfig {
    api_base: String,
    session: Option<SecretString>,
}

impl Default for GroupmeetConfig {
    fn default() -> Self {
        let session = env_trimmed(ENV_SESSION).map(SecretString::from);
        let api_base = env_trimmed(ENV_BASE_URL).unwrap_or_else(|| GROUPMEET_DEFAULT_BASE.into());

        Self { api_base, session }
    }
}

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl GroupmeetConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `GROUPMEET_SESSION` for the session cookie
    /// - `GROUPMEET_BASE_URL` for the API base URL (defaults to `http://localhost:5000`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the session cookie value
    #[must_use]
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(SecretString::from(session.into()));
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// True when a non-blank session is configured
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| !s.expose_secret().trim().is_empty())
    }
}

/// Configuration trait for the GroupMeet client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::GroupmeetError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Validates that a session is present for endpoints that require one.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::GroupmeetError>;
}

impl Config for GroupmeetConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::GroupmeetError> {
        use crate::error::GroupmeetError;

        let mut h = HeaderMap::new();

        if let Some(secret) = &self.session {
            let value = secret.expose_secret().trim();
            if !value.is_empty() {
                h.insert(
                    COOKIE,
                    HeaderValue::from_str(&format!("{SESSION_COOKIE}={value}"))
                        .map_err(|_| GroupmeetError::Config("Invalid session cookie value".into()))?,
                );
            }
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn validate_auth(&self) -> Result<(), crate::error::GroupmeetError> {
        if self.has_session() {
            Ok(())
        } else {
            Err(crate::error::GroupmeetError::Config(format!(
                "Missing GroupMeet session: set {ENV_SESSION} environment variable"
            )))
        }
    }
}
