//! Connection settings for the HR API. Values come from CLI flags or their
//! environment fallbacks; the bearer token is kept as a secret and is never
//! printed through `Debug`.

use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// Default request timeout applied by the HTTP client.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default base URL of the HR backend in development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub api_base_url: Url,
    pub timeout: Duration,
    /// Forwarded as `X-Windows-User`, the header the HR backend reads the
    /// caller identity from when IIS is not in front of it.
    pub windows_user: Option<String>,
    pub token: Option<SecretString>,
}

impl ApiConfig {
    #[must_use]
    pub fn new(api_base_url: Url) -> Self {
        Self {
            api_base_url,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            windows_user: None,
            token: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_windows_user(mut self, user: Option<String>) -> Self {
        self.windows_user = user.as_deref().and_then(normalize_value);
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<SecretString>) -> Self {
        self.token = token;
        self
    }
}

/// Builds a URL from an explicit base URL and the provided path.
#[must_use]
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
