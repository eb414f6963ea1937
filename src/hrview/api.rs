//! HTTP access to the HR API. The view model only sees the [`HttpClient`] seam so
//! tests can swap in fakes; [`ReqwestClient`] is the production implementation
//! with a fixed timeout policy and the identity headers the backend expects.

use super::{
    config::{ApiConfig, build_url_with_base},
    errors::AppError,
};
use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{Instrument, debug, info_span};

/// Header the HR backend reads the caller's Windows account from.
pub const WINDOWS_USER_HEADER: &str = "x-windows-user";
/// Maximum number of error body characters carried into an error message.
const MAX_ERROR_CHARS: usize = 200;

/// Raw response as seen by the view layer: status plus the undecoded body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issues a GET for `path`, relative to the client's base URL.
    async fn get(&self, path: &str) -> Result<HttpResponse, AppError>;
}

pub struct ReqwestClient {
    client: Client,
    base_url: String,
}

impl ReqwestClient {
    /// # Errors
    /// Returns `AppError::Config` if a configured header value is not valid
    /// ASCII or the underlying client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();

        if let Some(user) = &config.windows_user {
            let value = HeaderValue::from_str(user)
                .map_err(|err| AppError::Config(format!("Invalid windows user: {err}")))?;
            headers.insert(WINDOWS_USER_HEADER, value);
        }

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| AppError::Config("Invalid bearer token.".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.to_string(),
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, path: &str) -> Result<HttpResponse, AppError> {
        let url = build_url_with_base(&self.base_url, path);

        let span = info_span!("hr.get", http.method = "GET", url = %url);
        let response = self
            .client
            .get(&url)
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_request_error)?;

        debug!(status, bytes = body.len(), "response from {url}");

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

/// Fetches `path` and decodes a JSON body, failing on any non-2xx status.
///
/// # Errors
/// Returns the transport error from the client, `AppError::Http` for non-2xx
/// responses, or `AppError::Parse` when the body does not decode into `T`.
pub async fn get_json<T: DeserializeOwned>(
    client: &dyn HttpClient,
    path: &str,
) -> Result<T, AppError> {
    let response = client.get(path).await?;
    handle_json_response(&response)
}

/// Maps network errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

fn handle_json_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, AppError> {
    if response.ok() {
        serde_json::from_slice(&response.body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(AppError::Http {
            status: response.status,
            message: sanitize_body(&String::from_utf8_lossy(&response.body)),
        })
    }
}

/// Trims and truncates HTTP error bodies before they reach a log line.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
