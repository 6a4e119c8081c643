//! Request dispatcher for the Congress.gov API.
//!
//! Every operation funnels through [`HttpCongressClient::dispatch`], which
//! resolves the relative path against the base URL, serializes the query
//! pairs, forces `format=json`, attaches the `x-api-key` header and maps
//! the response status to [`CongressApiError`].
//!
//! # Example
//!
//! ```ignore
//! use congress_gov_client::congress::{ApiRequest, HttpCongressClient};
//!
//! let client = HttpCongressClient::new("https://api.congress.gov/v3/", "my-api-key");
//! let bills: serde_json::Value = client
//!     .dispatch(&ApiRequest::new("bill/118").param("limit", 5u32))
//!     .await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::request::ApiRequest;
use crate::config::ClientConfig;

/// Base URL of the public Congress.gov v3 API.
pub const DEFAULT_BASE_URL: &str = "https://api.congress.gov/v3/";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Errors that can occur when calling the Congress API.
#[derive(Debug, Error)]
pub enum CongressApiError {
    /// Caller input rejected before any network access
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Base URL or request path could not be turned into a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("Request failed with status {status}")]
    ApiError { status: u16, message: String },

    /// Success body was not JSON or did not match the declared shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CongressApiError {
    /// HTTP status code for upstream failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_bad_request(&self) -> bool {
        matches!(self.status(), Some(400))
    }

    /// 401 and 403 both mean the API key was rejected.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }

    /// The upstream rate limit was hit. Nothing in this crate retries.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self.status(), Some(429))
    }
}

/// Trait for Congress API transports.
///
/// Use [`HttpCongressClient`] for real HTTP calls, or
/// [`mock::MockCongressClient`] (behind `test-utils`) in tests.
#[async_trait]
pub trait CongressApiClient: Send + Sync {
    /// Execute one request and return the raw JSON document.
    async fn fetch(&self, request: &ApiRequest) -> Result<serde_json::Value, CongressApiError>;
}

/// HTTP-based implementation of `CongressApiClient`.
///
/// Holds the API key for its whole lifetime and never mutates it.
pub struct HttpCongressClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpCongressClient {
    /// Create a new client with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create a client with a custom `reqwest::Client` (for testing with custom config).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: with_trailing_slash(base_url.into()),
            api_key: api_key.into(),
        }
    }

    /// Build a client from loaded configuration.
    ///
    /// # Errors
    /// Returns `CongressApiError::Request` if the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, CongressApiError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self::with_client(
            builder.build()?,
            config.base_url.clone(),
            config.api_key.clone(),
        ))
    }

    /// Base URL every request path is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `request`, query string included.
    ///
    /// The resolved URL always stays on the base origin and under the base
    /// path, and its query string is exactly the one built from the
    /// request's pairs.
    ///
    /// # Errors
    /// Returns `InvalidRequest` for an empty path, a path carrying a query
    /// or fragment, or one that resolves outside the base URL. Returns
    /// `InvalidUrl` when the base URL or path does not parse.
    pub fn resolve_url(&self, request: &ApiRequest) -> Result<Url, CongressApiError> {
        // A leading slash would resolve against the host root and drop `/v3/`.
        let path = request.path().trim_start_matches('/');
        if path.is_empty() {
            return Err(CongressApiError::InvalidRequest(
                "request path must not be empty".into(),
            ));
        }
        if path.contains(['?', '#']) {
            return Err(CongressApiError::InvalidRequest(format!(
                "request path '{path}' must not contain a query or fragment"
            )));
        }

        let base = Url::parse(&self.base_url)
            .map_err(|e| CongressApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        let mut url = base
            .join(path)
            .map_err(|e| CongressApiError::InvalidUrl(format!("{path}: {e}")))?;

        if url.origin() != base.origin() || !url.path().starts_with(base.path()) {
            return Err(CongressApiError::InvalidRequest(format!(
                "request path '{path}' resolves outside {}",
                self.base_url
            )));
        }

        url.query_pairs_mut()
            .extend_pairs(request.query_pairs());

        Ok(url)
    }

    /// Send `request` and parse the JSON body as `T`.
    ///
    /// Exactly one GET is issued. The body is not validated beyond what
    /// deserializing into `T` requires.
    ///
    /// # Errors
    /// - `InvalidRequest` / `InvalidUrl` before any network access
    /// - `Request` when no status is obtained or the body cannot be read
    /// - `ApiError` carrying the status code for any non-success status
    /// - `Decode` when a success body is not JSON of shape `T`
    #[tracing::instrument(level = "debug", skip_all, fields(path = %request.path()))]
    pub async fn dispatch<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<T, CongressApiError> {
        let url = self.resolve_url(request)?;
        tracing::debug!(query = url.query().unwrap_or_default(), "sending request");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Congress.gov request failed");
            let message = response.text().await.unwrap_or_default();
            return Err(CongressApiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl std::fmt::Debug for HttpCongressClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCongressClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CongressApiClient for HttpCongressClient {
    async fn fetch(&self, request: &ApiRequest) -> Result<serde_json::Value, CongressApiError> {
        self.dispatch(request).await
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{ApiRequest, CongressApiClient, CongressApiError};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Mock implementation of `CongressApiClient` for unit tests.
    ///
    /// Queue responses with `push_response` and inspect the requests the
    /// code under test built with `requests()`. With nothing queued, every
    /// call fails with a 404.
    pub struct MockCongressClient {
        responses: Mutex<VecDeque<Result<serde_json::Value, CongressApiError>>>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl MockCongressClient {
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Queue the result for the next `fetch` call.
        pub fn push_response(&self, result: Result<serde_json::Value, CongressApiError>) {
            self.responses.lock().unwrap().push_back(result);
        }

        /// Queue a successful JSON body.
        pub fn push_json(&self, body: serde_json::Value) {
            self.push_response(Ok(body));
        }

        /// Get every request passed to `fetch`, in call order.
        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// The most recent request, if any.
        pub fn last_request(&self) -> Option<ApiRequest> {
            self.requests.lock().unwrap().last().cloned()
        }
    }

    impl Default for MockCongressClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl CongressApiClient for MockCongressClient {
        async fn fetch(
            &self,
            request: &ApiRequest,
        ) -> Result<serde_json::Value, CongressApiError> {
            self.requests.lock().unwrap().push(request.clone());

            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Err(CongressApiError::ApiError {
                        status: 404,
                        message: format!("no response queued for {}", request.path()),
                    })
                })
        }
    }
}
