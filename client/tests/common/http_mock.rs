//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing. Use it to mock Congress.gov responses in integration tests.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_external_api_call() {
//!     let server = MockHttpServer::start().await;
//!
//!     server
//!         .expect_get("/congress/current")
//!         .respond_with_json(json!({"congress": {"name": "119th Congress"}}))
//!         .mount()
//!         .await;
//!
//!     // Point HttpCongressClient at server.url()
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(500)`, optionally `.with_json_response(body)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`

use std::time::Duration;

use reqwest::Url;
use serde_json::Value;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

pub use wiremock::MockServer as WiremockServer;

/// A running stub server.
pub struct MockHttpServer {
    server: WiremockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: WiremockServer::start().await,
        }
    }

    /// Base URL of the server, without a trailing slash.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// The underlying wiremock server, for matchers this wrapper lacks.
    pub const fn inner(&self) -> &WiremockServer {
        &self.server
    }

    /// Start a stub for `GET {path}`.
    pub fn expect_get(&self, route: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: &self.server,
            mock: Mock::given(method("GET")).and(path(route)),
            status: 200,
            body: None,
            delay: None,
            times: None,
        }
    }

    /// URLs of every request received so far, in arrival order.
    pub async fn received_urls(&self) -> Vec<Url> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| request.url)
            .collect()
    }

    /// Panics if any `expect_times` expectation was not met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }
}

/// Declarative stub under construction. Nothing is registered until `mount`.
pub struct StubBuilder<'a> {
    server: &'a WiremockServer,
    mock: wiremock::MockBuilder,
    status: u16,
    body: Option<ResponseBody>,
    delay: Option<Duration>,
    times: Option<u64>,
}

enum ResponseBody {
    Json(Value),
    Raw(String),
}

impl StubBuilder<'_> {
    #[must_use]
    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.mock = self.mock.and(header(name, value));
        self
    }

    #[must_use]
    pub fn with_query(mut self, name: &'static str, value: &'static str) -> Self {
        self.mock = self.mock.and(query_param(name, value));
        self
    }

    #[must_use]
    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.body = Some(ResponseBody::Json(body));
        self
    }

    #[must_use]
    pub fn respond_with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(ResponseBody::Raw(body.into()));
        self
    }

    #[must_use]
    pub const fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// JSON body for an error status set with `respond_with_status`.
    #[must_use]
    pub fn with_json_response(self, body: Value) -> Self {
        self.respond_with_json(body)
    }

    #[must_use]
    pub const fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    #[must_use]
    pub const fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut template = ResponseTemplate::new(self.status);
        template = match self.body {
            Some(ResponseBody::Json(body)) => template.set_body_json(body),
            Some(ResponseBody::Raw(body)) => template.set_body_string(body),
            None => template,
        };
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        let mut mock = self.mock.respond_with(template);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
