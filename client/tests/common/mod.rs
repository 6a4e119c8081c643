//! Common test utilities for integration tests.
//!
//! This module provides:
//!
//! - [`http_mock::MockHttpServer`] - Declarative wiremock stubs for the HTTP client
//! - [`init_tracing`] - Route `tracing` output through the test harness
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//!
//! use common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_with_server() {
//!     common::init_tracing();
//!     let server = MockHttpServer::start().await;
//!     // Stub routes, then point a client at server.url()
//! }
//! ```
//!
//! Set `RUST_LOG=congress_gov_client=debug` to see the request events.

#![allow(dead_code)]

pub mod http_mock;

use tracing_subscriber::EnvFilter;

pub const TEST_API_KEY: &str = "test-api-key";

/// Install a test-writer subscriber once per test binary. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
