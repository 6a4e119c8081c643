//! Congress.gov API client module.
//!
//! Provides the request dispatcher and typed operations for the
//! Congress.gov v3 REST API.
//!
//! # Architecture
//!
//! The module uses a trait-based design for testability:
//!
//! - [`ApiRequest`] - Relative path plus ordered query pairs for one call
//! - [`CongressApiClient`] - Trait defining the single `fetch` operation
//! - [`HttpCongressClient`] - Real HTTP implementation using reqwest
//! - [`endpoints`] - Parameter structs and request builders, one module per resource family
//! - [`CongressService`] - Every named operation, generated from the endpoint table
//! - [`mock::MockCongressClient`] - Mock for unit tests (behind `test-utils` feature)
//!
//! # Testing Patterns
//!
//! ## Unit Tests (Mock Implementation)
//!
//! Use `MockCongressClient` to check the request an operation builds:
//!
//! ```ignore
//! use congress_gov_client::congress::{mock::MockCongressClient, CongressService};
//!
//! let service = CongressService::with_client(MockCongressClient::new());
//! service.client().push_json(json!({ "bills": [] }));
//!
//! service.get_bills(&BillsParams::default()).await?;
//! assert_eq!(service.client().last_request().unwrap().path(), "bill");
//! ```
//!
//! ## Integration Tests (HTTP Stubbing)
//!
//! Use `MockHttpServer` to test `HttpCongressClient` against stubbed HTTP:
//!
//! ```ignore
//! let server = MockHttpServer::start().await;
//!
//! server
//!     .expect_get("/member/A000360")
//!     .with_header("x-api-key", "test-key")
//!     .with_query("format", "json")
//!     .respond_with_json(json!({ "member": { "bioguideId": "A000360" } }))
//!     .mount()
//!     .await;
//!
//! let service = CongressService::with_client(HttpCongressClient::new(server.url(), "test-key"));
//! let member = service.get_member("A000360").await.unwrap();
//! ```

mod client;
pub mod endpoints;
mod request;
mod service;
mod types;

pub use client::{
    CongressApiClient, CongressApiError, HttpCongressClient, API_KEY_HEADER, DEFAULT_BASE_URL,
};
pub use endpoints::{Chamber, ChamberItemId, ChamberListParams, PageParams, ACTIVE_CONGRESS};
pub use request::{iso8601, ApiRequest, QueryValue, FORMAT_JSON, FORMAT_PARAM};
pub use service::CongressService;
pub use types::*;

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
