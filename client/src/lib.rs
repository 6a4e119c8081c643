#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Typed async client for the Congress.gov v3 REST API.
//!
//! ```ignore
//! use congress_gov_client::congress::{endpoints::bill::BillsParams, CongressService};
//!
//! let service = CongressService::new("my-api-key");
//! let bills = service
//!     .get_bills(&BillsParams { congress: Some(118), ..BillsParams::default() })
//!     .await?;
//! ```

pub mod config;
pub mod congress;

pub use config::{ClientConfig, ConfigError};
pub use congress::{CongressApiError, CongressService};
