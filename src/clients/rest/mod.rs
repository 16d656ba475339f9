//! REST API client for the ESL management API.
//!
//! This module provides a higher-level REST client built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`,
//!   `patch()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/stores/` -> `stores/`
//! - Trailing slashes are kept: collection endpoints live at `stores/`
//! - Empty paths and `..` segments are rejected

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
