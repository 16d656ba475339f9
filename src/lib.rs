//! # ESL Management API Client
//!
//! A typed, async client for the REST backend of an electronic shelf label
//! (ESL) management platform: stores, products, ESLs, gateways, and
//! categories.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`EslConfig`] and [`EslConfigBuilder`]
//! - Validated newtypes for the base URL and bearer token
//! - An async HTTP client that maps non-2xx responses to explicit errors
//!   carrying the server's `detail` message
//! - A generic [`rest::RestResource`] trait giving every resource the same
//!   `all`, `find`, `create`, `update`, and `delete` operations
//! - An injectable [`RequestObserver`] hook, emitting `tracing` events by default
//!
//! ## Quick Start
//!
//! ```rust
//! use esl_api::{BearerToken, EslConfig, UpdateMethod};
//! use std::time::Duration;
//!
//! let config = EslConfig::builder()
//!     .bearer_token(BearerToken::new("token").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .update_method(UpdateMethod::Patch)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://esl-management-platform.onrender.com");
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use esl_api::{EslConfig, RestClient};
//! use esl_api::rest::{RestResource, ResourceError};
//! use esl_api::rest::resources::{Category, CategoryCreate};
//!
//! let client = RestClient::new(&EslConfig::default())?;
//!
//! let created = Category::create(&client, &CategoryCreate {
//!     name: "Electronics".to_string(),
//!     is_active: Some(true),
//!     ..Default::default()
//! }).await?;
//!
//! match Category::find(&client, &created.id).await {
//!     Ok(category) => assert_eq!(category, created),
//!     Err(ResourceError::NotFound { message, .. }) => eprintln!("gone: {message}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Failure Semantics
//!
//! Every call is attempted once. Non-2xx responses, transport failures,
//! timeouts, and unparseable success bodies are all returned as errors;
//! no partial data is ever returned.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    BaseUrl, BearerToken, EslConfig, EslConfigBuilder, UpdateMethod, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, NoopObserver, RequestObserver, RestClient,
    RestError, TracingObserver,
};

// Re-export resource types
pub use rest::resources::{Category, Esl, Gateway, Product, Store};
pub use rest::{MessageResponse, ResourceError, RestResource};
