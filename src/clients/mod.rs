//! HTTP client types for ESL management API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client every request goes through
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API (raw body, parsed on demand)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`RequestObserver`]: Hook notified about every exchange
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Failure Semantics
//!
//! Each request is attempted exactly once. A non-2xx response becomes
//! [`HttpError::Response`] carrying the server's `detail` message (or a
//! status-based fallback); transport failures and timeouts become
//! [`HttpError::Network`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod observer;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use observer::{NoopObserver, RequestObserver, TracingObserver};

pub use rest::{RestClient, RestError};
