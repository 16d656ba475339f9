//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for resource operations, extending
//! the base [`RestError`](crate::clients::RestError) with resource-specific
//! semantics like `NotFound` and `MalformedResponse`.
//!
//! # Error Handling
//!
//! HTTP status codes map to semantic error variants:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **422**: [`ResourceError::ValidationFailed`] - Request body rejected
//! - **Other 4xx/5xx**: [`ResourceError::Http`] - Wrapped HTTP error
//!
//! Every status failure carries the server's `detail` message, available
//! through [`ResourceError::message`].
//!
//! # Example
//!
//! ```rust,ignore
//! use esl_api::rest::{RestResource, ResourceError};
//!
//! match Store::find(&client, "42").await {
//!     Ok(store) => println!("Found: {}", store.name),
//!     Err(ResourceError::NotFound { resource, id, .. }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use esl_api::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "Store",
///     id: "42".to_string(),
///     message: "Store not found".to_string(),
/// };
/// assert!(error.to_string().contains("Store"));
/// assert_eq!(error.message(), Some("Store not found"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found: {message}")]
    NotFound {
        /// The type name of the resource (e.g., "Store", "Category").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
        /// The message reported by the server.
        message: String,
    },

    /// The server rejected the request body (HTTP 422).
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// The message reported by the server.
        message: String,
    },

    /// A success response could not be parsed into the expected shape.
    #[error("Malformed {resource} response: {message}")]
    MalformedResponse {
        /// The type name of the resource.
        resource: &'static str,
        /// The parse error.
        message: String,
    },

    /// A request body or query could not be serialized.
    #[error("Failed to serialize {resource} request: {message}")]
    Serialization {
        /// The type name of the resource.
        resource: &'static str,
        /// The serializer error.
        message: String,
    },

    /// No valid path matches the provided IDs and operation.
    ///
    /// Also returned for an empty ID, which would otherwise address the
    /// collection.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "delete").
        operation: &'static str,
    },

    /// An HTTP-level error occurred.
    ///
    /// Status failures other than 404 and 422 land here, as do network
    /// failures and timeouts.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Classifies a failed REST call for a resource.
    ///
    /// Maps HTTP status codes to semantic error variants:
    /// - 404 -> `NotFound`
    /// - 422 -> `ValidationFailed`
    /// - Other -> `Http`
    ///
    /// # Example
    ///
    /// ```rust
    /// use esl_api::clients::{HttpError, HttpResponseError, RestError};
    /// use esl_api::rest::ResourceError;
    ///
    /// let error = ResourceError::from_rest_error(
    ///     RestError::Http(HttpError::Response(HttpResponseError {
    ///         code: 404,
    ///         message: "Gone".to_string(),
    ///     })),
    ///     "Gateway",
    ///     Some("gw-1"),
    /// );
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(http_error) => Self::from_http_error(http_error, resource, id),
            other => Self::Rest(other),
        }
    }

    /// Classifies a failed HTTP exchange for a resource.
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            HttpError::Response(response) if response.code == 404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
                message: response.message,
            },
            HttpError::Response(response) if response.code == 422 => Self::ValidationFailed {
                message: response.message,
            },
            other => Self::Http(other),
        }
    }

    /// Returns the server-supplied message for status failures.
    ///
    /// This is the `detail` field of the error body, or the
    /// `HTTP error! status: ...` fallback.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NotFound { message, .. } | Self::ValidationFailed { message } => Some(message),
            Self::Http(HttpError::Response(e)) | Self::Rest(RestError::Http(HttpError::Response(e))) => {
                Some(&e.message)
            }
            _ => None,
        }
    }

    /// Returns the HTTP status code, if the failure came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::ValidationFailed { .. } => Some(422),
            Self::Http(e) | Self::Rest(RestError::Http(e)) => e.status(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
