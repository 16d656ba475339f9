//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use esl_api::{BearerToken, ConfigError};
//!
//! let result = BearerToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBearerToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building an [`EslConfig`](crate::EslConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not an absolute `http` or `https` URL.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Bearer token cannot be empty.
    #[error("Bearer token cannot be empty. Omit the token instead of passing an empty string.")]
    EmptyBearerToken,

    /// The request timeout must be greater than zero.
    #[error("Request timeout must be greater than zero.")]
    ZeroTimeout,

    /// The update method is not one of the supported verbs.
    #[error("Invalid update method '{method}'. Expected 'put' or 'patch'.")]
    InvalidUpdateMethod {
        /// The invalid method string that was provided.
        method: String,
    },
}
