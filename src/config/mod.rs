//! Configuration types for the ESL management API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`EslConfig`]: The configuration shared by every resource client
//! - [`EslConfigBuilder`]: A builder for constructing [`EslConfig`] instances
//! - [`BaseUrl`]: A validated API base URL
//! - [`BearerToken`]: A validated bearer token with masked debug output
//! - [`UpdateMethod`]: The verb used for update requests
//!
//! Every resource is served from the same base URL and receives the same
//! authentication, so there is exactly one place to point the client at
//! a different backend.
//!
//! # Example
//!
//! ```rust
//! use esl_api::{BaseUrl, BearerToken, EslConfig, UpdateMethod};
//! use std::time::Duration;
//!
//! let config = EslConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8000").unwrap())
//!     .bearer_token(BearerToken::new("token").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .update_method(UpdateMethod::Patch)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "http://localhost:8000");
//! ```

mod newtypes;
mod update_method;

pub use newtypes::{BaseUrl, BearerToken};
pub use update_method::UpdateMethod;

use std::sync::Arc;
use std::time::Duration;

use crate::clients::{RequestObserver, TracingObserver};
use crate::error::ConfigError;

/// Base URL of the hosted ESL management platform.
pub const DEFAULT_BASE_URL: &str = "https://esl-management-platform.onrender.com";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the ESL management API client.
///
/// # Thread Safety
///
/// `EslConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct EslConfig {
    base_url: BaseUrl,
    bearer_token: Option<BearerToken>,
    timeout: Option<Duration>,
    update_method: UpdateMethod,
    user_agent_prefix: Option<String>,
    observer: Arc<dyn RequestObserver>,
}

impl EslConfig {
    /// Creates a new builder for constructing an `EslConfig`.
    #[must_use]
    pub fn builder() -> EslConfigBuilder {
        EslConfigBuilder::new()
    }

    /// Returns the base URL every resource path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the bearer token, if configured.
    #[must_use]
    pub const fn bearer_token(&self) -> Option<&BearerToken> {
        self.bearer_token.as_ref()
    }

    /// Returns the request timeout. `None` means requests may wait indefinitely.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the verb used for update requests.
    #[must_use]
    pub const fn update_method(&self) -> UpdateMethod {
        self.update_method
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the observer notified about every request.
    #[must_use]
    pub fn observer(&self) -> Arc<dyn RequestObserver> {
        Arc::clone(&self.observer)
    }
}

impl Default for EslConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bearer_token: None,
            timeout: Some(DEFAULT_TIMEOUT),
            update_method: UpdateMethod::default(),
            user_agent_prefix: None,
            observer: Arc::new(TracingObserver),
        }
    }
}

fn default_base_url() -> BaseUrl {
    BaseUrl::new(DEFAULT_BASE_URL).unwrap_or_else(|_| unreachable!("default base URL is valid"))
}

// Verify EslConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EslConfig>();
};

/// Builder for constructing [`EslConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `bearer_token`: `None`
/// - `timeout`: [`DEFAULT_TIMEOUT`]
/// - `update_method`: [`UpdateMethod::Put`]
/// - `user_agent_prefix`: `None`
/// - `observer`: [`TracingObserver`]
#[derive(Debug, Default)]
pub struct EslConfigBuilder {
    base_url: Option<BaseUrl>,
    bearer_token: Option<BearerToken>,
    timeout: Option<Option<Duration>>,
    update_method: Option<UpdateMethod>,
    user_agent_prefix: Option<String>,
    observer: Option<Arc<dyn RequestObserver>>,
}

impl EslConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the bearer token sent with every request.
    #[must_use]
    pub fn bearer_token(mut self, token: BearerToken) -> Self {
        self.bearer_token = Some(token);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(Some(timeout));
        self
    }

    /// Disables the request timeout.
    #[must_use]
    pub const fn no_timeout(mut self) -> Self {
        self.timeout = Some(None);
        self
    }

    /// Sets the verb used for update requests.
    #[must_use]
    pub const fn update_method(mut self, method: UpdateMethod) -> Self {
        self.update_method = Some(method);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Replaces the default [`TracingObserver`].
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Builds the [`EslConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<EslConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(Some(DEFAULT_TIMEOUT));
        if timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(EslConfig {
            base_url: self.base_url.unwrap_or_else(default_base_url),
            bearer_token: self.bearer_token,
            timeout,
            update_method: self.update_method.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            observer: self
                .observer
                .unwrap_or_else(|| Arc::new(TracingObserver)),
        })
    }
}
