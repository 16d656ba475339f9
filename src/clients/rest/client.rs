//! REST client implementation for the ESL management API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with path normalization and per-client header scoping.

use std::collections::HashMap;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{BearerToken, EslConfig, UpdateMethod};

/// REST API client for the ESL management API.
///
/// Provides convenient methods (`get`, `post`, `put`, `patch`, `delete`)
/// for making REST API requests. Resource types use it through the
/// [`RestResource`](crate::rest::RestResource) trait.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync` and cheap to clone.
///
/// # Example
///
/// ```rust,ignore
/// use esl_api::{EslConfig, RestClient};
///
/// let client = RestClient::new(&EslConfig::default())?;
///
/// let response = client.get("stores/", None).await?;
///
/// let body = serde_json::json!({"name": "Electronics"});
/// let response = client.post("categories/", Some(body), None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Verb used by resource updates.
    update_method: UpdateMethod,
    /// Headers added to every request sent through this client.
    extra_headers: HashMap<String, String>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(config: &EslConfig) -> Result<Self, RestError> {
        tracing::debug!(
            base_url = %config.base_url(),
            update_method = %config.update_method(),
            authenticated = config.bearer_token().is_some(),
            "Creating ESL REST client"
        );

        let http_client = HttpClient::new(config)?;

        Ok(Self {
            http_client,
            update_method: config.update_method(),
            extra_headers: HashMap::new(),
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the verb used for resource updates.
    #[must_use]
    pub const fn update_method(&self) -> UpdateMethod {
        self.update_method
    }

    /// Returns the headers this client adds to every request.
    #[must_use]
    pub const fn extra_headers(&self) -> &HashMap<String, String> {
        &self.extra_headers
    }

    /// Returns a clone of this client that sends `token` as its bearer token.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let stores = Store::all(&client.with_bearer_token(token), None).await?;
    /// ```
    #[must_use]
    pub fn with_bearer_token(&self, token: BearerToken) -> Self {
        Self {
            http_client: self.http_client.with_bearer_token(Some(token)),
            ..self.clone()
        }
    }

    /// Returns a clone of this client that sends no bearer token.
    #[must_use]
    pub fn without_bearer_token(&self) -> Self {
        Self {
            http_client: self.http_client.with_bearer_token(None),
            ..self.clone()
        }
    }

    /// Returns a clone of this client that adds `key: value` to every request.
    ///
    /// Caller headers override the defaults, but never the bearer token.
    #[must_use]
    pub fn with_header(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut client = self.clone();
        client.extra_headers.insert(key.into(), value.into());
        client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request to the specified path. The body is optional.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, body, query).await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a PATCH request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Patch, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Sends a request with an explicit method.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors, including a missing
    /// body for PUT or PATCH.
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(method, path, body, query).await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, &normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params);
        }

        if !self.extra_headers.is_empty() {
            builder = builder.extra_headers(self.extra_headers.clone());
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// This function:
/// 1. Strips leading `/` characters
/// 2. Keeps a trailing `/` (collection endpoints are served with it)
/// 3. Returns an error for empty paths and `..` segments
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_path("/stores/")?, "stores/");
/// assert_eq!(normalize_path("stores/42")?, "stores/42");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    if path.split('/').any(|segment| segment == "..") {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;

    fn create_test_client() -> RestClient {
        let config = EslConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8000").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config).unwrap()
    }

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/stores").unwrap(), "stores");
        assert_eq!(normalize_path("//stores").unwrap(), "stores");
    }

    #[test]
    fn test_normalize_path_keeps_trailing_slash() {
        assert_eq!(normalize_path("/categories/").unwrap(), "categories/");
    }

    #[test]
    fn test_normalize_path_handles_nested_paths() {
        assert_eq!(
            normalize_path("categories/initialize").unwrap(),
            "categories/initialize"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
    }

    #[test]
    fn test_normalize_path_rejects_parent_segments() {
        assert!(matches!(
            normalize_path("stores/../admin"),
            Err(RestError::InvalidPath { .. })
        ));
    }

    // === RestClient Construction Tests ===

    #[test]
    fn test_rest_client_uses_configured_update_method() {
        let client = create_test_client();
        assert_eq!(client.update_method(), UpdateMethod::Put);

        let config = EslConfig::builder()
            .update_method(UpdateMethod::Patch)
            .build()
            .unwrap();
        let client = RestClient::new(&config).unwrap();
        assert_eq!(client.update_method(), UpdateMethod::Patch);
    }

    #[test]
    fn test_with_header_does_not_mutate_original() {
        let client = create_test_client();
        let scoped = client.with_header("X-Store-Scope", "downtown");

        assert!(client.extra_headers().is_empty());
        assert_eq!(
            scoped.extra_headers().get("X-Store-Scope"),
            Some(&"downtown".to_string())
        );
    }

    #[test]
    fn test_with_and_without_bearer_token() {
        let client = create_test_client();
        let authed = client.with_bearer_token(BearerToken::new("abc").unwrap());

        assert!(client.http_client().bearer_token().is_none());
        assert_eq!(authed.http_client().bearer_token().unwrap().as_ref(), "abc");
        assert!(authed
            .without_bearer_token()
            .http_client()
            .bearer_token()
            .is_none());
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
