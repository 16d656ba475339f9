//! HTTP client for ESL management API communication.
//!
//! This module provides the [`HttpClient`] type, the single primitive every
//! resource request goes through.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::observer::RequestObserver;
use crate::config::{BaseUrl, BearerToken, EslConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the ESL management API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`Content-Type`, `Accept`, `User-Agent`)
/// - Overlaying caller headers, then the bearer token
/// - Converting non-2xx responses into [`HttpError::Response`]
/// - Reporting every exchange to the configured [`RequestObserver`]
///
/// Requests are attempted exactly once. There is no retry.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone; clones share the
/// underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use esl_api::EslConfig;
/// use esl_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&EslConfig::default())?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "stores/")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://esl-management-platform.onrender.com`).
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Token sent when the request does not carry its own.
    bearer_token: Option<BearerToken>,
    observer: Arc<dyn RequestObserver>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &EslConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}ESL API Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            bearer_token: config.bearer_token().cloned(),
            observer: config.observer(),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the bearer token sent with requests that carry none of their own.
    #[must_use]
    pub const fn bearer_token(&self) -> Option<&BearerToken> {
        self.bearer_token.as_ref()
    }

    /// Returns a clone of this client that authenticates with `token`.
    #[must_use]
    pub fn with_bearer_token(&self, token: Option<BearerToken>) -> Self {
        Self {
            bearer_token: token,
            ..self.clone()
        }
    }

    /// Returns the full URL for a path relative to the base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        self.base_url.join(path)
    }

    /// Builds the headers sent with `request`.
    ///
    /// Defaults come first, then the request's extra headers replace any
    /// default with the same (case-insensitive) name, then the bearer token
    /// sets `Authorization`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidHeader`] if a header name or
    /// value cannot be sent over HTTP.
    pub fn build_headers(&self, request: &HttpRequest) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.default_headers {
            insert_header(&mut headers, key, value)?;
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                insert_header(&mut headers, key, value)?;
            }
        }
        if let Some(token) = request.bearer_token.as_ref().or(self.bearer_token.as_ref()) {
            let value = HeaderValue::from_str(&token.header_value()).map_err(|_| {
                InvalidHttpRequestError::InvalidHeader {
                    name: AUTHORIZATION.to_string(),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Sends an HTTP request to the API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The transport fails or times out (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);
        let headers = self.build_headers(&request)?;

        self.observer.on_request(request.http_method, &url);
        let result = self.send(&url, &request, headers).await;
        match &result {
            Ok(response) => self
                .observer
                .on_response(request.http_method, &url, response),
            Err(error) => self.observer.on_error(request.http_method, &url, error),
        }

        result
    }

    async fn send(
        &self,
        url: &str,
        request: &HttpRequest,
        headers: HeaderMap,
    ) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self
            .client
            .request(request.http_method.as_reqwest(), url)
            .headers(headers);

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);
        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: response.error_message(),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

fn insert_header(
    headers: &mut HeaderMap,
    key: &str,
    value: &str,
) -> Result<(), InvalidHttpRequestError> {
    let invalid = || InvalidHttpRequestError::InvalidHeader {
        name: key.to_string(),
    };
    let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
    let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
    headers.insert(name, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use reqwest::header::CONTENT_TYPE;

    fn create_test_config(token: Option<&str>) -> EslConfig {
        let mut builder =
            EslConfig::builder().base_url(BaseUrl::new("http://localhost:8000").unwrap());
        if let Some(token) = token {
            builder = builder.bearer_token(BearerToken::new(token).unwrap());
        }
        builder.build().unwrap()
    }

    fn get_request() -> HttpRequest {
        HttpRequest::builder(HttpMethod::Get, "stores/")
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();

        assert_eq!(client.base_url().as_ref(), "http://localhost:8000");
        assert!(client.bearer_token().is_none());
    }

    #[test]
    fn test_default_headers_are_json() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();

        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = EslConfig::builder()
            .user_agent_prefix("Dashboard/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Dashboard/1.0 | "));
        assert!(user_agent.contains("ESL API Client v"));
    }

    #[test]
    fn test_url_for_joins_paths() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        assert_eq!(client.url_for("stores/"), "http://localhost:8000/stores/");
        assert_eq!(
            client.url_for("categories/initialize"),
            "http://localhost:8000/categories/initialize"
        );
    }

    #[test]
    fn test_build_headers_adds_authorization_when_token_configured() {
        let client = HttpClient::new(&create_test_config(Some("abc"))).unwrap();
        let headers = client.build_headers(&get_request()).unwrap();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_build_headers_omits_authorization_without_token() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let headers = client.build_headers(&get_request()).unwrap();

        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_caller_headers_override_defaults_case_insensitively() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "stores/")
            .header("content-type", "application/vnd.esl+json")
            .build()
            .unwrap();

        let headers = client.build_headers(&request).unwrap();
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap(),
            "application/vnd.esl+json"
        );
    }

    #[test]
    fn test_bearer_token_overrides_caller_authorization_header() {
        let client = HttpClient::new(&create_test_config(Some("configured"))).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "stores/")
            .header("Authorization", "Basic Zm9vOmJhcg==")
            .build()
            .unwrap();

        let headers = client.build_headers(&request).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer configured");
    }

    #[test]
    fn test_request_token_overrides_client_token() {
        let client = HttpClient::new(&create_test_config(Some("configured"))).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "stores/")
            .bearer_token(BearerToken::new("per-call").unwrap())
            .build()
            .unwrap();

        let headers = client.build_headers(&request).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer per-call");
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "stores/")
            .header("bad header", "value")
            .build()
            .unwrap();

        assert!(matches!(
            client.build_headers(&request),
            Err(InvalidHttpRequestError::InvalidHeader { name }) if name == "bad header"
        ));
    }

    #[test]
    fn test_with_bearer_token_leaves_original_untouched() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let authed = client.with_bearer_token(Some(BearerToken::new("t").unwrap()));

        assert!(client.bearer_token().is_none());
        assert_eq!(authed.bearer_token().unwrap().as_ref(), "t");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
