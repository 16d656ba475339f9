//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated bearer token forwarded in the `Authorization` header.
///
/// The token is opaque to the client. The `Debug` implementation masks the
/// value so tokens never end up in logs.
///
/// # Example
///
/// ```rust
/// use esl_api::BearerToken;
///
/// let token = BearerToken::new("secret-token").unwrap();
/// assert_eq!(token.as_ref(), "secret-token");
/// assert_eq!(format!("{:?}", token), "BearerToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Creates a new validated bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBearerToken`] if the token is empty or
    /// only whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyBearerToken);
        }
        Ok(Self(token.to_string()))
    }

    /// Returns the value for the `Authorization` header.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(*****)")
    }
}

/// A validated base URL for the ESL management API.
///
/// Only absolute `http` and `https` URLs with a non-empty host are accepted.
/// Trailing slashes are removed so that resource paths can be appended
/// without producing `//` in request URLs.
///
/// # Example
///
/// ```rust
/// use esl_api::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8000/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8000");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme, has an empty host, or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        let remainder = &url[host_start..];
        if remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        let host_len = if remainder.starts_with('[') {
            // IPv6 literal: the host runs through the closing bracket
            let close = remainder.find(']').ok_or_else(invalid)?;
            let after = &remainder[close + 1..];
            if close == 1 || !(after.is_empty() || after.starts_with([':', '/'])) {
                return Err(invalid());
            }
            close + 1
        } else {
            remainder.find([':', '/']).unwrap_or(remainder.len())
        };
        if host_len == 0 {
            return Err(invalid());
        }
        let host_end = host_start + host_len;

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    ///
    /// IPv6 hosts keep their brackets, e.g. `[::1]`.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative path onto this base URL with exactly one `/` between them.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_rejects_empty_string() {
        assert!(matches!(
            BearerToken::new(""),
            Err(ConfigError::EmptyBearerToken)
        ));
        assert!(matches!(
            BearerToken::new("   "),
            Err(ConfigError::EmptyBearerToken)
        ));
    }

    #[test]
    fn test_bearer_token_masks_value_in_debug() {
        let token = BearerToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "BearerToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_bearer_token_header_value() {
        let token = BearerToken::new("abc123").unwrap();
        assert_eq!(token.header_value(), "Bearer abc123");
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("https://esl-management-platform.onrender.com/").unwrap();
        assert_eq!(url.as_ref(), "https://esl-management-platform.onrender.com");

        let url = BaseUrl::new("http://localhost:8000//").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8000");
    }

    #[test]
    fn test_base_url_parts() {
        let url = BaseUrl::new("http://localhost:8000/api").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
        assert_eq!(url.as_ref(), "http://localhost:8000/api");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("localhost:8000").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("ftp://example.com").is_err());
        assert!(BaseUrl::new("https://example.com?x=1").is_err());
        assert!(BaseUrl::new("https://:8000").is_err());
    }

    #[test]
    fn test_base_url_accepts_bracketed_ipv6_host() {
        let url = BaseUrl::new("http://[::1]:8000/").unwrap();
        assert_eq!(url.host_name(), "[::1]");
        assert_eq!(url.as_ref(), "http://[::1]:8000");

        let url = BaseUrl::new("https://[2001:db8::7]").unwrap();
        assert_eq!(url.host_name(), "[2001:db8::7]");
    }

    #[test]
    fn test_base_url_rejects_malformed_ipv6_host() {
        assert!(BaseUrl::new("http://[::1:8000").is_err());
        assert!(BaseUrl::new("http://[]:8000").is_err());
        assert!(BaseUrl::new("http://[::1]x:8000").is_err());
    }

    #[test]
    fn test_base_url_join_avoids_double_slash() {
        let url = BaseUrl::new("https://api.example.com/").unwrap();
        assert_eq!(url.join("stores/"), "https://api.example.com/stores/");
        assert_eq!(url.join("/stores/42"), "https://api.example.com/stores/42");
    }

    #[test]
    fn test_base_url_deserializes_with_validation() {
        let url: BaseUrl = serde_json::from_str(r#""http://localhost:8000/""#).unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8000");

        let result: Result<BaseUrl, _> = serde_json::from_str(r#""not a url""#);
        assert!(result.is_err());
    }
}
