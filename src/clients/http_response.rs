//! HTTP response types.
//!
//! [`HttpResponse`] keeps the raw body text. Parsing is deferred to the
//! caller so that a success status with an unparseable body can be reported
//! as a malformed response instead of being silently replaced.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// Body fields checked, in order, for a server-supplied error message.
const MESSAGE_FIELDS: &[&str] = &["detail", "message"];

/// An HTTP response from the API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the canonical reason phrase for the status code, if known.
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        reqwest::StatusCode::from_u16(self.code)
            .ok()
            .and_then(|status| status.canonical_reason())
    }

    /// Deserializes the body into `T`.
    ///
    /// An empty body is treated as JSON `null`, so it deserializes into
    /// `()` or `Option<_>` but not into a struct.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] when the body is not valid JSON or
    /// does not match the shape of `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        if self.body.trim().is_empty() {
            return serde_json::from_value(serde_json::Value::Null);
        }
        serde_json::from_str(&self.body)
    }

    /// Parses the body as an arbitrary JSON value, or `None` if it is not JSON.
    #[must_use]
    pub fn json_value(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Builds the message describing a failed response.
    ///
    /// Uses the body's `detail` field (then `message`) when present. String
    /// values are used verbatim; structured values (such as a list of
    /// validation errors) are rendered as compact JSON. Null and blank
    /// values don't count. Without a usable field, falls back to a message
    /// containing the status code.
    #[must_use]
    pub fn error_message(&self) -> String {
        let server_message = self.json_value().and_then(|body| {
            MESSAGE_FIELDS
                .iter()
                .filter_map(|field| body.get(*field))
                .find_map(|value| match value {
                    serde_json::Value::Null => None,
                    serde_json::Value::String(s) if s.trim().is_empty() => None,
                    serde_json::Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
        });

        server_message.unwrap_or_else(|| self.fallback_message())
    }

    fn fallback_message(&self) -> String {
        self.reason().map_or_else(
            || format!("HTTP error! status: {}", self.code),
            |reason| format!("HTTP error! status: {} {reason}", self.code),
        )
    }
}
