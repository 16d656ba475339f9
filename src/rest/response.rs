//! Confirmation payloads returned by the ESL management API.

use serde::{Deserialize, Serialize};

/// A `{ "message": ... }` confirmation body.
///
/// Returned by `delete()` on every resource and by
/// [`Category::initialize`](crate::rest::resources::Category::initialize).
///
/// # Example
///
/// ```rust
/// use esl_api::rest::MessageResponse;
///
/// let response: MessageResponse =
///     serde_json::from_str(r#"{"message": "Store deleted successfully"}"#).unwrap();
/// assert_eq!(response.message, "Store deleted successfully");
/// assert_eq!(response.to_string(), "Store deleted successfully");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MessageResponse {
    /// The confirmation text.
    pub message: String,
}

impl std::fmt::Display for MessageResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
