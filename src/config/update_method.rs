//! Update verb selection.
//!
//! The backend accepts partial bodies on its update endpoints, but whether it
//! treats them as a merge (`PATCH`) or a replacement (`PUT`) is a server
//! decision. [`UpdateMethod`] lets the caller choose the verb explicitly.

use crate::clients::HttpMethod;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The HTTP verb used by [`RestResource::update`](crate::rest::RestResource::update).
///
/// # Example
///
/// ```rust
/// use esl_api::UpdateMethod;
///
/// let method: UpdateMethod = "patch".parse().unwrap();
/// assert_eq!(method, UpdateMethod::Patch);
/// assert_eq!(UpdateMethod::default(), UpdateMethod::Put);
/// assert_eq!(format!("{}", UpdateMethod::Put), "put");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UpdateMethod {
    /// Send updates with `PUT`. This is what the backend serves today.
    #[default]
    Put,
    /// Send updates with `PATCH` (merge semantics).
    Patch,
}

impl UpdateMethod {
    /// Returns the HTTP method for this update verb.
    #[must_use]
    pub const fn http_method(self) -> HttpMethod {
        match self {
            Self::Put => HttpMethod::Put,
            Self::Patch => HttpMethod::Patch,
        }
    }
}

impl fmt::Display for UpdateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
        }
    }
}

impl FromStr for UpdateMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "put" => Ok(Self::Put),
            "patch" => Ok(Self::Patch),
            _ => Err(ConfigError::InvalidUpdateMethod {
                method: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_method_parses_case_insensitively() {
        assert_eq!("PUT".parse::<UpdateMethod>().unwrap(), UpdateMethod::Put);
        assert_eq!(" Patch ".parse::<UpdateMethod>().unwrap(), UpdateMethod::Patch);
    }

    #[test]
    fn test_update_method_rejects_unknown_verbs() {
        let result = "post".parse::<UpdateMethod>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidUpdateMethod { method }) if method == "post"
        ));
    }

    #[test]
    fn test_update_method_maps_to_http_method() {
        assert_eq!(UpdateMethod::Put.http_method(), HttpMethod::Put);
        assert_eq!(UpdateMethod::Patch.http_method(), HttpMethod::Patch);
    }
}
