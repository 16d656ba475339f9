//! Shared helpers for resource shapes.
//!
//! The backend emits timestamps either as RFC 3339 with an offset
//! (`2024-03-01T10:00:00Z`) or as naive ISO-8601 datetimes
//! (`2024-03-01T10:00:00.123456`). Naive values are UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a backend timestamp, treating naive values as UTC.
///
/// # Example
///
/// ```rust
/// use esl_api::rest::resources::parse_timestamp;
///
/// let with_offset = parse_timestamp("2024-03-01T12:00:00+02:00").unwrap();
/// let naive = parse_timestamp("2024-03-01T10:00:00").unwrap();
/// assert_eq!(with_offset, naive);
///
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Serde helpers for required timestamp fields.
pub(crate) mod timestamp {
    use super::{parse_timestamp, DateTime, Deserialize, Deserializer, Utc};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

/// Serde helpers for optional timestamp fields. `null` and a missing field
/// both become `None`.
pub(crate) mod optional_timestamp {
    use super::{parse_timestamp, DateTime, Deserialize, Deserializer, Utc};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                parse_timestamp(&raw)
                    .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
            })
            .transpose()
    }
}
