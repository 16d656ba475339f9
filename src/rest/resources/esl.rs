//! ESL resource implementation.
//!
//! An ESL (electronic shelf label) is a battery-powered display bound to a
//! product in a store. The product and store are carried by name.
//!
//! # Example
//!
//! ```rust,ignore
//! use esl_api::rest::RestResource;
//! use esl_api::rest::resources::{Esl, EslUpdate};
//!
//! let low_battery: Vec<Esl> = Esl::all(&client, None)
//!     .await?
//!     .into_iter()
//!     .filter(|esl| esl.battery_level < 20.0)
//!     .collect();
//!
//! Esl::update(&client, "esl-9", &EslUpdate {
//!     status: Some("maintenance".to_string()),
//!     ..Default::default()
//! }).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::optional_timestamp;
use crate::rest::RestResource;

/// An electronic shelf label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Esl {
    /// The unique identifier of the label.
    pub id: String,

    /// Display size, e.g. `"2.9 inch"`.
    pub label_size: String,

    /// Battery level in percent.
    pub battery_level: f64,

    /// Signal strength as reported by the gateway.
    pub signal_strength: f64,

    /// The label's status.
    pub status: String,

    /// Name of the product shown on the label.
    pub product_name: String,

    /// Name of the store the label is deployed in.
    pub store_name: String,

    /// Last time the label was synchronized.
    #[serde(
        default,
        deserialize_with = "optional_timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_sync: Option<DateTime<Utc>>,

    /// Whether the last sync is recent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recently_sync: Option<bool>,
}

/// Body for registering a label.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EslCreate {
    pub label_size: String,
    pub battery_level: f64,
    pub signal_strength: f64,
    pub status: String,
    pub product_name: String,
    pub store_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recently_sync: Option<bool>,
}

/// Partial update for a label.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EslUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recently_sync: Option<bool>,
}

impl RestResource for Esl {
    type AllParams = ();
    type Create = EslCreate;
    type Update = EslUpdate;

    const NAME: &'static str = "Esl";
    const PLURAL: &'static str = "esls";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::CRUD_PATHS;

    #[test]
    fn test_esl_deserialization() {
        let json = r#"{
            "id": "esl-9",
            "labelSize": "2.9 inch",
            "batteryLevel": 87,
            "signalStrength": -61.5,
            "status": "online",
            "productName": "Milk 1L",
            "storeName": "Downtown",
            "lastSync": "2024-05-01T08:30:00Z",
            "isRecentlySync": true
        }"#;

        let esl: Esl = serde_json::from_str(json).unwrap();

        assert_eq!(esl.label_size, "2.9 inch");
        assert!((esl.battery_level - 87.0).abs() < f64::EPSILON);
        assert!((esl.signal_strength + 61.5).abs() < f64::EPSILON);
        assert_eq!(esl.is_recently_sync, Some(true));
        assert!(esl.last_sync.is_some());
    }

    #[test]
    fn test_esl_rejects_non_numeric_battery() {
        let json = r#"{
            "id": "esl-9",
            "labelSize": "2.9 inch",
            "batteryLevel": "full",
            "signalStrength": 3,
            "status": "online",
            "productName": "Milk 1L",
            "storeName": "Downtown"
        }"#;

        assert!(serde_json::from_str::<Esl>(json).is_err());
    }

    #[test]
    fn test_esl_update_serializes_only_set_fields() {
        let update = EslUpdate {
            battery_level: Some(55.0),
            is_recently_sync: Some(false),
            ..Default::default()
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"batteryLevel": 55.0, "isRecentlySync": false})
        );
    }

    #[test]
    fn test_esl_uses_standard_crud_paths() {
        assert_eq!(Esl::PLURAL, "esls");
        assert_eq!(Esl::PATHS, CRUD_PATHS);
        assert!(Esl::ACTIONS.is_empty());
    }
}
