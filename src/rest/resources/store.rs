//! Store resource implementation.
//!
//! Stores are the physical retail locations that host ESLs and gateways.
//!
//! # Example
//!
//! ```rust,ignore
//! use esl_api::rest::RestResource;
//! use esl_api::rest::resources::{Store, StoreCreate, StoreUpdate};
//!
//! let store = Store::create(&client, &StoreCreate {
//!     name: "Downtown".to_string(),
//!     location: "12 Main St".to_string(),
//!     manager: "R. Iyer".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! let renamed = Store::update(&client, &store.id, &StoreUpdate {
//!     name: Some("Downtown Flagship".to_string()),
//!     ..Default::default()
//! }).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::optional_timestamp;
use crate::rest::RestResource;

/// A retail store.
///
/// # Fields
///
/// ## Server-assigned
/// - `id`
/// - `manager_id` - Present when the manager is a registered user
///
/// ## Writable
/// - `name`, `location`, `manager`
/// - `esl_count` - Number of labels deployed in the store
/// - `status` - Free-form status such as `"active"`
/// - `last_sync` - Last time the store's labels were synchronized
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// The unique identifier of the store.
    pub id: String,

    /// The store's display name.
    pub name: String,

    /// The store's address or area.
    pub location: String,

    /// The manager's name.
    pub manager: String,

    /// The manager's user identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,

    /// Number of ESLs assigned to the store.
    pub esl_count: u32,

    /// The store's status.
    pub status: String,

    /// Last synchronization time.
    #[serde(
        default,
        deserialize_with = "optional_timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_sync: Option<DateTime<Utc>>,
}

/// Body for creating a store. Omitted fields take server defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreCreate {
    /// The store's display name.
    pub name: String,

    /// The store's address or area.
    pub location: String,

    /// The manager's name.
    pub manager: String,

    /// Number of ESLs assigned to the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esl_count: Option<u32>,

    /// The store's status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Last synchronization time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
}

/// Partial update for a store. Only set fields are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub esl_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
}

impl RestResource for Store {
    type AllParams = ();
    type Create = StoreCreate;
    type Update = StoreUpdate;

    const NAME: &'static str = "Store";
    const PLURAL: &'static str = "stores";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::CRUD_PATHS;
    use chrono::TimeZone;

    #[test]
    fn test_store_deserialization() {
        let json = r#"{
            "id": "st-1",
            "name": "Downtown",
            "location": "12 Main St",
            "manager": "R. Iyer",
            "managerId": "usr-7",
            "eslCount": 240,
            "status": "active",
            "lastSync": "2024-05-01T08:30:00"
        }"#;

        let store: Store = serde_json::from_str(json).unwrap();

        assert_eq!(store.id, "st-1");
        assert_eq!(store.manager_id.as_deref(), Some("usr-7"));
        assert_eq!(store.esl_count, 240);
        assert_eq!(
            store.last_sync,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_store_deserialization_without_optional_fields() {
        let json = r#"{
            "id": "st-2",
            "name": "Airport",
            "location": "Terminal 2",
            "manager": "K. Osei",
            "eslCount": 0,
            "status": "inactive"
        }"#;

        let store: Store = serde_json::from_str(json).unwrap();

        assert!(store.manager_id.is_none());
        assert!(store.last_sync.is_none());
    }

    #[test]
    fn test_store_create_uses_camel_case_and_skips_unset() {
        let create = StoreCreate {
            name: "Downtown".to_string(),
            location: "12 Main St".to_string(),
            manager: "R. Iyer".to_string(),
            esl_count: Some(10),
            ..Default::default()
        };

        let json = serde_json::to_value(&create).unwrap();

        assert_eq!(json["eslCount"], 10);
        assert!(json.get("status").is_none());
        assert!(json.get("lastSync").is_none());
    }

    #[test]
    fn test_store_update_serializes_only_set_fields() {
        let update = StoreUpdate {
            status: Some("maintenance".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"status": "maintenance"}));
    }

    #[test]
    fn test_store_uses_standard_crud_paths() {
        assert_eq!(Store::PLURAL, "stores");
        assert_eq!(Store::PATHS, CRUD_PATHS);
        assert!(Store::ACTIONS.is_empty());
    }

    #[test]
    fn test_store_constants() {
        assert_eq!(Store::NAME, "Store");
        assert_eq!(Store::PLURAL, "stores");
    }
}
