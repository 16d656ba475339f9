//! Gateway resource implementation.
//!
//! Gateways bridge a store's ESLs to the backend. `last_heartbeat` and
//! `uptime` are reported as display strings by the backend and are kept
//! verbatim.

use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// A network gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
    /// The unique identifier of the gateway.
    pub id: String,

    /// Name of the owning store.
    pub store_name: String,

    /// Identifier of the owning store.
    pub store_id: String,

    /// The gateway's network address.
    pub ip_address: String,

    /// Installed firmware version.
    pub firmware_version: String,

    /// Last heartbeat as reported by the backend.
    pub last_heartbeat: String,

    /// The gateway's status.
    pub status: String,

    /// Number of successful label syncs.
    pub sync_count: u64,

    /// Number of failed label syncs.
    pub error_count: u64,

    /// Uptime, e.g. `"99.9%"` or `"12d 4h"`.
    pub uptime: String,
}

impl Gateway {
    /// Returns the share of failed syncs, or `None` before any activity.
    ///
    /// ```rust
    /// # use esl_api::rest::resources::Gateway;
    /// # let gateway: Gateway = serde_json::from_value(serde_json::json!({
    /// #     "id": "gw-1", "storeName": "Downtown", "storeId": "st-1",
    /// #     "ipAddress": "10.0.0.2", "firmwareVersion": "2.1.0",
    /// #     "lastHeartbeat": "now", "status": "online",
    /// #     "syncCount": 90, "errorCount": 10, "uptime": "99%"
    /// # })).unwrap();
    /// assert_eq!(gateway.error_rate(), Some(0.1));
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn error_rate(&self) -> Option<f64> {
        let total = self.sync_count.saturating_add(self.error_count);
        (total > 0).then(|| self.error_count as f64 / total as f64)
    }
}

/// Body for registering a gateway.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayCreate {
    pub store_name: String,
    pub store_id: String,
    pub ip_address: String,
    pub firmware_version: String,
    pub last_heartbeat: String,
    pub status: String,
    pub sync_count: u64,
    pub error_count: u64,
    pub uptime: String,
}

/// Partial update for a gateway.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_heartbeat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
}

impl RestResource for Gateway {
    type AllParams = ();
    type Create = GatewayCreate;
    type Update = GatewayUpdate;

    const NAME: &'static str = "Gateway";
    const PLURAL: &'static str = "gateways";
}
