//! Category resource implementation.
//!
//! Categories group products. Unlike the other resources, category fields
//! use snake_case on the wire, and the collection supports an
//! `active_only` filter and an `initialize` action that seeds the default
//! categories.
//!
//! # Example
//!
//! ```rust,ignore
//! use esl_api::rest::RestResource;
//! use esl_api::rest::resources::{Category, CategoryCreate, CategoryListParams};
//!
//! let seeded = Category::initialize(&client).await?;
//! println!("{}", seeded.message);
//!
//! let active = Category::all(&client, Some(CategoryListParams { active_only: true })).await?;
//! assert!(active.iter().all(|c| c.is_active));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::timestamp;
use crate::clients::RestClient;
use crate::rest::{
    send_operation, MessageResponse, ResourceError, ResourceOperation, ResourcePath, RestResource,
};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// The unique identifier of the category.
    pub id: String,

    /// The category name.
    pub name: String,

    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the category is offered for new products.
    pub is_active: bool,

    /// Creation time.
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,

    /// Last modification time.
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

/// Body for creating a category.
///
/// `is_active` defaults to `true` on the server when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryCreate {
    /// The category name.
    pub name: String,

    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Initial active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Partial update for a category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Parameters for listing categories.
///
/// `active_only` is sent as `active_only=true` when set and omitted
/// otherwise, so the default lists every category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryListParams {
    /// Return only categories with `is_active == true`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub active_only: bool,
}

impl CategoryListParams {
    /// Parameters that select active categories only.
    #[must_use]
    pub const fn active_only() -> Self {
        Self { active_only: true }
    }
}

impl Category {
    /// Seeds the backend with its default categories.
    ///
    /// Sends `POST categories/initialize` without a body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the server rejects the request
    /// (for example when categories already exist).
    pub async fn initialize(client: &RestClient) -> Result<MessageResponse, ResourceError> {
        send_operation::<Self, _>(client, ResourceOperation::Initialize, None, None, None).await
    }
}

impl RestResource for Category {
    type AllParams = CategoryListParams;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;

    const NAME: &'static str = "Category";
    const PLURAL: &'static str = "categories";

    const ACTIONS: &'static [ResourcePath] = &[ResourcePath::new(
        ResourceOperation::Initialize,
        &[],
        "initialize",
    )];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{get_path, CRUD_PATHS};

    #[test]
    fn test_category_deserialization() {
        let json = r#"{
            "id": "65f1c0ffee",
            "name": "Electronics",
            "description": null,
            "is_active": true,
            "created_at": "2024-03-01T10:00:00.000000",
            "updated_at": "2024-03-01T10:00:00+00:00"
        }"#;

        let category: Category = serde_json::from_str(json).unwrap();

        assert_eq!(category.name, "Electronics");
        assert!(category.description.is_none());
        assert!(category.is_active);
        assert_eq!(category.created_at, category.updated_at);
    }

    #[test]
    fn test_category_requires_timestamps() {
        let json = r#"{"id": "1", "name": "Dairy", "is_active": true}"#;
        assert!(serde_json::from_str::<Category>(json).is_err());
    }

    #[test]
    fn test_category_create_uses_snake_case() {
        let create = CategoryCreate {
            name: "Electronics".to_string(),
            is_active: Some(true),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            serde_json::json!({"name": "Electronics", "is_active": true})
        );
    }

    #[test]
    fn test_list_params_omit_inactive_filter() {
        let default = serde_json::to_value(CategoryListParams::default()).unwrap();
        assert_eq!(default, serde_json::json!({}));

        let active = serde_json::to_value(CategoryListParams::active_only()).unwrap();
        assert_eq!(active, serde_json::json!({"active_only": true}));
    }

    #[test]
    fn test_category_adds_initialize_to_crud_paths() {
        assert_eq!(Category::PLURAL, "categories");
        assert_eq!(Category::PATHS, CRUD_PATHS);

        let init = get_path(Category::ACTIONS, ResourceOperation::Initialize, &[]).unwrap();
        assert_eq!(init.template, "initialize");
    }
}
