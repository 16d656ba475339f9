//! Path building infrastructure for REST resources.
//!
//! A resource is configured by its plural name alone. Endpoint templates are
//! relative to that name, and the standard five operations share one table,
//! [`CRUD_PATHS`]. Resources with extra endpoints list them separately.
//!
//! # Path Shapes
//!
//! - Collection operations (`all`, `create`) use the empty template, which
//!   resolves to the trailing slash form: `stores/`
//! - Entity operations (`find`, `update`, `delete`) use `{id}`: `stores/{id}`
//! - Administrative actions use a fixed sub-path: `categories/initialize`
//!
//! # Example
//!
//! ```rust
//! use esl_api::rest::{get_path, resource_url, ResourceOperation, CRUD_PATHS};
//! use std::collections::HashMap;
//!
//! let path = get_path(CRUD_PATHS, ResourceOperation::Find, &["id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("id", "store 7");
//! assert_eq!(resource_url("stores", path.template, &ids), "stores/store%207");
//! ```

use crate::clients::HttpMethod;
use crate::config::UpdateMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// List all resources (GET /resources/).
    All,
    /// Create a new resource (POST /resources/).
    Create,
    /// Update an existing resource (PUT or PATCH /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Seed the collection with its default entries (POST /resources/initialize).
    Initialize,
}

impl ResourceOperation {
    /// Returns the HTTP method for this operation.
    ///
    /// `Update` uses the client's configured [`UpdateMethod`].
    #[must_use]
    pub const fn http_method(&self, update_method: UpdateMethod) -> HttpMethod {
        match self {
            Self::Find | Self::All => HttpMethod::Get,
            Self::Create | Self::Initialize => HttpMethod::Post,
            Self::Update => update_method.http_method(),
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Initialize => "initialize",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates are relative to the resource's plural name and use `{id_name}`
/// placeholders for ID interpolation.
///
/// # Example
///
/// ```rust
/// use esl_api::rest::{ResourcePath, ResourceOperation};
///
/// const INITIALIZE: ResourcePath =
///     ResourcePath::new(ResourceOperation::Initialize, &[], "initialize");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order.
    pub ids: &'static [&'static str],
    /// The template relative to the resource's plural name.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// The five standard operations shared by every resource.
pub const CRUD_PATHS: &[ResourcePath] = &[
    ResourcePath::new(ResourceOperation::All, &[], ""),
    ResourcePath::new(ResourceOperation::Find, &["id"], "{id}"),
    ResourcePath::new(ResourceOperation::Create, &[], ""),
    ResourcePath::new(ResourceOperation::Update, &["id"], "{id}"),
    ResourcePath::new(ResourceOperation::Delete, &["id"], "{id}"),
];

/// Selects the best matching path for an operation.
///
/// Filters paths by operation and required IDs, then picks the one with
/// the most required IDs. Returns `None` when the resource does not
/// support the operation.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL path from a template by interpolating IDs.
///
/// Each value is percent-encoded so an ID can never introduce extra path
/// segments or a query string. Placeholders without a value are left as is.
///
/// # Example
///
/// ```rust
/// use esl_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", "a/b?c");
///
/// assert_eq!(build_path("products/{id}", &ids), "products/a%2Fb%3Fc");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }

    result
}

/// Joins a resource's plural name with an interpolated relative template.
///
/// The empty template yields the collection path with its trailing slash.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn resource_url<V: Display>(plural: &str, template: &str, ids: &HashMap<&str, V>) -> String {
    format!("{plural}/{}", build_path(template, ids))
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORY_ACTIONS: &[ResourcePath] = &[ResourcePath::new(
        ResourceOperation::Initialize,
        &[],
        "initialize",
    )];

    fn no_ids() -> HashMap<&'static str, &'static str> {
        HashMap::new()
    }

    #[test]
    fn test_resource_path_stores_fields_correctly() {
        let path = ResourcePath::new(ResourceOperation::Find, &["id"], "{id}");

        assert_eq!(path.operation, ResourceOperation::Find);
        assert_eq!(path.ids, &["id"]);
        assert_eq!(path.template, "{id}");
    }

    #[test]
    fn test_crud_paths_cover_the_five_standard_operations() {
        for operation in [ResourceOperation::All, ResourceOperation::Create] {
            let path = get_path(CRUD_PATHS, operation, &[]).unwrap();
            assert_eq!(path.template, "");
        }
        for operation in [
            ResourceOperation::Find,
            ResourceOperation::Update,
            ResourceOperation::Delete,
        ] {
            let path = get_path(CRUD_PATHS, operation, &["id"]).unwrap();
            assert_eq!(path.template, "{id}");
        }
        assert!(get_path(CRUD_PATHS, ResourceOperation::Initialize, &[]).is_none());
    }

    #[test]
    fn test_resource_url_derives_collection_and_entity_paths() {
        let mut ids = HashMap::new();
        ids.insert("id", "gw-001");

        assert_eq!(resource_url("gateways", "", &no_ids()), "gateways/");
        assert_eq!(resource_url("gateways", "{id}", &ids), "gateways/gw-001");
        assert_eq!(
            resource_url("categories", CATEGORY_ACTIONS[0].template, &no_ids()),
            "categories/initialize"
        );
    }

    #[test]
    fn test_build_path_interpolates_id() {
        let mut ids = HashMap::new();
        ids.insert("id", "gw-001");

        assert_eq!(build_path("gateways/{id}", &ids), "gateways/gw-001");
    }

    #[test]
    fn test_build_path_percent_encodes_reserved_characters() {
        let mut ids = HashMap::new();
        ids.insert("id", "../admin#x");

        let path = build_path("stores/{id}", &ids);
        assert_eq!(path, "stores/..%2Fadmin%23x");
        assert!(!path.contains('#'));
    }

    #[test]
    fn test_build_path_handles_numeric_ids() {
        let mut ids: HashMap<&str, u64> = HashMap::new();
        ids.insert("id", 123u64);

        assert_eq!(build_path("esls/{id}", &ids), "esls/123");
    }

    #[test]
    fn test_build_path_handles_missing_ids() {
        // Placeholders that aren't in the map remain unchanged
        assert_eq!(build_path("esls/{id}", &no_ids()), "esls/{id}");
    }

    #[test]
    fn test_get_path_returns_none_when_no_match() {
        // Unsupported operation
        assert!(get_path(CATEGORY_ACTIONS, ResourceOperation::Create, &[]).is_none());

        // Missing required ID
        assert!(get_path(CRUD_PATHS, ResourceOperation::Find, &[]).is_none());
    }

    #[test]
    fn test_resource_path_matches_ids() {
        let path = ResourcePath::new(ResourceOperation::Find, &["id"], "{id}");

        assert!(path.matches_ids(&["id"]));
        assert!(path.matches_ids(&["id", "extra"]));
        assert!(!path.matches_ids(&[]));
        assert_eq!(path.id_count(), 1);
    }

    #[test]
    fn test_resource_operation_http_method() {
        let put = UpdateMethod::Put;

        assert_eq!(ResourceOperation::Find.http_method(put), HttpMethod::Get);
        assert_eq!(ResourceOperation::All.http_method(put), HttpMethod::Get);
        assert_eq!(ResourceOperation::Create.http_method(put), HttpMethod::Post);
        assert_eq!(ResourceOperation::Delete.http_method(put), HttpMethod::Delete);
        assert_eq!(ResourceOperation::Initialize.http_method(put), HttpMethod::Post);
    }

    #[test]
    fn test_update_follows_configured_update_method() {
        assert_eq!(
            ResourceOperation::Update.http_method(UpdateMethod::Put),
            HttpMethod::Put
        );
        assert_eq!(
            ResourceOperation::Update.http_method(UpdateMethod::Patch),
            HttpMethod::Patch
        );
    }

    #[test]
    fn test_resource_operation_as_str() {
        assert_eq!(ResourceOperation::Initialize.as_str(), "initialize");
        assert_eq!(ResourceOperation::All.as_str(), "all");
    }
}
