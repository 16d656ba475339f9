//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, which provides a standardized
//! interface for the ESL management API resources. Resources that implement
//! this trait gain `all()`, `find()`, `create()`, `update()`, and `delete()`.
//!
//! # Implementing a Resource
//!
//! 1. Define the read shape plus create and update shapes with serde derives
//! 2. Implement the `RestResource` trait with associated types and constants
//! 3. The trait provides default implementations for CRUD operations
//!
//! # Example
//!
//! ```rust,ignore
//! use esl_api::rest::RestResource;
//!
//! impl RestResource for Store {
//!     type AllParams = ();
//!     type Create = StoreCreate;
//!     type Update = StoreUpdate;
//!
//!     const NAME: &'static str = "Store";
//!     const PLURAL: &'static str = "stores";
//! }
//!
//! // Usage:
//! let store = Store::find(&client, "42").await?;
//! let stores = Store::all(&client, None).await?;
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpResponse, RestClient};
use crate::rest::{
    get_path, resource_url, MessageResponse, ResourceError, ResourceOperation, ResourcePath,
    CRUD_PATHS,
};

/// A REST resource that can be listed, fetched, created, updated, and deleted.
///
/// Implementors define the resource's paths, name, and shapes, and get
/// default implementations for all CRUD methods.
///
/// # Associated Types
///
/// - `AllParams`: Query parameters for `all()` (use `()` if none)
/// - `Create`: The body sent by `create()`
/// - `Update`: The partial body sent by `update()`; unset fields are omitted
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name (e.g., "Store")
/// - `PLURAL`: The collection name every path is relative to (e.g., "stores")
/// - `PATHS`: The standard operations, [`CRUD_PATHS`] unless overridden
/// - `ACTIONS`: Extra endpoints beyond CRUD, empty by default
#[allow(async_fn_in_trait)]
pub trait RestResource: DeserializeOwned + Clone + Send + Sync + Sized {
    /// Query parameters for `all()` operations.
    type AllParams: Serialize + Default + Send + Sync;

    /// The create shape: the entity without server-assigned fields.
    type Create: Serialize + Send + Sync;

    /// The update shape: every field optional.
    type Update: Serialize + Send + Sync;

    /// The singular name of the resource (e.g., "Store").
    ///
    /// Used in error messages.
    const NAME: &'static str;

    /// The plural name used in URL paths (e.g., "stores").
    const PLURAL: &'static str;

    /// Paths for the standard operations, relative to `PLURAL`.
    const PATHS: &'static [ResourcePath] = CRUD_PATHS;

    /// Extra endpoints such as `initialize`, relative to `PLURAL`.
    const ACTIONS: &'static [ResourcePath] = &[];

    /// Lists all resources matching the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for non-2xx responses and network
    /// failures, and [`ResourceError::MalformedResponse`] if the body is not
    /// a JSON array of the expected shape.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// for esl in Esl::all(&client, None).await? {
    ///     println!("{}: {}%", esl.id, esl.battery_level);
    /// }
    /// ```
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<Vec<Self>, ResourceError> {
        let query = params
            .map(|p| serialize_to_query::<Self, _>(&p))
            .transpose()?
            .filter(|q| !q.is_empty());

        send_operation::<Self, _>(client, ResourceOperation::All, None, None, query).await
    }

    /// Finds a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the server answers 404.
    /// Returns [`ResourceError::PathResolutionFailed`] if `id` is empty.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let gateway = Gateway::find(&client, "gw-001").await?;
    /// println!("Firmware: {}", gateway.firmware_version);
    /// ```
    async fn find(client: &RestClient, id: &str) -> Result<Self, ResourceError> {
        send_operation::<Self, _>(client, ResourceOperation::Find, Some(id), None, None).await
    }

    /// Creates a resource and returns the server's full representation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server answers 422,
    /// and [`ResourceError::Http`] for other non-2xx responses.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let category = Category::create(&client, &CategoryCreate {
    ///     name: "Electronics".to_string(),
    ///     is_active: Some(true),
    ///     ..Default::default()
    /// }).await?;
    /// ```
    async fn create(client: &RestClient, body: &Self::Create) -> Result<Self, ResourceError> {
        let body = serialize_body::<Self, _>(body)?;
        send_operation::<Self, _>(client, ResourceOperation::Create, None, Some(body), None)
            .await
    }

    /// Updates the fields set in `body` and returns the updated resource.
    ///
    /// Sent as PUT or PATCH depending on the client's update method.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let esl = Esl::update(&client, "esl-9", &EslUpdate {
    ///     battery_level: Some(80.0),
    ///     ..Default::default()
    /// }).await?;
    /// ```
    async fn update(
        client: &RestClient,
        id: &str,
        body: &Self::Update,
    ) -> Result<Self, ResourceError> {
        let body = serialize_body::<Self, _>(body)?;
        send_operation::<Self, _>(client, ResourceOperation::Update, Some(id), Some(body), None)
            .await
    }

    /// Deletes a resource by ID and returns the server's confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    async fn delete(client: &RestClient, id: &str) -> Result<MessageResponse, ResourceError> {
        send_operation::<Self, _>(client, ResourceOperation::Delete, Some(id), None, None).await
    }
}

/// Resolves the path for `operation`, sends the request, and parses the
/// success body as `T`.
///
/// Status failures are classified with [`ResourceError::from_rest_error`].
pub(crate) async fn send_operation<R: RestResource, T: DeserializeOwned>(
    client: &RestClient,
    operation: ResourceOperation,
    id: Option<&str>,
    body: Option<Value>,
    query: Option<HashMap<String, String>>,
) -> Result<T, ResourceError> {
    let url = operation_url::<R>(operation, id)?;
    let method = operation.http_method(client.update_method());

    let response = client
        .send(method, &url, body, query)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, R::NAME, id))?;

    parse_response(&response, R::NAME)
}

/// Resolves the request path for `operation` from the resource's tables.
fn operation_url<R: RestResource>(
    operation: ResourceOperation,
    id: Option<&str>,
) -> Result<String, ResourceError> {
    let path_failed = || ResourceError::PathResolutionFailed {
        resource: R::NAME,
        operation: operation.as_str(),
    };

    // An empty id would collapse onto the collection path
    if id.is_some_and(|id| id.trim().is_empty()) {
        return Err(path_failed());
    }

    let available_ids: &[&str] = if id.is_some() { &["id"] } else { &[] };
    let path = get_path(R::PATHS, operation, available_ids)
        .or_else(|| get_path(R::ACTIONS, operation, available_ids))
        .ok_or_else(path_failed)?;

    let mut ids: HashMap<&str, &str> = HashMap::new();
    if let Some(id) = id {
        ids.insert("id", id);
    }

    Ok(resource_url(R::PLURAL, path.template, &ids))
}

/// Parses a success body, mapping shape mismatches to `MalformedResponse`.
fn parse_response<T: DeserializeOwned>(
    response: &HttpResponse,
    resource: &'static str,
) -> Result<T, ResourceError> {
    response
        .json()
        .map_err(|e| ResourceError::MalformedResponse {
            resource,
            message: e.to_string(),
        })
}

fn serialize_body<R: RestResource, B: Serialize>(body: &B) -> Result<Value, ResourceError> {
    serde_json::to_value(body).map_err(|e| ResourceError::Serialization {
        resource: R::NAME,
        message: e.to_string(),
    })
}

/// Serializes a params struct to a query parameter map.
fn serialize_to_query<R: RestResource, T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::Serialization {
        resource: R::NAME,
        message: format!("Failed to serialize params: {e}"),
    })?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {} // Skip null values
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    // Convert arrays to comma-separated values
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
