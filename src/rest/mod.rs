//! REST resource infrastructure for the ESL management API.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: A standardized interface for CRUD operations
//! - **Path building**: Paths derived from each resource's plural name
//! - **[`ResourceError`]**: Semantic error types for resource operations
//! - **[`MessageResponse`]**: Confirmation payload for deletes and actions
//! - **[`resources`]**: Stores, products, ESLs, gateways, and categories
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use esl_api::{EslConfig, RestClient};
//! use esl_api::rest::RestResource;
//! use esl_api::rest::resources::{Category, CategoryCreate, CategoryListParams};
//!
//! let client = RestClient::new(&EslConfig::default())?;
//!
//! // Create
//! let created = Category::create(&client, &CategoryCreate {
//!     name: "Electronics".to_string(),
//!     is_active: Some(true),
//!     ..Default::default()
//! }).await?;
//!
//! // Read back
//! let fetched = Category::find(&client, &created.id).await?;
//!
//! // List active categories only
//! let active = Category::all(&client, Some(CategoryListParams { active_only: true })).await?;
//!
//! // Delete
//! let confirmation = Category::delete(&client, &created.id).await?;
//! println!("{}", confirmation.message);
//! ```

mod errors;
mod path;
mod resource;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, get_path, resource_url, ResourceOperation, ResourcePath, CRUD_PATHS};
pub use resource::RestResource;
pub use response::MessageResponse;

pub(crate) use resource::send_operation;
