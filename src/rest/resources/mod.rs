//! ESL management API resources.
//!
//! Each resource is a read shape implementing
//! [`RestResource`](crate::rest::RestResource) plus create and update
//! shapes. All resources share one client, one base URL, and one
//! authentication scheme.
//!
//! | Resource | Path | Extras |
//! |---|---|---|
//! | [`Store`] | `stores/` | |
//! | [`Product`] | `products/` | |
//! | [`Esl`] | `esls/` | |
//! | [`Gateway`] | `gateways/` | |
//! | [`Category`] | `categories/` | `active_only` filter, [`Category::initialize`] |
//!
//! # Example
//!
//! ```rust,ignore
//! use esl_api::rest::RestResource;
//! use esl_api::rest::resources::{Product, ProductUpdate};
//!
//! let product = Product::find(&client, "p-100").await?;
//! let repriced = Product::update(&client, &product.id, &ProductUpdate {
//!     selling_price: Some(product.mrp * 0.9),
//!     ..Default::default()
//! }).await?;
//! ```

mod category;
mod common;
mod esl;
mod gateway;
mod product;
mod store;

pub use category::{Category, CategoryCreate, CategoryListParams, CategoryUpdate};
pub use common::parse_timestamp;
pub use esl::{Esl, EslCreate, EslUpdate};
pub use gateway::{Gateway, GatewayCreate, GatewayUpdate};
pub use product::{Product, ProductCreate, ProductUpdate};
pub use store::{Store, StoreCreate, StoreUpdate};
