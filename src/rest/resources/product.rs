//! Product resource implementation.
//!
//! Products are the catalog entries whose prices ESLs display.

use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// A catalog product.
///
/// `category` refers to a [`Category`](super::Category) by name or id;
/// the client does not check that it exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The unique identifier of the product.
    pub id: String,

    /// The product name.
    pub name: String,

    /// The product barcode (EAN/UPC).
    pub barcode: String,

    /// Maximum retail price (list price).
    pub mrp: f64,

    /// Discount applied to the list price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,

    /// The price shown on the label.
    pub selling_price: f64,

    /// The category name or id.
    pub category: String,
}

/// Body for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub barcode: String,
    pub mrp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    pub selling_price: f64,
    pub category: String,
}

/// Partial update for a product. Only set fields are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RestResource for Product {
    type AllParams = ();
    type Create = ProductCreate;
    type Update = ProductUpdate;

    const NAME: &'static str = "Product";
    const PLURAL: &'static str = "products";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::CRUD_PATHS;

    #[test]
    fn test_product_deserialization() {
        let json = r#"{
            "id": "p-100",
            "name": "Basmati Rice 5kg",
            "barcode": "8901234567890",
            "mrp": 650,
            "discount": 10.5,
            "sellingPrice": 581.75,
            "category": "Groceries"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.name, "Basmati Rice 5kg");
        assert!((product.mrp - 650.0).abs() < f64::EPSILON);
        assert_eq!(product.discount, Some(10.5));
        assert!((product.selling_price - 581.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_product_without_discount() {
        let json = r#"{
            "id": "p-101",
            "name": "Milk 1L",
            "barcode": "8900000000017",
            "mrp": 60,
            "sellingPrice": 60,
            "category": "Dairy"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.discount.is_none());

        let round = serde_json::to_value(&product).unwrap();
        assert!(round.get("discount").is_none());
        assert_eq!(round["sellingPrice"], 60.0);
    }

    #[test]
    fn test_product_missing_required_field_fails() {
        let json = r#"{"id": "p-102", "name": "Bread"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_product_update_serializes_only_set_fields() {
        let update = ProductUpdate {
            selling_price: Some(49.0),
            discount: Some(11.0),
            ..Default::default()
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sellingPrice": 49.0, "discount": 11.0})
        );
    }

    #[test]
    fn test_product_uses_standard_crud_paths() {
        assert_eq!(Product::PLURAL, "products");
        assert_eq!(Product::PATHS, CRUD_PATHS);
        assert!(Product::ACTIONS.is_empty());
    }
}
