use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Product entity - the single managed resource
///
/// Stored under an `id` field in MongoDB (uniquely indexed; the driver's
/// automatic `_id` is ignored on read) so the wire representation and the
/// stored document share the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned at creation and immutable thereafter
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product category (free text, matched exactly by filters)
    pub category: String,
    /// Product price
    pub price: f64,
    /// Stock count
    pub stock: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Validated mutable fields of a product, produced by the validator
///
/// Every `NewProduct` has passed the shape checks; constructing one by hand
/// is only appropriate where the fields are known to be well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

/// Incoming candidate for create/update requests
///
/// Fields are deliberately loose (`serde_json::Value`, defaulting to null
/// when absent) so the validator can report which field has the wrong
/// shape instead of serde rejecting the whole body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductDraft {
    /// Product name (expected: non-empty string)
    #[serde(default)]
    pub name: serde_json::Value,
    /// Product category (expected: non-empty string)
    #[serde(default)]
    pub category: serde_json::Value,
    /// Product price (expected: number)
    #[serde(default)]
    pub price: serde_json::Value,
    /// Stock count (expected: integer)
    #[serde(default)]
    pub stock: serde_json::Value,
}

impl Product {
    /// Create a new product with the given id and validated fields
    pub fn new(id: Uuid, fields: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: fields.name,
            category: fields.category,
            price: fields.price,
            stock: fields.stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all mutable fields, keeping id and created_at
    pub fn replace(&mut self, fields: NewProduct) {
        self.name = fields.name;
        self.category = fields.category;
        self.price = fields.price;
        self.stock = fields.stock;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> NewProduct {
        NewProduct {
            name: "Product 1".to_string(),
            category: "Category 1".to_string(),
            price: 10.0,
            stock: 10,
        }
    }

    #[test]
    fn test_new_product_carries_fields_and_id() {
        let id = Uuid::now_v7();
        let product = Product::new(id, sample_fields());

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Product 1");
        assert_eq!(product.category, "Category 1");
        assert_eq!(product.price, 10.0);
        assert_eq!(product.stock, 10);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_replace_keeps_id_and_created_at() {
        let id = Uuid::now_v7();
        let mut product = Product::new(id, sample_fields());
        let created_at = product.created_at;

        product.replace(NewProduct {
            name: "Product 2".to_string(),
            category: "Category 2".to_string(),
            price: 20.5,
            stock: 3,
        });

        assert_eq!(product.id, id);
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.name, "Product 2");
        assert_eq!(product.category, "Category 2");
        assert_eq!(product.price, 20.5);
        assert_eq!(product.stock, 3);
    }

    #[test]
    fn test_product_serializes_id_as_plain_id() {
        let product = Product::new(Uuid::now_v7(), sample_fields());
        let json = serde_json::to_value(&product).unwrap();

        assert!(json.get("id").is_some());
        assert!(json.get("_id").is_none());
        assert_eq!(json["name"], "Product 1");
        assert_eq!(json["price"], 10.0);
        assert_eq!(json["stock"], 10);
    }

    #[test]
    fn test_draft_missing_fields_default_to_null() {
        let draft: ProductDraft = serde_json::from_str("{}").unwrap();
        assert!(draft.name.is_null());
        assert!(draft.category.is_null());
        assert!(draft.price.is_null());
        assert!(draft.stock.is_null());
    }
}
