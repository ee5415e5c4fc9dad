use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (in-memory, MongoDB).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product, assigning its id; returns the stored record
    async fn create(&self, fields: NewProduct) -> ProductResult<Product>;

    /// List all live products
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Find a product by id
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Find products whose category matches exactly
    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>>;

    /// Find products whose price matches exactly
    async fn find_by_price(&self, price: f64) -> ProductResult<Vec<Product>>;

    /// Find products whose stock matches exactly
    async fn find_by_stock(&self, stock: i64) -> ProductResult<Vec<Product>>;

    /// Replace all mutable fields of an existing product, keeping its id;
    /// returns `None` if the id does not exist
    async fn update(&self, id: Uuid, fields: NewProduct) -> ProductResult<Option<Product>>;

    /// Delete a product by id; returns `false` if the id did not exist
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}
