//! Product Service - translation layer between handlers and the store
//!
//! The service performs no business logic of its own: input validation
//! happens in the handlers before a request reaches this layer, and the
//! store owns persistence. What lives here is the uniform translation of
//! store outcomes: absent records become `NotFound`, and storage failures
//! keep the underlying message or fall back to a per-operation one.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

const CREATE_FAILED: &str = "Error creating the product";
const LIST_FAILED: &str = "Error getting the products";
const GET_FAILED: &str = "Error getting the product";
const UPDATE_FAILED: &str = "Error updating the product";
const DELETE_FAILED: &str = "Error deleting the product";

/// Product service wrapping a repository implementation
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product from already-validated fields
    #[instrument(skip(self, fields), fields(product_name = %fields.name))]
    pub async fn create_product(&self, fields: NewProduct) -> ProductResult<Product> {
        self.repository
            .create(fields)
            .await
            .map_err(|e| storage_error(e, CREATE_FAILED))
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> ProductResult<Vec<Product>> {
        self.repository
            .list_all()
            .await
            .map_err(|e| storage_error(e, LIST_FAILED))
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| storage_error(e, GET_FAILED))?
            .ok_or(ProductError::NotFound(id))
    }

    /// Get all products in a category (exact match; may be empty)
    #[instrument(skip(self))]
    pub async fn get_products_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.repository
            .find_by_category(category)
            .await
            .map_err(|e| storage_error(e, LIST_FAILED))
    }

    /// Get all products with the given price (exact match; may be empty)
    #[instrument(skip(self))]
    pub async fn get_products_by_price(&self, price: f64) -> ProductResult<Vec<Product>> {
        self.repository
            .find_by_price(price)
            .await
            .map_err(|e| storage_error(e, LIST_FAILED))
    }

    /// Get all products with the given stock (exact match; may be empty)
    #[instrument(skip(self))]
    pub async fn get_products_by_stock(&self, stock: i64) -> ProductResult<Vec<Product>> {
        self.repository
            .find_by_stock(stock)
            .await
            .map_err(|e| storage_error(e, LIST_FAILED))
    }

    /// Replace an existing product's fields, keeping its id
    #[instrument(skip(self, fields))]
    pub async fn update_product(&self, id: Uuid, fields: NewProduct) -> ProductResult<Product> {
        self.repository
            .update(id, fields)
            .await
            .map_err(|e| storage_error(e, UPDATE_FAILED))?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product; after this the id resolves to not-found permanently
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(|e| storage_error(e, DELETE_FAILED))?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Keep the underlying storage message when there is one, otherwise fall
/// back to the per-operation message. Non-storage errors pass through.
fn storage_error(err: ProductError, fallback: &str) -> ProductError {
    match err {
        ProductError::Database(msg) if msg.trim().is_empty() => {
            ProductError::Database(fallback.to_string())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    fn fields() -> NewProduct {
        NewProduct {
            name: "Product 1".to_string(),
            category: "Category 1".to_string(),
            price: 10.0,
            stock: 10,
        }
    }

    #[tokio::test]
    async fn test_create_returns_stored_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .returning(|fields| Ok(Product::new(Uuid::now_v7(), fields)));

        let service = ProductService::new(mock_repo);
        let product = service.create_product(fields()).await.unwrap();

        assert_eq!(product.name, "Product 1");
        assert_eq!(product.category, "Category 1");
    }

    #[tokio::test]
    async fn test_get_product_translates_absent_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(Uuid::now_v7()).await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_translates_absent_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.update_product(Uuid::now_v7(), fields()).await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_translates_false_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service.delete_product(Uuid::now_v7()).await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_underlying_message() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list_all()
            .returning(|| Err(ProductError::Database("connection reset".to_string())));

        let service = ProductService::new(mock_repo);
        let result = service.get_products().await;

        match result {
            Err(ProductError::Database(msg)) => assert_eq!(msg, "connection reset"),
            other => panic!("expected database error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_storage_failure_without_message_uses_fallback() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list_all()
            .returning(|| Err(ProductError::Database(String::new())));

        let service = ProductService::new(mock_repo);
        let result = service.get_products().await;

        match result {
            Err(ProductError::Database(msg)) => assert_eq!(msg, "Error getting the products"),
            other => panic!("expected database error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_filtered_reads_pass_empty_results_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_category()
            .returning(|_| Ok(Vec::new()));

        let service = ProductService::new(mock_repo);
        let products = service.get_products_by_category("none").await.unwrap();

        // An empty match is a successful, empty result, not an error
        assert!(products.is_empty());
    }
}
