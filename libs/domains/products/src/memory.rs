//! In-memory implementation of ProductRepository
//!
//! Owns the collection as a `Vec` behind a `tokio::sync::RwLock`: reads run
//! concurrently, mutations are serialized by the write lock. Lookups are
//! linear scans, which is fine at this scale. Insertion order is preserved
//! and every read hands out clones, so callers never observe a
//! half-written record.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::ids::IdGenerator;
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

/// In-memory implementation of the ProductRepository
///
/// The non-persistent store variant: process-local, empty on startup,
/// infallible. Useful for local development and tests, and the reference
/// semantics the MongoDB variant mirrors.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
    ids: IdGenerator,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self, fields), fields(product_name = %fields.name))]
    async fn create(&self, fields: NewProduct) -> ProductResult<Product> {
        let product = Product::new(self.ids.generate(), fields);

        self.products.write().await.push(product.clone());

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_price(&self, price: f64) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| p.price == price)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_stock(&self, stock: i64) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| p.stock == stock)
            .cloned()
            .collect())
    }

    #[instrument(skip(self, fields))]
    async fn update(&self, id: Uuid, fields: NewProduct) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        product.replace(fields);

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(Some(product.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        let Some(position) = products.iter().position(|p| p.id == id) else {
            return Ok(false);
        };

        products.remove(position);

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, category: &str, price: f64, stock: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
        }
    }

    #[tokio::test]
    async fn test_create_then_find_by_id_round_trips() {
        let repo = InMemoryProductRepository::new();

        let created = repo
            .create(fields("Product 1", "Category 1", 10.0, 10))
            .await
            .unwrap();
        let found = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_created_products_get_distinct_ids() {
        let repo = InMemoryProductRepository::new();

        let a = repo.create(fields("A", "c", 1.0, 1)).await.unwrap();
        let b = repo.create(fields("B", "c", 1.0, 1)).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_list_all_preserves_insertion_order() {
        let repo = InMemoryProductRepository::new();

        for name in ["first", "second", "third"] {
            repo.create(fields(name, "c", 1.0, 1)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_list_all_is_idempotent() {
        let repo = InMemoryProductRepository::new();
        repo.create(fields("Product 1", "Category 1", 10.0, 10))
            .await
            .unwrap();

        let first = repo.list_all().await.unwrap();
        let second = repo.list_all().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_all_empty_store() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_category_matches_exactly() {
        let repo = InMemoryProductRepository::new();
        repo.create(fields("keyboard", "electronics", 50.0, 5))
            .await
            .unwrap();
        repo.create(fields("mouse", "electronics", 25.0, 8))
            .await
            .unwrap();
        repo.create(fields("novel", "books", 12.0, 3)).await.unwrap();
        // Exact match only: differing case and partial matches excluded
        repo.create(fields("amp", "Electronics", 99.0, 1))
            .await
            .unwrap();

        let found = repo.find_by_category("electronics").await.unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.category == "electronics"));
    }

    #[tokio::test]
    async fn test_find_by_price_and_stock() {
        let repo = InMemoryProductRepository::new();
        repo.create(fields("a", "c", 10.0, 5)).await.unwrap();
        repo.create(fields("b", "c", 10.0, 7)).await.unwrap();
        repo.create(fields("c", "c", 12.5, 5)).await.unwrap();

        let by_price = repo.find_by_price(10.0).await.unwrap();
        assert_eq!(by_price.len(), 2);

        let by_stock = repo.find_by_stock(5).await.unwrap();
        assert_eq!(by_stock.len(), 2);

        assert!(repo.find_by_price(99.9).await.unwrap().is_empty());
        assert!(repo.find_by_stock(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_preserves_id() {
        let repo = InMemoryProductRepository::new();
        let created = repo
            .create(fields("Product 1", "Category 1", 10.0, 10))
            .await
            .unwrap();

        let updated = repo
            .update(created.id, fields("Product 2", "Category 2", 20.0, 2))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Product 2");
        assert_eq!(updated.category, "Category 2");
        assert_eq!(updated.price, 20.0);
        assert_eq!(updated.stock, 2);

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let repo = InMemoryProductRepository::new();
        let result = repo
            .update(Uuid::now_v7(), fields("x", "y", 1.0, 1))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_permanently() {
        let repo = InMemoryProductRepository::new();
        let created = repo
            .create(fields("Product 1", "Category 1", 10.0, 10))
            .await
            .unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        // Second delete reports the id as gone
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_false() {
        let repo = InMemoryProductRepository::new();
        assert!(!repo.delete(Uuid::now_v7()).await.unwrap());
    }

    #[tokio::test]
    async fn test_reads_hand_out_snapshots() {
        let repo = InMemoryProductRepository::new();
        let created = repo
            .create(fields("Product 1", "Category 1", 10.0, 10))
            .await
            .unwrap();

        let mut snapshot = repo.find_by_id(created.id).await.unwrap().unwrap();
        snapshot.name = "mutated".to_string();

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Product 1");
    }
}
