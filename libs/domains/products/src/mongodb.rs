//! MongoDB implementation of ProductRepository
//!
//! Documents are stored with the product id under an `id` field (uniquely
//! indexed via [`MongoProductRepository::init_indexes`]); the driver's
//! automatic `_id` is ignored on read, so the stored shape matches the wire
//! shape. Each operation issues a single driver call and awaits its
//! completion; concurrency control is the server's concern.

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc, to_bson},
    options::IndexOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    ///
    /// # Arguments
    /// * `db` - MongoDB database instance
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("mydb");
    /// let repo = MongoProductRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Ensure the unique index on the product id exists
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(options)
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Build the filter document matching a single product id
    fn id_filter(id: Uuid) -> Document {
        doc! { "id": to_bson(&id).unwrap_or(Bson::Null) }
    }

    /// Insertion-order listing: `created_at` ascending
    fn insertion_order() -> Document {
        doc! { "created_at": 1 }
    }

    async fn find_all(&self, filter: Document) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(Self::insertion_order())
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, fields), fields(product_name = %fields.name))]
    async fn create(&self, fields: NewProduct) -> ProductResult<Product> {
        // The store assigns the id; the domain's IdGenerator is not involved
        let product = Product::new(Uuid::now_v7(), fields);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        self.find_all(doc! {}).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.find_all(doc! { "category": category }).await
    }

    #[instrument(skip(self))]
    async fn find_by_price(&self, price: f64) -> ProductResult<Vec<Product>> {
        self.find_all(doc! { "price": price }).await
    }

    #[instrument(skip(self))]
    async fn find_by_stock(&self, stock: i64) -> ProductResult<Vec<Product>> {
        self.find_all(doc! { "stock": stock }).await
    }

    #[instrument(skip(self, fields))]
    async fn update(&self, id: Uuid, fields: NewProduct) -> ProductResult<Option<Product>> {
        let filter = Self::id_filter(id);

        let Some(mut product) = self.collection.find_one(filter.clone()).await? else {
            return Ok(None);
        };

        product.replace(fields);

        self.collection.replace_one(filter, &product).await?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(Some(product))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProduct;

    // Integration tests would require a MongoDB instance; these cover the
    // pure document-building and serialization pieces.

    #[test]
    fn test_id_filter_uses_the_plain_id_field() {
        let id = Uuid::now_v7();
        let filter = MongoProductRepository::id_filter(id);

        assert!(filter.contains_key("id"));
        assert!(!filter.contains_key("_id"));
        assert_eq!(filter.get_str("id").unwrap(), id.to_string());
    }

    #[test]
    fn test_insertion_order_sorts_by_created_at() {
        let sort = MongoProductRepository::insertion_order();
        assert_eq!(sort.get_i32("created_at").unwrap(), 1);
    }

    #[test]
    fn test_product_document_round_trip() {
        let product = Product::new(
            Uuid::now_v7(),
            NewProduct {
                name: "Product 1".to_string(),
                category: "Category 1".to_string(),
                price: 10.5,
                stock: 10,
            },
        );

        let document = mongodb::bson::to_document(&product).unwrap();
        assert!(document.contains_key("id"));
        assert_eq!(document.get_f64("price").unwrap(), 10.5);
        assert_eq!(document.get_i64("stock").unwrap(), 10);

        let decoded: Product = mongodb::bson::from_document(document).unwrap();
        assert_eq!(decoded, product);
    }
}
