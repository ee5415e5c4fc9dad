//! Products API routes
//!
//! This module wires up the products domain to HTTP routes, picking the
//! store variant the configuration asks for. Both arms return the same
//! domain router; only the repository behind it differs.

use axum::Router;
use domain_products::{
    InMemoryProductRepository, MongoProductRepository, ProductService, handlers,
};

use crate::state::AppState;

/// Create products router over the configured store
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => {
            let repository = MongoProductRepository::new(db.clone());
            let service = ProductService::new(repository);
            handlers::router(service)
        }
        None => {
            let repository = InMemoryProductRepository::new();
            let service = ProductService::new(repository);
            handlers::router(service)
        }
    }
}

/// Initialize products indexes (persistent store only)
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    if let Some(db) = &state.db {
        let repository = MongoProductRepository::new(db.clone());
        repository.init_indexes().await?;
    }
    Ok(())
}
