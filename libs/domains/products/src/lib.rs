//! Products Domain
//!
//! This module provides a complete domain implementation for managing products.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, input validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Error translation, orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory / MongoDB implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     memory::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! // Create a repository and service
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```
//!
//! For the persistent variant, swap in [`MongoProductRepository`] — both
//! implementations satisfy the same [`ProductRepository`] contract.

pub mod error;
pub mod handlers;
pub mod ids;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod validator;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use ids::IdGenerator;
pub use memory::InMemoryProductRepository;
pub use models::{NewProduct, Product, ProductDraft};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
pub use validator::validate_draft;
