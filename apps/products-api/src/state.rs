//! Application state management.
//!
//! This module defines the shared application state passed to all request
//! handlers: configuration plus the MongoDB handles when the persistent
//! store is configured.

use mongodb::{Client, Database};

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones under the
/// hood of the MongoDB client).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool);
    /// `None` when the in-memory store is active
    pub mongo_client: Option<Client>,
    /// MongoDB database instance; `None` when the in-memory store is active
    pub db: Option<Database>,
}
