use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // Connect to MongoDB when configured; otherwise the in-memory store serves
    let (mongo_client, db) = match &config.mongodb {
        Some(mongo_config) => {
            info!("Connecting to MongoDB at {}", mongo_config.url());

            let client =
                database::mongodb::connect_from_config_with_retry(mongo_config, None).await?;
            let db = client.database(mongo_config.database());

            info!(
                "Successfully connected to MongoDB database: {}",
                mongo_config.database()
            );

            (Some(client), Some(db))
        }
        None => {
            info!("No MongoDB configured (MONGODB_URL unset), using the in-memory store");
            (None, None)
        }
    };

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // Initialize indexes for the persistent store
    api::products::init_indexes(&state).await?;

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    info!("Starting Products API with graceful shutdown (30s timeout)");

    let server_config = state.config.server.clone();
    let mongo_client = state.mongo_client;

    // Production-ready server with graceful shutdown
    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30),
        async move {
            if let Some(client) = mongo_client {
                info!("Shutting down: closing MongoDB connections");
                // MongoDB client closes automatically on drop
                drop(client);
                info!("MongoDB connection closed successfully");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
