//! Health check endpoints

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    store: &'static str,
    healthy: bool,
}

/// Create a readiness check router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies the MongoDB connection when the persistent
/// store is active; the in-memory store is always ready
async fn readiness_check(State(state): State<AppState>) -> Json<ReadyResponse> {
    let (store, healthy) = match &state.mongo_client {
        Some(client) => ("mongodb", database::mongodb::check_health(client).await),
        None => ("memory", true),
    };

    Json(ReadyResponse {
        status: if healthy { "ready" } else { "unhealthy" }.to_string(),
        store,
        healthy,
    })
}
