// src/server/router.rs
// =============================================================================
// Route table for the internal API. Paths match what the web front-end
// fetches, so they are not versioned.
// =============================================================================

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use super::{handlers, state::ApiState};

/// Creates the API router with all routes.
pub fn create_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/repo", post(handlers::repo_tree))
        .route("/api/repos", post(handlers::repo_list))
        .route("/api/health", get(handlers::health))
        .with_state(state)
}
