// src/server/mod.rs
// =============================================================================
// The internal HTTP API the web front-end calls:
//
//   POST /api/repo   {owner, repoName, token}  -> nested content tree
//   POST /api/repos  {token}                   -> repository summaries
//   GET  /api/health                           -> {"status": "ok"}
//
// Each request runs its own traversal; nothing is shared between requests
// except the GitHub client (connection pool).
// =============================================================================

mod handlers;
mod router;
mod state;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::github::GitHubClient;
use router::create_router;
use state::ApiState;

/// Builds the full application: routes plus CORS and request tracing.
pub fn app(github: GitHubClient) -> axum::Router {
    let state = Arc::new(ApiState::new(github));
    create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Binds `addr` and serves until Ctrl-C.
pub async fn serve(addr: SocketAddr, github: GitHubClient) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    let local = listener.local_addr()?;
    tracing::info!("API server listening on http://{}", local);

    axum::serve(listener, app(github))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
        .context("API server error")?;

    Ok(())
}
