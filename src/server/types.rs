// src/server/types.rs
// =============================================================================
// Request and response bodies for the HTTP API.
//
// Field names follow the web front-end: `repoName` is camelCase on the wire.
// A missing `token` means "call GitHub without an Authorization header".
// =============================================================================

use serde::{Deserialize, Serialize};

/// Body of POST /api/repo
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoRequest {
    pub owner: String,
    pub repo_name: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of POST /api/repos
#[derive(Debug, Clone, Deserialize)]
pub struct ReposRequest {
    #[serde(default)]
    pub token: Option<String>,
}

/// Response for GET /api/health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
