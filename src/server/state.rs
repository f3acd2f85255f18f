// src/server/state.rs
// =============================================================================
// State shared by every handler. Handlers get it as State<Arc<ApiState>>.
// =============================================================================

use crate::github::GitHubClient;

/// Shared by all handlers; holds no per-request data.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// Client for the upstream GitHub API.
    pub github: GitHubClient,
}

impl ApiState {
    #[must_use]
    pub fn new(github: GitHubClient) -> Self {
        Self { github }
    }
}
