// src/config.rs
// =============================================================================
// Runtime configuration shared by every subcommand.
//
// Values come from command-line flags, which fall back to environment
// variables (clap's `env` feature), which fall back to the defaults below.
// Nothing is read from disk.
// =============================================================================

use std::net::SocketAddr;
use std::time::Duration;

/// Public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Address the HTTP service binds to by default.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Repositories shown per page in the list view.
pub const DEFAULT_PER_PAGE: usize = 4;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub REST API.
    pub api_url: String,
    /// Sent as User-Agent; GitHub rejects requests without one.
    pub user_agent: String,
    /// Per-request timeout. `None` keeps reqwest's default (no timeout).
    pub request_timeout: Option<Duration>,
    /// Access token used by the CLI subcommands.
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            request_timeout: None,
            token: None,
        }
    }
}

impl Config {
    /// Builds the config from already-parsed global flags.
    pub fn from_args(api_url: String, token: Option<String>, timeout_secs: Option<u64>) -> Self {
        Self {
            api_url,
            // An empty GITHUB_TOKEN means "no token", not "empty token".
            token: token.filter(|t| !t.trim().is_empty()),
            request_timeout: timeout_secs.map(Duration::from_secs),
            ..Self::default()
        }
    }
}

/// Parses a bind address for `serve --addr`.
pub fn parse_addr(value: &str) -> anyhow::Result<SocketAddr> {
    value
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address '{}': {}", value, e))
}
