// src/error.rs
// =============================================================================
// Error types for everything that talks to the GitHub API.
//
// The user-facing views still collapse every failure into one friendly
// message, but the error itself keeps its cause so logs, the CLI's --json
// output and the HTTP `x-error-kind` header can tell them apart.
//
// Rust concepts:
// - thiserror: derive std::error::Error with Display messages
// - Enums with data: each variant carries only what it needs
// =============================================================================

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Failure of a single GitHub request (and therefore of the whole fetch).
#[derive(Debug, Error)]
pub enum FetchError {
    /// 401: missing, expired or revoked token.
    #[error("GitHub rejected the access token ({url})")]
    Unauthorized { url: String },

    /// 403/429 with the rate limit exhausted.
    #[error("GitHub rate limit exceeded ({url})")]
    RateLimited { url: String },

    /// 404: unknown owner, repository or path (or a private repo without access).
    #[error("not found on GitHub: {url}")]
    NotFound { url: String },

    /// Any other non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    Upstream { status: u16, url: String },

    /// Transport failure: DNS, TLS, connection reset, timeout.
    #[error("network error talking to GitHub: {0}")]
    Network(#[from] reqwest::Error),

    /// GitHub answered 2xx but the body was not the JSON we expected.
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured API base URL cannot be turned into a request URL.
    #[error("invalid GitHub API URL: {0}")]
    InvalidUrl(String),
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    Unauthorized,
    RateLimited,
    NotFound,
    Upstream,
    Network,
    Decode,
}

impl FetchErrorKind {
    /// Stable lowercase name, used in headers and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::RateLimited => "rate_limited",
            Self::NotFound => "not_found",
            Self::Upstream => "upstream",
            Self::Network => "network",
            Self::Decode => "decode",
        }
    }
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Unauthorized { .. } => FetchErrorKind::Unauthorized,
            Self::RateLimited { .. } => FetchErrorKind::RateLimited,
            Self::NotFound { .. } => FetchErrorKind::NotFound,
            Self::Upstream { .. } => FetchErrorKind::Upstream,
            // A bad base URL never reaches the network, but from the
            // caller's point of view the request could not be made.
            Self::Network(_) | Self::InvalidUrl(_) => FetchErrorKind::Network,
            Self::Decode { .. } => FetchErrorKind::Decode,
        }
    }

    /// Maps a non-success response to the matching variant.
    ///
    /// GitHub signals an exhausted rate limit either with 429 or with 403
    /// plus `x-ratelimit-remaining: 0`; a plain 403 stays `Upstream`.
    pub fn from_status(status: StatusCode, headers: &HeaderMap, url: &str) -> Self {
        let url = url.to_string();
        let limit_exhausted = headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false);

        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized { url },
            StatusCode::NOT_FOUND => Self::NotFound { url },
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited { url },
            StatusCode::FORBIDDEN if limit_exhausted => Self::RateLimited { url },
            other => Self::Upstream {
                status: other.as_u16(),
                url,
            },
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does `#[from]` on Network do?
//    - thiserror writes `impl From<reqwest::Error> for FetchError`
//    - So `?` on a reqwest call converts the error automatically
//
// 2. Why a separate FetchErrorKind?
//    - FetchError holds URLs and sources, which are not Copy or comparable
//    - The kind is a plain enum: easy to match, log, and assert on in tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    const URL: &str = "https://api.github.com/user/repos";

    #[test]
    fn test_status_mapping() {
        let headers = HeaderMap::new();
        let kind = |status| FetchError::from_status(status, &headers, URL).kind();

        assert_eq!(kind(StatusCode::UNAUTHORIZED), FetchErrorKind::Unauthorized);
        assert_eq!(kind(StatusCode::NOT_FOUND), FetchErrorKind::NotFound);
        assert_eq!(kind(StatusCode::TOO_MANY_REQUESTS), FetchErrorKind::RateLimited);
        assert_eq!(kind(StatusCode::FORBIDDEN), FetchErrorKind::Upstream);
        assert_eq!(kind(StatusCode::BAD_GATEWAY), FetchErrorKind::Upstream);
    }

    #[test]
    fn test_forbidden_with_exhausted_limit_is_rate_limited() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));

        let err = FetchError::from_status(StatusCode::FORBIDDEN, &headers, URL);
        assert_eq!(err.kind(), FetchErrorKind::RateLimited);
    }

    #[test]
    fn test_upstream_message_carries_status() {
        let err = FetchError::from_status(StatusCode::BAD_GATEWAY, &HeaderMap::new(), URL);
        assert_eq!(
            err.to_string(),
            format!("failed to fetch {}: HTTP 502", URL)
        );
        assert_eq!(err.kind().as_str(), "upstream");
    }
}
