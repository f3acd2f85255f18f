// src/github/client.rs
// =============================================================================
// A thin wrapper around reqwest::Client that knows how to talk to GitHub.
//
// Responsibilities:
// - Build request URLs from path segments (percent-encoding each one)
// - Attach the headers GitHub expects (User-Agent, Accept, Authorization)
// - Turn non-success statuses into FetchError and decode JSON bodies
//
// The base URL is configurable so tests can point the client at a local
// fake server instead of https://api.github.com.
// =============================================================================

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::FetchError;

/// Shared, cheaply cloneable GitHub API client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: Url,
    user_agent: String,
}

impl GitHubClient {
    /// Builds a client from the application config.
    ///
    /// No timeout is set unless the config asks for one.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let api_base = Url::parse(&config.api_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.api_url, e)))?;
        if api_base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.api_url.clone()));
        }

        Ok(Self {
            http,
            api_base,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Joins path segments onto the API base URL.
    ///
    /// Each segment is percent-encoded on its own, so a file called
    /// `my notes#1.md` stays a single segment. Empty segments are skipped,
    /// which makes `contents/` and `contents` equivalent.
    pub fn endpoint<'a, I>(&self, segments: I) -> Result<Url, FetchError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.api_base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidUrl(self.api_base.to_string()))?;
            path.pop_if_empty();
            path.extend(segments.into_iter().filter(|s| !s.is_empty()));
        }
        Ok(url)
    }

    /// GETs `url` and decodes the JSON body into `T`.
    pub async fn get_json<T>(&self, url: Url, token: Option<&str>) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let mut request = self
            .http
            .get(url.clone())
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/vnd.github+json");

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::from_status(status, response.headers(), url.as_str()));
        }

        // Read the body as bytes first so a decode failure can name the URL.
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
