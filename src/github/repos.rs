// src/github/repos.rs
// Lists the repositories of the authenticated user.
//
// Uses GET /user/repos without pagination parameters, so GitHub's default
// page size applies and very long lists come back truncated.

use super::client::GitHubClient;
use super::types::RepositorySummary;
use crate::error::FetchError;

pub async fn list_repositories(
    client: &GitHubClient,
    token: Option<&str>,
) -> Result<Vec<RepositorySummary>, FetchError> {
    let url = client.endpoint(["user", "repos"])?;
    let repos: Vec<RepositorySummary> = client.get_json(url, token).await?;
    tracing::debug!(count = repos.len(), "listed repositories");
    Ok(repos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use crate::github::fake::FakeGitHub;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_repositories() {
        let github = FakeGitHub::builder()
            .ok(
                "/user/repos",
                json!([
                    {
                        "id": 1, "name": "Alpha", "owner": { "login": "octo" },
                        "visibility": "public", "stargazers_count": 5,
                        "forks_count": 2, "watchers_count": 5
                    },
                    {
                        "id": 2, "name": "beta", "owner": { "login": "octo" },
                        "visibility": "private", "stargazers_count": 0,
                        "forks_count": 0, "watchers_count": 0
                    }
                ]),
            )
            .start()
            .await;

        let repos = list_repositories(&github.client(), Some("t0k")).await.unwrap();
        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta"]);
        assert_eq!(repos[1].visibility, "private");
    }

    #[tokio::test]
    async fn test_bad_token_is_unauthorized() {
        let github = FakeGitHub::builder()
            .status("/user/repos", StatusCode::UNAUTHORIZED)
            .start()
            .await;

        let err = list_repositories(&github.client(), Some("expired"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Unauthorized);
    }
}
