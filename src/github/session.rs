// src/github/session.rs
// =============================================================================
// The signed-in user as far as this tool is concerned: an access token plus
// a display name and avatar.
//
// Token issuance belongs to whatever OAuth flow produced the token; we only
// read it. The display fields are resolved from GET /user.
// =============================================================================

use super::client::GitHubClient;
use super::types::GitHubUser;
use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user: SessionUser,
}

impl Session {
    /// Resolves the user behind `access_token`.
    pub async fn resolve(client: &GitHubClient, access_token: &str) -> Result<Self, FetchError> {
        let url = client.endpoint(["user"])?;
        let user: GitHubUser = client.get_json(url, Some(access_token)).await?;

        Ok(Self {
            access_token: access_token.to_string(),
            user: SessionUser::from(user),
        })
    }

    /// The token with all but its first four characters hidden
    /// ("ghp_****************"), for showing which token is in use.
    pub fn masked_token(&self) -> String {
        self.access_token
            .chars()
            .enumerate()
            .map(|(i, c)| if i < 4 { c } else { '*' })
            .collect()
    }
}

impl From<GitHubUser> for SessionUser {
    fn from(user: GitHubUser) -> Self {
        let name = user
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(user.login);

        Self {
            name,
            image: user.avatar_url,
        }
    }
}

impl SessionUser {
    /// Upper-cased initials of each word of the name ("Ada Lovelace" -> "AL"),
    /// shown where the avatar image is unavailable.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::FakeGitHub;
    use serde_json::json;

    #[test]
    fn test_initials() {
        let user = SessionUser {
            name: "ada  lovelace".to_string(),
            image: None,
        };
        assert_eq!(user.initials(), "AL");
    }

    #[test]
    fn test_name_falls_back_to_login() {
        let user = SessionUser::from(GitHubUser {
            login: "octocat".to_string(),
            name: None,
            avatar_url: None,
        });
        assert_eq!(user.name, "octocat");
        assert_eq!(user.initials(), "O");
    }

    #[test]
    fn test_masked_token() {
        let session = Session {
            access_token: "ghp_secret".to_string(),
            user: SessionUser {
                name: "octocat".to_string(),
                image: None,
            },
        };
        assert_eq!(session.masked_token(), "ghp_******");

        let short = Session {
            access_token: "abc".to_string(),
            ..session
        };
        assert_eq!(short.masked_token(), "abc");
    }

    #[tokio::test]
    async fn test_resolve_session() {
        let github = FakeGitHub::builder()
            .ok(
                "/user",
                json!({
                    "login": "octocat",
                    "name": "The Octocat",
                    "avatar_url": "https://avatars.example.com/u/1"
                }),
            )
            .start()
            .await;

        let session = Session::resolve(&github.client(), "t0k").await.unwrap();
        assert_eq!(session.access_token, "t0k");
        assert_eq!(session.user.name, "The Octocat");
        assert_eq!(
            session.user.image.as_deref(),
            Some("https://avatars.example.com/u/1")
        );
    }
}
