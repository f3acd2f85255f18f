// src/github/reference.rs
// =============================================================================
// Turns what a user types into an (owner, repo) pair.
//
// Supported formats:
//   - owner/repo
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo/tree/main/src   (anything after the repo is ignored)
// =============================================================================

use anyhow::{anyhow, Result};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        let looks_like_url = input.contains("://")
            || input.starts_with("github.com/")
            || input.starts_with("www.github.com/");

        let path = if looks_like_url {
            let with_scheme = if input.contains("://") {
                input.to_string()
            } else {
                format!("https://{}", input)
            };
            let url = Url::parse(&with_scheme)
                .map_err(|e| anyhow!("Invalid repository URL '{}': {}", input, e))?;

            match url.host_str() {
                Some("github.com") | Some("www.github.com") => {}
                _ => return Err(anyhow!("Not a GitHub URL: {}", input)),
            }
            url.path().trim_start_matches('/').to_string()
        } else {
            input.to_string()
        };

        let mut parts = path.split('/').filter(|p| !p.is_empty());
        let (owner, repo) = match (parts.next(), parts.next()) {
            (Some(owner), Some(repo)) => (owner, repo),
            _ => return Err(anyhow!("Expected owner/repo, got '{}'", input)),
        };

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.trim_end_matches(".git").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_slash_repo() {
        let r = RepoRef::parse("rust-lang/rust").unwrap();
        assert_eq!(r.owner, "rust-lang");
        assert_eq!(r.repo, "rust");
    }

    #[test]
    fn test_parse_github_url_with_git() {
        let r = RepoRef::parse("https://github.com/user/repo.git").unwrap();
        assert_eq!(r, RepoRef { owner: "user".into(), repo: "repo".into() });
    }

    #[test]
    fn test_parse_url_without_scheme_and_deep_path() {
        let r = RepoRef::parse("github.com/octo/hello/tree/main/src").unwrap();
        assert_eq!(r, RepoRef { owner: "octo".into(), repo: "hello".into() });
    }

    #[test]
    fn test_parse_invalid() {
        assert!(RepoRef::parse("https://gitlab.com/user/repo").is_err());
        assert!(RepoRef::parse("just-a-name").is_err());
    }
}
