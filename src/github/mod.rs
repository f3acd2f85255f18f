// src/github/mod.rs
// =============================================================================
// Everything that talks to the GitHub REST API.
//
// Submodules:
// - client: reqwest wrapper (URLs, headers, status and JSON handling)
// - contents: recursive walk of a repository's directories
// - reference: owner/repo or GitHub URL -> (owner, repo)
// - repos: the authenticated user's repository list
// - session: the user behind an access token
// - types: the JSON shapes we read and write
// =============================================================================

mod client;
mod contents;
mod reference;
mod repos;
mod session;
mod types;

#[cfg(test)]
pub mod fake;

pub use client::GitHubClient;
pub use contents::fetch_tree;
pub use reference::RepoRef;
pub use repos::list_repositories;
pub use session::Session;
pub use types::{RepositoryDescriptor, RepositorySummary};
