// src/github/contents.rs
// =============================================================================
// Walks a repository through the GitHub contents API.
//
// Strategy:
// - GET /repos/{owner}/{repo}/contents/{path} lists one directory level
// - Sort that level: directories first, then files, each group by name
// - For every directory, recurse with its own path before returning
//
// Requests are issued one at a time (one per directory), with no retries.
// The first failing request aborts the whole walk, so callers either get
// the complete tree or an error, never a partial tree.
//
// Rust concepts:
// - Recursive async functions need boxing: an async fn's future type would
//   otherwise contain itself. BoxFuture gives it a fixed size.
// =============================================================================

use std::cmp::Ordering;

use futures::future::{BoxFuture, FutureExt};

use super::client::GitHubClient;
use super::types::{ContentEntry, EntryKind, RepositoryDescriptor};
use crate::error::FetchError;

/// Fetches the full tree below `path` (use `""` for the repository root).
pub async fn fetch_tree(
    client: &GitHubClient,
    owner: &str,
    repo_name: &str,
    path: &str,
    token: Option<&str>,
) -> Result<Vec<RepositoryDescriptor>, FetchError> {
    fetch_directory(client, owner, repo_name, path.to_string(), token).await
}

fn fetch_directory<'a>(
    client: &'a GitHubClient,
    owner: &'a str,
    repo_name: &'a str,
    path: String,
    token: Option<&'a str>,
) -> BoxFuture<'a, Result<Vec<RepositoryDescriptor>, FetchError>> {
    async move {
        tracing::debug!(owner, repo = repo_name, path = %path, "listing directory");

        let url = client.endpoint(
            ["repos", owner, repo_name, "contents"]
                .into_iter()
                .chain(path.split('/')),
        )?;
        let mut entries: Vec<ContentEntry> = client.get_json(url, token).await?;
        sort_entries(&mut entries);

        let mut nodes = Vec::with_capacity(entries.len());
        for entry in entries {
            let node = match entry.kind {
                EntryKind::Dir => {
                    let children =
                        fetch_directory(client, owner, repo_name, entry.path.clone(), token)
                            .await?;
                    RepositoryDescriptor::dir(entry.name, entry.path, children)
                }
                EntryKind::File => RepositoryDescriptor::file(entry.name, entry.path),
            };
            nodes.push(node);
        }

        Ok(nodes)
    }
    .boxed()
}

/// Directories before files; by name within each group, ignoring case.
pub fn sort_entries(entries: &mut [ContentEntry]) {
    entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| compare_names(&a.name, &b.name)));
}

// Case-insensitive order; names differing only in case put lowercase first
// ("readme" before "README").
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| swap_case(a).cmp(&swap_case(b)))
}

fn swap_case(s: &str) -> String {
    s.chars()
        .flat_map(|c| -> Vec<char> {
            if c.is_uppercase() {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            }
        })
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why can't this just be `async fn fetch_directory(...)` calling itself?
//    - An async fn compiles to a state machine that stores its locals
//    - Awaiting itself would make that state machine contain itself
//    - `.boxed()` moves the inner future to the heap, so the outer one only
//      holds a pointer (BoxFuture = Pin<Box<dyn Future + Send>>)
//
// 2. Why the `'a` lifetime everywhere?
//    - The boxed future borrows the client, owner, repo name and token
//    - `'a` says the future is only valid while those borrows are
//
// 3. Why `then_with` in the sort?
//    - `Ordering::then_with` only runs the second comparison on a tie
//    - So kinds decide first, names break ties within a kind
//    - compare_names chains it again: folded names first, case only on a tie
//
// 4. Why not just `a.name.cmp(&b.name)`?
//    - String comparison in Rust is byte-wise, and 'Z' (0x5A) < 'a' (0x61)
//    - That would list "Docs" before "apps", which reads wrong in a tree
// -----------------------------------------------------------------------------
