// src/github/types.rs
// =============================================================================
// Data shapes exchanged with GitHub and with our own HTTP clients.
//
// - ContentEntry: one raw item of GET /repos/{owner}/{repo}/contents/{path}
// - RepositoryDescriptor: our file/dir node, with children for directories
// - RepositorySummary: one item of GET /user/repos (read-only projection)
// - GitHubUser: the subset of GET /user the session needs
// =============================================================================

use serde::{Deserialize, Serialize};

/// Whether a node is a directory or a file.
///
/// GitHub also reports `symlink` and `submodule`; both are leaves for our
/// purposes and deserialize as `File`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    // Declared first so that `Dir < File` when sorting.
    Dir,
    #[serde(other)]
    File,
}

/// A raw entry from the contents API. Other fields (sha, size, urls) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// A node of a repository tree.
///
/// `contents` is `Some` exactly when `kind` is `Dir`; use the constructors
/// to keep that true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<RepositoryDescriptor>>,
}

impl RepositoryDescriptor {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            path: path.into(),
            contents: None,
        }
    }

    pub fn dir(
        name: impl Into<String>,
        path: impl Into<String>,
        contents: Vec<RepositoryDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
            path: path.into(),
            contents: Some(contents),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Children of a directory; empty for files.
    pub fn children(&self) -> &[RepositoryDescriptor] {
        self.contents.as_deref().unwrap_or(&[])
    }
}

/// Owner of a repository, as nested in GitHub's repository record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

/// The fields of a GitHub repository record that the list view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    pub owner: RepositoryOwner,
    pub visibility: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub watchers_count: u64,
}

/// The authenticated user, from GET /user.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_entry_ignores_extra_fields() {
        let json = r#"{
            "name": "main.rs",
            "path": "src/main.rs",
            "sha": "abc123",
            "size": 42,
            "type": "file",
            "url": "https://api.github.com/repos/o/r/contents/src/main.rs"
        }"#;

        let entry: ContentEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "main.rs");
        assert_eq!(entry.kind, EntryKind::File);
    }

    #[test]
    fn test_symlink_and_submodule_are_files() {
        let kinds: Vec<EntryKind> =
            serde_json::from_str(r#"["dir", "file", "symlink", "submodule"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![EntryKind::Dir, EntryKind::File, EntryKind::File, EntryKind::File]
        );
    }

    #[test]
    fn test_file_omits_contents_on_the_wire() {
        let file = RepositoryDescriptor::file("a.txt", "a.txt");
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "a.txt", "type": "file", "path": "a.txt" })
        );

        let dir = RepositoryDescriptor::dir("docs", "docs", vec![]);
        let json = serde_json::to_value(&dir).unwrap();
        assert_eq!(json["contents"], serde_json::json!([]));
    }

    #[test]
    fn test_summary_reads_github_record() {
        let json = r#"{
            "id": 7,
            "name": "code-sketch",
            "full_name": "octo/code-sketch",
            "owner": { "login": "octo", "id": 1 },
            "visibility": "public",
            "stargazers_count": 3,
            "forks_count": 1,
            "watchers_count": 3,
            "private": false
        }"#;

        let summary: RepositorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.owner.login, "octo");
        assert_eq!(summary.stargazers_count, 3);
    }
}
