// src/tree/format.rs
// =============================================================================
// Turns a repository tree into the ASCII diagram users copy into READMEs.
//
// Rules, applied to each node of an already-sorted level:
// - directory: "{prefix}├── {name}\n", then its children with prefix + "|   "
// - file:      "{prefix}|   ├── {name}\n"
//
// Files therefore sit one marker deeper than a directory at the same level,
// which is what the existing diagrams look like.
// =============================================================================

use std::fmt::Write;

use crate::github::RepositoryDescriptor;

/// Indentation added per directory level.
pub const INDENT: &str = "|   ";

/// Marker placed before every name.
pub const BRANCH: &str = "├── ";

/// Formats `tree` with no leading prefix.
pub fn format_tree(tree: &[RepositoryDescriptor]) -> String {
    format_tree_with_prefix(tree, "")
}

/// Formats `tree` with every line starting with `prefix`.
pub fn format_tree_with_prefix(tree: &[RepositoryDescriptor], prefix: &str) -> String {
    let mut out = String::new();
    write_level(&mut out, tree, prefix);
    out
}

fn write_level(out: &mut String, nodes: &[RepositoryDescriptor], prefix: &str) {
    for node in nodes {
        if node.is_dir() {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{}{}{}", prefix, BRANCH, node.name);
            let children = node.children();
            if !children.is_empty() {
                let nested = format!("{}{}", prefix, INDENT);
                write_level(out, children, &nested);
            }
        } else {
            let _ = writeln!(out, "{}{}{}{}", prefix, INDENT, BRANCH, node.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dir_with_file() {
        let tree = vec![RepositoryDescriptor::dir(
            "src",
            "src",
            vec![RepositoryDescriptor::file("main.go", "src/main.go")],
        )];

        assert_eq!(format_tree(&tree), "├── src\n|   |   ├── main.go\n");
    }

    #[test]
    fn test_empty_dir_still_has_its_line() {
        let tree = vec![
            RepositoryDescriptor::dir("empty", "empty", vec![]),
            RepositoryDescriptor::file("a.txt", "a.txt"),
        ];

        assert_eq!(format_tree(&tree), "├── empty\n|   ├── a.txt\n");
    }

    #[test]
    fn test_deep_nesting() {
        let tree = vec![RepositoryDescriptor::dir(
            "a",
            "a",
            vec![
                RepositoryDescriptor::dir(
                    "b",
                    "a/b",
                    vec![RepositoryDescriptor::file("c.rs", "a/b/c.rs")],
                ),
                RepositoryDescriptor::file("d.rs", "a/d.rs"),
            ],
        )];

        let expected = "\
├── a
|   ├── b
|   |   |   ├── c.rs
|   |   ├── d.rs
";
        assert_eq!(format_tree(&tree), expected);
    }

    #[test]
    fn test_prefix_applies_to_every_line() {
        let tree = vec![RepositoryDescriptor::file("x", "x")];
        assert_eq!(format_tree_with_prefix(&tree, "> "), "> |   ├── x\n");
        assert_eq!(format_tree(&[]), "");
    }
}
