// src/tree/mod.rs
// Rendering and searching repository trees.

mod format;
mod search;

pub use format::format_tree;
pub use search::{filter_lines, filter_repositories, highlight};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::RepositoryDescriptor;

    // Directories before files at every level, by name within each group.
    #[test]
    fn test_formatted_order_follows_sorted_tree() {
        let tree = vec![
            RepositoryDescriptor::dir(
                "docs",
                "docs",
                vec![
                    RepositoryDescriptor::dir("img", "docs/img", vec![]),
                    RepositoryDescriptor::file("intro.md", "docs/intro.md"),
                ],
            ),
            RepositoryDescriptor::dir("src", "src", vec![]),
            RepositoryDescriptor::file("Cargo.toml", "Cargo.toml"),
        ];

        let text = format_tree(&tree);
        let names: Vec<&str> = text
            .lines()
            .map(|line| line.rsplit("├── ").next().unwrap_or(""))
            .collect();
        assert_eq!(names, vec!["docs", "img", "intro.md", "src", "Cargo.toml"]);

        // Formatting then filtering with nothing gives the same text back.
        assert_eq!(filter_lines("", &text), text);
    }
}
