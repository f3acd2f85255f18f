// src/tree/search.rs
// =============================================================================
// Case-insensitive substring search for both views.
//
// - filter_lines: narrows the formatted ASCII tree to matching lines. It
//   keeps only the matching line itself, not its parent directories.
// - filter_repositories: narrows the repository list by name
// - highlight: splits a name into matched / unmatched spans for display
//
// All three are pure and cheap enough to re-run on every keystroke.
// =============================================================================

use crate::github::RepositorySummary;

/// Keeps the lines of `text` that contain `query`, ignoring case.
///
/// A blank query (empty or whitespace only) returns `text` untouched,
/// trailing newline included. Otherwise the kept lines are joined with
/// `\n` and there is no trailing newline.
pub fn filter_lines(query: &str, text: &str) -> String {
    if query.trim().is_empty() {
        return text.to_string();
    }

    let query = query.to_lowercase();
    text.split('\n')
        .filter(|line| line.to_lowercase().contains(&query))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keeps the repositories whose name contains `query`, ignoring case.
pub fn filter_repositories<'a>(
    query: &str,
    repos: &'a [RepositorySummary],
) -> Vec<&'a RepositorySummary> {
    let query = query.to_lowercase();
    repos
        .iter()
        .filter(|repo| repo.name.to_lowercase().contains(&query))
        .collect()
}

/// A piece of highlighted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Splits `text` around every case-insensitive occurrence of `query`.
///
/// Spans borrow from `text`, so matched parts keep their original case.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    if query.trim().is_empty() {
        return vec![Segment {
            text,
            matched: false,
        }];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        match match_len_at(&text[pos..], query) {
            Some(len) => {
                if plain_start < pos {
                    segments.push(Segment {
                        text: &text[plain_start..pos],
                        matched: false,
                    });
                }
                segments.push(Segment {
                    text: &text[pos..pos + len],
                    matched: true,
                });
                pos += len;
                plain_start = pos;
            }
            None => {
                // Advance one whole character.
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() {
        segments.push(Segment {
            text: &text[plain_start..],
            matched: false,
        });
    }

    segments
}

/// If `haystack` starts with `needle` (ignoring case), the byte length of
/// the matching prefix of `haystack`.
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    for n in needle.chars() {
        let (_, h) = hay.next()?;
        if !h.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
    }
    Some(hay.next().map_or(haystack.len(), |(i, _)| i))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does `highlight` return `Segment<'a>` instead of `String`s?
//    - Each segment is a slice of the input name, so nothing is copied
//    - The `'a` ties the segments to the text they were cut from
//
// 2. Lowercasing can change a string's byte length ('İ' becomes "i̇"), so
//    match positions are found on the original text, one char at a time
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::RepositoryDescriptor;
    use crate::tree::format_tree;

    fn repo(id: u64, name: &str) -> RepositorySummary {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "owner": { "login": "octo" },
            "visibility": "public",
            "stargazers_count": 0,
            "forks_count": 0,
            "watchers_count": 0
        }))
        .unwrap()
    }

    fn sample() -> String {
        format_tree(&[RepositoryDescriptor::dir(
            "src",
            "src",
            vec![RepositoryDescriptor::file("main.go", "src/main.go")],
        )])
    }

    #[test]
    fn test_filter_lines_keeps_matching_line_only() {
        assert_eq!(filter_lines("main", &sample()), "|   |   ├── main.go");
        assert_eq!(filter_lines("MAIN", &sample()), "|   |   ├── main.go");
        assert_eq!(filter_lines("nothing", &sample()), "");
    }

    #[test]
    fn test_blank_query_is_identity() {
        let text = sample();
        assert_eq!(filter_lines("", &text), text);
        assert_eq!(filter_lines("   ", &text), text);
    }

    #[test]
    fn test_filter_lines_is_idempotent() {
        let text = sample();
        for query in ["main", "src", "├", "|", "o"] {
            let once = filter_lines(query, &text);
            assert_eq!(filter_lines(query, &once), once, "query {:?}", query);
        }
    }

    #[test]
    fn test_filter_repositories() {
        let repos = vec![repo(1, "Alpha"), repo(2, "beta")];

        assert_eq!(filter_repositories("a", &repos).len(), 2);
        assert_eq!(filter_repositories("ALP", &repos)[0].id, 1);
        assert!(filter_repositories("z", &repos).is_empty());
        assert_eq!(filter_repositories("", &repos).len(), 2);
    }

    #[test]
    fn test_highlight_keeps_original_case() {
        let segments = highlight("CodeSketch-code", "code");
        assert_eq!(
            segments,
            vec![
                Segment { text: "Code", matched: true },
                Segment { text: "Sketch-", matched: false },
                Segment { text: "code", matched: true },
            ]
        );
    }

    #[test]
    fn test_highlight_without_match_or_query() {
        assert_eq!(
            highlight("beta", "z"),
            vec![Segment { text: "beta", matched: false }]
        );
        assert_eq!(
            highlight("beta", " "),
            vec![Segment { text: "beta", matched: false }]
        );
    }

    #[test]
    fn test_highlight_multibyte() {
        let segments = highlight("naïve-NAÏVE", "ïv");
        let matched: Vec<&str> = segments
            .iter()
            .filter(|s| s.matched)
            .map(|s| s.text)
            .collect();
        assert_eq!(matched, vec!["ïv", "ÏV"]);
    }
}
