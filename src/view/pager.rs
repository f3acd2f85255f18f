// src/view/pager.rs
// =============================================================================
// The repository list as a pager: a search query, the repositories that
// match it, and the page being looked at.
//
// `repos --interactive` reads one command per line:
//   n / next      next page          p / prev      previous page
//   <number>      go to that page    << / >>       the page past an ellipsis
//   /text         search for text    /             clear the search
// Anything else just redraws the current page.
// =============================================================================

use crate::github::RepositorySummary;
use crate::tree::filter_repositories;

use super::pagination::Pagination;

/// One line of input to the interactive pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerCommand {
    Next,
    Prev,
    Page(usize),
    LeadingEllipsis,
    TrailingEllipsis,
    Search(String),
    Redraw,
}

impl PagerCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Some(query) = line.strip_prefix('/') {
            return Self::Search(query.trim().to_string());
        }
        match line.to_lowercase().as_str() {
            "n" | "next" => Self::Next,
            "p" | "prev" => Self::Prev,
            "<<" => Self::LeadingEllipsis,
            ">>" => Self::TrailingEllipsis,
            other => other.parse().map(Self::Page).unwrap_or(Self::Redraw),
        }
    }
}

#[derive(Debug)]
pub struct RepoPager<'a> {
    repos: &'a [RepositorySummary],
    query: String,
    matches: Vec<&'a RepositorySummary>,
    pages: Pagination,
}

impl<'a> RepoPager<'a> {
    /// Filters `repos` by `query` and opens `page` (clamped).
    pub fn new(repos: &'a [RepositorySummary], query: &str, per_page: usize, page: usize) -> Self {
        let matches = filter_repositories(query, repos);
        let mut pages = Pagination::new(matches.len(), per_page);
        pages.go_to(page);

        Self {
            repos,
            query: query.to_string(),
            matches,
            pages,
        }
    }

    pub fn apply(&mut self, command: PagerCommand) {
        match command {
            PagerCommand::Next => self.pages.next(),
            PagerCommand::Prev => self.pages.prev(),
            PagerCommand::Page(page) => self.pages.go_to(page),
            PagerCommand::LeadingEllipsis => {
                if let Some(page) = self.pages.window().leading_ellipsis {
                    self.pages.go_to(page);
                }
            }
            PagerCommand::TrailingEllipsis => {
                if let Some(page) = self.pages.window().trailing_ellipsis {
                    self.pages.go_to(page);
                }
            }
            PagerCommand::Search(query) => self.search(&query),
            PagerCommand::Redraw => {}
        }
    }

    /// Re-filters the full list; the current page is kept while it exists.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.matches = filter_repositories(query, self.repos);
        self.pages.set_total(self.matches.len());
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Every repository matching the query, unpaginated.
    pub fn matches(&self) -> &[&'a RepositorySummary] {
        &self.matches
    }

    /// The repositories on the current page.
    pub fn visible(&self) -> &[&'a RepositorySummary] {
        self.pages.slice(&self.matches)
    }

    pub fn pages(&self) -> &Pagination {
        &self.pages
    }
}
