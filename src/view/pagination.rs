// src/view/pagination.rs
// =============================================================================
// Page arithmetic for the repository list.
//
// Pages are numbered from 1. At most MAX_VISIBLE_PAGES page numbers are
// shown at once, centred on the current page; an ellipsis on either side
// means there are more pages in that direction, and choosing it jumps one
// page past the edge of the window.
// =============================================================================

use std::ops::Range;

/// Page numbers shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    total: usize,
    per_page: usize,
    current: usize,
}

/// The page numbers to draw for the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Vec<usize>,
    /// Page to jump to from a leading "...", if one is shown.
    pub leading_ellipsis: Option<usize>,
    /// Page to jump to from a trailing "...", if one is shown.
    pub trailing_ellipsis: Option<usize>,
}

impl Pagination {
    /// Starts on page 1. A `per_page` of zero is treated as 1.
    pub fn new(total: usize, per_page: usize) -> Self {
        Self {
            total,
            per_page: per_page.max(1),
            current: 1,
        }
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        if self.current < self.page_count() {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Moves to `page`, clamped to the existing pages.
    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.page_count().max(1));
    }

    /// Updates the item count (e.g. after filtering), keeping the current
    /// page if it still exists.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.go_to(self.current);
    }

    pub fn window(&self) -> PageWindow {
        let count = self.page_count();
        if count == 0 {
            return PageWindow {
                pages: Vec::new(),
                leading_ellipsis: None,
                trailing_ellipsis: None,
            };
        }

        let radius = MAX_VISIBLE_PAGES / 2;
        let first = self.current.saturating_sub(radius).max(1);
        let last = (self.current + radius).min(count);

        PageWindow {
            pages: (first..=last).collect(),
            leading_ellipsis: (first > 1).then(|| first - 1),
            trailing_ellipsis: (last < count).then(|| last + 1),
        }
    }

    /// Index range of the items on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.per_page).min(self.total);
        let end = (self.current * self.per_page).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. `div_ceil` is integer division rounding up: 10.div_ceil(4) == 3
//
// 2. Why `(first > 1).then(|| first - 1)`?
//    - `bool::then` turns a condition into an Option
//    - true gives Some(value), false gives None, with no if/else
// -----------------------------------------------------------------------------
