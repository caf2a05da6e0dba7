//! Pagination state.

use std::ops::Range;

/// Current page of the unfiltered catalog view.
///
/// `total_pages` is `ceil(len / page_size)` and never less than one, so an
/// empty view still has a single (empty) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_index: usize,
    page_size: usize,
    total_pages: usize,
}

impl PageState {
    /// Creates page state for a view of `len` entries, positioned on page 0.
    ///
    /// A zero `page_size` is treated as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use snip_core::PageState;
    ///
    /// let page = PageState::new(101, 50);
    /// assert_eq!(page.total_pages(), 3);
    /// assert!(!page.has_previous());
    /// assert!(page.has_next());
    /// ```
    #[must_use]
    pub fn new(len: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_index: 0,
            page_size,
            total_pages: len.div_ceil(page_size).max(1),
        }
    }

    /// Zero-based index of the current page.
    #[inline]
    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    /// Entries per page.
    #[inline]
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages, at least one.
    #[inline]
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns `true` when a "previous page" marker should be shown.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Returns `true` when a "next page" marker should be shown.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }

    /// Moves to `index`, clamped to `[0, total_pages - 1]`.
    pub fn go_to(&mut self, index: usize) {
        self.page_index = index.min(self.total_pages - 1);
    }

    /// Moves one page forward. Clamps on the last page.
    pub fn next(&mut self) {
        self.go_to(self.page_index.saturating_add(1));
    }

    /// Moves one page back. Clamps on the first page.
    pub fn previous(&mut self) {
        self.go_to(self.page_index.saturating_sub(1));
    }

    /// Moves back to the first page.
    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    /// Index range of the current page within a view of `len` entries.
    #[must_use]
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }
}
