//! Client-side pagination arithmetic.
//!
//! Pages are 1-indexed contiguous slices of the full record set. The page size
//! is fixed at [`PAGE_SIZE`]. An empty record set has zero pages; the current
//! page then stays at 1 and both controls are inert.

use std::ops::Range;

/// Number of records shown per page.
pub const PAGE_SIZE: usize = 4;

/// Pagination over a record set of known length.
///
/// # Example
///
/// ```rust
/// use rosterview::app::pagination::Paginator;
///
/// let pager = Paginator::new(5);
/// assert_eq!(pager.total_pages(), 2);
/// assert_eq!(pager.page_range(1), 0..4);
/// assert_eq!(pager.page_range(2), 4..5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
}

impl Paginator {
    #[must_use]
    pub const fn new(total_items: usize) -> Self {
        Self { total_items }
    }

    /// `ceil(total_items / PAGE_SIZE)`; zero for an empty set.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_items.div_ceil(PAGE_SIZE)
    }

    /// Index range of `page` into the record set, clipped to its bounds.
    ///
    /// Pages past the end (or page 0) yield an empty range.
    #[must_use]
    pub fn page_range(&self, page: usize) -> Range<usize> {
        if page == 0 {
            return 0..0;
        }
        let start = (page - 1).saturating_mul(PAGE_SIZE).min(self.total_items);
        let end = start.saturating_add(PAGE_SIZE).min(self.total_items);
        start..end
    }

    /// Number of records on `page`.
    #[must_use]
    pub fn page_len(&self, page: usize) -> usize {
        self.page_range(page).len()
    }

    /// The previous-page control is enabled iff the page is past the first.
    #[must_use]
    pub const fn can_go_back(&self, page: usize) -> bool {
        page > 1
    }

    /// The next-page control is enabled iff a later page exists.
    #[must_use]
    pub const fn can_go_forward(&self, page: usize) -> bool {
        page < self.total_pages()
    }
}
