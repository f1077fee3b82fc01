use serde::{Deserialize, Serialize};

/// Default number of tickets per list page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of an in-memory list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Pagination metadata. Pages are 1-based and `total_pages` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);
        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }
}

impl<T: Clone> Page<T> {
    /// Slice `items` into the requested page, clamping out-of-range pages.
    pub fn from_slice(items: &[T], page: usize, per_page: usize) -> Self {
        let meta = PageMeta::new(page, per_page, items.len());
        let items = items
            .iter()
            .skip(meta.offset())
            .take(meta.per_page)
            .cloned()
            .collect();
        Self { items, meta }
    }
}
