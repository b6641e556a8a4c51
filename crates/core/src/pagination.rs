//! Filter-then-slice pagination shared by every list endpoint.
//!
//! Records are paginated in collection (insertion) order; there is no sort
//! key. `total_items` is always the filtered count, independent of the
//! requested window.

use serde::{Deserialize, Serialize};

use crate::search::{self, Searchable};

/// Page number used when the caller does not send one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller does not send one. There is no maximum.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A resolved page window (1-based page number, page size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Build a window from optional query parameters, applying defaults.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Half-open `[start, end)` index range of this window.
    ///
    /// Returns `None` when the window can never contain anything
    /// (`page < 1` or `page_size < 1`). Negative values never count back
    /// from the end of the collection. Arithmetic saturates instead of
    /// overflowing for absurd values.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        if self.page < 1 || self.page_size < 1 {
            return None;
        }
        let start = (self.page - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size);
        Some((to_index(start), to_index(end)))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn to_index(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// The pagination envelope: `{ totalItems, page, pageSize, items }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total_items: usize,
    pub page: i64,
    pub page_size: i64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Number of pages needed to show `total_items` at this page size.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }
}

/// `ceil(total_items / page_size)`, or 0 for a non-positive page size.
pub fn total_pages(total_items: usize, page_size: i64) -> usize {
    match usize::try_from(page_size) {
        Ok(size) if size > 0 => total_items.div_ceil(size),
        _ => 0,
    }
}

/// Filter `records` by `search`, then cut out the requested window.
///
/// An absent or empty `search` lets every record through. A window past the
/// end of the filtered set yields an empty `items` list, never an error.
pub fn paginate<'a, T, I>(records: I, search: Option<&str>, request: PageRequest) -> Page<T>
where
    T: Searchable + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let term = search::normalize_term(search);
    let filtered: Vec<&T> = records
        .into_iter()
        .filter(|record| search::matches(*record, term.as_deref()))
        .collect();

    let total_items = filtered.len();
    let items = match request.bounds() {
        Some((start, end)) => filtered
            .into_iter()
            .skip(start)
            .take(end - start)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    Page {
        total_items,
        page: request.page,
        page_size: request.page_size,
        items,
    }
}
