//! Client-held mirror of one page of a list view.
//!
//! Plain data plus the transitions a UI drives; no I/O happens here.

use cinecat_core::pagination::{self, Page, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

use crate::api::ListQuery;

/// Where the list view currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in flight and no outstanding error.
    Idle,
    /// A list fetch has started and not finished.
    Loading,
    /// The last operation failed; `error` holds the message.
    Failed,
}

/// One page of items plus the window and status that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub current_page: i64,
    pub page_size: i64,
    pub search_term: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            current_page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: String::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else {
            Phase::Idle
        }
    }

    /// The list query matching the current window and search term.
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.current_page,
            page_size: self.page_size,
            search: (!self.search_term.is_empty()).then(|| self.search_term.clone()),
        }
    }

    /// `Idle -> Loading`. Clears any previous error.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// `Loading -> Idle`, replacing items and total with the fetched page.
    pub fn finish_fetch(&mut self, page: Page<T>) {
        self.loading = false;
        self.items = page.items;
        self.total_items = page.total_items;
    }

    /// `Loading -> Failed`. Previously shown items stay in place.
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Record a failed mutation without touching the loading flag.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_page(&mut self, page: i64) {
        self.current_page = page;
    }

    pub fn set_page_size(&mut self, page_size: i64) {
        self.page_size = page_size;
    }

    /// Change the search term and jump back to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = DEFAULT_PAGE;
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.total_items, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, total_items: usize) -> Page<u32> {
        Page {
            total_items,
            page: 1,
            page_size: 10,
            items,
        }
    }

    #[test]
    fn starts_idle_on_first_page() {
        let state: ListState<u32> = ListState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size, 10);
        assert_eq!(state.query(), ListQuery::default());
    }

    #[test]
    fn successful_fetch_replaces_items() {
        let mut state = ListState::new();
        state.begin_fetch();
        assert_eq!(state.phase(), Phase::Loading);

        state.finish_fetch(page(vec![1, 2, 3], 23));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.items, vec![1, 2, 3]);
        assert_eq!(state.total_items, 23);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn failed_fetch_keeps_items_and_message_until_cleared() {
        let mut state = ListState::new();
        state.begin_fetch();
        state.finish_fetch(page(vec![1], 1));

        state.begin_fetch();
        state.fail_fetch("Error fetching directors");
        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.items, vec![1]);
        assert_eq!(state.error.as_deref(), Some("Error fetching directors"));

        state.clear_error();
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn next_fetch_clears_a_previous_error() {
        let mut state: ListState<u32> = ListState::new();
        state.fail("Error deleting movie");
        state.begin_fetch();
        assert!(state.error.is_none());
    }

    #[test]
    fn search_change_resets_page() {
        let mut state: ListState<u32> = ListState::new();
        state.set_page(4);
        state.set_search_term("nolan");
        assert_eq!(state.current_page, 1);
        assert_eq!(state.query().search.as_deref(), Some("nolan"));

        state.set_search_term("");
        assert_eq!(state.query().search, None);
    }
}
