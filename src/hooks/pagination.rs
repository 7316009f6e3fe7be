// Pagination controller
use leptos::*;

use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::types::api::PaginationMeta;

/// 1-based page/limit pair. Movement is gated by the server-reported
/// metadata; the controller itself never fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageState {
    pub fn next_page(&mut self, meta: &PaginationMeta) {
        if meta.has_next_page {
            self.page += 1;
        }
    }

    /// Clamped at page 1 even if the metadata claims a previous page
    /// exists.
    pub fn prev_page(&mut self, meta: &PaginationMeta) {
        if meta.has_previous_page {
            self.page = self.page.saturating_sub(1).max(DEFAULT_PAGE);
        }
    }

    /// Changing the page size invalidates prior offsets, so the page is
    /// reset unconditionally.
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit;
        self.page = DEFAULT_PAGE;
    }

    pub fn reset_page(&mut self) {
        self.page = DEFAULT_PAGE;
    }
}

#[derive(Clone, Copy)]
pub struct PaginationHandle {
    state: RwSignal<PageState>,
}

impl PaginationHandle {
    pub fn get(&self) -> PageState {
        self.state.get()
    }

    pub fn next_page(&self, meta: &PaginationMeta) {
        let meta = *meta;
        self.state.update(|s| s.next_page(&meta));
    }

    pub fn prev_page(&self, meta: &PaginationMeta) {
        let meta = *meta;
        self.state.update(|s| s.prev_page(&meta));
    }

    pub fn set_limit(&self, limit: u32) {
        self.state.update(|s| s.set_limit(limit));
    }

    pub fn reset_page(&self) {
        self.state.update(|s| s.reset_page());
    }
}

pub fn use_pagination() -> PaginationHandle {
    PaginationHandle {
        state: create_rw_signal(PageState::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(has_next: bool, has_prev: bool) -> PaginationMeta {
        PaginationMeta {
            current_page: 1,
            items_per_page: 10,
            total_items: 0,
            total_pages: 1,
            has_next_page: has_next,
            has_previous_page: has_prev,
        }
    }

    #[test]
    fn next_page_is_gated_by_metadata() {
        let mut state = PageState::default();
        state.next_page(&meta(false, false));
        assert_eq!(state.page, 1);
        state.next_page(&meta(true, false));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn prev_page_is_gated_by_metadata() {
        let mut state = PageState { page: 3, limit: 10 };
        state.prev_page(&meta(true, true));
        assert_eq!(state.page, 2);
        state.prev_page(&meta(false, false));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn prev_page_never_goes_below_one() {
        // inconsistent server meta: first page but hasPreviousPage=true
        let mut state = PageState { page: 1, limit: 10 };
        state.prev_page(&meta(false, true));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn set_limit_always_resets_page() {
        let mut state = PageState { page: 5, limit: 10 };
        state.set_limit(20);
        assert_eq!(state.limit, 20);
        assert_eq!(state.page, 1);

        // even when the limit does not actually change
        let mut state = PageState { page: 4, limit: 20 };
        state.set_limit(20);
        assert_eq!(state.page, 1);
    }
}
