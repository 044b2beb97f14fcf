//! The pager control rendered under event listings.
//!
//! Turns a `PageState` plus a navigation-link prefix into the items a
//! renderer shows: numbered links, an inert ellipsis, and the previous/next
//! controls.

use serde::{Deserialize, Serialize};

use crate::page_state::PageState;
use crate::page_window::PageMarker;

/// A pager control bound to a listing route.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub state: PageState,
    /// Navigation-link prefix, e.g. "/admin/events".
    pub base_path: String,
}

/// One item of the rendered control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub label: String,
    /// None for markers that are not navigable (the ellipsis).
    pub href: Option<String>,
    pub current: bool,
}

impl Pagination {
    pub fn new(state: PageState, base_path: impl Into<String>) -> Self {
        Pagination {
            state,
            base_path: base_path.into(),
        }
    }

    /// Link target for a page number.
    pub fn page_link(&self, page: u64) -> String {
        format!("{}?page={}", self.base_path, page)
    }

    /// The window's markers as renderable items, current page flagged.
    pub fn items(&self) -> Vec<PageLink> {
        let current = self.state.clamped_page();

        self.state
            .page_window()
            .into_iter()
            .map(|marker| match marker {
                PageMarker::Page(page) => PageLink {
                    label: page.to_string(),
                    href: Some(self.page_link(page)),
                    current: page == current,
                },
                PageMarker::Ellipsis => PageLink {
                    label: "...".to_string(),
                    href: None,
                    current: false,
                },
            })
            .collect()
    }

    /// Link for the "previous" control (clamped at the first page).
    pub fn previous_link(&self) -> String {
        self.page_link(self.state.previous_target())
    }

    /// Link for the "next" control (clamped at the last page).
    pub fn next_link(&self) -> String {
        self.page_link(self.state.next_target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(page: u64, items: u64, per_page: u64) -> Pagination {
        Pagination::new(
            PageState::new(page, items, per_page).unwrap(),
            "/admin/events",
        )
    }

    // --- page_link ---

    #[test]
    fn page_link_appends_page_query() {
        assert_eq!(pager(1, 100, 10).page_link(3), "/admin/events?page=3");
    }

    // --- items ---

    #[test]
    fn numeric_markers_become_links() {
        let items = pager(1, 45, 10).items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].label, "1");
        assert_eq!(items[0].href.as_deref(), Some("/admin/events?page=1"));
    }

    #[test]
    fn ellipsis_is_inert() {
        let items = pager(2, 100, 10).items();
        let ellipsis = items.iter().find(|i| i.label == "...").unwrap();
        assert_eq!(ellipsis.href, None);
        assert!(!ellipsis.current);
    }

    #[test]
    fn current_page_is_flagged_exactly_once() {
        let items = pager(5, 100, 10).items();
        let current: Vec<_> = items.iter().filter(|i| i.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].label, "5");
    }

    #[test]
    fn out_of_range_page_flags_the_clamped_page() {
        let items = pager(50, 100, 10).items();
        let current = items.iter().find(|i| i.current).unwrap();
        assert_eq!(current.label, "10");
    }

    // --- previous_link / next_link ---

    #[test]
    fn previous_link_clamps_at_first_page() {
        assert_eq!(pager(1, 100, 10).previous_link(), "/admin/events?page=1");
        assert_eq!(pager(5, 100, 10).previous_link(), "/admin/events?page=4");
    }

    #[test]
    fn next_link_clamps_at_last_page() {
        assert_eq!(pager(10, 100, 10).next_link(), "/admin/events?page=10");
        assert_eq!(pager(5, 100, 10).next_link(), "/admin/events?page=6");
    }
}
