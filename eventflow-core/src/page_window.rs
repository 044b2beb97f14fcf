//! Page-window computation for the pager control.
//!
//! Produces the ordered run of markers a pager renders: up to seven, always
//! including the first and last page, with ellipsis placeholders standing in
//! for the collapsed runs.

use serde::{Deserialize, Serialize};

use crate::page_state::PageState;

/// One rendered unit in a pager: a page number or an ellipsis placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMarker {
    Page(u64),
    Ellipsis,
}

/// Largest page count shown without truncation.
const FULL_WINDOW_MAX: u64 = 7;

impl PageState {
    /// The ordered marker sequence for this page state.
    ///
    /// The current page is clamped before the zone check, so the output is
    /// defined for every input. Each call builds a fresh sequence.
    pub fn page_window(&self) -> Vec<PageMarker> {
        let total = self.total_pages();

        if total <= FULL_WINDOW_MAX {
            return (1..=total).map(PageMarker::Page).collect();
        }

        let current = self.clamped_page();

        if current <= 4 {
            // Near start: the leading run already reaches the left boundary.
            let mut window: Vec<PageMarker> = (1..=5).map(PageMarker::Page).collect();
            window.push(PageMarker::Ellipsis);
            window.push(PageMarker::Page(total));
            window
        } else if current >= total - 3 {
            // Near end: mirror image of the start zone.
            let mut window = vec![PageMarker::Page(1), PageMarker::Ellipsis];
            window.extend((total - 4..=total).map(PageMarker::Page));
            window
        } else {
            // Middle: current page with one neighbor on each side.
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(current - 1),
                PageMarker::Page(current),
                PageMarker::Page(current + 1),
                PageMarker::Ellipsis,
                PageMarker::Page(total),
            ]
        }
    }
}
