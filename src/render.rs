//! Terminal rendering for eventflow types.
//!
//! Extension traits that add colored terminal rendering to eventflow-core
//! types using owo_colors.

use chrono::{DateTime, Utc};
use eventflow_core::pagination::Pagination;
use eventflow_core::{Event, PageState};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format_time(&self.start_time, self.is_all_day);
        let organizer = format!("[{}]", self.organizer_name);

        format!(
            "  {} {} {} {}",
            time,
            self.title,
            organizer.dimmed(),
            approval_badge(self.is_approved)
        )
    }
}

impl Render for Pagination {
    fn render(&self) -> String {
        let mut parts = vec!["‹".dimmed().to_string()];

        for item in self.items() {
            let part = if item.current {
                format!("[{}]", item.label).bold().to_string()
            } else if item.href.is_some() {
                item.label
            } else {
                // Inert ellipsis
                item.label.dimmed().to_string()
            };
            parts.push(part);
        }

        parts.push("›".dimmed().to_string());
        parts.join(" ")
    }
}

/// Approval badge for admin listings.
fn approval_badge(approved: bool) -> String {
    if approved {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

/// "Showing X-Y of Z results" line; None for an empty list.
pub fn showing_line(state: &PageState) -> Option<String> {
    if state.total_items() == 0 {
        return None;
    }

    let (start, end) = state.item_range();
    Some(format!(
        "Showing {}-{} of {} results",
        start,
        end,
        state.total_items()
    ))
}

/// Day heading for grouped listings (e.g. "Today", "Tomorrow", "Fri Aug 15").
pub fn format_date_label(start: &DateTime<Utc>) -> String {
    let today = chrono::Local::now().date_naive();
    let date = start.with_timezone(&chrono::Local).date_naive();

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Time column for an event row (e.g. "  15:00" or "all-day").
fn format_time(start: &DateTime<Utc>, is_all_day: bool) -> String {
    if is_all_day {
        "all-day".to_string()
    } else {
        format!("{:>7}", start.with_timezone(&chrono::Local).format("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // --- showing_line ---

    #[test]
    fn showing_line_for_partial_last_page() {
        let state = PageState::new(5, 45, 10).unwrap();
        assert_eq!(
            showing_line(&state).unwrap(),
            "Showing 41-45 of 45 results"
        );
    }

    #[test]
    fn showing_line_suppressed_for_empty_list() {
        let state = PageState::new(1, 0, 10).unwrap();
        assert_eq!(showing_line(&state), None);
    }

    // --- pager rendering ---

    #[test]
    fn pager_brackets_current_page_and_dims_ellipsis() {
        let pager = Pagination::new(PageState::new(5, 100, 10).unwrap(), "/events");
        let rendered = pager.render();
        assert!(rendered.contains("[5]"));
        assert!(rendered.contains("..."));
    }

    // --- format_time ---

    #[test]
    fn all_day_events_have_no_time_column() {
        let start = Utc.with_ymd_and_hms(2026, 8, 15, 0, 0, 0).unwrap();
        assert_eq!(format_time(&start, true), "all-day");
    }
}
