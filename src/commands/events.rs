use anyhow::Result;
use eventflow_core::filter::parse_date;
use eventflow_core::pagination::Pagination;
use eventflow_core::{EventFilter, PageState};
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::config::Config;
use crate::render::{self, Render};
use crate::utils::tui::create_spinner;

/// Listing route the pager links against.
const EVENTS_PATH: &str = "/events";

pub async fn run(
    title: Option<String>,
    organizer: Option<String>,
    approved: Option<bool>,
    from: Option<String>,
    to: Option<String>,
    page: u64,
    limit: u64,
) -> Result<()> {
    let filter = EventFilter {
        title,
        organizer_name: organizer,
        is_approved: approved,
        start_date: from.as_deref().map(parse_date).transpose()?,
        end_date: to.as_deref().map(parse_date).transpose()?,
    };

    let config = Config::load()?;
    let client = Client::new(config.api_base_url);

    let spinner = create_spinner("Fetching events".to_string());
    let result = client.list_events(&filter, page, limit).await;
    spinner.finish_and_clear();

    let event_page = result?;

    if event_page.events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let mut events = event_page.events;
    events.sort_by_key(|e| e.start_time);

    // Group events by day and print
    let mut current_date: Option<String> = None;

    for event in &events {
        let date_label = render::format_date_label(&event.start_time);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        println!("{}", event.render());
    }

    let state = PageState::new(event_page.page, event_page.total, event_page.limit)?;
    let pager = Pagination::new(state, EVENTS_PATH);

    println!();
    println!("  {}", pager.render());
    if let Some(line) = render::showing_line(&state) {
        println!("  {}", line.dimmed());
    }

    Ok(())
}
