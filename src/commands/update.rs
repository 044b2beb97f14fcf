use anyhow::Result;
use eventflow_core::filter::parse_date;
use eventflow_core::EventPatch;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::config::Config;
use crate::utils::tui::create_spinner;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    id: i64,
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    date: Option<String>,
    time: Option<String>,
    organizer: Option<String>,
    email: Option<String>,
    approved: Option<bool>,
) -> Result<()> {
    let start_time = match (date, time) {
        (None, None) => None,
        (Some(d), t) => {
            let date = parse_date(&d)?;
            let time = t.as_deref().map(super::submit::parse_time).transpose()?;
            Some(super::submit::start_of(date, time))
        }
        (None, Some(_)) => {
            anyhow::bail!("--time requires --date (the new start needs both)")
        }
    };

    let patch = EventPatch {
        title,
        description,
        location,
        start_time,
        organizer_name: organizer,
        contact_email: email,
        is_approved: approved,
    };

    if patch.is_empty() {
        anyhow::bail!("Nothing to update. Pass at least one field flag, e.g. --approved true");
    }

    let config = Config::load()?;
    let client = Client::new(config.api_base_url);

    let spinner = create_spinner("Updating".to_string());
    let result = client.update_event(id, &patch).await;
    spinner.finish_and_clear();
    result?;

    match patch.is_approved {
        Some(true) => println!("{}", format!("  Approved event {}", id).green()),
        Some(false) => println!("{}", format!("  Unapproved event {}", id).yellow()),
        None => println!("{}", format!("  Updated event {}", id).green()),
    }

    Ok(())
}
