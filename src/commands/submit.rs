use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use dialoguer::Input;
use eventflow_core::error::{EventFlowError, EventFlowResult};
use eventflow_core::filter::parse_date;
use eventflow_core::EventDraft;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::config::Config;
use crate::utils::tui::create_spinner;

pub async fn run(
    title: Option<String>,
    date: Option<String>,
    time: Option<String>,
    location: Option<String>,
    description: Option<String>,
    organizer: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || date.is_none() || organizer.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Date ---
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => prompt_with_retry("  Date (YYYY-MM-DD)", |s| parse_date(s))?,
    };

    // --- Time ---
    let time = match time {
        Some(t) => Some(parse_time(&t)?),
        None if interactive => {
            let input: String = Input::new()
                .with_prompt("  Time (skip for all-day)")
                .default(String::new())
                .show_default(false)
                .interact_text()?;
            if input.is_empty() {
                None
            } else {
                Some(parse_time(&input)?)
            }
        }
        None => None,
    };

    // --- Organizer & contact ---
    let organizer = match organizer {
        Some(o) => o,
        None => Input::<String>::new()
            .with_prompt("  Organizer")
            .interact_text()?,
    };

    let email = if email.is_none() && interactive {
        let input: String = Input::new()
            .with_prompt("  Contact email (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.is_empty() { None } else { Some(input) }
    } else {
        email
    };

    let draft = EventDraft {
        title,
        start_time: start_of(date, time),
        end_time: None,
        is_all_day: time.is_none(),
        organizer_name: organizer,
        contact_email: email,
        location,
        description,
    };

    let config = Config::load()?;
    let client = Client::new(config.api_base_url);

    let spinner = create_spinner("Submitting".to_string());
    let result = client.create_event(&draft).await;
    spinner.finish_and_clear();
    result?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Submitted: {}", draft.title).green());
    println!("{}", "  The event will appear once an admin approves it".dimmed());

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> EventFlowResult<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Combine a date and optional time-of-day into a UTC start timestamp.
/// All-day events start at midnight.
pub(crate) fn start_of(date: NaiveDate, time: Option<NaiveTime>) -> DateTime<Utc> {
    let time = time.unwrap_or_else(|| NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    date.and_time(time).and_utc()
}

/// Parse a time-of-day argument: 24-hour "HH:MM" or 12-hour "h:MM AM/PM".
pub(crate) fn parse_time(s: &str) -> EventFlowResult<NaiveTime> {
    let normalized = s.trim().to_uppercase();

    for format in ["%H:%M", "%I:%M %p", "%I:%M%p", "%I %p", "%I%p"] {
        if let Ok(time) = NaiveTime::parse_from_str(&normalized, format) {
            return Ok(time);
        }
    }

    Err(EventFlowError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_time ---

    #[test]
    fn parse_time_24_hour() {
        assert_eq!(
            parse_time("15:00").unwrap(),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn parse_time_12_hour() {
        assert_eq!(
            parse_time("2:30 PM").unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("2:30pm").unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("10 am").unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap()
        );
    }

    #[test]
    fn parse_time_rejects_nonsense() {
        assert!(parse_time("soonish").is_err());
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("").is_err());
    }

    // --- start_of ---

    #[test]
    fn start_of_all_day_is_midnight() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        let start = start_of(date, None);
        assert_eq!(start.to_rfc3339(), "2026-08-15T00:00:00+00:00");
    }

    #[test]
    fn start_of_timed_event_keeps_the_time() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        let time = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        let start = start_of(date, Some(time));
        assert_eq!(start.to_rfc3339(), "2026-08-15T18:00:00+00:00");
    }
}

