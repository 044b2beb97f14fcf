use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::config::Config;
use crate::utils::tui::create_spinner;

pub async fn run(id: i64, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "  Delete event {}? This action cannot be undone",
                id
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "  Cancelled".dimmed());
            return Ok(());
        }
    }

    let config = Config::load()?;
    let client = Client::new(config.api_base_url);

    let spinner = create_spinner("Deleting".to_string());
    let result = client.delete_event(id).await;
    spinner.finish_and_clear();
    result?;

    println!("{}", format!("  Deleted event {}", id).red());

    Ok(())
}
