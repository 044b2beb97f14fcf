mod client;
mod commands;
mod config;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "eventflow")]
#[command(about = "Browse, submit and manage EventFlow calendar events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, with optional filters and paging
    Events {
        /// Filter by title
        #[arg(long)]
        title: Option<String>,

        /// Filter by organizer name
        #[arg(long)]
        organizer: Option<String>,

        /// Only approved (true) or unapproved (false) events
        #[arg(long)]
        approved: Option<bool>,

        /// Events starting on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Events starting on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Page to show
        #[arg(short, long, default_value_t = 1)]
        page: u64,

        /// Events per page
        #[arg(short, long, default_value_t = 10)]
        limit: u64,
    },
    /// Submit a new event for approval
    Submit {
        title: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM or h:MM AM/PM); omit for an all-day event
        #[arg(short, long)]
        time: Option<String>,

        /// Event location
        #[arg(long)]
        location: Option<String>,

        /// Event description
        #[arg(long)]
        description: Option<String>,

        /// Organizer name
        #[arg(short, long)]
        organizer: Option<String>,

        /// Contact email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Update fields of an existing event (admin)
    Update {
        /// Event id
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New location
        #[arg(long)]
        location: Option<String>,

        /// New event date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New start time (HH:MM or h:MM AM/PM)
        #[arg(long)]
        time: Option<String>,

        /// New organizer name
        #[arg(long)]
        organizer: Option<String>,

        /// New contact email
        #[arg(long)]
        email: Option<String>,

        /// Set approval status (true/false)
        #[arg(long)]
        approved: Option<bool>,
    },
    /// Delete an event (admin)
    Delete {
        /// Event id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Events {
            title,
            organizer,
            approved,
            from,
            to,
            page,
            limit,
        } => commands::events::run(title, organizer, approved, from, to, page, limit).await,
        Commands::Submit {
            title,
            date,
            time,
            location,
            description,
            organizer,
            email,
        } => commands::submit::run(title, date, time, location, description, organizer, email).await,
        Commands::Update {
            id,
            title,
            description,
            location,
            date,
            time,
            organizer,
            email,
            approved,
        } => {
            commands::update::run(
                id,
                title,
                description,
                location,
                date,
                time,
                organizer,
                email,
                approved,
            )
            .await
        }
        Commands::Delete { id, yes } => commands::delete::run(id, yes).await,
    }
}
