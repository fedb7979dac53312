//! Heartbeat CLI - Relationship journal with heuristic date insights
//!
//! Usage:
//!   heartbeat person add "Sam" --met 2026-01-01    Add a partner
//!   heartbeat date add 1 -l "Cafe X" -d 2026-06-14 -t 19:00
//!   heartbeat insights 1                            Relationship analysis
//!   heartbeat widget sync                           Refresh the widget file

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Person { action } => {
            let mut store = commands::open_store(cli.journal.as_deref())?;
            match action {
                PersonAction::Add {
                    name,
                    met,
                    phone,
                    photo,
                } => commands::cmd_person_add(
                    &mut store,
                    &name,
                    &met,
                    phone.as_deref(),
                    photo.as_deref(),
                ),
                PersonAction::List { all } => commands::cmd_person_list(&store, all),
                PersonAction::Archive { id } => commands::cmd_person_archive(&mut store, id, true),
                PersonAction::Unarchive { id } => {
                    commands::cmd_person_archive(&mut store, id, false)
                }
                PersonAction::Delete { id } => commands::cmd_person_delete(&mut store, id),
            }
        }
        Commands::Date { action } => {
            let mut store = commands::open_store(cli.journal.as_deref())?;
            match action {
                DateAction::Add {
                    person_id,
                    location,
                    date,
                    time,
                    kind,
                    notes,
                    lat,
                    lng,
                } => commands::cmd_date_add(
                    &mut store,
                    person_id,
                    &location,
                    &date,
                    &time,
                    kind.as_deref(),
                    notes.as_deref(),
                    lat,
                    lng,
                ),
                DateAction::Edit {
                    person_id,
                    log_id,
                    location,
                    date,
                    time,
                    kind,
                } => commands::cmd_date_edit(
                    &mut store,
                    person_id,
                    log_id,
                    location.as_deref(),
                    date.as_deref(),
                    time.as_deref(),
                    kind.as_deref(),
                ),
                DateAction::List {
                    person_id,
                    upcoming,
                    past,
                } => commands::cmd_date_list(&store, person_id, upcoming, past),
                DateAction::Remove { person_id, log_id } => {
                    commands::cmd_date_remove(&mut store, person_id, log_id)
                }
            }
        }
        Commands::Log { action } => {
            let mut store = commands::open_store(cli.journal.as_deref())?;
            match action {
                LogAction::Emotion {
                    person_id,
                    log_id,
                    kind,
                    intensity,
                } => commands::cmd_log_emotion(&mut store, person_id, log_id, &kind, intensity),
                LogAction::Gift {
                    person_id,
                    log_id,
                    name,
                    giver,
                    description,
                } => commands::cmd_log_gift(
                    &mut store,
                    person_id,
                    log_id,
                    &name,
                    &giver,
                    description.as_deref(),
                ),
                LogAction::Touch {
                    person_id,
                    log_id,
                    kind,
                    duration,
                    context,
                } => commands::cmd_log_touch(
                    &mut store,
                    person_id,
                    log_id,
                    &kind,
                    &duration,
                    context.as_deref(),
                ),
                LogAction::Discussion {
                    person_id,
                    log_id,
                    topic,
                } => commands::cmd_log_discussion(&mut store, person_id, log_id, &topic),
                LogAction::Journal {
                    person_id,
                    log_id,
                    text,
                } => commands::cmd_log_journal(&mut store, person_id, log_id, &text),
                LogAction::Notes {
                    person_id,
                    log_id,
                    text,
                } => commands::cmd_log_notes(&mut store, person_id, log_id, &text),
            }
        }
        Commands::Insights {
            person_id,
            skip_delay,
            json,
        } => {
            let store = commands::open_store(cli.journal.as_deref())?;
            commands::cmd_insights(&store, person_id, skip_delay, json).await
        }
        Commands::DateInsights {
            person_id,
            log_id,
            skip_delay,
            json,
        } => {
            let store = commands::open_store(cli.journal.as_deref())?;
            commands::cmd_date_insights(&store, person_id, log_id, skip_delay, json).await
        }
        Commands::Widget { action } => match action {
            WidgetAction::Sync { dir } => {
                let store = commands::open_store(cli.journal.as_deref())?;
                commands::cmd_widget_sync(&store, dir)
            }
            WidgetAction::Clear { dir } => commands::cmd_widget_clear(dir),
            WidgetAction::Show { dir } => commands::cmd_widget_show(dir),
        },
    }
}
