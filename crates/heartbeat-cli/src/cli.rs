//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Heartbeat - relationship journal with heuristic date insights
#[derive(Parser)]
#[command(name = "heartbeat")]
#[command(about = "Relationship journal with heuristic date insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal file path (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub journal: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage partners (add, list, archive, delete)
    Person {
        #[command(subcommand)]
        action: PersonAction,
    },

    /// Manage date logs (add, list, remove)
    Date {
        #[command(subcommand)]
        action: DateAction,
    },

    /// Attach details to an existing date log
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Run relationship analysis for a partner
    Insights {
        /// Person ID
        person_id: i64,

        /// Skip the simulated processing delay
        #[arg(long)]
        skip_delay: bool,

        /// Print insights as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze a single date log
    DateInsights {
        /// Person ID
        person_id: i64,

        /// Date log ID
        log_id: i64,

        /// Skip the simulated processing delay
        #[arg(long)]
        skip_delay: bool,

        /// Print insights as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the widget snapshot file
    Widget {
        #[command(subcommand)]
        action: WidgetAction,
    },
}

#[derive(Subcommand)]
pub enum PersonAction {
    /// Add a partner
    Add {
        /// Display name
        name: String,

        /// Meeting date (YYYY-MM-DD)
        #[arg(long)]
        met: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Path to a photo file
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// List partners
    List {
        /// Include archived partners
        #[arg(long)]
        all: bool,
    },

    /// Archive a partner (kept in the journal, hidden from lists)
    Archive {
        /// Person ID
        id: i64,
    },

    /// Unarchive a partner
    Unarchive {
        /// Person ID
        id: i64,
    },

    /// Delete a partner and every owned date log
    Delete {
        /// Person ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum DateAction {
    /// Record a date (past or planned)
    Add {
        /// Person ID
        person_id: i64,

        /// Location name
        #[arg(short, long)]
        location: String,

        /// Calendar date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Time of day (HH:MM)
        #[arg(short, long)]
        time: String,

        /// coffee, breakfast, lunch, dinner, museum, walk, dog_walk,
        /// dinner_at_theirs (default: dinner)
        #[arg(short, long)]
        kind: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Latitude (requires --lng)
        #[arg(long)]
        lat: Option<f64>,

        /// Longitude (requires --lat)
        #[arg(long)]
        lng: Option<f64>,
    },

    /// Edit an existing date log's core fields
    Edit {
        /// Person ID
        person_id: i64,

        /// Date log ID
        log_id: i64,

        /// New location name
        #[arg(short, long)]
        location: Option<String>,

        /// New calendar date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// New time of day (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        /// New date kind
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// List a partner's dates
    List {
        /// Person ID
        person_id: i64,

        /// Only upcoming dates (soonest first)
        #[arg(long)]
        upcoming: bool,

        /// Only past dates (most recent first)
        #[arg(long)]
        past: bool,
    },

    /// Remove a date log
    Remove {
        /// Person ID
        person_id: i64,

        /// Date log ID
        log_id: i64,
    },
}

#[derive(Subcommand)]
pub enum LogAction {
    /// Record an emotion felt on a date
    Emotion {
        person_id: i64,
        log_id: i64,
        /// Emotion kind (e.g. happy, excited, anxious)
        kind: String,
        /// Intensity 1-5 (values outside the range are clamped)
        intensity: i64,
    },

    /// Record a gift exchanged on a date
    Gift {
        person_id: i64,
        log_id: i64,
        /// Item name
        name: String,
        /// Who gave it: me or them
        #[arg(long, default_value = "me")]
        giver: String,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },

    /// Record a physical-touch moment
    Touch {
        person_id: i64,
        log_id: i64,
        /// Touch kind (e.g. hug, kiss, hand_holding)
        kind: String,
        /// brief, medium, or long
        #[arg(long, default_value = "brief")]
        duration: String,
        /// Optional free-text context
        #[arg(long)]
        context: Option<String>,
    },

    /// Record a discussion point
    Discussion {
        person_id: i64,
        log_id: i64,
        /// Topic discussed
        topic: String,
    },

    /// Set the journal entry for a date
    Journal {
        person_id: i64,
        log_id: i64,
        /// Journal text
        text: String,
    },

    /// Set the notes for a date
    Notes {
        person_id: i64,
        log_id: i64,
        /// Notes text
        text: String,
    },
}

#[derive(Subcommand)]
pub enum WidgetAction {
    /// Refresh the next-date snapshot from the journal
    Sync {
        /// Shared directory the widget consumer polls
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Remove the snapshot file
    Clear {
        /// Shared directory the widget consumer polls
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Print the current snapshot, if any
    Show {
        /// Shared directory the widget consumer polls
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}
