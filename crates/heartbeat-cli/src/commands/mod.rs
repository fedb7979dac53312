//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `people` - Partner management commands (add, list, archive, delete)
//! - `dates` - Date log commands (add, list, remove)
//! - `logs` - Detail commands on existing logs (emotion, gift, touch, ...)
//! - `insights` - Relationship and per-date analysis commands
//! - `widget` - Widget snapshot commands (sync, clear, show)

pub mod dates;
pub mod insights;
pub mod logs;
pub mod people;
pub mod widget;

// Re-export command functions for main.rs
pub use dates::*;
pub use insights::*;
pub use logs::*;
pub use people::*;
pub use widget::*;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use heartbeat_core::JournalStore;

/// Open the journal store at the given path, or at the platform default
pub fn open_store(path: Option<&Path>) -> Result<JournalStore> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => JournalStore::default_path(),
    };
    JournalStore::open(&path)
        .with_context(|| format!("Failed to open journal at {}", path.display()))
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' (use YYYY-MM-DD)", s))
}

pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("Invalid time '{}' (use HH:MM)", s))
}

/// Truncate a string to a maximum length, adding "..." if truncated
///
/// Cuts on a char boundary so multi-byte names never split mid-character.
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let cut = max.saturating_sub(3);
        let end = s
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|&i| i <= cut)
            .last()
            .unwrap_or(0);
        format!("{}...", &s[..end])
    }
}
