//! Widget snapshot commands (sync, clear, show)

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use heartbeat_core::{JournalStore, WidgetExporter};

fn exporter(dir: Option<PathBuf>) -> Result<WidgetExporter> {
    let dir = dir.unwrap_or_else(WidgetExporter::default_dir);
    Ok(WidgetExporter::new(dir)?)
}

/// Refresh the snapshot file from the journal
pub fn cmd_widget_sync(store: &JournalStore, dir: Option<PathBuf>) -> Result<()> {
    let exporter = exporter(dir)?;
    let now = Local::now().naive_local();

    match exporter.sync(store.people(), now)? {
        Some(snapshot) => {
            println!("✅ Widget snapshot updated: {}", snapshot.display_text);
            println!("   {}", exporter.snapshot_path().display());
        }
        None => {
            println!("✅ No upcoming dates; widget snapshot cleared");
        }
    }
    Ok(())
}

/// Remove the snapshot file
pub fn cmd_widget_clear(dir: Option<PathBuf>) -> Result<()> {
    let exporter = exporter(dir)?;
    exporter.clear()?;
    println!("✅ Widget snapshot cleared");
    Ok(())
}

/// Print the current snapshot, if any
pub fn cmd_widget_show(dir: Option<PathBuf>) -> Result<()> {
    let exporter = exporter(dir)?;
    match exporter.read()? {
        Some(snapshot) => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        None => {
            println!("No widget snapshot at {}", exporter.snapshot_path().display());
        }
    }
    Ok(())
}
