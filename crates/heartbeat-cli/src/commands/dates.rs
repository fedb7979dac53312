//! Date log command implementations (add, list, remove)

use anyhow::Result;
use chrono::Local;
use heartbeat_core::{Coordinate, DateKind, DateLog, JournalStore, NewDateLog};

use super::{parse_date, parse_time, truncate};

/// Record a date, past or planned
#[allow(clippy::too_many_arguments)]
pub fn cmd_date_add(
    store: &mut JournalStore,
    person_id: i64,
    location: &str,
    date: &str,
    time: &str,
    kind: Option<&str>,
    notes: Option<&str>,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<()> {
    let date = parse_date(date)?;
    let time = parse_time(time)?;
    let kind = match kind {
        Some(k) => k.parse::<DateKind>().map_err(|e: String| {
            anyhow::anyhow!(
                "{} (valid kinds: coffee, breakfast, lunch, dinner, museum, walk, dog_walk, dinner_at_theirs)",
                e
            )
        })?,
        None => DateKind::default(),
    };
    let coordinate = match (lat, lng) {
        (Some(latitude), Some(longitude)) => Some(Coordinate {
            latitude,
            longitude,
        }),
        (None, None) => None,
        _ => anyhow::bail!("--lat and --lng must be given together"),
    };

    let name = store.person(person_id)?.name.clone();
    let log_id = store.add_date_log(
        person_id,
        NewDateLog {
            location: location.to_string(),
            coordinate,
            date,
            time,
            kind,
            notes: notes.unwrap_or_default().to_string(),
        },
    )?;

    println!(
        "✅ Logged {} with {} at '{}' on {} {} (log id: {})",
        kind.display_name(),
        name,
        location,
        date,
        time.format("%H:%M"),
        log_id
    );
    Ok(())
}

/// Edit an existing date log's core fields
pub fn cmd_date_edit(
    store: &mut JournalStore,
    person_id: i64,
    log_id: i64,
    location: Option<&str>,
    date: Option<&str>,
    time: Option<&str>,
    kind: Option<&str>,
) -> Result<()> {
    if location.is_none() && date.is_none() && time.is_none() && kind.is_none() {
        anyhow::bail!("Nothing to change: pass --location, --date, --time, or --kind");
    }

    let date = date.map(parse_date).transpose()?;
    let time = time.map(parse_time).transpose()?;
    let kind = kind
        .map(|k| {
            k.parse::<DateKind>().map_err(|e: String| {
                anyhow::anyhow!(
                    "{} (valid kinds: coffee, breakfast, lunch, dinner, museum, walk, dog_walk, dinner_at_theirs)",
                    e
                )
            })
        })
        .transpose()?;

    store.update_date_log(person_id, log_id, location, date, time, kind)?;

    let log = store.date_log(person_id, log_id)?;
    println!(
        "✅ Updated date log {}: {} at '{}' on {} {}",
        log_id,
        log.kind.display_name(),
        log.location,
        log.date,
        log.time.format("%H:%M")
    );
    Ok(())
}

/// List a partner's dates
pub fn cmd_date_list(
    store: &JournalStore,
    person_id: i64,
    upcoming: bool,
    past: bool,
) -> Result<()> {
    let person = store.person(person_id)?;
    let now = Local::now().naive_local();

    let logs: Vec<&DateLog> = if upcoming {
        person.upcoming_logs(now)
    } else if past {
        person.past_logs(now)
    } else {
        person.date_logs.iter().collect()
    };

    if logs.is_empty() {
        println!("No dates logged for {} yet.", person.name);
        return Ok(());
    }

    println!();
    println!("📅 Dates with {}", person.name);
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:>4} │ {:10} {:>5} │ {:16} │ {:20} │ {}",
        "ID", "Date", "Time", "Kind", "Location", "Notes"
    );
    println!("   ─────┼──────────────────┼──────────────────┼──────────────────────┼──────────");

    for log in logs {
        println!(
            "   {:>4} │ {:10} {:>5} │ {:16} │ {:20} │ {}",
            log.id,
            log.date,
            log.time.format("%H:%M"),
            log.kind.display_name(),
            truncate(&log.location, 20),
            truncate(&log.notes, 30)
        );
    }

    Ok(())
}

/// Remove a date log
pub fn cmd_date_remove(store: &mut JournalStore, person_id: i64, log_id: i64) -> Result<()> {
    let location = store.date_log(person_id, log_id)?.location.clone();
    store.remove_date_log(person_id, log_id)?;
    println!("✅ Removed date at '{}' (log id: {})", location, log_id);
    Ok(())
}
