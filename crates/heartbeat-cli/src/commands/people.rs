//! Partner command implementations (add, list, archive, delete)

use std::path::Path;

use anyhow::{Context, Result};
use heartbeat_core::{JournalStore, NewPerson};

use super::{parse_date, truncate};

/// Add a partner
pub fn cmd_person_add(
    store: &mut JournalStore,
    name: &str,
    met: &str,
    phone: Option<&str>,
    photo: Option<&Path>,
) -> Result<()> {
    let meeting_date = parse_date(met)?;
    let photo = photo
        .map(|p| {
            std::fs::read(p).with_context(|| format!("Failed to read photo {}", p.display()))
        })
        .transpose()?;

    let id = store.add_person(NewPerson {
        name: name.to_string(),
        phone_number: phone.map(String::from),
        photo,
        meeting_date,
    })?;

    println!("✅ Added '{}' (id: {}), met {}", name, id, meeting_date);
    Ok(())
}

/// List partners
pub fn cmd_person_list(store: &JournalStore, include_archived: bool) -> Result<()> {
    let people = store.list_people(include_archived);

    if people.is_empty() {
        println!("No one in the journal yet. Add someone with:");
        println!("  heartbeat person add <name> --met YYYY-MM-DD");
        return Ok(());
    }

    println!();
    println!("💕 People");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:>4} │ {:20} │ {:10} │ {:>5} │ {}",
        "ID", "Name", "Met", "Dates", "Status"
    );
    println!("   ─────┼──────────────────────┼────────────┼───────┼──────────");

    for person in people {
        let status = if person.archived { "archived" } else { "active" };
        println!(
            "   {:>4} │ {:20} │ {:10} │ {:>5} │ {}",
            person.id,
            truncate(&person.name, 20),
            person.meeting_date,
            person.date_logs.len(),
            status
        );
    }

    Ok(())
}

/// Archive or unarchive a partner
pub fn cmd_person_archive(store: &mut JournalStore, id: i64, archived: bool) -> Result<()> {
    let name = store.person(id)?.name.clone();
    store.set_archived(id, archived)?;
    let verb = if archived { "Archived" } else { "Unarchived" };
    println!("✅ {} '{}' (id: {})", verb, name, id);
    Ok(())
}

/// Delete a partner and every owned date log
pub fn cmd_person_delete(store: &mut JournalStore, id: i64) -> Result<()> {
    let person = store.person(id)?;
    let name = person.name.clone();
    let logs = person.date_logs.len();
    store.delete_person(id)?;
    println!("✅ Deleted '{}' (id: {}) and {} date log(s)", name, id, logs);
    Ok(())
}
