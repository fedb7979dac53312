//! Detail commands on existing date logs
//!
//! Emotions, gifts, touch moments, discussion points, journal entries, and
//! notes all attach to a date log identified by (person id, log id).

use anyhow::Result;
use heartbeat_core::{
    EmotionEntry, EmotionKind, Gift, GiftGiver, JournalStore, TouchDuration, TouchKind,
    TouchMoment,
};

/// Record an emotion felt on a date
pub fn cmd_log_emotion(
    store: &mut JournalStore,
    person_id: i64,
    log_id: i64,
    kind: &str,
    intensity: i64,
) -> Result<()> {
    let kind: EmotionKind = kind
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{} (e.g. happy, excited, anxious)", e))?;

    let entry = EmotionEntry::new(kind, intensity);
    let clamped = entry.intensity;
    store.add_emotion(person_id, log_id, entry)?;

    if i64::from(clamped) != intensity {
        println!("✅ Recorded {} at intensity {} (clamped to 1-5)", kind, clamped);
    } else {
        println!("✅ Recorded {} at intensity {}", kind, clamped);
    }
    Ok(())
}

/// Record a gift exchanged on a date
pub fn cmd_log_gift(
    store: &mut JournalStore,
    person_id: i64,
    log_id: i64,
    name: &str,
    giver: &str,
    description: Option<&str>,
) -> Result<()> {
    let giver: GiftGiver = giver
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{} (valid givers: me, them)", e))?;

    store.add_gift(
        person_id,
        log_id,
        Gift {
            name: name.to_string(),
            giver,
            description: description.map(String::from),
        },
    )?;

    let direction = match giver {
        GiftGiver::Me => "given",
        GiftGiver::Them => "received",
    };
    println!("✅ Recorded gift '{}' ({})", name, direction);
    Ok(())
}

/// Record a physical-touch moment
pub fn cmd_log_touch(
    store: &mut JournalStore,
    person_id: i64,
    log_id: i64,
    kind: &str,
    duration: &str,
    context: Option<&str>,
) -> Result<()> {
    let kind: TouchKind = kind
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{} (e.g. hug, kiss, hand_holding)", e))?;
    let duration: TouchDuration = duration
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{} (valid durations: brief, medium, long)", e))?;

    store.add_touch_moment(
        person_id,
        log_id,
        TouchMoment {
            kind,
            duration,
            context: context.map(String::from),
        },
    )?;

    println!("✅ Recorded {} ({})", kind.display_name(), duration);
    Ok(())
}

/// Record a discussion point
pub fn cmd_log_discussion(
    store: &mut JournalStore,
    person_id: i64,
    log_id: i64,
    topic: &str,
) -> Result<()> {
    store.add_discussion_point(person_id, log_id, topic)?;
    println!("✅ Recorded discussion point '{}'", topic);
    Ok(())
}

/// Set the journal entry for a date
pub fn cmd_log_journal(
    store: &mut JournalStore,
    person_id: i64,
    log_id: i64,
    text: &str,
) -> Result<()> {
    store.set_journal_entry(person_id, log_id, text)?;
    println!("✅ Journal entry saved ({} words)", text.split_whitespace().count());
    Ok(())
}

/// Set the notes for a date
pub fn cmd_log_notes(
    store: &mut JournalStore,
    person_id: i64,
    log_id: i64,
    text: &str,
) -> Result<()> {
    store.set_notes(person_id, log_id, text)?;
    println!("✅ Notes saved");
    Ok(())
}
