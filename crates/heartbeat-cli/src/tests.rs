//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use clap::CommandFactory;
use heartbeat_core::{EmotionKind, JournalStore};
use tempfile::TempDir;

use crate::cli::Cli;
use crate::commands::{self, truncate};

fn setup_test_store() -> (TempDir, JournalStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::open(dir.path().join("journal.json")).unwrap();
    (dir, store)
}

fn add_test_person(store: &mut JournalStore, name: &str) -> i64 {
    commands::cmd_person_add(store, name, "2026-01-01", None, None).unwrap();
    store.list_people(true).last().unwrap().id
}

fn add_test_date(store: &mut JournalStore, person_id: i64) -> i64 {
    commands::cmd_date_add(
        store,
        person_id,
        "Cafe X",
        "2026-05-01",
        "19:00",
        Some("dinner"),
        None,
        None,
        None,
    )
    .unwrap();
    store.person(person_id).unwrap().date_logs.last().unwrap().id
}

#[test]
fn test_cli_parses() {
    Cli::command().debug_assert();
}

// ========== Person Command Tests ==========

#[test]
fn test_cmd_person_add_and_list() {
    let (_dir, mut store) = setup_test_store();
    let id = add_test_person(&mut store, "Sam");

    let person = store.person(id).unwrap();
    assert_eq!(person.name, "Sam");
    assert_eq!(person.meeting_date.to_string(), "2026-01-01");

    assert!(commands::cmd_person_list(&store, false).is_ok());
}

#[test]
fn test_cmd_person_add_rejects_bad_date() {
    let (_dir, mut store) = setup_test_store();
    let result = commands::cmd_person_add(&mut store, "Sam", "01/01/2026", None, None);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("YYYY-MM-DD"));
}

#[test]
fn test_cmd_person_archive_cycle() {
    let (_dir, mut store) = setup_test_store();
    let id = add_test_person(&mut store, "Sam");

    commands::cmd_person_archive(&mut store, id, true).unwrap();
    assert!(store.person(id).unwrap().archived);
    assert!(store.list_people(false).is_empty());

    commands::cmd_person_archive(&mut store, id, false).unwrap();
    assert!(!store.person(id).unwrap().archived);
}

#[test]
fn test_cmd_person_delete() {
    let (_dir, mut store) = setup_test_store();
    let id = add_test_person(&mut store, "Sam");
    add_test_date(&mut store, id);

    commands::cmd_person_delete(&mut store, id).unwrap();
    assert!(store.person(id).is_err());
}

#[test]
fn test_cmd_person_delete_missing() {
    let (_dir, mut store) = setup_test_store();
    assert!(commands::cmd_person_delete(&mut store, 99).is_err());
}

// ========== Date Command Tests ==========

#[test]
fn test_cmd_date_add_defaults_to_dinner() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    commands::cmd_date_add(
        &mut store, pid, "Cafe X", "2026-05-01", "19:00", None, None, None, None,
    )
    .unwrap();

    let log = &store.person(pid).unwrap().date_logs[0];
    assert_eq!(log.kind.as_str(), "dinner");
    assert!(log.coordinate.is_none());
}

#[test]
fn test_cmd_date_add_requires_both_coordinates() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    let result = commands::cmd_date_add(
        &mut store,
        pid,
        "Cafe X",
        "2026-05-01",
        "19:00",
        None,
        None,
        Some(-37.81),
        None,
    );
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("--lat and --lng must be given together"));
}

#[test]
fn test_cmd_date_add_with_coordinates() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    commands::cmd_date_add(
        &mut store,
        pid,
        "Cafe X",
        "2026-05-01",
        "19:00",
        Some("walk"),
        Some("river loop"),
        Some(-37.81),
        Some(144.96),
    )
    .unwrap();

    let log = &store.person(pid).unwrap().date_logs[0];
    let coord = log.coordinate.unwrap();
    assert_eq!(coord.latitude, -37.81);
    assert_eq!(log.notes, "river loop");
}

#[test]
fn test_cmd_date_add_rejects_unknown_kind() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    let result = commands::cmd_date_add(
        &mut store, pid, "Cafe X", "2026-05-01", "19:00", Some("skydiving"), None, None, None,
    );
    assert!(result.is_err());
}

#[test]
fn test_cmd_date_edit_updates_fields() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    let lid = add_test_date(&mut store, pid);

    commands::cmd_date_edit(
        &mut store,
        pid,
        lid,
        Some("Gallery"),
        Some("2026-05-02"),
        None,
        Some("museum"),
    )
    .unwrap();

    let log = store.date_log(pid, lid).unwrap();
    assert_eq!(log.location, "Gallery");
    assert_eq!(log.date.to_string(), "2026-05-02");
    assert_eq!(log.time.format("%H:%M").to_string(), "19:00");
    assert_eq!(log.kind.as_str(), "museum");
}

#[test]
fn test_cmd_date_edit_requires_a_field() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    let lid = add_test_date(&mut store, pid);

    let result = commands::cmd_date_edit(&mut store, pid, lid, None, None, None, None);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Nothing to change"));
}

#[test]
fn test_cmd_date_list_and_remove() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    let lid = add_test_date(&mut store, pid);

    assert!(commands::cmd_date_list(&store, pid, false, false).is_ok());
    commands::cmd_date_remove(&mut store, pid, lid).unwrap();
    assert!(store.person(pid).unwrap().date_logs.is_empty());
}

// ========== Log Command Tests ==========

#[test]
fn test_cmd_log_emotion_clamps_intensity() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    let lid = add_test_date(&mut store, pid);

    commands::cmd_log_emotion(&mut store, pid, lid, "happy", 9).unwrap();
    let log = store.date_log(pid, lid).unwrap();
    assert_eq!(log.emotions[0].kind, EmotionKind::Happy);
    assert_eq!(log.emotions[0].intensity, 5);
}

#[test]
fn test_cmd_log_emotion_rejects_unknown_kind() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    let lid = add_test_date(&mut store, pid);
    assert!(commands::cmd_log_emotion(&mut store, pid, lid, "vengeful", 3).is_err());
}

#[test]
fn test_cmd_log_gift_parses_giver() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    let lid = add_test_date(&mut store, pid);

    commands::cmd_log_gift(&mut store, pid, lid, "Flowers", "them", Some("tulips")).unwrap();
    let log = store.date_log(pid, lid).unwrap();
    assert_eq!(log.gifts[0].giver.as_str(), "them");
    assert!(commands::cmd_log_gift(&mut store, pid, lid, "Card", "stranger", None).is_err());
}

#[test]
fn test_cmd_log_touch_discussion_journal_notes() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    let lid = add_test_date(&mut store, pid);

    commands::cmd_log_touch(&mut store, pid, lid, "hug", "long", Some("goodbye")).unwrap();
    commands::cmd_log_discussion(&mut store, pid, lid, "travel plans").unwrap();
    commands::cmd_log_journal(&mut store, pid, lid, "a lovely evening").unwrap();
    commands::cmd_log_notes(&mut store, pid, lid, "try the gallery next").unwrap();

    let log = store.date_log(pid, lid).unwrap();
    assert_eq!(log.touch_moments.len(), 1);
    assert_eq!(log.discussion_points, vec!["travel plans"]);
    assert_eq!(log.journal_entry, "a lovely evening");
    assert_eq!(log.notes, "try the gallery next");
}

// ========== Insights Command Tests ==========

#[tokio::test]
async fn test_cmd_insights_runs_with_skip_delay() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    add_test_date(&mut store, pid);

    assert!(commands::cmd_insights(&store, pid, true, false).await.is_ok());
    assert!(commands::cmd_insights(&store, pid, true, true).await.is_ok());
}

#[tokio::test]
async fn test_cmd_date_insights_missing_log() {
    let (_dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    assert!(commands::cmd_date_insights(&store, pid, 99, true, false)
        .await
        .is_err());
}

// ========== Widget Command Tests ==========

#[test]
fn test_cmd_widget_sync_and_clear() {
    let (dir, mut store) = setup_test_store();
    let pid = add_test_person(&mut store, "Sam");
    // Far-future date stays upcoming for the lifetime of this test
    commands::cmd_date_add(
        &mut store, pid, "Cafe X", "2100-01-01", "19:00", None, None, None, None,
    )
    .unwrap();

    let widget_dir = dir.path().join("widget");
    commands::cmd_widget_sync(&store, Some(widget_dir.clone())).unwrap();
    assert!(widget_dir.join("next_date.json").exists());

    assert!(commands::cmd_widget_show(Some(widget_dir.clone())).is_ok());
    commands::cmd_widget_clear(Some(widget_dir.clone())).unwrap();
    assert!(!widget_dir.join("next_date.json").exists());
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a very long location name", 10), "a very ...");
}

#[test]
fn test_truncate_multibyte_on_char_boundary() {
    // Must not panic when the cut lands inside a multi-byte character
    let cut = truncate("Renée-Mathilde Ångström", 20);
    assert!(cut.ends_with("..."));
    assert!(cut.len() <= 20);
    assert_eq!(truncate("Café Zürichsee", 30), "Café Zürichsee");
}

#[test]
fn test_parse_date_and_time() {
    assert!(commands::parse_date("2026-05-01").is_ok());
    assert!(commands::parse_date("May 1").is_err());
    assert!(commands::parse_time("19:00").is_ok());
    assert!(commands::parse_time("7pm").is_err());
}
