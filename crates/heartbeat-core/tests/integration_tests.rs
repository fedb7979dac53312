//! End-to-end tests: journal store -> analyzers -> widget snapshot

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use heartbeat_core::insights::{date_log, relationship, InsightCategory};
use heartbeat_core::{
    DateKind, EmotionEntry, EmotionKind, Gift, GiftGiver, JournalStore, NewDateLog, NewPerson,
    TouchDuration, TouchKind, TouchMoment, WidgetExporter,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn evening() -> NaiveTime {
    NaiveTime::from_hms_opt(19, 0, 0).unwrap()
}

fn now() -> NaiveDateTime {
    date(2026, 6, 1).and_hms_opt(12, 0, 0).unwrap()
}

fn new_log(location: &str, d: NaiveDate) -> NewDateLog {
    NewDateLog {
        location: location.into(),
        coordinate: None,
        date: d,
        time: evening(),
        kind: DateKind::Dinner,
        notes: String::new(),
    }
}

#[test]
fn journaled_history_produces_relationship_insights() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JournalStore::open(dir.path().join("journal.json")).unwrap();

    let pid = store
        .add_person(NewPerson {
            name: "Sam".into(),
            phone_number: Some("0400 000 000".into()),
            photo: None,
            meeting_date: date(2026, 1, 1),
        })
        .unwrap();

    // Weekly dinners at the same place, all documented
    for week in 0..4u32 {
        let lid = store
            .add_date_log(pid, new_log("Cafe X", date(2026, 5, 1 + week * 7)))
            .unwrap();
        store.set_notes(pid, lid, "an amazing wonderful night").unwrap();
        store
            .add_emotion(pid, lid, EmotionEntry::new(EmotionKind::Happy, 4))
            .unwrap();
    }

    let reopened = JournalStore::open(store.path()).unwrap();
    let person = reopened.person(pid).unwrap();
    let insights = relationship::analyze(person, now());

    // Four logs at one location, 7-day cadence, every date documented
    let rhythm = insights
        .iter()
        .find(|i| i.category == InsightCategory::Rhythm)
        .expect("rhythm insight");
    assert_eq!(rhythm.title, "Highly Connected");

    let places = insights
        .iter()
        .find(|i| i.category == InsightCategory::Places)
        .expect("places insight");
    assert!(places.description.contains("(100% of your dates)"));

    let memories = insights
        .iter()
        .find(|i| i.category == InsightCategory::Memories)
        .expect("memories insight");
    assert_eq!(memories.title, "Memory Keeper");

    // Unconditional rules always present
    for cat in [
        InsightCategory::Timeline,
        InsightCategory::Momentum,
        InsightCategory::Recommendation,
    ] {
        assert!(insights.iter().any(|i| i.category == cat));
    }
}

#[test]
fn per_date_analysis_reads_attached_details() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JournalStore::open(dir.path().join("journal.json")).unwrap();
    let pid = store
        .add_person(NewPerson {
            name: "Sam".into(),
            phone_number: None,
            photo: None,
            meeting_date: date(2026, 1, 1),
        })
        .unwrap();
    let lid = store
        .add_date_log(pid, new_log("Gallery", date(2026, 5, 10)))
        .unwrap();

    store
        .add_emotion(pid, lid, EmotionEntry::new(EmotionKind::Excited, 5))
        .unwrap();
    store.add_discussion_point(pid, lid, "art").unwrap();
    store.add_discussion_point(pid, lid, "travel").unwrap();
    store.add_discussion_point(pid, lid, "books").unwrap();
    store
        .add_touch_moment(
            pid,
            lid,
            TouchMoment {
                kind: TouchKind::HandHolding,
                duration: TouchDuration::Medium,
                context: Some("walking between rooms".into()),
            },
        )
        .unwrap();
    store
        .add_gift(
            pid,
            lid,
            Gift {
                name: "Exhibition catalogue".into(),
                giver: GiftGiver::Them,
                description: None,
            },
        )
        .unwrap();
    store
        .set_journal_entry(pid, lid, "A great afternoon, really enjoyed the sculptures")
        .unwrap();

    let log = store.date_log(pid, lid).unwrap();
    let insights = date_log::analyze(log);
    assert_eq!(insights.len(), 7);

    let overall = insights
        .iter()
        .find(|i| i.category == InsightCategory::Overall)
        .unwrap();
    assert_eq!(overall.score, 10);

    let intimacy = insights
        .iter()
        .find(|i| i.category == InsightCategory::Intimacy)
        .unwrap();
    assert!(intimacy.description.contains("level: Medium"));
}

#[test]
fn widget_snapshot_follows_journal_changes() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JournalStore::open(dir.path().join("journal.json")).unwrap();
    let exporter = WidgetExporter::new(dir.path().join("widget")).unwrap();

    let pid = store
        .add_person(NewPerson {
            name: "Sam".into(),
            phone_number: None,
            photo: None,
            meeting_date: date(2026, 1, 1),
        })
        .unwrap();

    // Only past logs: no snapshot
    store
        .add_date_log(pid, new_log("Cafe X", date(2026, 5, 1)))
        .unwrap();
    assert!(exporter.sync(store.people(), now()).unwrap().is_none());

    // Planned date appears in the snapshot
    let lid = store
        .add_date_log(pid, new_log("River walk", date(2026, 6, 14)))
        .unwrap();
    let snapshot = exporter.sync(store.people(), now()).unwrap().unwrap();
    assert_eq!(snapshot.location, "River walk");
    assert_eq!(snapshot.upcoming_at, date(2026, 6, 14).and_time(evening()));

    // Removing the planned date clears the file again
    store.remove_date_log(pid, lid).unwrap();
    assert!(exporter.sync(store.people(), now()).unwrap().is_none());
    assert!(exporter.read().unwrap().is_none());
}
