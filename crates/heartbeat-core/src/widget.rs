//! Widget snapshot export
//!
//! Producer side of a file handoff: the next upcoming date across all people
//! is serialized to a JSON file in a shared directory, and a widget process
//! reads whatever is present on its own refresh timer. There is no
//! acknowledgment channel; when no upcoming date exists the file is removed
//! and the consumer falls back to its last-known-good state.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{DateLog, Person};

/// File name the widget consumer polls for
pub const SNAPSHOT_FILENAME: &str = "next_date.json";

fn default_has_data() -> bool {
    true
}

/// Summary of the next upcoming date, shared with the widget process
///
/// Decoding tolerates older snapshots: a missing `has_data` reads as true,
/// and the optional fields default to absent.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub person_name: String,
    pub upcoming_at: NaiveDateTime,
    pub location: String,
    pub display_text: String,
    #[serde(default = "default_has_data")]
    pub has_data: bool,
    /// Photo bytes, base64 in the file; resizing is the app layer's concern
    #[serde_as(as = "Option<Base64>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// The earliest future date log across all people
///
/// Ties on the instant break by person id then log id so repeated syncs pick
/// the same log.
pub fn next_upcoming<'a>(
    people: &'a [Person],
    now: NaiveDateTime,
) -> Option<(&'a Person, &'a DateLog)> {
    people
        .iter()
        .flat_map(|person| {
            person
                .date_logs
                .iter()
                .filter(|log| log.is_upcoming(now))
                .map(move |log| (person, log))
        })
        .min_by_key(|(person, log)| (log.starts_at(), person.id, log.id))
}

/// Writes the next-date snapshot into a shared directory
pub struct WidgetExporter {
    dir: PathBuf,
}

impl WidgetExporter {
    /// Create an exporter, creating the shared directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                Error::Widget(format!(
                    "Failed to create shared directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            info!("Created widget shared directory: {}", dir.display());
        }
        Ok(Self { dir })
    }

    /// Default shared directory under the platform data directory
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("heartbeat")
            .join("widget")
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILENAME)
    }

    /// Refresh the snapshot file from the current people list
    ///
    /// Writes the earliest upcoming date, or removes the file when none
    /// exists. Returns the snapshot that was written, if any.
    pub fn sync(&self, people: &[Person], now: NaiveDateTime) -> Result<Option<WidgetSnapshot>> {
        let Some((person, log)) = next_upcoming(people, now) else {
            self.clear()?;
            info!("No upcoming dates; widget snapshot cleared");
            return Ok(None);
        };

        let snapshot = WidgetSnapshot {
            person_name: person.name.clone(),
            upcoming_at: log.starts_at(),
            location: log.location.clone(),
            display_text: display_text(person, log),
            has_data: true,
            photo: person.photo.clone(),
            latitude: log.coordinate.map(|c| c.latitude),
            longitude: log.coordinate.map(|c| c.longitude),
        };

        self.write(&snapshot)?;
        info!(
            person = %snapshot.person_name,
            location = %snapshot.location,
            at = %snapshot.upcoming_at,
            "widget snapshot updated"
        );
        Ok(Some(snapshot))
    }

    /// Read the current snapshot, if one is present
    pub fn read(&self) -> Result<Option<WidgetSnapshot>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Remove the snapshot file if present
    pub fn clear(&self) -> Result<()> {
        let path = self.snapshot_path();
        if path.exists() {
            fs::remove_file(&path)?;
            debug!(path = %path.display(), "widget snapshot removed");
        }
        Ok(())
    }

    // Atomic write so the consumer never observes a half-written file
    fn write(&self, snapshot: &WidgetSnapshot) -> Result<()> {
        let bytes = serde_json::to_vec(snapshot)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&bytes)?;
        tmp.persist(self.snapshot_path())
            .map_err(|e| Error::Widget(format!("Failed to persist snapshot: {}", e)))?;
        Ok(())
    }
}

fn display_text(person: &Person, log: &DateLog) -> String {
    format!(
        "{} - {}",
        person.name,
        log.starts_at().format("%b %-d, %Y at %-I:%M %p")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, DateKind};
    use chrono::{NaiveDate, NaiveTime};

    fn log(id: i64, y: i32, m: u32, d: u32, hour: u32) -> DateLog {
        DateLog {
            id,
            location: "Cafe X".into(),
            coordinate: None,
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            notes: String::new(),
            kind: DateKind::default(),
            discussion_points: vec![],
            emotions: vec![],
            journal_entry: String::new(),
            gifts: vec![],
            touch_moments: vec![],
        }
    }

    fn person(id: i64, name: &str, logs: Vec<DateLog>) -> Person {
        Person {
            id,
            name: name.into(),
            phone_number: None,
            photo: None,
            meeting_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            archived: false,
            date_logs: logs,
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_picks_earliest_upcoming_across_people() {
        let people = vec![
            person(1, "A", vec![log(1, 2026, 3, 10, 19), log(2, 2026, 2, 1, 19)]),
            person(2, "B", vec![log(3, 2026, 3, 5, 9)]),
        ];
        let (p, l) = next_upcoming(&people, now()).unwrap();
        assert_eq!(p.name, "B");
        assert_eq!(l.id, 3);
    }

    #[test]
    fn test_no_future_logs_yields_none() {
        let people = vec![person(1, "A", vec![log(1, 2026, 2, 1, 19)])];
        assert!(next_upcoming(&people, now()).is_none());
    }

    #[test]
    fn test_sync_writes_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = WidgetExporter::new(dir.path().join("widget")).unwrap();

        let mut p = person(1, "Sam", vec![log(1, 2026, 3, 10, 19)]);
        p.photo = Some(vec![1, 2, 3]);
        p.date_logs[0].coordinate = Some(Coordinate {
            latitude: -37.81,
            longitude: 144.96,
        });

        let written = exporter.sync(std::slice::from_ref(&p), now()).unwrap().unwrap();
        assert_eq!(written.person_name, "Sam");
        assert_eq!(written.display_text, "Sam - Mar 10, 2026 at 7:00 PM");
        assert_eq!(written.latitude, Some(-37.81));

        let read_back = exporter.read().unwrap().unwrap();
        assert_eq!(read_back, written);

        // past-only history removes the snapshot
        p.date_logs[0].date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert!(exporter.sync(std::slice::from_ref(&p), now()).unwrap().is_none());
        assert!(exporter.read().unwrap().is_none());
    }

    #[test]
    fn test_decode_without_has_data_defaults_true() {
        let raw = r#"{
            "person_name": "Sam",
            "upcoming_at": "2026-03-10T19:00:00",
            "location": "Cafe X",
            "display_text": "Sam - Mar 10, 2026 at 7:00 PM"
        }"#;
        let snapshot: WidgetSnapshot = serde_json::from_str(raw).unwrap();
        assert!(snapshot.has_data);
        assert!(snapshot.photo.is_none());
    }

    #[test]
    fn test_photo_encoded_as_base64() {
        let snapshot = WidgetSnapshot {
            person_name: "Sam".into(),
            upcoming_at: now(),
            location: "Cafe X".into(),
            display_text: "Sam".into(),
            has_data: true,
            photo: Some(vec![0xde, 0xad, 0xbe, 0xef]),
            latitude: None,
            longitude: None,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["photo"], "3q2+7w==");
    }
}
