//! JSON-file journal store
//!
//! The whole journal is one Person-aggregate document on disk. No entity is
//! ever persisted outside its owning Person: deleting a person drops its
//! date logs, and date-log details (emotions, gifts, touch moments) live
//! inline on the log. Writes are atomic (temp file + rename) so a crashed
//! save never truncates the journal.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{
    DateKind, DateLog, EmotionEntry, Gift, NewDateLog, NewPerson, Person, TouchMoment,
};

fn first_id() -> i64 {
    1
}

#[derive(Debug, Serialize, Deserialize)]
struct Journal {
    #[serde(default = "first_id")]
    next_person_id: i64,
    #[serde(default = "first_id")]
    next_log_id: i64,
    #[serde(default)]
    people: Vec<Person>,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            next_person_id: 1,
            next_log_id: 1,
            people: vec![],
        }
    }
}

/// File-backed store for Person aggregates
pub struct JournalStore {
    path: PathBuf,
    journal: Journal,
}

impl JournalStore {
    /// Open (or initialize) a journal at `path`
    ///
    /// Creates the parent directory if needed. A missing file starts an
    /// empty journal; it is written on the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::Store(format!(
                        "Failed to create journal directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
                info!("Created journal directory: {}", parent.display());
            }
        }

        let journal = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            Journal::default()
        };

        debug!(path = %path.display(), people = journal.people.len(), "journal opened");
        Ok(Self { path, journal })
    }

    /// Default journal location under the platform data directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("heartbeat")
            .join("journal.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All people, archived included (widget sync wants everyone)
    pub fn people(&self) -> &[Person] {
        &self.journal.people
    }

    /// People filtered by archived flag
    pub fn list_people(&self, include_archived: bool) -> Vec<&Person> {
        self.journal
            .people
            .iter()
            .filter(|p| include_archived || !p.archived)
            .collect()
    }

    pub fn person(&self, id: i64) -> Result<&Person> {
        self.journal
            .people
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(format!("person {}", id)))
    }

    pub fn add_person(&mut self, new: NewPerson) -> Result<i64> {
        let id = self.journal.next_person_id;
        self.journal.next_person_id += 1;
        self.journal.people.push(Person {
            id,
            name: new.name,
            phone_number: new.phone_number,
            photo: new.photo,
            meeting_date: new.meeting_date,
            archived: false,
            date_logs: vec![],
        });
        self.save()?;
        info!(person_id = id, "person added");
        Ok(id)
    }

    pub fn set_archived(&mut self, id: i64, archived: bool) -> Result<()> {
        self.person_mut(id)?.archived = archived;
        self.save()
    }

    /// Remove a person and, with them, every owned date log
    pub fn delete_person(&mut self, id: i64) -> Result<()> {
        let before = self.journal.people.len();
        self.journal.people.retain(|p| p.id != id);
        if self.journal.people.len() == before {
            return Err(Error::NotFound(format!("person {}", id)));
        }
        self.save()?;
        info!(person_id = id, "person deleted");
        Ok(())
    }

    pub fn add_date_log(&mut self, person_id: i64, new: NewDateLog) -> Result<i64> {
        let id = self.journal.next_log_id;
        self.journal.next_log_id += 1;
        self.person_mut(person_id)?.date_logs.push(DateLog {
            id,
            location: new.location,
            coordinate: new.coordinate,
            date: new.date,
            time: new.time,
            notes: new.notes,
            kind: new.kind,
            discussion_points: vec![],
            emotions: vec![],
            journal_entry: String::new(),
            gifts: vec![],
            touch_moments: vec![],
        });
        self.save()?;
        info!(person_id, log_id = id, "date log added");
        Ok(id)
    }

    /// Update a date log's core fields; `None` leaves a field unchanged
    pub fn update_date_log(
        &mut self,
        person_id: i64,
        log_id: i64,
        location: Option<&str>,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        kind: Option<DateKind>,
    ) -> Result<()> {
        let log = self.log_mut(person_id, log_id)?;
        if let Some(location) = location {
            log.location = location.to_string();
        }
        if let Some(date) = date {
            log.date = date;
        }
        if let Some(time) = time {
            log.time = time;
        }
        if let Some(kind) = kind {
            log.kind = kind;
        }
        self.save()?;
        info!(person_id, log_id, "date log updated");
        Ok(())
    }

    pub fn remove_date_log(&mut self, person_id: i64, log_id: i64) -> Result<()> {
        let person = self.person_mut(person_id)?;
        let before = person.date_logs.len();
        person.date_logs.retain(|l| l.id != log_id);
        if person.date_logs.len() == before {
            return Err(Error::NotFound(format!("date log {}", log_id)));
        }
        self.save()
    }

    pub fn set_notes(&mut self, person_id: i64, log_id: i64, notes: &str) -> Result<()> {
        self.log_mut(person_id, log_id)?.notes = notes.to_string();
        self.save()
    }

    pub fn set_journal_entry(&mut self, person_id: i64, log_id: i64, text: &str) -> Result<()> {
        self.log_mut(person_id, log_id)?.journal_entry = text.to_string();
        self.save()
    }

    pub fn add_emotion(&mut self, person_id: i64, log_id: i64, entry: EmotionEntry) -> Result<()> {
        self.log_mut(person_id, log_id)?.emotions.push(entry);
        self.save()
    }

    pub fn add_gift(&mut self, person_id: i64, log_id: i64, gift: Gift) -> Result<()> {
        self.log_mut(person_id, log_id)?.gifts.push(gift);
        self.save()
    }

    pub fn add_touch_moment(
        &mut self,
        person_id: i64,
        log_id: i64,
        moment: TouchMoment,
    ) -> Result<()> {
        self.log_mut(person_id, log_id)?.touch_moments.push(moment);
        self.save()
    }

    pub fn add_discussion_point(
        &mut self,
        person_id: i64,
        log_id: i64,
        topic: &str,
    ) -> Result<()> {
        self.log_mut(person_id, log_id)?
            .discussion_points
            .push(topic.to_string());
        self.save()
    }

    pub fn date_log(&self, person_id: i64, log_id: i64) -> Result<&DateLog> {
        self.person(person_id)?
            .date_logs
            .iter()
            .find(|l| l.id == log_id)
            .ok_or_else(|| Error::NotFound(format!("date log {}", log_id)))
    }

    fn person_mut(&mut self, id: i64) -> Result<&mut Person> {
        self.journal
            .people
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(format!("person {}", id)))
    }

    fn log_mut(&mut self, person_id: i64, log_id: i64) -> Result<&mut DateLog> {
        self.person_mut(person_id)?
            .date_logs
            .iter_mut()
            .find(|l| l.id == log_id)
            .ok_or_else(|| Error::NotFound(format!("date log {}", log_id)))
    }

    /// Atomic write: serialize to a sibling temp file, then rename over the
    /// journal path.
    fn save(&self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.journal)?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.persist(&self.path)
            .map_err(|e| Error::Store(format!("Failed to persist journal: {}", e)))?;
        debug!(path = %self.path.display(), "journal saved");
        Ok(())
    }
}
