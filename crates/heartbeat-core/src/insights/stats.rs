//! Derived statistics for the relationship aggregator
//!
//! Everything here is recomputed fresh on each invocation; nothing is cached
//! between analyses. Frequency maps are BTreeMaps so tie-breaking between
//! equal counts is stable across runs.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::models::{DateKind, EmotionKind, GiftGiver, Person, TouchKind};

/// Flat statistics bundle computed from one person's full history
#[derive(Debug, Clone)]
pub struct RelationshipStats {
    pub person_name: String,
    pub days_together: i64,
    pub months_together: i64,
    pub total_dates: usize,
    /// Day gaps between consecutive logs sorted ascending by date
    /// (length = count - 1; empty if fewer than 2 logs)
    pub date_intervals: Vec<i64>,
    pub location_frequency: BTreeMap<String, usize>,
    /// Non-empty notes, one per documented log
    pub notes: Vec<String>,
    /// Hour-of-day of each log's time field
    pub time_patterns: Vec<u32>,
    /// Mean intensity per emotion kind across every log (not a count)
    pub emotion_frequency: BTreeMap<EmotionKind, f64>,
    pub given_gifts: usize,
    pub received_gifts: usize,
    pub touch_frequency: BTreeMap<TouchKind, usize>,
    pub discussion_points: Vec<String>,
    /// Non-empty journal entries
    pub journal_entries: Vec<String>,
    pub date_kind_frequency: BTreeMap<DateKind, usize>,
}

impl RelationshipStats {
    /// Aggregate a person's history relative to the injected `now`
    pub fn collect(person: &Person, now: NaiveDateTime) -> Self {
        let today = now.date();
        let days_together = (today - person.meeting_date).num_days();
        let months_together = whole_months_between(person.meeting_date, today);

        let mut dates: Vec<NaiveDate> = person.date_logs.iter().map(|l| l.date).collect();
        dates.sort();
        let date_intervals: Vec<i64> = dates
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).num_days())
            .collect();

        let mut location_frequency = BTreeMap::new();
        let mut date_kind_frequency = BTreeMap::new();
        let mut notes = Vec::new();
        let mut time_patterns = Vec::new();
        let mut discussion_points = Vec::new();
        let mut journal_entries = Vec::new();
        let mut given_gifts = 0;
        let mut received_gifts = 0;
        let mut touch_frequency = BTreeMap::new();
        let mut emotion_sums: BTreeMap<EmotionKind, (u64, usize)> = BTreeMap::new();

        for log in &person.date_logs {
            *location_frequency.entry(log.location.clone()).or_insert(0) += 1;
            *date_kind_frequency.entry(log.kind).or_insert(0) += 1;
            time_patterns.push(log.time.hour());

            if !log.notes.is_empty() {
                notes.push(log.notes.clone());
            }
            if !log.journal_entry.is_empty() {
                journal_entries.push(log.journal_entry.clone());
            }
            discussion_points.extend(log.discussion_points.iter().cloned());

            for gift in &log.gifts {
                match gift.giver {
                    GiftGiver::Me => given_gifts += 1,
                    GiftGiver::Them => received_gifts += 1,
                }
            }
            for touch in &log.touch_moments {
                *touch_frequency.entry(touch.kind).or_insert(0) += 1;
            }
            for emotion in &log.emotions {
                let slot = emotion_sums.entry(emotion.kind).or_insert((0, 0));
                slot.0 += emotion.intensity as u64;
                slot.1 += 1;
            }
        }

        let emotion_frequency = emotion_sums
            .into_iter()
            .map(|(kind, (sum, count))| (kind, sum as f64 / count.max(1) as f64))
            .collect();

        Self {
            person_name: person.name.clone(),
            days_together,
            months_together,
            total_dates: person.date_logs.len(),
            date_intervals,
            location_frequency,
            notes,
            time_patterns,
            emotion_frequency,
            given_gifts,
            received_gifts,
            touch_frequency,
            discussion_points,
            journal_entries,
            date_kind_frequency,
        }
    }
}

/// Whole calendar months elapsed from `start` to `end`
fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut months = (end.year() as i64 - start.year() as i64) * 12
        + (end.month() as i64 - start.month() as i64);
    if end.day() < start.day() {
        months -= 1;
    }
    months
}

/// Arithmetic mean of day gaps
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// Consistency score: 1 minus the coefficient of variation, clamped at 0.
///
/// Identical intervals score exactly 1.0. Day gaps are non-negative, so a
/// zero mean implies every gap is zero, which is the identical case.
pub fn consistency(intervals: &[i64]) -> f64 {
    if intervals.len() < 2 {
        return 1.0;
    }
    let avg = mean(intervals);
    if avg == 0.0 {
        return 1.0;
    }
    let variance = intervals
        .iter()
        .map(|&i| (i as f64 - avg).powi(2))
        .sum::<f64>()
        / intervals.len() as f64;
    (1.0 - variance.sqrt() / avg).max(0.0)
}
