//! Heartbeat Core Library
//!
//! Shared functionality for the Heartbeat relationship journal:
//! - Domain models for people, date logs, emotions, gifts, and touch moments
//! - JSON-file journal store of Person aggregates
//! - Heuristic insight aggregators (relationship-wide and per-date)
//! - Widget snapshot export for the next-date countdown

pub mod error;
pub mod insights;
pub mod models;
pub mod store;
pub mod widget;

pub use error::{Error, Result};
pub use insights::{Insight, InsightCategory, RelationshipStats, ANALYSIS_DELAY};
pub use models::{
    Coordinate, DateKind, DateLog, EmotionEntry, EmotionKind, Gift, GiftGiver, NewDateLog,
    NewPerson, Person, TouchDuration, TouchKind, TouchMoment,
};
pub use store::JournalStore;
pub use widget::{WidgetExporter, WidgetSnapshot, SNAPSHOT_FILENAME};
