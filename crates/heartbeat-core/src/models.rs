//! Domain models for Heartbeat
//!
//! A `Person` exclusively owns its `DateLog` list; deleting the person drops
//! the logs with it. Emotion entries, gifts, and touch moments are plain
//! owned values on the log, never shared between aggregates.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{base64::Base64, serde_as};

/// A partner being journaled about
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub phone_number: Option<String>,
    /// Raw photo bytes (base64 in the journal file)
    #[serde_as(as = "Option<Base64>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<u8>>,
    pub meeting_date: NaiveDate,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub date_logs: Vec<DateLog>,
}

impl Person {
    /// Logs in the future relative to `now`, soonest first
    pub fn upcoming_logs(&self, now: NaiveDateTime) -> Vec<&DateLog> {
        let mut logs: Vec<&DateLog> = self
            .date_logs
            .iter()
            .filter(|l| l.is_upcoming(now))
            .collect();
        logs.sort_by_key(|l| (l.starts_at(), l.id));
        logs
    }

    /// Logs at or before `now`, most recent first
    pub fn past_logs(&self, now: NaiveDateTime) -> Vec<&DateLog> {
        let mut logs: Vec<&DateLog> = self
            .date_logs
            .iter()
            .filter(|l| !l.is_upcoming(now))
            .collect();
        logs.sort_by_key(|l| std::cmp::Reverse((l.starts_at(), l.id)));
        logs
    }
}

/// Fields needed to create a person (id is assigned by the store)
#[derive(Debug, Clone)]
pub struct NewPerson {
    pub name: String,
    pub phone_number: Option<String>,
    pub photo: Option<Vec<u8>>,
    pub meeting_date: NaiveDate,
}

/// A geographic point attached to a date log
///
/// Latitude and longitude always travel together; a log either has a full
/// coordinate or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One recorded or planned outing with a partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateLog {
    pub id: i64,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub kind: DateKind,
    #[serde(default)]
    pub discussion_points: Vec<String>,
    #[serde(default)]
    pub emotions: Vec<EmotionEntry>,
    #[serde(default)]
    pub journal_entry: String,
    #[serde(default)]
    pub gifts: Vec<Gift>,
    #[serde(default)]
    pub touch_moments: Vec<TouchMoment>,
}

impl DateLog {
    /// Calendar date and time-of-day combined into one instant
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Whether this log occurs in the future. Derived at read time, never
    /// stored.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.starts_at() > now
    }
}

/// Fields needed to create a date log (id is assigned by the store)
#[derive(Debug, Clone)]
pub struct NewDateLog {
    pub location: String,
    pub coordinate: Option<Coordinate>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: DateKind,
    pub notes: String,
}

/// Classification of an outing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DateKind {
    Coffee,
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Museum,
    Walk,
    DogWalk,
    DinnerAtTheirs,
}

impl DateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Museum => "museum",
            Self::Walk => "walk",
            Self::DogWalk => "dog_walk",
            Self::DinnerAtTheirs => "dinner_at_theirs",
        }
    }

    /// Human-readable name for insight prose
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Coffee => "coffee date",
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Museum => "museum visit",
            Self::Walk => "walk",
            Self::DogWalk => "dog walk",
            Self::DinnerAtTheirs => "dinner at theirs",
        }
    }
}

impl std::str::FromStr for DateKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coffee" => Ok(Self::Coffee),
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "museum" | "gallery" => Ok(Self::Museum),
            "walk" => Ok(Self::Walk),
            "dog_walk" | "dogwalk" => Ok(Self::DogWalk),
            "dinner_at_theirs" => Ok(Self::DinnerAtTheirs),
            _ => Err(format!("Unknown date kind: {}", s)),
        }
    }
}

impl std::fmt::Display for DateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The 16 emotion kinds a date log can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionKind {
    Happy,
    Excited,
    Grateful,
    Loved,
    Peaceful,
    Content,
    Hopeful,
    Surprised,
    Sad,
    Lonely,
    Anxious,
    Nervous,
    Frustrated,
    Disappointed,
    Confused,
    Bored,
}

impl EmotionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Excited => "excited",
            Self::Grateful => "grateful",
            Self::Loved => "loved",
            Self::Peaceful => "peaceful",
            Self::Content => "content",
            Self::Hopeful => "hopeful",
            Self::Surprised => "surprised",
            Self::Sad => "sad",
            Self::Lonely => "lonely",
            Self::Anxious => "anxious",
            Self::Nervous => "nervous",
            Self::Frustrated => "frustrated",
            Self::Disappointed => "disappointed",
            Self::Confused => "confused",
            Self::Bored => "bored",
        }
    }

    /// Fixed 8-kind allowlist used by the relationship aggregator
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            Self::Happy
                | Self::Excited
                | Self::Grateful
                | Self::Loved
                | Self::Peaceful
                | Self::Content
                | Self::Hopeful
                | Self::Surprised
        )
    }
}

impl std::str::FromStr for EmotionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "excited" => Ok(Self::Excited),
            "grateful" => Ok(Self::Grateful),
            "loved" => Ok(Self::Loved),
            "peaceful" => Ok(Self::Peaceful),
            "content" => Ok(Self::Content),
            "hopeful" => Ok(Self::Hopeful),
            "surprised" => Ok(Self::Surprised),
            "sad" => Ok(Self::Sad),
            "lonely" => Ok(Self::Lonely),
            "anxious" => Ok(Self::Anxious),
            "nervous" => Ok(Self::Nervous),
            "frustrated" => Ok(Self::Frustrated),
            "disappointed" => Ok(Self::Disappointed),
            "confused" => Ok(Self::Confused),
            "bored" => Ok(Self::Bored),
            _ => Err(format!("Unknown emotion kind: {}", s)),
        }
    }
}

impl std::fmt::Display for EmotionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A logged feeling with a 1-5 self-rated intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionEntry {
    pub kind: EmotionKind,
    /// Always within 1..=5; clamped at construction and on decode
    #[serde(deserialize_with = "clamp_intensity")]
    pub intensity: u8,
}

impl EmotionEntry {
    /// Build an entry, clamping intensity into 1..=5
    pub fn new(kind: EmotionKind, intensity: i64) -> Self {
        Self {
            kind,
            intensity: intensity.clamp(1, 5) as u8,
        }
    }
}

fn clamp_intensity<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(1, 5) as u8)
}

/// Who gave a gift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftGiver {
    /// The journaling user
    Me,
    /// The partner
    Them,
}

impl GiftGiver {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Them => "them",
        }
    }
}

impl std::str::FromStr for GiftGiver {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "me" | "self" => Ok(Self::Me),
            "them" | "partner" => Ok(Self::Them),
            _ => Err(format!("Unknown gift giver: {}", s)),
        }
    }
}

impl std::fmt::Display for GiftGiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A gift exchanged on a date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gift {
    pub name: String,
    pub giver: GiftGiver,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The 8 physical-touch kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchKind {
    HandHolding,
    Hug,
    Kiss,
    Cuddle,
    ArmAround,
    HeadOnShoulder,
    BackRub,
    Footsie,
}

impl TouchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HandHolding => "hand_holding",
            Self::Hug => "hug",
            Self::Kiss => "kiss",
            Self::Cuddle => "cuddle",
            Self::ArmAround => "arm_around",
            Self::HeadOnShoulder => "head_on_shoulder",
            Self::BackRub => "back_rub",
            Self::Footsie => "footsie",
        }
    }

    /// Human-readable name for insight prose
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HandHolding => "hand holding",
            Self::Hug => "hugs",
            Self::Kiss => "kisses",
            Self::Cuddle => "cuddling",
            Self::ArmAround => "an arm around",
            Self::HeadOnShoulder => "head on shoulder",
            Self::BackRub => "back rubs",
            Self::Footsie => "footsie",
        }
    }
}

impl std::str::FromStr for TouchKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hand_holding" | "handholding" => Ok(Self::HandHolding),
            "hug" => Ok(Self::Hug),
            "kiss" => Ok(Self::Kiss),
            "cuddle" => Ok(Self::Cuddle),
            "arm_around" => Ok(Self::ArmAround),
            "head_on_shoulder" => Ok(Self::HeadOnShoulder),
            "back_rub" => Ok(Self::BackRub),
            "footsie" => Ok(Self::Footsie),
            _ => Err(format!("Unknown touch kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TouchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How long a touch moment lasted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TouchDuration {
    #[default]
    Brief,
    Medium,
    Long,
}

impl TouchDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl std::str::FromStr for TouchDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brief" => Ok(Self::Brief),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(format!("Unknown touch duration: {}", s)),
        }
    }
}

impl std::fmt::Display for TouchDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A physical-touch moment recorded on a date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TouchMoment {
    pub kind: TouchKind,
    #[serde(default)]
    pub duration: TouchDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}
