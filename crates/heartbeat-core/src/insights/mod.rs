//! Heuristic insight aggregators
//!
//! Two analyzers share one insight-record shape:
//!
//! - **Relationship aggregator** - consumes a person's full date history,
//!   computes derived statistics (timeline, inter-date intervals, frequency
//!   distributions), and maps each statistic bucket to one pre-authored
//!   insight via ordered threshold rules.
//! - **Per-date analyzer** - the same style of independent threshold rules
//!   over a single date log.
//!
//! Both are pure functions of their inputs plus an injected clock; absence of
//! data omits a rule's insight rather than producing an error. The artificial
//! "processing" delay the app shows is an optional async wrapper around the
//! pure computation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use heartbeat_core::insights::relationship;
//!
//! let now = chrono::Local::now().naive_local();
//! let insights = relationship::analyze(&person, now);
//! ```

pub mod date_log;
pub mod relationship;
pub mod stats;
pub mod types;

pub use relationship::ANALYSIS_DELAY;
pub use stats::RelationshipStats;
pub use types::{Insight, InsightCategory};
