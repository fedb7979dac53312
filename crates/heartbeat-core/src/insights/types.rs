//! Shared insight record produced by both analyzers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category tag for an insight
///
/// Closed set shared by the relationship aggregator and the per-date
/// analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    /// How long the relationship has run
    Timeline,
    /// Emotional connection and signature feelings
    Emotional,
    /// Cadence and consistency of dates
    Rhythm,
    /// Where dates happen
    Places,
    /// Time-of-day preference
    Timing,
    /// Gift exchange balance
    Thoughtfulness,
    /// Physical touch
    Intimacy,
    /// Preferred date kind
    Activity,
    /// Recent cadence vs overall
    Momentum,
    /// Notes and documented memories
    Memories,
    /// Suggested next step
    Recommendation,
    /// Conversation depth on a single date
    Communication,
    /// Journal sentiment on a single date
    Reflection,
    /// Documentation completeness of a single date
    Overall,
    /// Fixed relationship-growth note
    Growth,
}

impl InsightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Emotional => "emotional",
            Self::Rhythm => "rhythm",
            Self::Places => "places",
            Self::Timing => "timing",
            Self::Thoughtfulness => "thoughtfulness",
            Self::Intimacy => "intimacy",
            Self::Activity => "activity",
            Self::Momentum => "momentum",
            Self::Memories => "memories",
            Self::Recommendation => "recommendation",
            Self::Communication => "communication",
            Self::Reflection => "reflection",
            Self::Overall => "overall",
            Self::Growth => "growth",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timeline" => Ok(Self::Timeline),
            "emotional" => Ok(Self::Emotional),
            "rhythm" => Ok(Self::Rhythm),
            "places" => Ok(Self::Places),
            "timing" => Ok(Self::Timing),
            "thoughtfulness" => Ok(Self::Thoughtfulness),
            "intimacy" => Ok(Self::Intimacy),
            "activity" => Ok(Self::Activity),
            "momentum" => Ok(Self::Momentum),
            "memories" => Ok(Self::Memories),
            "recommendation" => Ok(Self::Recommendation),
            "communication" => Ok(Self::Communication),
            "reflection" => Ok(Self::Reflection),
            "overall" => Ok(Self::Overall),
            "growth" => Ok(Self::Growth),
            _ => Err(format!("Unknown insight category: {}", s)),
        }
    }
}

/// One templated natural-language observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    /// Short title (e.g. "Balanced Rhythm")
    pub title: String,
    /// Full prose body
    pub description: String,
    /// Heuristic quality score, always within 0..=10
    pub score: u8,
    /// Display icon (emoji or symbol name)
    pub icon: String,
}

impl Insight {
    /// Create an insight, capping the score at 10
    pub fn new(
        category: InsightCategory,
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        score: u8,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            description: description.into(),
            score: score.min(10),
            icon: icon.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for cat in [
            InsightCategory::Timeline,
            InsightCategory::Momentum,
            InsightCategory::Growth,
        ] {
            assert_eq!(cat.as_str().parse::<InsightCategory>().unwrap(), cat);
        }
        assert!("vibes".parse::<InsightCategory>().is_err());
    }

    #[test]
    fn test_score_capped() {
        let insight = Insight::new(InsightCategory::Overall, "star.circle", "T", "D", 14);
        assert_eq!(insight.score, 10);
    }

    #[test]
    fn test_serializes_snake_case() {
        let insight = Insight::new(InsightCategory::Thoughtfulness, "gift", "T", "D", 4);
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["category"], "thoughtfulness");
    }
}
