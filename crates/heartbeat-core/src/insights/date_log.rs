//! Per-date insight analyzer
//!
//! Near-duplicate of the relationship aggregator, scoped to a single date
//! log: the same independent threshold-rule style over that date's emotions,
//! discussion points, touch moments, gifts, and journal entry.

use crate::models::{DateLog, EmotionKind, GiftGiver, TouchKind};

use super::relationship::ANALYSIS_DELAY;
use super::types::{Insight, InsightCategory};

/// Analyze one date log. Pure; never fails.
pub fn analyze(log: &DateLog) -> Vec<Insight> {
    let mut insights = Vec::new();

    if !log.emotions.is_empty() {
        insights.push(emotion_analysis(log));
    }
    if !log.discussion_points.is_empty() {
        insights.push(discussion_quality(log));
    }
    if !log.touch_moments.is_empty() {
        insights.push(touch_analysis(log));
    }
    if !log.gifts.is_empty() {
        insights.push(gift_analysis(log));
    }
    if !log.journal_entry.is_empty() {
        insights.push(journal_sentiment(log));
    }
    insights.push(overall_quality(log));
    insights.push(relationship_growth());

    tracing::debug!(log_id = log.id, count = insights.len(), "date analysis complete");
    insights
}

/// `analyze` preceded by the same artificial delay the relationship
/// aggregator uses; cancel by dropping the future.
pub async fn analyze_after_delay(log: &DateLog) -> Vec<Insight> {
    tokio::time::sleep(ANALYSIS_DELAY).await;
    analyze(log)
}

/// The per-date positive list deliberately omits `surprised`, unlike the
/// relationship aggregator's 8-kind allowlist.
const POSITIVE_KINDS: [EmotionKind; 7] = [
    EmotionKind::Happy,
    EmotionKind::Excited,
    EmotionKind::Grateful,
    EmotionKind::Loved,
    EmotionKind::Peaceful,
    EmotionKind::Content,
    EmotionKind::Hopeful,
];

fn emotion_analysis(log: &DateLog) -> Insight {
    let count = log.emotions.len();
    let average = log
        .emotions
        .iter()
        .map(|e| e.intensity as usize)
        .sum::<usize>()
        / count;
    let dominant = log
        .emotions
        .iter()
        .take(3)
        .map(|e| e.kind.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let positive = log
        .emotions
        .iter()
        .filter(|e| POSITIVE_KINDS.contains(&e.kind))
        .count();

    let description = if positive > count / 2 {
        format!(
            "This date generated predominantly positive emotions. You felt {} with an \
             average intensity of {}/5. This suggests strong emotional connection and \
             enjoyment.",
            dominant, average
        )
    } else {
        format!(
            "This date had mixed emotional responses. Key feelings included {}. Consider \
             what might have contributed to less positive emotions.",
            dominant
        )
    };

    Insight::new(
        InsightCategory::Emotional,
        "heart.circle",
        "Emotional Analysis",
        description,
        (average * 2).min(10) as u8,
    )
}

fn discussion_quality(log: &DateLog) -> Insight {
    let count = log.discussion_points.len();

    let description = if count >= 5 {
        format!(
            "Excellent conversation depth! You discussed {} different topics, showing \
             strong communication and mutual interest. High variety in conversation topics \
             indicates good compatibility.",
            count
        )
    } else if count >= 3 {
        format!(
            "Good conversation flow with {} discussion points. This shows healthy \
             communication, though there's room for deeper exploration of topics.",
            count
        )
    } else {
        format!(
            "Limited discussion points ({}) recorded. Consider whether conversation flowed \
             naturally or if there might be opportunities for deeper connection.",
            count
        )
    };

    Insight::new(
        InsightCategory::Communication,
        "bubble.left.and.bubble.right",
        "Communication Quality",
        description,
        (count * 2).min(10) as u8,
    )
}

fn touch_analysis(log: &DateLog) -> Insight {
    let count = log.touch_moments.len();
    let has = |kinds: &[TouchKind]| log.touch_moments.iter().any(|t| kinds.contains(&t.kind));

    let level = if has(&[TouchKind::Kiss, TouchKind::Cuddle]) {
        "High"
    } else if has(&[TouchKind::Hug, TouchKind::HandHolding]) {
        "Medium"
    } else {
        "Low"
    };

    Insight::new(
        InsightCategory::Intimacy,
        "hands.sparkles",
        "Physical Intimacy",
        format!(
            "Physical intimacy level: {}. You recorded {} physical touch moments, \
             indicating {} physical comfort and connection. Physical touch is an important \
             bonding mechanism in relationships.",
            level,
            count,
            level.to_lowercase()
        ),
        (count * 3).min(10) as u8,
    )
}

fn gift_analysis(log: &DateLog) -> Insight {
    let total = log.gifts.len();
    let given = log
        .gifts
        .iter()
        .filter(|g| g.giver == GiftGiver::Me)
        .count();
    let received = total - given;

    let closing = if given > 0 && received > 0 {
        "Mutual gift-giving shows thoughtfulness from both parties."
    } else if given > 0 {
        "Your thoughtfulness in giving gifts shows care and consideration."
    } else {
        "Receiving gifts indicates their thoughtfulness towards you."
    };

    Insight::new(
        InsightCategory::Thoughtfulness,
        "gift",
        "Thoughtfulness",
        format!(
            "Gift exchange: {} total ({} given, {} received). {}",
            total, given, received, closing
        ),
        (total * 3).min(10) as u8,
    )
}

/// Keywords counted for journal sentiment
const POSITIVE_JOURNAL_WORDS: [&str; 9] = [
    "great",
    "amazing",
    "wonderful",
    "perfect",
    "love",
    "happy",
    "fun",
    "enjoyed",
    "beautiful",
];

fn journal_sentiment(log: &DateLog) -> Insight {
    let word_count = log.journal_entry.split_whitespace().count();
    let lower = log.journal_entry.to_lowercase();
    let positive = POSITIVE_JOURNAL_WORDS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();

    let sentiment = if positive > 3 {
        "Very Positive"
    } else if positive > 1 {
        "Positive"
    } else {
        "Neutral"
    };

    let closing = if word_count > 50 {
        "Detailed journaling indicates significant emotional impact."
    } else {
        "Consider writing more detailed entries to capture memories better."
    };

    Insight::new(
        InsightCategory::Reflection,
        "book",
        "Personal Reflection",
        format!(
            "Journal sentiment: {}. Your {}-word entry reveals {} feelings about this \
             date. {}",
            sentiment,
            word_count,
            sentiment.to_lowercase(),
            closing
        ),
        (word_count / 10 + positive * 2).min(10) as u8,
    )
}

fn overall_quality(log: &DateLog) -> Insight {
    let completeness = [
        !log.emotions.is_empty(),
        !log.discussion_points.is_empty(),
        !log.journal_entry.is_empty(),
        !log.touch_moments.is_empty(),
    ]
    .iter()
    .filter(|&&b| b)
    .count();

    let description = match completeness {
        4 => {
            "Comprehensive date documentation! You've captured emotions, conversations, \
             physical moments, and personal reflections. This suggests a well-rounded, \
             meaningful experience."
        }
        3 => {
            "Well-documented date with good detail across multiple dimensions. This \
             indicates a quality time together with meaningful connection."
        }
        2 => {
            "Moderate documentation. Consider capturing more aspects of your dates to \
             build richer memories and insights over time."
        }
        _ => {
            "Limited documentation. Recording more details about your dates can help you \
             understand patterns and growth in your relationship."
        }
    };

    Insight::new(
        InsightCategory::Overall,
        "star.circle",
        "Date Quality Score",
        description,
        (completeness * 2 + 2) as u8,
    )
}

fn relationship_growth() -> Insight {
    Insight::new(
        InsightCategory::Growth,
        "arrow.up.heart",
        "Relationship Growth",
        "Based on the richness of this date experience, your relationship shows signs of \
         healthy development. The variety of emotional, physical, and intellectual \
         connections suggests growing intimacy and compatibility.",
        8,
    )
}
