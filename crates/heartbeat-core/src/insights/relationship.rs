//! Relationship insight aggregator
//!
//! Consumes one person's full date history and maps derived statistics to
//! pre-authored insights via ordered threshold rules. Each rule is an
//! independent pure function over the stats bundle; insufficient data simply
//! omits that rule's insight. The aggregator never fails.

use std::time::Duration;

use chrono::NaiveDateTime;

use crate::models::Person;

use super::stats::{consistency, mean, RelationshipStats};
use super::types::{Insight, InsightCategory};

/// Pause used by `analyze_after_delay` to mirror the app's processing screen
pub const ANALYSIS_DELAY: Duration = Duration::from_secs(2);

/// Run every rule over the person's history
///
/// Pure function of its inputs: re-running on unchanged input yields
/// identical output. Rule order is fixed.
pub fn analyze(person: &Person, now: NaiveDateTime) -> Vec<Insight> {
    let stats = RelationshipStats::collect(person, now);
    let mut insights = Vec::new();

    insights.push(timeline_tier(&stats));
    insights.extend(emotional_connection(&stats));
    insights.extend(dating_pattern(&stats));
    insights.extend(location_pattern(&stats));
    insights.extend(time_preference(&stats));
    insights.extend(gift_exchange(&stats));
    insights.extend(physical_intimacy(&stats));
    insights.extend(date_kind_preference(&stats));
    insights.push(momentum(&stats));
    insights.extend(memories(&stats));
    insights.push(recommendation(&stats));

    tracing::debug!(
        person = %stats.person_name,
        count = insights.len(),
        "relationship analysis complete"
    );
    insights
}

/// `analyze` preceded by a fixed artificial delay
///
/// The delay is UX theater, not computation; cancel it by dropping the
/// future. Results are identical to the synchronous entry point.
pub async fn analyze_after_delay(person: &Person, now: NaiveDateTime) -> Vec<Insight> {
    tokio::time::sleep(ANALYSIS_DELAY).await;
    analyze(person, now)
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

fn percent(part: usize, whole: usize) -> i64 {
    ((part as f64 / whole as f64) * 100.0).round() as i64
}

fn timeline_tier(stats: &RelationshipStats) -> Insight {
    let months = stats.months_together;
    if months >= 12 {
        let years = months / 12;
        let remaining = months % 12;
        let mut span = format!("{} year{}", years, plural(years));
        if remaining > 0 {
            span.push_str(&format!(" and {} month{}", remaining, plural(remaining)));
        }
        Insight::new(
            InsightCategory::Timeline,
            "🎊",
            "Milestone Achievement",
            format!(
                "Your relationship has flourished for {}, with {} meaningful dates together. \
                 This demonstrates a strong foundation built on consistent quality time and \
                 shared experiences.",
                span, stats.total_dates
            ),
            10,
        )
    } else if months >= 6 {
        Insight::new(
            InsightCategory::Timeline,
            "💫",
            "Growing Connection",
            format!(
                "After {} months together, your relationship shows beautiful progression with \
                 {} dates. You've moved beyond the honeymoon phase into deeper understanding \
                 and connection.",
                months, stats.total_dates
            ),
            8,
        )
    } else if months >= 3 {
        Insight::new(
            InsightCategory::Timeline,
            "🌱",
            "Blossoming Romance",
            format!(
                "Your {}-month journey includes {} special moments together. This is a crucial \
                 period where you're truly getting to know each other's authentic selves.",
                months, stats.total_dates
            ),
            6,
        )
    } else {
        let weeks = (stats.days_together / 7).max(1);
        Insight::new(
            InsightCategory::Timeline,
            "✨",
            "Fresh Beginning",
            format!(
                "Your romance is {} week{} young with {} dates already. The excitement and \
                 discovery phase is in full swing—every moment together reveals something new.",
                weeks,
                plural(weeks),
                stats.total_dates
            ),
            4,
        )
    }
}

fn emotional_connection(stats: &RelationshipStats) -> Option<Insight> {
    // BTreeMap iteration keeps tie-breaking stable (first kind wins ties)
    let (top_kind, top_mean) = stats
        .emotion_frequency
        .iter()
        .fold(None, |best: Option<(_, f64)>, (kind, &avg)| match best {
            Some((_, best_avg)) if avg <= best_avg => best,
            _ => Some((kind, avg)),
        })?;

    let positive = stats
        .emotion_frequency
        .keys()
        .filter(|k| k.is_positive())
        .count();

    Some(Insight::new(
        InsightCategory::Emotional,
        "💕",
        "Emotional Signature",
        format!(
            "Your most frequent emotion with {} is {} (intensity: {}/5). This emotional \
             foundation shapes your connection—you feel genuinely good around each other. \
             Out of {} emotions logged, {} are positive, reflecting a nurturing relationship.",
            stats.person_name,
            top_kind,
            top_mean as i64,
            stats.emotion_frequency.len(),
            positive
        ),
        (top_mean * 2.0).round().min(10.0) as u8,
    ))
}

fn dating_pattern(stats: &RelationshipStats) -> Option<Insight> {
    if stats.date_intervals.len() < 2 {
        return None;
    }

    let avg = mean(&stats.date_intervals);
    let consistency = consistency(&stats.date_intervals);
    let score = (consistency * 10.0).round() as u8;

    if consistency > 0.8 && avg <= 7.0 {
        Some(Insight::new(
            InsightCategory::Rhythm,
            "📱",
            "Highly Connected",
            format!(
                "You see each other every {} days with remarkable consistency. This suggests \
                 strong mutual interest and prioritization of your relationship in both your \
                 lives.",
                avg as i64
            ),
            score,
        ))
    } else if consistency > 0.6 && avg <= 14.0 {
        Some(Insight::new(
            InsightCategory::Rhythm,
            "⚖️",
            "Balanced Rhythm",
            format!(
                "Your dating pattern of every {} days shows a healthy balance between \
                 togetherness and independence. This sustainable pace allows for both \
                 connection and personal growth.",
                avg as i64
            ),
            score,
        ))
    } else if avg > 21.0 {
        Some(Insight::new(
            InsightCategory::Rhythm,
            "🌙",
            "Quality Over Quantity",
            format!(
                "While you meet less frequently (every {} days), this suggests you both value \
                 meaningful, quality time together rather than casual encounters.",
                avg as i64
            ),
            score,
        ))
    } else {
        None
    }
}

fn location_pattern(stats: &RelationshipStats) -> Option<Insight> {
    let (favorite, &count) = stats
        .location_frequency
        .iter()
        .fold(None, |best: Option<(&String, &usize)>, (loc, n)| match best {
            Some((_, best_n)) if n <= best_n => best,
            _ => Some((loc, n)),
        })?;

    let unique = stats.location_frequency.len();

    if count > 2 {
        let percentage = percent(count, stats.total_dates);
        Some(Insight::new(
            InsightCategory::Places,
            "🗺️",
            "Special Place Discovered",
            format!(
                "You've returned to {} {} times ({}% of your dates). This location clearly \
                 holds special meaning—perhaps it's where you feel most comfortable being \
                 yourselves together.",
                favorite, count, percentage
            ),
            (percentage / 10) as u8,
        ))
    } else if unique >= 5 {
        Some(Insight::new(
            InsightCategory::Places,
            "🌍",
            "Adventure Seekers",
            format!(
                "You've explored {} different locations together, showing your shared love \
                 for new experiences and adventure. This variety keeps your relationship \
                 fresh and exciting.",
                unique
            ),
            unique.min(10) as u8,
        ))
    } else {
        None
    }
}

fn time_preference(stats: &RelationshipStats) -> Option<Insight> {
    if stats.time_patterns.is_empty() {
        return None;
    }

    let total = stats.time_patterns.len();
    let evening = stats.time_patterns.iter().filter(|&&h| h >= 17).count();
    let afternoon = stats
        .time_patterns
        .iter()
        .filter(|&&h| (12..17).contains(&h))
        .count();
    let morning = stats.time_patterns.iter().filter(|&&h| h < 12).count();

    let share = |n: usize| ((n as f64 / total as f64) * 10.0).round() as u8;

    // Morning wins ties with afternoon; the other two buckets require
    // strict dominance.
    if evening > afternoon && evening > morning {
        Some(Insight::new(
            InsightCategory::Timing,
            "🌆",
            "Evening Connection",
            "Most of your dates happen in the evening, creating intimate moments as the day \
             winds down. This suggests you both value deep conversation and romantic ambiance.",
            share(evening),
        ))
    } else if afternoon > morning && afternoon > evening {
        Some(Insight::new(
            InsightCategory::Timing,
            "☀️",
            "Afternoon Lovers",
            "You prefer afternoon dates, making the most of daylight hours together. This \
             indicates an active, optimistic relationship filled with energy and shared \
             activities.",
            share(afternoon),
        ))
    } else if morning > 0 && morning >= afternoon {
        Some(Insight::new(
            InsightCategory::Timing,
            "🌅",
            "Morning Partnership",
            "Your preference for morning dates is unique and special—starting days together \
             shows deep commitment and the desire to share life's fresh beginnings.",
            share(morning),
        ))
    } else {
        None
    }
}

fn gift_exchange(stats: &RelationshipStats) -> Option<Insight> {
    let total = stats.given_gifts + stats.received_gifts;
    if total == 0 {
        return None;
    }

    let score = (total * 2).min(10) as u8;

    if stats.given_gifts > stats.received_gifts {
        Some(Insight::new(
            InsightCategory::Thoughtfulness,
            "🎁",
            "Generous Spirit",
            format!(
                "You've given {} gifts while receiving {}. Your generosity demonstrates \
                 thoughtfulness and care—gift-giving is a beautiful love language you're \
                 using to show affection.",
                stats.given_gifts, stats.received_gifts
            ),
            score,
        ))
    } else if stats.received_gifts > stats.given_gifts {
        Some(Insight::new(
            InsightCategory::Thoughtfulness,
            "🎀",
            "Cherished & Appreciated",
            format!(
                "You've received {} gifts compared to giving {}. Your partner shows their \
                 affection through thoughtful gestures, demonstrating how valued you are in \
                 their life.",
                stats.received_gifts, stats.given_gifts
            ),
            score,
        ))
    } else {
        Some(Insight::new(
            InsightCategory::Thoughtfulness,
            "🎊",
            "Reciprocal Appreciation",
            format!(
                "You and {} have exchanged {} gifts equally. This balanced exchange shows \
                 mutual care and thoughtfulness—you both express love through meaningful \
                 presents.",
                stats.person_name, total
            ),
            score,
        ))
    }
}

fn physical_intimacy(stats: &RelationshipStats) -> Option<Insight> {
    let total: usize = stats.touch_frequency.values().sum();
    if total == 0 {
        return None;
    }

    let (top_kind, _) = stats
        .touch_frequency
        .iter()
        .fold(None, |best: Option<(_, &usize)>, (kind, n)| match best {
            Some((_, best_n)) if n <= best_n => best,
            _ => Some((kind, n)),
        })?;

    let per_date = total as f64 / stats.total_dates.max(1) as f64;

    Some(Insight::new(
        InsightCategory::Intimacy,
        "🤝",
        "Physical Connection",
        format!(
            "You've shared {} moments of physical intimacy across your dates. Your most \
             common form is {}, showing how you naturally express affection. With {:.1} \
             moments per date, you maintain a healthy physical connection.",
            total,
            top_kind.display_name(),
            per_date
        ),
        (per_date * 5.0).round().min(10.0) as u8,
    ))
}

fn date_kind_preference(stats: &RelationshipStats) -> Option<Insight> {
    let (top_kind, &count) = stats
        .date_kind_frequency
        .iter()
        .fold(None, |best: Option<(_, &usize)>, (kind, n)| match best {
            Some((_, best_n)) if n <= best_n => best,
            _ => Some((kind, n)),
        })?;

    let percentage = percent(count, stats.total_dates);

    Some(Insight::new(
        InsightCategory::Activity,
        "🎯",
        "Date Type Preference",
        format!(
            "{}% of your dates are {}s, showing this is your preferred way to spend time \
             together. This consistency suggests you've found the activities that bring out \
             the best in your connection.",
            percentage,
            top_kind.display_name()
        ),
        (percentage / 10) as u8,
    ))
}

fn momentum(stats: &RelationshipStats) -> Insight {
    if !stats.date_intervals.is_empty() {
        let overall = mean(&stats.date_intervals);
        let tail_start = stats.date_intervals.len().saturating_sub(3);
        let recent = mean(&stats.date_intervals[tail_start..]);

        if recent < overall * 0.7 {
            return Insight::new(
                InsightCategory::Momentum,
                "🚀",
                "Accelerating Bond",
                "Your recent dating frequency has increased significantly, indicating growing \
                 excitement and deeper connection. The relationship momentum is building \
                 beautifully.",
                9,
            );
        } else if recent > overall * 1.3 {
            return Insight::new(
                InsightCategory::Momentum,
                "🌊",
                "Natural Ebb",
                "Recent dates are spaced slightly further apart, which is natural as \
                 relationships mature. This often indicates growing comfort and security \
                 with each other.",
                5,
            );
        }
    }

    Insight::new(
        InsightCategory::Momentum,
        "💝",
        "Steady Foundation",
        "Your dating pattern shows consistent commitment and reliability. This steady \
         approach builds trust and demonstrates mutual respect for each other's time and \
         feelings.",
        7,
    )
}

/// Keywords counted for the joyful-memories branch
const POSITIVE_NOTE_WORDS: [&str; 10] = [
    "amazing",
    "wonderful",
    "great",
    "love",
    "perfect",
    "beautiful",
    "fun",
    "happy",
    "best",
    "incredible",
];

fn memories(stats: &RelationshipStats) -> Option<Insight> {
    if stats.notes.is_empty() {
        return None;
    }

    // Gate on the raw ratio; the rounded percentage is display-only
    let half_documented = stats.notes.len() * 2 >= stats.total_dates;
    let documented = percent(stats.notes.len(), stats.total_dates);
    let positive_hits: usize = stats
        .notes
        .iter()
        .map(|note| {
            let lower = note.to_lowercase();
            POSITIVE_NOTE_WORDS
                .iter()
                .filter(|w| lower.contains(*w))
                .count()
        })
        .sum();

    if half_documented {
        Some(Insight::new(
            InsightCategory::Memories,
            "📝",
            "Memory Keeper",
            format!(
                "You've documented {}% of your dates with notes, showing how much these \
                 moments mean to you. Your attention to preserving memories demonstrates \
                 deep care for your relationship's story.",
                documented
            ),
            (documented / 10) as u8,
        ))
    } else if positive_hits >= 3 {
        Some(Insight::new(
            InsightCategory::Memories,
            "😊",
            "Joyful Memories",
            "Your notes are filled with positive emotions and happy memories. This emotional \
             record shows a relationship built on joy, laughter, and genuine enjoyment of \
             each other's company.",
            (positive_hits * 2).min(10) as u8,
        ))
    } else {
        None
    }
}

fn recommendation(stats: &RelationshipStats) -> Insight {
    if stats.months_together < 3 && stats.total_dates >= 5 {
        Insight::new(
            InsightCategory::Recommendation,
            "💡",
            "Next Chapter Suggestion",
            "Consider planning a slightly longer date experience—perhaps a weekend afternoon \
             together. Your frequent early dates show strong connection; it's time to explore \
             deeper shared experiences.",
            6,
        )
    } else if stats.location_frequency.len() <= 2 && stats.total_dates >= 3 {
        Insight::new(
            InsightCategory::Recommendation,
            "🎯",
            "Exploration Opportunity",
            "Try exploring new locations together! You've established comfort in familiar \
             places—now's the perfect time to create fresh memories in different \
             environments.",
            6,
        )
    } else if stats.notes.len() < stats.total_dates / 2 {
        Insight::new(
            InsightCategory::Recommendation,
            "📱",
            "Memory Enhancement",
            "Consider adding more notes about your dates. These small details become precious \
             memories over time and help you both reflect on your beautiful journey together.",
            6,
        )
    } else {
        Insight::new(
            InsightCategory::Recommendation,
            "🌟",
            "Relationship Excellence",
            "Your dating patterns show exceptional thoughtfulness and care. Continue \
             nurturing this beautiful connection—you're building something truly special \
             together.",
            9,
        )
    }
}
