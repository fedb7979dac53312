//! Relationship and per-date analysis commands

use anyhow::Result;
use chrono::Local;
use heartbeat_core::insights::{date_log, relationship};
use heartbeat_core::{Insight, JournalStore};

/// Run the relationship analyzer for a partner
pub async fn cmd_insights(
    store: &JournalStore,
    person_id: i64,
    skip_delay: bool,
    json: bool,
) -> Result<()> {
    let person = store.person(person_id)?;
    let now = Local::now().naive_local();

    let insights = if skip_delay {
        relationship::analyze(person, now)
    } else {
        relationship::analyze_after_delay(person, now).await
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!();
    println!("💡 Relationship insights for {}", person.name);
    print_insights(&insights);
    Ok(())
}

/// Analyze a single date log
pub async fn cmd_date_insights(
    store: &JournalStore,
    person_id: i64,
    log_id: i64,
    skip_delay: bool,
    json: bool,
) -> Result<()> {
    let person = store.person(person_id)?;
    let log = store.date_log(person_id, log_id)?;

    let insights = if skip_delay {
        date_log::analyze(log)
    } else {
        date_log::analyze_after_delay(log).await
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!();
    println!(
        "💡 Date insights: {} at '{}' on {}",
        person.name, log.location, log.date
    );
    print_insights(&insights);
    Ok(())
}

fn print_insights(insights: &[Insight]) {
    println!("   ─────────────────────────────────────────────────────────────");
    for insight in insights {
        println!("   {} {}  {}", insight.icon, insight.title, score_bar(insight.score));
        println!("      [{}] {}", insight.category, insight.description);
        println!();
    }
}

/// Render a 0-10 score as filled and empty dots
fn score_bar(score: u8) -> String {
    let filled = usize::from(score.min(10));
    format!("{}{}", "●".repeat(filled), "○".repeat(10 - filled))
}
