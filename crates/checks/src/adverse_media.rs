//! Adverse media screening via news search (simulated).

use serde_json::{json, Value};

use crate::result::CheckResult;

const TOOL_ID: &str = "adverse_media";

struct Article {
    alias: &'static str,
    title: &'static str,
    source: &'static str,
    date: &'static str,
    sentiment: &'static str,
    tone: f64,
}

// Stand-in for the GDELT article search; tone < -3 counts as negative.
const SIMULATED_ARTICLES: &[Article] = &[
    Article {
        alias: "wirecard",
        title: "Wirecard collapses after disclosing 1.9bn hole in accounts",
        source: "ft.com",
        date: "2020-06-25",
        sentiment: "negative",
        tone: -7.2,
    },
    Article {
        alias: "enron",
        title: "Enron files for bankruptcy amid accounting fraud scandal",
        source: "reuters.com",
        date: "2001-12-02",
        sentiment: "negative",
        tone: -8.5,
    },
    Article {
        alias: "theranos",
        title: "Theranos founder charged with massive fraud",
        source: "sec.gov",
        date: "2018-03-14",
        sentiment: "negative",
        tone: -6.8,
    },
];

fn search_simulated(entity: &str) -> Vec<Value> {
    let normalized = entity.to_lowercase();
    SIMULATED_ARTICLES
        .iter()
        .filter(|a| normalized.contains(a.alias))
        .map(|a| {
            json!({
                "title": a.title,
                "source": a.source,
                "date": a.date,
                "sentiment": a.sentiment,
                "tone": a.tone,
            })
        })
        .collect()
}

/// Search news sources for adverse media about an entity.
pub fn check(entity: &str) -> CheckResult {
    eprintln!("[{}] Checking: {}", TOOL_ID, entity);

    let findings = search_simulated(entity);
    eprintln!("[{}] Found {} results", TOOL_ID, findings.len());

    if findings.is_empty() {
        return CheckResult::new(TOOL_ID, entity)
            .with_status("clear")
            .with_confidence(85)
            .with_sources(&["GDELT Project (simulated)", "News APIs"]);
    }

    let has_adverse = findings
        .iter()
        .any(|f| f.get("sentiment").and_then(Value::as_str) == Some("negative"));

    CheckResult::new(TOOL_ID, entity)
        .with_status(if has_adverse { "alert" } else { "clear" })
        .with_confidence(80)
        .with_findings(findings)
        .with_sources(&["GDELT Project (simulated)"])
}
