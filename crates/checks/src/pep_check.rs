//! Politically Exposed Person (PEP) screening (simulated).

use serde_json::{json, Value};

use crate::result::CheckResult;

const TOOL_ID: &str = "pep_check";

struct PepEntry {
    alias: &'static str,
    name: &'static str,
    position: &'static str,
    country: &'static str,
    pep_level: &'static str,
}

const SIMULATED_PEPS: &[PepEntry] = &[
    PepEntry {
        alias: "joe biden",
        name: "Joseph R. Biden Jr.",
        position: "President of the United States",
        country: "United States",
        pep_level: "high",
    },
    PepEntry {
        alias: "biden",
        name: "Joseph R. Biden Jr.",
        position: "President of the United States",
        country: "United States",
        pep_level: "high",
    },
    PepEntry {
        alias: "donald trump",
        name: "Donald J. Trump",
        position: "Former President of the United States",
        country: "United States",
        pep_level: "high",
    },
    PepEntry {
        alias: "vladimir putin",
        name: "Vladimir Putin",
        position: "President of Russia",
        country: "Russia",
        pep_level: "high",
    },
    PepEntry {
        alias: "rishi sunak",
        name: "Rishi Sunak",
        position: "Prime Minister of the United Kingdom",
        country: "United Kingdom",
        pep_level: "high",
    },
    PepEntry {
        alias: "emmanuel macron",
        name: "Emmanuel Macron",
        position: "President of France",
        country: "France",
        pep_level: "high",
    },
];

fn search_simulated(entity: &str) -> Vec<Value> {
    let normalized = entity.to_lowercase().trim().to_string();
    for entry in SIMULATED_PEPS {
        if normalized.contains(entry.alias) || entry.alias.contains(normalized.as_str()) {
            return vec![json!({
                "name": entry.name,
                "position": entry.position,
                "country": entry.country,
                "pep_level": entry.pep_level,
            })];
        }
    }
    Vec::new()
}

/// Screen an entity for PEP status.
pub fn check(entity: &str) -> CheckResult {
    eprintln!("[{}] Checking: {}", TOOL_ID, entity);

    let findings = search_simulated(entity);
    eprintln!("[{}] Found {} results", TOOL_ID, findings.len());

    if findings.is_empty() {
        return CheckResult::new(TOOL_ID, entity)
            .with_status("clear")
            .with_confidence(85)
            .with_sources(&["PEP Database (simulated)"]);
    }

    CheckResult::new(TOOL_ID, entity)
        .with_status("match")
        .with_confidence(95)
        .with_findings(findings)
        .with_sources(&["PEP Database (simulated)"])
}
