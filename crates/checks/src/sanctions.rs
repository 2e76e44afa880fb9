//! Sanctions screening against OFAC SDN and UN lists (simulated).

use serde_json::{json, Value};

use crate::result::CheckResult;

const TOOL_ID: &str = "sanctions";

struct SanctionedEntity {
    alias: &'static str,
    name: &'static str,
    schema: &'static str,
    datasets: &'static [&'static str],
    score: u32,
}

const SIMULATED_SANCTIONS: &[SanctionedEntity] = &[
    SanctionedEntity {
        alias: "vladimir putin",
        name: "Vladimir Vladimirovich PUTIN",
        schema: "Person",
        datasets: &["us_ofac_sdn", "eu_fsf", "un_sc_sanctions"],
        score: 100,
    },
    SanctionedEntity {
        alias: "putin",
        name: "Vladimir Vladimirovich PUTIN",
        schema: "Person",
        datasets: &["us_ofac_sdn", "eu_fsf"],
        score: 100,
    },
    SanctionedEntity {
        alias: "kim jong un",
        name: "KIM Jong Un",
        schema: "Person",
        datasets: &["us_ofac_sdn", "un_sc_sanctions"],
        score: 100,
    },
    SanctionedEntity {
        alias: "sergei lavrov",
        name: "Sergei Viktorovich LAVROV",
        schema: "Person",
        datasets: &["us_ofac_sdn", "eu_fsf"],
        score: 100,
    },
    SanctionedEntity {
        alias: "ali khamenei",
        name: "Ali Hosseini KHAMENEI",
        schema: "Person",
        datasets: &["us_ofac_sdn", "un_sc_sanctions"],
        score: 100,
    },
];

fn normalize(name: &str) -> String {
    name.to_lowercase().trim().to_string()
}

fn search_simulated(entity: &str) -> Vec<Value> {
    let normalized = normalize(entity);
    for candidate in SIMULATED_SANCTIONS {
        if normalized.contains(candidate.alias) || candidate.alias.contains(normalized.as_str()) {
            return vec![json!({
                "name": candidate.name,
                "schema": candidate.schema,
                "datasets": candidate.datasets,
                "score": candidate.score,
            })];
        }
    }
    Vec::new()
}

/// Check an entity against sanctions databases.
pub fn check(entity: &str) -> CheckResult {
    eprintln!("[{}] Checking: {}", TOOL_ID, entity);

    let findings = search_simulated(entity);
    eprintln!("[{}] Found {} results", TOOL_ID, findings.len());

    if findings.is_empty() {
        return CheckResult::new(TOOL_ID, entity)
            .with_status("clear")
            .with_confidence(90)
            .with_sources(&["OpenSanctions (simulated)"]);
    }

    let max_score = findings
        .iter()
        .filter_map(|f| f.get("score").and_then(Value::as_u64))
        .max()
        .unwrap_or(0) as u32;
    let status = if max_score >= 80 {
        "match"
    } else if max_score >= 50 {
        "potential"
    } else {
        "clear"
    };

    CheckResult::new(TOOL_ID, entity)
        .with_status(status)
        .with_confidence(max_score)
        .with_findings(findings)
        .with_sources(&["OpenSanctions (simulated)"])
}
