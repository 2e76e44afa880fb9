//! Business registry search (simulated OpenCorporates lookup).

use serde_json::{json, Value};

use crate::result::CheckResult;

const TOOL_ID: &str = "business_registry";

struct Company {
    alias: &'static str,
    name: &'static str,
    jurisdiction: &'static str,
    company_number: &'static str,
    status: &'static str,
    incorporation_date: &'static str,
}

const SIMULATED_COMPANIES: &[Company] = &[
    Company {
        alias: "acme",
        name: "ACME CORPORATION LIMITED",
        jurisdiction: "gb",
        company_number: "01234567",
        status: "Active",
        incorporation_date: "1998-04-12",
    },
    Company {
        alias: "globex",
        name: "GLOBEX INTERNATIONAL HOLDINGS",
        jurisdiction: "us_de",
        company_number: "5550123",
        status: "Active",
        incorporation_date: "2004-09-30",
    },
    Company {
        alias: "initech",
        name: "INITECH SOFTWARE GMBH",
        jurisdiction: "de",
        company_number: "HRB 99123",
        status: "Dissolved",
        incorporation_date: "1996-02-19",
    },
];

fn search_simulated(entity: &str) -> Vec<Value> {
    let normalized = entity.to_lowercase();
    SIMULATED_COMPANIES
        .iter()
        .filter(|c| normalized.contains(c.alias))
        .map(|c| {
            json!({
                "name": c.name,
                "jurisdiction": c.jurisdiction,
                "company_number": c.company_number,
                "status": c.status,
                "incorporation_date": c.incorporation_date,
            })
        })
        .collect()
}

/// Search business registries for company information.
pub fn check(entity: &str) -> CheckResult {
    let findings = search_simulated(entity);

    if findings.is_empty() {
        return CheckResult::new(TOOL_ID, entity)
            .with_status("not_found")
            .with_confidence(70)
            .with_sources(&["OpenCorporates (simulated)"]);
    }

    CheckResult::new(TOOL_ID, entity)
        .with_status("found")
        .with_confidence(90)
        .with_findings(findings)
        .with_sources(&["OpenCorporates (simulated)"])
}
