//! Geographic risk assessment from FATF listings and corruption indices.

use serde_json::json;

use crate::result::CheckResult;

const TOOL_ID: &str = "geo_risk";

struct CountryRisk {
    code: &'static str,
    name: &'static str,
    fatf: &'static str,
    cpi: Option<u32>,
    risk: &'static str,
}

const COUNTRY_RISK: &[CountryRisk] = &[
    CountryRisk { code: "af", name: "Afghanistan", fatf: "black", cpi: Some(16), risk: "critical" },
    CountryRisk { code: "ir", name: "Iran", fatf: "black", cpi: Some(24), risk: "critical" },
    CountryRisk { code: "kp", name: "North Korea", fatf: "black", cpi: Some(17), risk: "critical" },
    CountryRisk { code: "mm", name: "Myanmar", fatf: "grey", cpi: Some(23), risk: "high" },
    CountryRisk { code: "sy", name: "Syria", fatf: "black", cpi: Some(13), risk: "critical" },
    CountryRisk { code: "ru", name: "Russia", fatf: "grey", cpi: Some(26), risk: "high" },
    CountryRisk { code: "by", name: "Belarus", fatf: "grey", cpi: Some(39), risk: "high" },
    CountryRisk { code: "pa", name: "Panama", fatf: "grey", cpi: Some(36), risk: "medium" },
    CountryRisk { code: "ky", name: "Cayman Islands", fatf: "monitored", cpi: None, risk: "medium" },
    CountryRisk { code: "vg", name: "British Virgin Islands", fatf: "monitored", cpi: None, risk: "medium" },
    CountryRisk { code: "us", name: "United States", fatf: "compliant", cpi: Some(69), risk: "low" },
    CountryRisk { code: "gb", name: "United Kingdom", fatf: "compliant", cpi: Some(71), risk: "low" },
    CountryRisk { code: "de", name: "Germany", fatf: "compliant", cpi: Some(78), risk: "low" },
    CountryRisk { code: "ch", name: "Switzerland", fatf: "compliant", cpi: Some(82), risk: "low" },
    CountryRisk { code: "sg", name: "Singapore", fatf: "compliant", cpi: Some(83), risk: "low" },
];

const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("russia", "ru"),
    ("russian federation", "ru"),
    ("united states", "us"),
    ("usa", "us"),
    ("america", "us"),
    ("united kingdom", "gb"),
    ("uk", "gb"),
    ("britain", "gb"),
    ("england", "gb"),
    ("germany", "de"),
    ("deutschland", "de"),
    ("north korea", "kp"),
    ("dprk", "kp"),
    ("iran", "ir"),
    ("syria", "sy"),
    ("panama", "pa"),
    ("cayman islands", "ky"),
    ("caymans", "ky"),
    ("switzerland", "ch"),
    ("singapore", "sg"),
    ("afghanistan", "af"),
    ("myanmar", "mm"),
    ("burma", "mm"),
    ("belarus", "by"),
];

fn resolve_code(country: &str) -> String {
    let code = country.to_lowercase().trim().to_string();
    for (alias, resolved) in COUNTRY_ALIASES {
        if *alias == code {
            return resolved.to_string();
        }
    }
    code
}

/// Assess geographic risk for a country name or ISO code.
pub fn check(country: &str) -> CheckResult {
    let code = resolve_code(country);

    let Some(data) = COUNTRY_RISK.iter().find(|c| c.code == code) else {
        return CheckResult::new(TOOL_ID, country)
            .with_status("unknown")
            .with_confidence(50)
            .with_sources(&["FATF", "Transparency International"]);
    };

    CheckResult::new(TOOL_ID, country)
        .with_status(data.risk)
        .with_confidence(95)
        .with_findings(vec![json!({
            "country": data.name,
            "fatf_status": data.fatf,
            "corruption_index": data.cpi,
            "risk_level": data.risk,
        })])
        .with_sources(&["FATF", "Transparency International CPI"])
}
