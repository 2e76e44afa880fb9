//! Scolo Compliance Checks
//!
//! Simulated lookup tools for compliance screening. Each check takes an
//! entity (or country) string and produces a uniform JSON result record.
//! The `scolo-check` binary exposes them as shell commands so the
//! investigation agent can run them; the server crate uses the catalog to
//! know which checks exist and how they are invoked.

pub mod adverse_media;
pub mod business_registry;
pub mod geo_risk;
pub mod pep_check;
pub mod result;
pub mod sanctions;

pub use result::CheckResult;

/// Name of the runner binary the agent invokes
pub const RUNNER_BIN: &str = "scolo-check";

/// Static metadata for one check tool
#[derive(Debug, Clone, Copy)]
pub struct CheckDescriptor {
    /// Stable key used in commands and events
    pub key: &'static str,
    /// Human-readable display name
    pub name: &'static str,
    /// Frontend icon hint
    pub icon: &'static str,
}

/// All known checks, in registration order
pub const CATALOG: &[CheckDescriptor] = &[
    CheckDescriptor {
        key: "sanctions",
        name: "Sanctions Check",
        icon: "shield",
    },
    CheckDescriptor {
        key: "adverse_media",
        name: "Adverse Media",
        icon: "newspaper",
    },
    CheckDescriptor {
        key: "business_registry",
        name: "Business Registry",
        icon: "building",
    },
    CheckDescriptor {
        key: "pep_check",
        name: "PEP Screening",
        icon: "user",
    },
    CheckDescriptor {
        key: "geo_risk",
        name: "Geographic Risk",
        icon: "globe",
    },
];

/// Checks selected when a request does not name any
pub const DEFAULT_CHECKS: &[&str] = &["sanctions", "pep_check", "adverse_media", "geo_risk"];

/// Look up a check descriptor by key
pub fn descriptor(key: &str) -> Option<&'static CheckDescriptor> {
    CATALOG.iter().find(|d| d.key == key)
}

/// Run a check by key. `geo_risk` interprets the argument as a country,
/// everything else as an entity name. Returns `None` for unknown keys.
pub fn run(key: &str, arg: &str) -> Option<CheckResult> {
    match key {
        "sanctions" => Some(sanctions::check(arg)),
        "pep_check" => Some(pep_check::check(arg)),
        "adverse_media" => Some(adverse_media::check(arg)),
        "geo_risk" => Some(geo_risk::check(arg)),
        "business_registry" => Some(business_registry::check(arg)),
        _ => None,
    }
}
