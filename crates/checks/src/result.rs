//! Common check result record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Uniform result record produced by every check tool.
///
/// The investigation agent prints this as JSON on stdout; the server's
/// result extractor parses it back out of the agent's tool output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckResult {
    /// Unique result identifier
    pub id: String,
    /// Check key (e.g. "sanctions")
    pub tool: String,
    /// The entity or country that was screened
    pub entity: String,
    /// Outcome status ("clear", "match", "high", ...)
    pub status: String,
    /// Confidence score, 0-100
    pub confidence: u32,
    /// Structured findings, shape varies per check
    pub findings: Vec<Value>,
    /// Data sources consulted
    pub sources: Vec<String>,
}

impl CheckResult {
    /// Create a result with a fresh id and no findings yet
    pub fn new(tool: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tool: tool.into(),
            entity: entity.into(),
            status: "clear".to_string(),
            confidence: 0,
            findings: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the confidence score
    pub fn with_confidence(mut self, confidence: u32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set the findings list
    pub fn with_findings(mut self, findings: Vec<Value>) -> Self {
        self.findings = findings;
        self
    }

    /// Set the sources list
    pub fn with_sources(mut self, sources: &[&str]) -> Self {
        self.sources = sources.iter().map(|s| s.to_string()).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_builder() {
        let result = CheckResult::new("sanctions", "Acme Corp")
            .with_status("clear")
            .with_confidence(90)
            .with_sources(&["OpenSanctions (simulated)"]);

        assert_eq!(result.tool, "sanctions");
        assert_eq!(result.entity, "Acme Corp");
        assert_eq!(result.status, "clear");
        assert_eq!(result.confidence, 90);
        assert!(result.findings.is_empty());
        assert_eq!(result.sources, vec!["OpenSanctions (simulated)"]);
    }

    #[test]
    fn test_result_serialization_fields() {
        let result = CheckResult::new("pep_check", "Test Person");
        let json = serde_json::to_value(&result).unwrap();

        for field in ["id", "tool", "entity", "status", "confidence", "findings", "sources"] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = CheckResult::new("sanctions", "x");
        let b = CheckResult::new("sanctions", "x");
        assert_ne!(a.id, b.id);
    }
}
