//! Outcome Aggregation
//!
//! Accumulates completed work-unit outcomes for one investigation and
//! computes the final risk verdict when the stream ends. Holds no state
//! beyond the outcome sequence, so the verdict can be recomputed by
//! replaying the emitted completion events.

use serde::{Deserialize, Serialize};

/// Statuses that classify a completed unit as a warning
pub const WARNING_STATUSES: &[&str] = &["match", "alert", "high", "critical"];

/// Whether a unit status belongs to the warning set
pub fn is_warning_status(status: &str) -> bool {
    WARNING_STATUSES.contains(&status)
}

/// Aggregate risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// One completed work-unit outcome, appended exactly once per
/// successfully parsed, non-error result. Ordering is result-arrival
/// order, not declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutcomeRecord {
    /// Work-unit key ("sanctions", ...)
    pub work_key: String,
    /// Human-readable unit name
    pub display_name: String,
    /// Status reported by the unit
    pub status: String,
    /// Number of findings in the result
    pub finding_count: usize,
}

/// Final verdict for an investigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verdict {
    /// Sum of finding counts across all outcomes
    pub total_findings: usize,
    /// Number of units that completed with a parsed result
    pub units_completed: usize,
    /// Aggregate risk classification
    pub risk_level: RiskLevel,
    /// The outcome sequence the verdict was derived from
    pub results: Vec<OutcomeRecord>,
}

/// Accumulator for one investigation's outcomes
#[derive(Debug, Default)]
pub struct OutcomeAggregator {
    records: Vec<OutcomeRecord>,
}

impl OutcomeAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one completed outcome
    pub fn record(&mut self, record: OutcomeRecord) {
        self.records.push(record);
    }

    /// Number of recorded outcomes
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no outcomes have been recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Compute the verdict from all recorded outcomes.
    ///
    /// `high` if any outcome status is a warning status, else `medium`
    /// if there is at least one finding, else `low`.
    pub fn verdict(&self) -> Verdict {
        let total_findings: usize = self.records.iter().map(|r| r.finding_count).sum();
        let has_warning = self.records.iter().any(|r| is_warning_status(&r.status));

        let risk_level = if has_warning {
            RiskLevel::High
        } else if total_findings > 0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        Verdict {
            total_findings,
            units_completed: self.records.len(),
            risk_level,
            results: self.records.clone(),
        }
    }
}
