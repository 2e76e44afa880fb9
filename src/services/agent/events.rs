//! Investigation Lifecycle Events
//!
//! Typed events emitted while translating an agent stream. Each event
//! serializes to a single JSON record tagged by `type`, carrying the
//! investigation id, an optional work-unit id, and a structured payload —
//! the exact shape the SSE transport frames for the frontend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::aggregate::Verdict;

/// Maximum length of an error excerpt carried in a `unit_failed` event
pub const ERROR_EXCERPT_MAX: usize = 500;

/// Confidence assumed when a result payload carries none
pub const DEFAULT_CONFIDENCE: u64 = 80;

/// Success/warning classification of a completed unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    Success,
    Warning,
}

/// Raw trace payload: the unmodified upstream message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TracePayload {
    pub message: Value,
}

/// Payload of `investigation_started`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartedPayload {
    pub entity_name: String,
    pub entity_type: String,
}

/// Payload of `unit_started`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskPayload {
    pub task: String,
}

/// Payload of `unit_completed`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionPayload {
    pub status: String,
    #[serde(rename = "resultType")]
    pub result_type: ResultType,
    pub findings: Vec<Value>,
    pub confidence: u64,
}

/// Payload of `unit_failed`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailurePayload {
    pub error: String,
}

/// Payload of `error`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorPayload {
    pub message: String,
}

/// One lifecycle event for one investigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InvestigationEvent {
    /// Raw upstream message, surfaced for full-activity rendering
    Trace {
        investigation_id: String,
        payload: TracePayload,
    },
    /// Investigation accepted and streaming begun
    InvestigationStarted {
        investigation_id: String,
        payload: StartedPayload,
    },
    /// First call observed for a work unit
    UnitStarted {
        investigation_id: String,
        unit_id: String,
        payload: TaskPayload,
    },
    /// A unit's result arrived and parsed
    UnitCompleted {
        investigation_id: String,
        unit_id: String,
        payload: CompletionPayload,
    },
    /// A unit's result arrived flagged as an error
    UnitFailed {
        investigation_id: String,
        unit_id: String,
        payload: FailurePayload,
    },
    /// Stream ended normally; final verdict
    InvestigationCompleted {
        investigation_id: String,
        payload: Verdict,
    },
    /// Whole-stream failure; terminal
    Error {
        investigation_id: String,
        payload: ErrorPayload,
    },
}

impl InvestigationEvent {
    /// The investigation this event belongs to
    pub fn investigation_id(&self) -> &str {
        match self {
            Self::Trace { investigation_id, .. }
            | Self::InvestigationStarted { investigation_id, .. }
            | Self::UnitStarted { investigation_id, .. }
            | Self::UnitCompleted { investigation_id, .. }
            | Self::UnitFailed { investigation_id, .. }
            | Self::InvestigationCompleted { investigation_id, .. }
            | Self::Error { investigation_id, .. } => investigation_id,
        }
    }

    /// The `type` tag this event serializes with
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Trace { .. } => "trace",
            Self::InvestigationStarted { .. } => "investigation_started",
            Self::UnitStarted { .. } => "unit_started",
            Self::UnitCompleted { .. } => "unit_completed",
            Self::UnitFailed { .. } => "unit_failed",
            Self::InvestigationCompleted { .. } => "investigation_completed",
            Self::Error { .. } => "error",
        }
    }

    /// Whether this event ends the stream
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::InvestigationCompleted { .. } | Self::Error { .. }
        )
    }
}

/// Truncate an error message to the excerpt cap, on a character boundary
pub fn error_excerpt(message: &str) -> String {
    message.chars().take(ERROR_EXCERPT_MAX).collect()
}
