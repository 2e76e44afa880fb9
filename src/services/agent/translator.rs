//! Event Translator
//!
//! The per-investigation state machine that turns raw agent messages into
//! lifecycle events. One translator exists per investigation and is fed
//! messages strictly sequentially; upstream parallelism is reconciled
//! purely through correlation ids.
//!
//! States: `AwaitingStream -> Streaming -> Completed` (terminal) or
//! `Streaming -> Failed` (terminal). No state is revisited; a new
//! investigation requires a new translator.

use serde_json::Value;

use crate::models::project::CheckInfo;

use super::aggregate::{is_warning_status, OutcomeAggregator, OutcomeRecord};
use super::correlate::{CorrelationTable, DuplicateCallPolicy};
use super::events::{
    error_excerpt, CompletionPayload, ErrorPayload, FailurePayload, InvestigationEvent, ResultType,
    TaskPayload, TracePayload, DEFAULT_CONFIDENCE,
};
use super::extract::extract_json_object;
use super::identify::WorkIdentifier;
use super::message::{classify, AgentMessage, ContentClass};

/// Translator lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorState {
    /// Created, no message seen yet
    AwaitingStream,
    /// Messages flowing
    Streaming,
    /// Stream exhausted normally, verdict emitted
    Completed,
    /// Upstream failure, error emitted
    Failed,
}

/// Per-investigation translation engine
#[derive(Debug)]
pub struct EventTranslator {
    investigation_id: String,
    units: Vec<CheckInfo>,
    identifier: WorkIdentifier,
    table: CorrelationTable,
    aggregator: OutcomeAggregator,
    state: TranslatorState,
}

impl EventTranslator {
    /// Create a translator for one investigation over the given units
    pub fn new(investigation_id: impl Into<String>, units: &[CheckInfo]) -> Self {
        Self::with_policy(investigation_id, units, DuplicateCallPolicy::default())
    }

    /// Create a translator with an explicit duplicate-call policy
    pub fn with_policy(
        investigation_id: impl Into<String>,
        units: &[CheckInfo],
        policy: DuplicateCallPolicy,
    ) -> Self {
        let keys: Vec<&str> = units.iter().map(|u| u.key.as_str()).collect();
        Self {
            investigation_id: investigation_id.into(),
            units: units.to_vec(),
            identifier: WorkIdentifier::new(keys.iter().copied()),
            table: CorrelationTable::new(keys, policy),
            aggregator: OutcomeAggregator::new(),
            state: TranslatorState::AwaitingStream,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> TranslatorState {
        self.state
    }

    /// The accumulated outcomes so far
    pub fn aggregator(&self) -> &OutcomeAggregator {
        &self.aggregator
    }

    /// Translate one upstream message into zero or more events.
    ///
    /// The raw message is always surfaced first as a trace event; derived
    /// events for its content items follow. Terminal translators ignore
    /// further messages.
    pub fn process_message(&mut self, message: &AgentMessage) -> Vec<InvestigationEvent> {
        match self.state {
            TranslatorState::AwaitingStream => self.state = TranslatorState::Streaming,
            TranslatorState::Streaming => {}
            TranslatorState::Completed | TranslatorState::Failed => return Vec::new(),
        }

        let mut events = vec![InvestigationEvent::Trace {
            investigation_id: self.investigation_id.clone(),
            payload: TracePayload {
                message: message.raw().clone(),
            },
        }];

        for item in message.content_items() {
            match classify(item) {
                ContentClass::Call { id, command } => {
                    if let Some(event) = self.handle_call(&id, &command) {
                        events.push(event);
                    }
                }
                ContentClass::ToolResult {
                    id,
                    content,
                    is_error,
                } => {
                    if let Some(event) = self.handle_result(&id, &content, is_error) {
                        events.push(event);
                    }
                }
                ContentClass::Unrecognized => {}
            }
        }

        events
    }

    /// End the stream normally: compute the verdict and go terminal.
    pub fn complete(&mut self) -> InvestigationEvent {
        self.state = TranslatorState::Completed;
        InvestigationEvent::InvestigationCompleted {
            investigation_id: self.investigation_id.clone(),
            payload: self.aggregator.verdict(),
        }
    }

    /// End the stream on an upstream failure. No verdict is computed.
    pub fn fail(&mut self, error: &str) -> InvestigationEvent {
        self.state = TranslatorState::Failed;
        InvestigationEvent::Error {
            investigation_id: self.investigation_id.clone(),
            payload: ErrorPayload {
                message: error.to_string(),
            },
        }
    }

    fn unit(&self, work_key: &str) -> Option<&CheckInfo> {
        self.units.iter().find(|u| u.key == work_key)
    }

    /// A call-like item: identify the check and record the invocation.
    /// Unidentifiable commands are silently ignored.
    fn handle_call(&mut self, correlation_id: &str, command: &str) -> Option<InvestigationEvent> {
        let work_key = self.identifier.identify(command)?.to_string();
        if !self.table.record_call(correlation_id, &work_key) {
            return None;
        }
        let unit = self.unit(&work_key)?;
        Some(InvestigationEvent::UnitStarted {
            investigation_id: self.investigation_id.clone(),
            unit_id: unit.id.clone(),
            payload: TaskPayload {
                task: format!("Running {}...", unit.name),
            },
        })
    }

    /// A result-like item: resolve the pending invocation and either
    /// report the failure or extract the outcome. Orphan results and
    /// unparseable payloads produce no event.
    fn handle_result(
        &mut self,
        correlation_id: &str,
        content: &str,
        is_error: bool,
    ) -> Option<InvestigationEvent> {
        let work_key = self.table.resolve_result(correlation_id)?;
        let unit = self.unit(&work_key)?.clone();

        if is_error {
            return Some(InvestigationEvent::UnitFailed {
                investigation_id: self.investigation_id.clone(),
                unit_id: unit.id,
                payload: FailurePayload {
                    error: error_excerpt(content),
                },
            });
        }

        let parsed = extract_json_object(content)?;
        let status = parsed
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        let findings = parsed
            .get("findings")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let confidence = parsed
            .get("confidence")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_CONFIDENCE);
        let warning = is_warning_status(&status);

        self.aggregator.record(OutcomeRecord {
            work_key,
            display_name: unit.name.clone(),
            status: status.clone(),
            finding_count: findings.len(),
        });

        Some(InvestigationEvent::UnitCompleted {
            investigation_id: self.investigation_id.clone(),
            unit_id: unit.id,
            payload: CompletionPayload {
                status,
                result_type: if warning {
                    ResultType::Warning
                } else {
                    ResultType::Success
                },
                findings,
                confidence,
            },
        })
    }
}
