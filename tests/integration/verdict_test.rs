//! Verdict Rules and Replay
//!
//! The verdict must be a pure function of the completion events, so it
//! can be reconstructed by replaying them.

use scolo_server::models::project::CheckInfo;
use scolo_server::services::agent::aggregate::{
    OutcomeAggregator, OutcomeRecord, RiskLevel,
};
use scolo_server::services::agent::events::InvestigationEvent;
use scolo_server::services::agent::message::AgentMessage;
use scolo_server::services::agent::translator::EventTranslator;

fn call(id: &str, command: &str) -> AgentMessage {
    AgentMessage::new(serde_json::json!({
        "content": [{"name": "Bash", "id": id, "input": {"command": command}}]
    }))
}

fn result(id: &str, content: &str) -> AgentMessage {
    AgentMessage::new(serde_json::json!({
        "content": [{"tool_use_id": id, "content": content}]
    }))
}

#[test]
fn test_verdict_reconstructed_from_completion_events() {
    let checks = CheckInfo::build(&["sanctions".to_string(), "business_registry".to_string()]);
    let mut translator = EventTranslator::new("inv-1", &checks);

    let mut completions = Vec::new();
    let exchanges = [
        ("t1", "scolo-check sanctions \"Acme\"", r#"{"status": "match", "findings": [{"a": 1}, {"b": 2}]}"#),
        ("t2", "scolo-check business_registry \"Acme\"", r#"{"status": "found", "findings": [{"c": 3}]}"#),
    ];
    for (id, command, payload) in exchanges {
        translator.process_message(&call(id, command));
        for event in translator.process_message(&result(id, payload)) {
            if let InvestigationEvent::UnitCompleted { unit_id, payload, .. } = event {
                completions.push((unit_id, payload));
            }
        }
    }

    let verdict = match translator.complete() {
        InvestigationEvent::InvestigationCompleted { payload, .. } => payload,
        other => panic!("expected completion, got {:?}", other),
    };

    // Replay: rebuild the aggregator purely from the emitted events
    let mut replay = OutcomeAggregator::new();
    for (unit_id, payload) in &completions {
        let check = checks.iter().find(|c| &c.id == unit_id).unwrap();
        replay.record(OutcomeRecord {
            work_key: check.key.clone(),
            display_name: check.name.clone(),
            status: payload.status.clone(),
            finding_count: payload.findings.len(),
        });
    }

    assert_eq!(replay.verdict(), verdict);
    assert_eq!(verdict.total_findings, 3);
    assert_eq!(verdict.risk_level, RiskLevel::High);
}

#[test]
fn test_risk_tiers() {
    let record = |status: &str, findings: usize| OutcomeRecord {
        work_key: "sanctions".to_string(),
        display_name: "Sanctions Check".to_string(),
        status: status.to_string(),
        finding_count: findings,
    };

    let mut low = OutcomeAggregator::new();
    low.record(record("clear", 0));
    assert_eq!(low.verdict().risk_level, RiskLevel::Low);

    let mut medium = OutcomeAggregator::new();
    medium.record(record("found", 2));
    assert_eq!(medium.verdict().risk_level, RiskLevel::Medium);

    let mut high = OutcomeAggregator::new();
    high.record(record("found", 2));
    high.record(record("critical", 0));
    assert_eq!(high.verdict().risk_level, RiskLevel::High);
}

#[test]
fn test_failed_units_do_not_count() {
    let checks = CheckInfo::build(&["sanctions".to_string()]);
    let mut translator = EventTranslator::new("inv-2", &checks);

    translator.process_message(&call("t1", "scolo-check sanctions \"Acme\""));
    translator.process_message(&AgentMessage::new(serde_json::json!({
        "content": [{"tool_use_id": "t1", "content": "boom", "is_error": true}]
    })));

    let verdict = match translator.complete() {
        InvestigationEvent::InvestigationCompleted { payload, .. } => payload,
        other => panic!("expected completion, got {:?}", other),
    };
    assert_eq!(verdict.units_completed, 0);
    assert_eq!(verdict.risk_level, RiskLevel::Low);
}
