//! Stream Translation Scenarios
//!
//! Feeds realistic stream-json lines through the message parser and the
//! event translator, asserting on the derived event sequences.

use scolo_server::models::project::CheckInfo;
use scolo_server::services::agent::events::{InvestigationEvent, ResultType};
use scolo_server::services::agent::message::AgentMessage;
use scolo_server::services::agent::translator::EventTranslator;

fn checks() -> Vec<CheckInfo> {
    CheckInfo::build(&[
        "sanctions".to_string(),
        "pep_check".to_string(),
        "geo_risk".to_string(),
    ])
}

fn unit_id(checks: &[CheckInfo], key: &str) -> String {
    checks
        .iter()
        .find(|c| c.key == key)
        .map(|c| c.id.clone())
        .unwrap()
}

/// Feed raw stream lines to a translator, collecting derived events
/// (traces filtered out).
fn drive(translator: &mut EventTranslator, lines: &[String]) -> Vec<InvestigationEvent> {
    let mut events = Vec::new();
    for line in lines {
        let Some(message) = AgentMessage::from_json_line(line) else {
            continue;
        };
        events.extend(
            translator
                .process_message(&message)
                .into_iter()
                .filter(|e| !matches!(e, InvestigationEvent::Trace { .. })),
        );
    }
    events
}

fn call_line(id: &str, command: &str) -> String {
    serde_json::json!({
        "type": "assistant",
        "message": {
            "content": [
                {"type": "tool_use", "id": id, "name": "Bash", "input": {"command": command}}
            ]
        }
    })
    .to_string()
}

fn result_line(id: &str, content: &str, is_error: bool) -> String {
    serde_json::json!({
        "type": "user",
        "message": {
            "content": [
                {"type": "tool_result", "tool_use_id": id, "content": content, "is_error": is_error}
            ]
        }
    })
    .to_string()
}

#[test]
fn test_happy_path_parallel_checks() {
    let checks = checks();
    let mut translator = EventTranslator::new("inv-1", &checks);

    let lines = vec![
        r#"{"type": "system", "subtype": "init"}"#.to_string(),
        call_line("t1", r#"scolo-check sanctions "Acme Corp""#),
        call_line("t2", r#"scolo-check pep_check "Acme Corp""#),
        result_line(
            "t1",
            "[sanctions] Checking: Acme Corp\n{\"status\": \"clear\", \"confidence\": 90, \"findings\": []}",
            false,
        ),
        result_line("t2", r#"{"status": "clear", "findings": []}"#, false),
    ];

    let events = drive(&mut translator, &lines);
    let kinds: Vec<&str> = events.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec!["unit_started", "unit_started", "unit_completed", "unit_completed"]
    );

    match translator.complete() {
        InvestigationEvent::InvestigationCompleted { payload, .. } => {
            assert_eq!(payload.units_completed, 2);
            assert_eq!(payload.total_findings, 0);
        }
        other => panic!("expected completion, got {:?}", other),
    }
}

#[test]
fn test_out_of_order_results_attribute_correctly() {
    let checks = checks();
    let mut translator = EventTranslator::new("inv-2", &checks);

    let lines = vec![
        call_line("t1", r#"scolo-check sanctions "V. Putin""#),
        call_line("t2", r#"scolo-check geo_risk "ru""#),
        // geo_risk finishes first
        result_line("t2", r#"{"status": "high", "findings": [{"country": "russia"}]}"#, false),
        result_line("t1", r#"{"status": "match", "findings": [{"list": "OFAC"}]}"#, false),
    ];

    let events = drive(&mut translator, &lines);
    let completions: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            InvestigationEvent::UnitCompleted { unit_id, payload, .. } => {
                Some((unit_id.clone(), payload.clone()))
            }
            _ => None,
        })
        .collect();

    assert_eq!(completions.len(), 2);
    assert_eq!(completions[0].0, unit_id(&checks, "geo_risk"));
    assert_eq!(completions[1].0, unit_id(&checks, "sanctions"));
    assert!(completions
        .iter()
        .all(|(_, p)| p.result_type == ResultType::Warning));
}

#[test]
fn test_agent_retry_emits_one_start() {
    let checks = checks();
    let mut translator = EventTranslator::new("inv-3", &checks);

    let lines = vec![
        call_line("t1", r#"scolo-check sanctions "Acme""#),
        result_line("t1", "command timed out", true),
        // The agent retries the same check with a fresh id
        call_line("t2", r#"scolo-check sanctions "Acme""#),
        result_line("t2", r#"{"status": "clear", "findings": []}"#, false),
    ];

    let events = drive(&mut translator, &lines);
    let kinds: Vec<&str> = events.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec!["unit_started", "unit_failed", "unit_completed"]);
}

#[test]
fn test_orphan_and_unregistered_are_silent() {
    let checks = checks();
    let mut translator = EventTranslator::new("inv-4", &checks);

    let lines = vec![
        // Result with no matching call
        result_line("ghost", r#"{"status": "clear"}"#, false),
        // Check that was never selected for this investigation
        call_line("t1", r#"scolo-check adverse_media "Acme""#),
        result_line("t1", r#"{"status": "alert", "findings": [{}]}"#, false),
        // Ordinary shell activity
        call_line("t2", "ls -la"),
    ];

    let events = drive(&mut translator, &lines);
    assert!(events.is_empty());

    match translator.complete() {
        InvestigationEvent::InvestigationCompleted { payload, .. } => {
            assert_eq!(payload.units_completed, 0);
        }
        other => panic!("expected completion, got {:?}", other),
    }
}

#[test]
fn test_non_json_lines_are_skipped() {
    let checks = checks();
    let mut translator = EventTranslator::new("inv-5", &checks);

    let lines = vec![
        "".to_string(),
        "npm warn something".to_string(),
        call_line("t1", r#"scolo-check pep_check "J. Biden""#),
        result_line("t1", r#"{"status": "match", "findings": [{"name": "Joe Biden"}]}"#, false),
    ];

    let events = drive(&mut translator, &lines);
    assert_eq!(events.len(), 2);
    match &events[1] {
        InvestigationEvent::UnitCompleted { payload, .. } => {
            assert_eq!(payload.status, "match");
            assert_eq!(payload.findings.len(), 1);
        }
        other => panic!("expected UnitCompleted, got {:?}", other),
    }
}

#[test]
fn test_duplicate_result_line_is_idempotent() {
    let checks = checks();
    let mut translator = EventTranslator::new("inv-6", &checks);

    let result = result_line("t1", r#"{"status": "clear", "findings": []}"#, false);
    let lines = vec![
        call_line("t1", r#"scolo-check sanctions "Acme""#),
        result.clone(),
        result,
    ];

    let events = drive(&mut translator, &lines);
    let kinds: Vec<&str> = events.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec!["unit_started", "unit_completed"]);

    match translator.complete() {
        InvestigationEvent::InvestigationCompleted { payload, .. } => {
            assert_eq!(payload.units_completed, 1);
        }
        other => panic!("expected completion, got {:?}", other),
    }
}
