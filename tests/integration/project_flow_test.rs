//! Project Lifecycle Tests
//!
//! Project creation, the in-memory store, and investigation startup
//! behavior without a real agent.

use scolo_server::models::project::{CheckInfo, Project, ProjectStatus, StartRequest};
use scolo_server::services::agent::events::InvestigationEvent;
use scolo_server::services::agent::AgentConfig;
use scolo_server::services::agent::InvestigationService;
use scolo_server::services::audit::AuditLog;
use scolo_server::storage::ProjectStore;

#[test]
fn test_start_request_fills_defaults() {
    let request: StartRequest =
        serde_json::from_str(r#"{"entity_name": "Wirecard AG", "country": "de"}"#).unwrap();
    assert_eq!(request.entity_type, "company");
    assert_eq!(request.country, "de");
    assert_eq!(
        request.checks,
        scolo_checks::DEFAULT_CHECKS
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_project_status_lifecycle() {
    let store = ProjectStore::new();
    let checks = CheckInfo::build(&["sanctions".to_string()]);
    let project = store
        .create(Project::new("Acme Corp", "company", "", checks))
        .await;
    assert_eq!(project.status, ProjectStatus::Pending);

    store
        .update_status(&project.id, ProjectStatus::Running)
        .await
        .unwrap();
    let running = store.get(&project.id).await.unwrap();
    assert_eq!(running.status, ProjectStatus::Running);

    store
        .update_status(&project.id, ProjectStatus::Completed)
        .await
        .unwrap();
    let done = store.get(&project.id).await.unwrap();
    assert_eq!(done.status, ProjectStatus::Completed);
}

#[tokio::test]
async fn test_investigation_without_api_key_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let service = InvestigationService::new(
        AgentConfig {
            api_key: None,
            ..AgentConfig::default()
        },
        AuditLog::new(dir.path()),
    );

    let checks = CheckInfo::build(&["sanctions".to_string(), "pep_check".to_string()]);
    let project = Project::new("Acme Corp", "company", "", checks);
    let id = project.id.clone();

    let mut rx = service.stream(project);
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }

    // A single terminal error event, nothing else
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], InvestigationEvent::Error { .. }));
    assert_eq!(events[0].investigation_id(), id);
    assert!(events[0].is_terminal());
}

#[test]
fn test_prompt_lists_every_selected_check() {
    let checks = CheckInfo::build(&[
        "sanctions".to_string(),
        "adverse_media".to_string(),
        "business_registry".to_string(),
    ]);
    let project = Project::new("Globex Corporation", "company", "", checks);

    let prompt = InvestigationService::build_prompt(&project);
    assert!(prompt.contains(r#"scolo-check sanctions "Globex Corporation""#));
    assert!(prompt.contains(r#"scolo-check adverse_media "Globex Corporation""#));
    assert!(prompt.contains(r#"scolo-check business_registry "Globex Corporation""#));
}
