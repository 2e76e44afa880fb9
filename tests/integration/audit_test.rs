//! Audit Trail Tests
//!
//! Ordering and per-investigation isolation of the JSONL audit sink.

use serde_json::json;

use scolo_server::services::audit::{AuditKind, AuditLog};

#[tokio::test]
async fn test_entries_keep_arrival_order() {
    let dir = tempfile::tempdir().unwrap();
    let log = AuditLog::new(dir.path());

    for n in 0..10 {
        log.record("inv-1", AuditKind::AgentMessage, json!({ "n": n }))
            .await
            .unwrap();
    }

    let entries = log.read_entries("inv-1").await.unwrap();
    assert_eq!(entries.len(), 10);
    for (n, entry) in entries.iter().enumerate() {
        assert_eq!(entry.data["n"], n as u64);
    }
}

#[tokio::test]
async fn test_concurrent_investigations_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let log = AuditLog::new(dir.path());

    let mut handles = Vec::new();
    for id in ["inv-a", "inv-b", "inv-c"] {
        let log = log.clone();
        handles.push(tokio::spawn(async move {
            for n in 0..20 {
                log.record(id, AuditKind::Event, json!({ "id": id, "n": n }))
                    .await
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    for id in ["inv-a", "inv-b", "inv-c"] {
        let entries = log.read_entries(id).await.unwrap();
        assert_eq!(entries.len(), 20);
        // No foreign entries leaked in, and order is preserved
        for (n, entry) in entries.iter().enumerate() {
            assert_eq!(entry.investigation_id, id);
            assert_eq!(entry.data["id"], id);
            assert_eq!(entry.data["n"], n as u64);
        }
    }
}

#[tokio::test]
async fn test_one_file_per_investigation() {
    let dir = tempfile::tempdir().unwrap();
    let log = AuditLog::new(dir.path());

    log.record("inv-x", AuditKind::Prompt, json!({"prompt": "p"}))
        .await
        .unwrap();

    assert!(log.file_path("inv-x").exists());
    assert!(!log.file_path("inv-y").exists());
}
