//! Audit Log
//!
//! Append-only JSONL audit trail, one file per investigation. Every raw
//! agent message, derived event, prompt, and error is appended in
//! arrival order, tagged with the investigation id and an RFC 3339
//! timestamp. Separate files keep concurrent investigations from
//! interleaving. Write failures surface as errors.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::utils::error::{AppError, AppResult};

/// What an audit entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditKind {
    /// The prompt sent to the agent
    Prompt,
    /// A raw message received from the agent
    AgentMessage,
    /// A derived lifecycle event
    Event,
    /// A failure observed while driving the investigation
    Error,
}

/// One audit record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: String,
    pub investigation_id: String,
    pub kind: AuditKind,
    pub data: Value,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn new(investigation_id: impl Into<String>, kind: AuditKind, data: Value) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            investigation_id: investigation_id.into(),
            kind,
            data,
        }
    }
}

/// Per-investigation JSONL audit sink
#[derive(Debug, Clone)]
pub struct AuditLog {
    log_dir: PathBuf,
}

impl AuditLog {
    /// Create a sink writing under `log_dir`. The directory is created
    /// on first append, not here.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    /// The directory this sink writes into
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Path of the log file for one investigation
    pub fn file_path(&self, investigation_id: &str) -> PathBuf {
        self.log_dir.join(format!("{}.jsonl", investigation_id))
    }

    /// Append one entry to its investigation's file
    pub async fn append(&self, entry: &AuditEntry) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.log_dir)
            .await
            .map_err(|e| AppError::audit(format!("Failed to create log directory: {}", e)))?;

        let line = serde_json::to_string(entry)?;
        let path = self.file_path(&entry.investigation_id);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| {
                AppError::audit(format!("Failed to open {}: {}", path.display(), e))
            })?;

        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        Ok(())
    }

    /// Convenience: stamp and append in one call
    pub async fn record(
        &self,
        investigation_id: &str,
        kind: AuditKind,
        data: Value,
    ) -> AppResult<()> {
        self.append(&AuditEntry::new(investigation_id, kind, data))
            .await
    }

    /// Read back all entries for one investigation, in append order.
    /// Returns an empty list when the file does not exist yet.
    pub async fn read_entries(&self, investigation_id: &str) -> AppResult<Vec<AuditEntry>> {
        let path = self.file_path(investigation_id);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::audit(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let mut entries = Vec::new();
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            entries.push(serde_json::from_str(line)?);
        }
        Ok(entries)
    }
}
