//! Application State
//!
//! Shared state handed to every route handler. All fields are cheap to
//! clone; nothing here is ambient or global.

use std::path::PathBuf;

use crate::services::agent::{AgentConfig, InvestigationService};
use crate::services::audit::AuditLog;
use crate::storage::ProjectStore;
use crate::utils::paths;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// In-memory project registry
    pub store: ProjectStore,
    /// Investigation driver
    pub investigations: InvestigationService,
}

impl AppState {
    /// Build state from explicit parts
    pub fn new(config: AgentConfig, log_dir: PathBuf) -> Self {
        Self {
            store: ProjectStore::new(),
            investigations: InvestigationService::new(config, AuditLog::new(log_dir)),
        }
    }

    /// Build state from the environment: agent config from env vars,
    /// audit logs under `SCOLO_LOG_DIR` or the default location.
    pub fn from_env() -> Self {
        let log_dir = std::env::var("SCOLO_LOG_DIR")
            .map(PathBuf::from)
            .or_else(|_| paths::default_log_dir())
            .unwrap_or_else(|_| PathBuf::from("logs"));
        Self::new(AgentConfig::from_env(), log_dir)
    }
}
