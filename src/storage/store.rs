//! Project Store
//!
//! In-memory project bookkeeping with a create/get/update interface.
//! An explicit store object owned by `AppState` and passed by reference,
//! never ambient global state.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::project::{Project, ProjectStatus};

/// Thread-safe in-memory project store
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Arc<RwLock<HashMap<String, Project>>>,
}

impl ProjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a project, returning a clone of the stored value
    pub async fn create(&self, project: Project) -> Project {
        let mut projects = self.projects.write().await;
        projects.insert(project.id.clone(), project.clone());
        project
    }

    /// Get a project by id
    pub async fn get(&self, project_id: &str) -> Option<Project> {
        let projects = self.projects.read().await;
        projects.get(project_id).cloned()
    }

    /// Update a project's status; returns the updated project, or `None`
    /// if the project does not exist
    pub async fn update_status(&self, project_id: &str, status: ProjectStatus) -> Option<Project> {
        let mut projects = self.projects.write().await;
        let project = projects.get_mut(project_id)?;
        project.status = status;
        Some(project.clone())
    }

    /// Check whether a project exists
    pub async fn exists(&self, project_id: &str) -> bool {
        let projects = self.projects.read().await;
        projects.contains_key(project_id)
    }
}
