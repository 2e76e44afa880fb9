//! Project Models
//!
//! Data structures for screening projects (one project = one investigation
//! of one entity).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Externally visible project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Created, stream not yet opened
    #[default]
    Pending,
    /// Investigation stream in progress
    Running,
    /// Stream ended normally with a verdict
    Completed,
    /// Stream ended with an error
    Failed,
}

/// One selected check within a project, with its generated unit id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckInfo {
    /// Generated work-unit identifier (unique per project)
    pub id: String,
    /// Stable check key ("sanctions", "pep_check", ...)
    pub key: String,
    /// Human-readable display name
    pub name: String,
}

impl CheckInfo {
    /// Build check infos for the requested keys, skipping unknown ones.
    /// Each info gets a fresh unit id.
    pub fn build(keys: &[String]) -> Vec<CheckInfo> {
        keys.iter()
            .filter_map(|key| scolo_checks::descriptor(key))
            .map(|d| CheckInfo {
                id: Uuid::new_v4().to_string(),
                key: d.key.to_string(),
                name: d.name.to_string(),
            })
            .collect()
    }
}

/// A screening project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    pub id: String,
    /// Entity under investigation
    pub entity_name: String,
    /// Entity type ("company", "individual", ...)
    pub entity_type: String,
    /// Country of the entity, empty when unknown
    pub country: String,
    /// Checks selected for this project
    pub checks: Vec<CheckInfo>,
    /// Current status
    pub status: ProjectStatus,
    /// Creation timestamp (RFC 3339)
    pub started_at: String,
}

impl Project {
    /// Create a pending project with a fresh id
    pub fn new(entity_name: impl Into<String>, entity_type: impl Into<String>, country: impl Into<String>, checks: Vec<CheckInfo>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            entity_name: entity_name.into(),
            entity_type: entity_type.into(),
            country: country.into(),
            checks,
            status: ProjectStatus::Pending,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Request body for starting a project
#[derive(Debug, Clone, Deserialize)]
pub struct StartRequest {
    pub entity_name: String,
    #[serde(default = "default_entity_type")]
    pub entity_type: String,
    #[serde(default)]
    pub country: String,
    #[serde(default = "default_checks")]
    pub checks: Vec<String>,
}

fn default_entity_type() -> String {
    "company".to_string()
}

fn default_checks() -> Vec<String> {
    scolo_checks::DEFAULT_CHECKS
        .iter()
        .map(|k| k.to_string())
        .collect()
}

/// Response body for a started project
#[derive(Debug, Clone, Serialize)]
pub struct StartResponse {
    pub project_id: String,
    pub entity_name: String,
    pub entity_type: String,
    pub checks: Vec<CheckInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let checks = CheckInfo::build(&["sanctions".to_string()]);
        let project = Project::new("Acme Corp", "company", "gb", checks);
        assert_eq!(project.entity_name, "Acme Corp");
        assert_eq!(project.status, ProjectStatus::Pending);
        assert_eq!(project.checks.len(), 1);
        assert_eq!(project.checks[0].key, "sanctions");
        assert_eq!(project.checks[0].name, "Sanctions Check");
    }

    #[test]
    fn test_build_check_infos_skips_unknown_keys() {
        let keys = vec!["sanctions".to_string(), "made_up_check".to_string()];
        let infos = CheckInfo::build(&keys);
        assert_eq!(infos.len(), 1);
    }

    #[test]
    fn test_unit_ids_are_unique() {
        let keys = vec!["sanctions".to_string(), "pep_check".to_string()];
        let infos = CheckInfo::build(&keys);
        assert_ne!(infos[0].id, infos[1].id);
    }

    #[test]
    fn test_start_request_defaults() {
        let req: StartRequest = serde_json::from_str(r#"{"entity_name": "Acme"}"#).unwrap();
        assert_eq!(req.entity_type, "company");
        assert!(req.country.is_empty());
        assert_eq!(req.checks.len(), scolo_checks::DEFAULT_CHECKS.len());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ProjectStatus::Running).unwrap();
        assert_eq!(json, "\"running\"");
    }
}
