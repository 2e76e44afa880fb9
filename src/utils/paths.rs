//! Cross-Platform Path Utilities
//!
//! Functions for resolving application directories across platforms.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Scolo data directory (~/.scolo/)
pub fn scolo_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".scolo"))
}

/// Get the default audit log directory (~/.scolo/logs/)
pub fn default_log_dir() -> AppResult<PathBuf> {
    Ok(scolo_dir()?.join("logs"))
}
