//! Centralized runtime constants and engine configuration for urlguard.
//!
//! Tunable defaults live here so they can be found and adjusted in a single
//! place rather than scattered across modules.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::MatchMode;
use crate::error::AppError;

/// File name of the SQLite database holding the firewall settings.
pub const DB_FILE_NAME: &str = "urlguard.db";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "urlguard=info,urlguard_lib=info";

/// Whether the firewall is active on first use, before anything is stored.
pub const DEFAULT_ENABLED: bool = true;

/// Settings for constructing the firewall engine and its backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
    /// How list entries are compared against URLs.
    pub match_mode: MatchMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_FILE_NAME),
            match_mode: MatchMode::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document. Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&content)
    }
}
