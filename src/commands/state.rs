//! Shared application state handed to every command.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::core::FirewallEngine;
use crate::db::Database;
use crate::error::AppError;

/// Shared application state.
pub struct AppState {
    pub engine: Arc<FirewallEngine<Database>>,
}

impl AppState {
    pub fn new(engine: Arc<FirewallEngine<Database>>) -> Self {
        Self { engine }
    }

    /// Open the database named in `config` and build the engine over it.
    pub fn open(config: &EngineConfig) -> Result<Self, AppError> {
        let database = Database::open(&config.db_path)?;
        let engine = FirewallEngine::new(database, config.match_mode);
        tracing::info!("Firewall engine ready (match mode: {})", config.match_mode.as_str());
        Ok(Self::new(Arc::new(engine)))
    }

    /// State over a private in-memory database.
    pub fn in_memory(config: &EngineConfig) -> Result<Self, AppError> {
        let engine = FirewallEngine::new(Database::open_in_memory()?, config.match_mode);
        Ok(Self::new(Arc::new(engine)))
    }
}
