//! Backing store port for the firewall config, plus an in-memory store.

use std::sync::Mutex;

use crate::core::FirewallConfig;
use crate::error::AppError;

/// Durable home of the `FirewallConfig`.
///
/// `load` on a store that has never been written returns the default config.
pub trait FirewallStore: Send + Sync {
    fn load(&self) -> Result<FirewallConfig, AppError>;
    fn save(&self, config: &FirewallConfig) -> Result<(), AppError>;
}

/// Store that keeps the config in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    config: Mutex<FirewallConfig>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FirewallConfig) -> Self {
        Self {
            config: Mutex::new(config),
        }
    }
}

impl FirewallStore for MemoryStore {
    fn load(&self) -> Result<FirewallConfig, AppError> {
        let config = self
            .config
            .lock()
            .map_err(|_| AppError::Storage("memory store lock poisoned".into()))?;
        Ok(config.clone())
    }

    fn save(&self, config: &FirewallConfig) -> Result<(), AppError> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| AppError::Storage("memory store lock poisoned".into()))?;
        *current = config.clone();
        Ok(())
    }
}
