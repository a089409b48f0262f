//! Allow/deny list firewall for browser automation.
//!
//! The settings page edits two lists of domains and an enabled flag; request
//! interception asks [`FirewallEngine::is_allowed`] before acting on a URL.
//! Deny entries always win, an empty allow list allows everything that is not
//! denied, and a disabled firewall allows everything.

pub mod commands;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod store;

pub use commands::{AppState, FirewallView};
pub use config::EngineConfig;
pub use crate::core::{
    evaluate, AllowReason, DenyReason, FirewallConfig, FirewallEngine, FirewallUpdate, ListKind,
    MatchMode, UrlMatcher, Verdict,
};
pub use db::Database;
pub use error::AppError;
pub use store::{FirewallStore, MemoryStore};

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG`, falling back to [`config::DEFAULT_LOG_FILTER`]. Calling
/// it again after a subscriber is set does nothing.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .try_init();
}
