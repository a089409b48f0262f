//! Firewall commands: enable toggle, allow/deny list editing, URL checks.
//!
//! Mutations return the re-fetched view so the page never has to reconcile
//! optimistic state on its own.

use crate::core::{FirewallUpdate, Verdict};
use crate::error::AppError;

use super::logic::{build_view, parse_list_kind, FirewallView};
use super::state::AppState;

pub fn get_firewall(state: &AppState) -> Result<FirewallView, AppError> {
    let config = state.engine.get_firewall()?;
    Ok(build_view(config, state.engine.matcher_name()))
}

pub fn set_firewall_enabled(state: &AppState, enabled: bool) -> Result<FirewallView, AppError> {
    state.engine.update_firewall(FirewallUpdate {
        enabled: Some(enabled),
    })?;
    get_firewall(state)
}

pub fn toggle_firewall(state: &AppState) -> Result<FirewallView, AppError> {
    state.engine.toggle_firewall()?;
    get_firewall(state)
}

/// Add a domain or URL to the `"allow"` or `"deny"` list.
pub fn add_url(state: &AppState, list: &str, url: &str) -> Result<FirewallView, AppError> {
    let kind = parse_list_kind(list)?;
    state.engine.add_to_list(kind, url)?;
    get_firewall(state)
}

pub fn remove_url(state: &AppState, list: &str, url: &str) -> Result<FirewallView, AppError> {
    let kind = parse_list_kind(list)?;
    state.engine.remove_from_list(kind, url)?;
    get_firewall(state)
}

pub fn check_url(state: &AppState, url: &str) -> Result<Verdict, AppError> {
    let verdict = state.engine.evaluate(url)?;
    if !verdict.is_allowed() {
        tracing::info!("Blocked '{url}': {verdict:?}");
    }
    Ok(verdict)
}
