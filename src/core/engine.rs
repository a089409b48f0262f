//! Firewall policy engine: the config operations over an injected store.
//!
//! Every mutation is one load-modify-save cycle performed under the engine's
//! write lock, so concurrent callers sharing an engine cannot lose updates.
//! Reads go straight to the store.

use std::sync::{Arc, Mutex};

use super::matcher::{MatchMode, UrlMatcher};
use super::policy::{self, FirewallConfig, FirewallUpdate, ListKind, Verdict};
use crate::error::AppError;
use crate::store::FirewallStore;

pub struct FirewallEngine<S> {
    store: S,
    matcher: Arc<dyn UrlMatcher>,
    matcher_name: String,
    write_lock: Mutex<()>,
}

impl<S: FirewallStore> FirewallEngine<S> {
    /// Engine using one of the built-in matching strategies.
    pub fn new(store: S, mode: MatchMode) -> Self {
        Self {
            store,
            matcher: Arc::new(mode),
            matcher_name: mode.as_str().to_string(),
            write_lock: Mutex::new(()),
        }
    }

    /// Engine using a caller-supplied matcher.
    pub fn with_matcher(store: S, name: impl Into<String>, matcher: Arc<dyn UrlMatcher>) -> Self {
        Self {
            store,
            matcher,
            matcher_name: name.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Name of the active matching strategy.
    pub fn matcher_name(&self) -> &str {
        &self.matcher_name
    }

    /// Current enabled flag and both lists.
    pub fn get_firewall(&self) -> Result<FirewallConfig, AppError> {
        self.load()
    }

    /// Merge the present fields of `update` into the stored config.
    pub fn update_firewall(&self, update: FirewallUpdate) -> Result<(), AppError> {
        let changed = self.mutate(|config| config.apply(update))?;
        if changed {
            tracing::info!("Firewall updated: {update:?}");
        }
        Ok(())
    }

    /// Flip the enabled flag in one locked cycle. Returns the new state.
    pub fn toggle_firewall(&self) -> Result<bool, AppError> {
        let mut enabled = false;
        self.mutate(|config| {
            config.enabled = !config.enabled;
            enabled = config.enabled;
            true
        })?;
        tracing::info!("Firewall {}", if enabled { "enabled" } else { "disabled" });
        Ok(enabled)
    }

    /// Add a domain to the allow list.
    pub fn add_to_allow_list(&self, domain: &str) -> Result<bool, AppError> {
        self.add_to_list(ListKind::Allow, domain)
    }

    /// Add a domain to the deny list.
    pub fn add_to_deny_list(&self, domain: &str) -> Result<bool, AppError> {
        self.add_to_list(ListKind::Deny, domain)
    }

    /// Remove an entry from the allow list.
    pub fn remove_from_allow_list(&self, domain: &str) -> Result<bool, AppError> {
        self.remove_from_list(ListKind::Allow, domain)
    }

    /// Remove an entry from the deny list.
    pub fn remove_from_deny_list(&self, domain: &str) -> Result<bool, AppError> {
        self.remove_from_list(ListKind::Deny, domain)
    }

    /// Add a domain to the given list. Returns `true` if the list changed.
    ///
    /// Empty input and already-present entries are silent no-ops.
    pub fn add_to_list(&self, kind: ListKind, domain: &str) -> Result<bool, AppError> {
        let added = self.mutate(|config| config.insert(kind, domain))?;
        if added {
            tracing::info!("Added '{}' to {kind} list", domain.trim());
        } else {
            tracing::debug!("Ignored add of '{domain}' to {kind} list (empty or present)");
        }
        Ok(added)
    }

    /// Remove an entry from the given list. Returns `true` if it was present.
    pub fn remove_from_list(&self, kind: ListKind, domain: &str) -> Result<bool, AppError> {
        let removed = self.mutate(|config| config.remove(kind, domain))?;
        if removed {
            tracing::info!("Removed '{}' from {kind} list", domain.trim());
        } else {
            tracing::debug!("'{domain}' not in {kind} list, nothing removed");
        }
        Ok(removed)
    }

    /// Decide whether `url` is permitted, with the deciding rule.
    pub fn evaluate(&self, url: &str) -> Result<Verdict, AppError> {
        let config = self.load()?;
        let verdict = policy::evaluate(&config, url, self.matcher.as_ref());
        tracing::debug!("Evaluated '{url}': {verdict:?}");
        Ok(verdict)
    }

    /// Whether `url` is permitted under the current lists.
    pub fn is_allowed(&self, url: &str) -> Result<bool, AppError> {
        Ok(self.evaluate(url)?.is_allowed())
    }

    fn load(&self) -> Result<FirewallConfig, AppError> {
        let (config, fixed) = self.store.load()?.sanitized();
        if fixed {
            tracing::warn!("Stored firewall lists contained unnormalized or duplicate entries");
        }
        Ok(config)
    }

    fn mutate<F>(&self, f: F) -> Result<bool, AppError>
    where
        F: FnOnce(&mut FirewallConfig) -> bool,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| AppError::Storage("firewall write lock poisoned".into()))?;
        let mut config = self.load()?;
        let changed = f(&mut config);
        if changed {
            self.store.save(&config)?;
        }
        Ok(changed)
    }
}
