//! Firewall rule model: the persisted config and the pure decision function.
//!
//! Evaluation order:
//! 1. Firewall disabled: everything is allowed.
//! 2. Any deny entry matches: denied. Deny always wins.
//! 3. Allow list empty: allowed.
//! 4. Some allow entry matches: allowed, otherwise denied.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::matcher::UrlMatcher;
use super::normalize::{normalize_domain, normalize_url};
use crate::config;
use crate::error::AppError;

/// Enabled flag plus the allow and deny lists, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirewallConfig {
    pub enabled: bool,
    pub allow_list: Vec<String>,
    pub deny_list: Vec<String>,
}

impl Default for FirewallConfig {
    fn default() -> Self {
        Self {
            enabled: config::DEFAULT_ENABLED,
            allow_list: Vec::new(),
            deny_list: Vec::new(),
        }
    }
}

/// Partial update merged by `update_firewall`. Absent fields are unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallUpdate {
    pub enabled: Option<bool>,
}

/// Which of the two lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Allow,
    Deny,
}

impl ListKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Allow => "allow",
            ListKind::Deny => "deny",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "allow" => Ok(ListKind::Allow),
            "deny" => Ok(ListKind::Deny),
            other => Err(AppError::InvalidInput(format!(
                "unknown list '{other}', expected 'allow' or 'deny'"
            ))),
        }
    }
}

impl FirewallConfig {
    pub fn list(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::Allow => &self.allow_list,
            ListKind::Deny => &self.deny_list,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
        match kind {
            ListKind::Allow => &mut self.allow_list,
            ListKind::Deny => &mut self.deny_list,
        }
    }

    /// Set-add a normalized domain. Returns `true` if the list changed.
    ///
    /// Input that is empty after normalization is ignored.
    pub fn insert(&mut self, kind: ListKind, domain: &str) -> bool {
        let Some(domain) = normalize_domain(domain) else {
            return false;
        };
        let list = self.list_mut(kind);
        if list.iter().any(|e| e == domain) {
            return false;
        }
        list.push(domain.to_string());
        true
    }

    /// Remove the exact entry. Returns `true` if it was present.
    pub fn remove(&mut self, kind: ListKind, domain: &str) -> bool {
        let domain = domain.trim();
        let list = self.list_mut(kind);
        match list.iter().position(|e| e == domain) {
            Some(idx) => {
                list.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Merge a partial update. Returns `true` if anything changed.
    pub fn apply(&mut self, update: FirewallUpdate) -> bool {
        match update.enabled {
            Some(enabled) if enabled != self.enabled => {
                self.enabled = enabled;
                true
            }
            _ => false,
        }
    }

    /// Re-establish the list invariants on data read from a store.
    ///
    /// Entries are normalized, empties dropped, and duplicates removed keeping
    /// the first occurrence. Returns the cleaned config and whether anything
    /// had to be fixed.
    pub fn sanitized(self) -> (Self, bool) {
        let mut clean = FirewallConfig {
            enabled: self.enabled,
            allow_list: Vec::with_capacity(self.allow_list.len()),
            deny_list: Vec::with_capacity(self.deny_list.len()),
        };
        for entry in &self.allow_list {
            clean.insert(ListKind::Allow, entry);
        }
        for entry in &self.deny_list {
            clean.insert(ListKind::Deny, entry);
        }
        let changed = clean != self;
        (clean, changed)
    }
}

/// Why a URL was allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum AllowReason {
    FirewallDisabled,
    AllowListEmpty,
    AllowListMatch { entry: String },
}

/// Why a URL was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum DenyReason {
    DenyListMatch { entry: String },
    NotInAllowList,
}

/// Outcome of evaluating a URL, with the rule that decided it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "detail", rename_all = "camelCase")]
pub enum Verdict {
    Allowed(AllowReason),
    Denied(DenyReason),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed(_))
    }
}

/// Decide whether `url` is permitted under `config`.
pub fn evaluate(config: &FirewallConfig, url: &str, matcher: &dyn UrlMatcher) -> Verdict {
    if !config.enabled {
        return Verdict::Allowed(AllowReason::FirewallDisabled);
    }

    let url = normalize_url(url);

    if let Some(entry) = config.deny_list.iter().find(|e| matcher.matches(url, e)) {
        return Verdict::Denied(DenyReason::DenyListMatch {
            entry: entry.clone(),
        });
    }

    if config.allow_list.is_empty() {
        return Verdict::Allowed(AllowReason::AllowListEmpty);
    }

    match config.allow_list.iter().find(|e| matcher.matches(url, e)) {
        Some(entry) => Verdict::Allowed(AllowReason::AllowListMatch {
            entry: entry.clone(),
        }),
        None => Verdict::Denied(DenyReason::NotInAllowList),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchMode;

    fn make_config(enabled: bool, allow: &[&str], deny: &[&str]) -> FirewallConfig {
        FirewallConfig {
            enabled,
            allow_list: allow.iter().map(|s| s.to_string()).collect(),
            deny_list: deny.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn allowed(config: &FirewallConfig, url: &str) -> bool {
        evaluate(config, url, &MatchMode::Contains).is_allowed()
    }

    #[test]
    fn test_default_config_is_enabled_and_empty() {
        let config = FirewallConfig::default();
        assert!(config.enabled);
        assert!(config.allow_list.is_empty());
        assert!(config.deny_list.is_empty());
    }

    #[test]
    fn test_deny_entry_blocks_url_with_path() {
        let config = make_config(true, &[], &["bad.com"]);
        assert_eq!(
            evaluate(&config, "https://bad.com/page", &MatchMode::Contains),
            Verdict::Denied(DenyReason::DenyListMatch {
                entry: "bad.com".into()
            })
        );
    }

    #[test]
    fn test_non_empty_allow_list_restricts() {
        let config = make_config(true, &["good.com"], &[]);
        assert!(!allowed(&config, "other.com"));
        assert!(allowed(&config, "good.com"));
        assert_eq!(
            evaluate(&config, "other.com", &MatchMode::Contains),
            Verdict::Denied(DenyReason::NotInAllowList)
        );
    }

    #[test]
    fn test_disabled_overrides_deny() {
        let config = make_config(false, &[], &["bad.com"]);
        assert_eq!(
            evaluate(&config, "bad.com", &MatchMode::Contains),
            Verdict::Allowed(AllowReason::FirewallDisabled)
        );
    }

    #[test]
    fn test_deny_wins_over_allow() {
        let config = make_config(true, &["example.com"], &["example.com/admin"]);
        assert!(allowed(&config, "https://example.com/home"));
        assert!(!allowed(&config, "https://example.com/admin/users"));
    }

    #[test]
    fn test_both_lists_empty_allows_everything() {
        let config = make_config(true, &[], &[]);
        assert_eq!(
            evaluate(&config, "anything.org", &MatchMode::Contains),
            Verdict::Allowed(AllowReason::AllowListEmpty)
        );
    }

    #[test]
    fn test_exact_mode_does_not_match_paths() {
        let config = make_config(true, &[], &["bad.com"]);
        assert!(evaluate(&config, "https://bad.com/page", &MatchMode::Exact).is_allowed());
        assert!(!evaluate(&config, "https://bad.com", &MatchMode::Exact).is_allowed());
    }

    #[test]
    fn test_insert_normalizes_and_dedups() {
        let mut config = FirewallConfig::default();
        assert!(config.insert(ListKind::Allow, "HTTP://Example.com"));
        assert!(!config.insert(ListKind::Allow, "Example.com"));
        assert!(!config.insert(ListKind::Allow, "   "));
        assert_eq!(config.allow_list, vec!["Example.com".to_string()]);
    }

    #[test]
    fn test_remove_absent_entry_is_noop() {
        let mut config = make_config(true, &[], &["bad.com"]);
        assert!(!config.remove(ListKind::Deny, "nonexistent.com"));
        assert_eq!(config.deny_list, vec!["bad.com".to_string()]);
        assert!(config.remove(ListKind::Deny, " bad.com "));
        assert!(config.deny_list.is_empty());
    }

    #[test]
    fn test_apply_update_reports_change() {
        let mut config = FirewallConfig::default();
        assert!(!config.apply(FirewallUpdate { enabled: Some(true) }));
        assert!(!config.apply(FirewallUpdate::default()));
        assert!(config.apply(FirewallUpdate { enabled: Some(false) }));
        assert!(!config.enabled);
    }

    #[test]
    fn test_sanitized_restores_invariants() {
        let dirty = make_config(
            true,
            &["https://a.com", "a.com", "  ", "b.com"],
            &["c.com", "c.com"],
        );
        let (clean, changed) = dirty.sanitized();
        assert!(changed);
        assert_eq!(clean.allow_list, vec!["a.com".to_string(), "b.com".to_string()]);
        assert_eq!(clean.deny_list, vec!["c.com".to_string()]);

        let (again, changed) = clean.clone().sanitized();
        assert!(!changed);
        assert_eq!(again, clean);
    }

    #[test]
    fn test_list_kind_parsing() {
        assert_eq!("allow".parse::<ListKind>().unwrap(), ListKind::Allow);
        assert_eq!(" deny ".parse::<ListKind>().unwrap(), ListKind::Deny);
        let err = "block".parse::<ListKind>().unwrap_err();
        assert_eq!(err.kind(), "InvalidInput");
    }

    #[test]
    fn test_config_serializes_with_storage_field_names() {
        let config = make_config(true, &["good.com"], &["bad.com"]);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["enabled"], true);
        assert_eq!(json["allowList"][0], "good.com");
        assert_eq!(json["denyList"][0], "bad.com");

        let parsed: FirewallConfig = serde_json::from_str(r#"{ "enabled": false }"#).unwrap();
        assert!(!parsed.enabled);
        assert!(parsed.allow_list.is_empty());
    }

    #[test]
    fn test_verdict_serializes_decision_and_reason() {
        let verdict = Verdict::Allowed(AllowReason::AllowListMatch {
            entry: "good.com".into(),
        });
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["decision"], "allowed");
        assert_eq!(json["detail"]["reason"], "allowListMatch");
        assert_eq!(json["detail"]["entry"], "good.com");
    }
}
