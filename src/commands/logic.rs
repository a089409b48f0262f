//! Pure helpers extracted from the command handlers.
//!
//! These functions take plain parameters (no `AppState` dependency) and can
//! be unit-tested without a database.

use serde::Serialize;

use crate::core::{FirewallConfig, ListKind};
use crate::error::AppError;

/// Snapshot of the firewall returned to the settings page after every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallView {
    pub enabled: bool,
    pub allow_list: Vec<String>,
    pub deny_list: Vec<String>,
    pub matcher: String,
}

pub fn build_view(config: FirewallConfig, matcher: &str) -> FirewallView {
    FirewallView {
        enabled: config.enabled,
        allow_list: config.allow_list,
        deny_list: config.deny_list,
        matcher: matcher.to_string(),
    }
}

/// Parse the page's active-list selector (`"allow"` or `"deny"`).
pub fn parse_list_kind(list: &str) -> Result<ListKind, AppError> {
    list.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_view_copies_config() {
        let config = FirewallConfig {
            enabled: false,
            allow_list: vec!["good.com".into()],
            deny_list: vec!["bad.com".into()],
        };
        let view = build_view(config, "contains");
        assert!(!view.enabled);
        assert_eq!(view.allow_list, vec!["good.com"]);
        assert_eq!(view.deny_list, vec!["bad.com"]);
        assert_eq!(view.matcher, "contains");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = build_view(FirewallConfig::default(), "exact");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["enabled"], true);
        assert!(json["allowList"].as_array().unwrap().is_empty());
        assert!(json["denyList"].as_array().unwrap().is_empty());
        assert_eq!(json["matcher"], "exact");
    }

    #[test]
    fn test_parse_list_kind() {
        assert_eq!(parse_list_kind("allow").unwrap(), ListKind::Allow);
        assert_eq!(parse_list_kind("deny").unwrap(), ListKind::Deny);
        assert_eq!(parse_list_kind("Allow").unwrap_err().kind(), "InvalidInput");
    }
}
