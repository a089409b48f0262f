//! Pluggable comparison between a normalized URL and a list entry.
//!
//! Entries are literal strings. There is no wildcard or glob language: a `*`
//! in an entry only matches a literal `*`.

use serde::{Deserialize, Serialize};

/// Decides whether a list entry applies to a normalized URL.
pub trait UrlMatcher: Send + Sync {
    /// `url` and `entry` are both already normalized.
    fn matches(&self, url: &str, entry: &str) -> bool;
}

/// Built-in matching strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The URL contains the entry as a substring (`bad.com` matches
    /// `bad.com/page` and also `notbad.com`).
    #[default]
    Contains,
    /// The URL equals the entry.
    Exact,
}

impl MatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Contains => "contains",
            MatchMode::Exact => "exact",
        }
    }
}

impl UrlMatcher for MatchMode {
    fn matches(&self, url: &str, entry: &str) -> bool {
        match self {
            MatchMode::Contains => url.contains(entry),
            MatchMode::Exact => url == entry,
        }
    }
}
