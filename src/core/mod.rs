//! Core logic: domain normalization, list matching, policy evaluation.
//!
//! - [`normalize`]: scheme stripping shared by entries and URLs
//! - [`UrlMatcher`] / [`MatchMode`]: literal contains/exact comparison
//! - [`FirewallConfig`] / [`evaluate`]: the rule model and decision function
//! - [`FirewallEngine`]: config operations over a [`crate::store::FirewallStore`]

pub mod engine;
pub mod matcher;
pub mod normalize;
pub mod policy;

pub use engine::FirewallEngine;
pub use matcher::{MatchMode, UrlMatcher};
pub use normalize::normalize_domain;
pub use policy::{
    evaluate, AllowReason, DenyReason, FirewallConfig, FirewallUpdate, ListKind, Verdict,
};
