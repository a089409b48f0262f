//! Command handlers called by the settings page, organized by concern.
//!
//! - `firewall`: toggle, list editing, and URL checks
//! - `logic`: Pure helpers (view building, input parsing)
//! - `state`: Shared `AppState` definition

pub mod firewall;
mod logic;
mod state;

pub use logic::FirewallView;
pub use state::AppState;
