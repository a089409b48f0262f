//! Unified error type for the firewall engine and its command surface.
//!
//! `AppError` is the single error type returned by every public operation.
//! It serializes as `{ "kind": "...", "message": "..." }` so the settings
//! page can programmatically distinguish error categories.

use serde::ser::SerializeStruct;

/// Application-level error returned by the engine and the commands.
///
/// Empty domain input is not an error: the engine ignores it silently.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The backing store could not load or persist the firewall config.
    #[error("{0}")]
    Storage(String),

    /// Invalid user input, such as an unknown list name.
    #[error("{0}")]
    InvalidInput(String),

    /// Invalid engine configuration.
    #[error("{0}")]
    Config(String),
}

impl AppError {
    /// Returns the error kind as a string matching the variant name.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Storage(_) => "Storage",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Config(_) => "Config",
        }
    }
}

/// Custom Serialize: produces `{ "kind": "Variant", "message": "..." }`.
impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = serializer.serialize_struct("AppError", 2)?;
        s.serialize_field("kind", self.kind())?;
        s.serialize_field("message", &self.to_string())?;
        s.end()
    }
}

// ---- From implementations for ergonomic error conversion ----

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Storage(format!("{err:#}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
