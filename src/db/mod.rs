//! SQLite persistence layer for the firewall settings.
//!
//! Uses `rusqlite` with bundled SQLite. Handles:
//! - The single-row settings table (enabled flag)
//! - Allow/deny list entries with their display order

mod lists;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use rusqlite::Connection;

/// Manages the SQLite database holding the firewall config.
pub struct Database {
    conn: Mutex<Connection>,
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS firewall_settings (
        id INTEGER PRIMARY KEY CHECK (id = 1),
        enabled INTEGER NOT NULL DEFAULT 1
    );

    CREATE TABLE IF NOT EXISTS firewall_entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        list_kind TEXT NOT NULL CHECK (list_kind IN ('allow', 'deny')),
        position INTEGER NOT NULL,
        entry TEXT NOT NULL,
        UNIQUE(list_kind, entry)
    );
    CREATE INDEX IF NOT EXISTS idx_entries_order ON firewall_entries(list_kind, position);
";

impl Database {
    /// Open or create the database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {}", path.display()))?;
        conn.execute_batch(SCHEMA)?;

        // Enable WAL mode for better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        tracing::info!("Firewall database opened at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("database connection lock poisoned"))
    }
}
