//! Firewall settings and list entry persistence.

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::core::{FirewallConfig, ListKind};
use crate::error::AppError;
use crate::store::FirewallStore;

impl Database {
    /// Read the full config. A database that was never written yields the default.
    pub fn load_config(&self) -> Result<FirewallConfig> {
        let conn = self.conn()?;

        let enabled: Option<i64> = conn
            .query_row(
                "SELECT enabled FROM firewall_settings WHERE id = 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        let mut config = FirewallConfig::default();
        if let Some(enabled) = enabled {
            config.enabled = enabled != 0;
        }

        let mut stmt = conn.prepare_cached(
            "SELECT entry FROM firewall_entries WHERE list_kind = ?1 ORDER BY position ASC",
        )?;
        for kind in [ListKind::Allow, ListKind::Deny] {
            let rows = stmt.query_map(params![kind.as_str()], |row| row.get::<_, String>(0))?;
            let target = match kind {
                ListKind::Allow => &mut config.allow_list,
                ListKind::Deny => &mut config.deny_list,
            };
            for row in rows {
                target.push(row?);
            }
        }

        Ok(config)
    }

    /// Replace the stored config in a single transaction.
    pub fn save_config(&self, config: &FirewallConfig) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO firewall_settings (id, enabled) VALUES (1, ?1)
             ON CONFLICT(id) DO UPDATE SET enabled = excluded.enabled",
            params![config.enabled as i32],
        )?;
        tx.execute("DELETE FROM firewall_entries", [])?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO firewall_entries (list_kind, position, entry) VALUES (?1, ?2, ?3)",
            )?;
            for kind in [ListKind::Allow, ListKind::Deny] {
                for (position, entry) in config.list(kind).iter().enumerate() {
                    stmt.execute(params![kind.as_str(), position as i64, entry])
                        .with_context(|| format!("failed to store {kind} entry '{entry}'"))?;
                }
            }
        }
        tx.commit()?;
        Ok(())
    }
}

impl FirewallStore for Database {
    fn load(&self) -> Result<FirewallConfig, AppError> {
        Ok(self
            .load_config()
            .context("failed to load firewall config")?)
    }

    fn save(&self, config: &FirewallConfig) -> Result<(), AppError> {
        Ok(self
            .save_config(config)
            .context("failed to save firewall config")?)
    }
}
