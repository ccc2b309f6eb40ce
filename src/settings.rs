//! SQLite-backed persistence for user settings.
//!
//! Settings are opaque string key/value pairs; the reader core never
//! touches this store. The only key the application currently uses is
//! `books.path`, the library root.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

/// Setting key for the library root directory.
pub const BOOKS_PATH_KEY: &str = "books.path";

/// Opaque key/value settings storage.
pub struct SettingsStore {
    conn: Connection,
}

impl SettingsStore {
    /// Opens or creates the database at the default XDG location,
    /// `XDG_CONFIG_HOME/folio/settings.sqlite`.
    pub fn open_default() -> Result<Self> {
        let db_path = Self::default_db_path()?;
        Self::open(&db_path)
    }

    /// Returns the default database path based on XDG directories.
    pub fn default_db_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "folio")
            .context("Failed to determine project directories")?;

        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)
            .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;

        Ok(config_dir.join("settings.sqlite"))
    }

    /// Opens or creates the database at the specified path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory: {:?}", parent))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {:?}", path))?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )
        .context("Failed to configure SQLite pragmas")?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            );
            ",
        )
        .context("Failed to create settings table")?;

        info!("Opened settings store at {:?}", path);
        Ok(Self { conn })
    }

    /// Returns the stored value for `key`, or `None` if unset.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read setting {:?}", key))?;
        Ok(value)
    }

    /// Inserts or replaces the value for `key`.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "
                INSERT INTO settings (key, value) VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value
                ",
                params![key, value],
            )
            .with_context(|| format!("Failed to write setting {:?}", key))?;
        debug!(key, "Saved setting");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn get_unset_key_is_none() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::open(&dir.path().join("settings.sqlite")).unwrap();
        assert_eq!(store.get(BOOKS_PATH_KEY).unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::open(&dir.path().join("settings.sqlite")).unwrap();

        store.set(BOOKS_PATH_KEY, "/home/me/books").unwrap();
        assert_eq!(
            store.get(BOOKS_PATH_KEY).unwrap().as_deref(),
            Some("/home/me/books")
        );
    }

    #[test]
    fn set_overwrites_existing_value() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::open(&dir.path().join("settings.sqlite")).unwrap();

        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn values_persist_across_reopen() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("settings.sqlite");

        {
            let store = SettingsStore::open(&db).unwrap();
            store.set("k", "v").unwrap();
        }
        let store = SettingsStore::open(&db).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
