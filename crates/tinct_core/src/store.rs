//! Persisted theme state: a single key-value row with an expiry.
//!
//! One slot, key `theme-config`, value = JSON-serialized [ThemeConfig],
//! expiry refreshed to 365 days on every save. Loading never fails: missing,
//! expired, corrupt, or invalid state falls back to the built-in default and
//! is logged, not surfaced.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use rusqlite::Connection;

use crate::config::{ThemeConfig, theme_from_json};
use crate::error::Result;

/// Store key for the persisted theme.
pub const THEME_KEY: &str = "theme-config";

/// Data directory under the home directory.
const DATA_DIR: &str = ".tinct";

/// Database file inside the data directory.
const DB_FILE: &str = "tinct.db";

/// Days a saved theme stays valid.
const TTL_DAYS: i64 = 365;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS theme_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    expires_at TEXT NOT NULL
)";

/// Handle to the on-disk theme store.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    dir: PathBuf,
}

impl ThemeStore {
    /// Store in the default location: `$TINCT_DATA_DIR` if set, else
    /// `~/.tinct`.
    pub fn open_default() -> Self {
        let dir = std::env::var_os("TINCT_DATA_DIR")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(DATA_DIR)))
            .unwrap_or_else(|| PathBuf::from(DATA_DIR));
        Self { dir }
    }

    /// Store rooted at an explicit directory (tests, overrides).
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.join(DB_FILE)
    }

    fn conn(&self) -> Result<Connection> {
        std::fs::create_dir_all(&self.dir)?;
        let conn = Connection::open(self.db_path())?;
        conn.execute(SCHEMA, [])?;
        Ok(conn)
    }

    /// Serialize and persist the theme; the single row is overwritten and
    /// the expiry refreshed.
    pub fn save(&self, config: &ThemeConfig) -> Result<()> {
        let value = serde_json::to_string(config)?;
        let expires_at = (Utc::now() + Duration::days(TTL_DAYS)).to_rfc3339();
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO theme_store (key, value, expires_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, expires_at = ?3",
            rusqlite::params![THEME_KEY, value, expires_at],
        )?;
        Ok(())
    }

    /// Load the persisted theme, falling back to the built-in default when
    /// the slot is missing, expired, unparseable, or fails validation.
    pub fn load(&self) -> ThemeConfig {
        if !self.db_path().exists() {
            return ThemeConfig::default();
        }
        match self.load_row() {
            Ok(Some((value, expires_at))) => {
                if is_expired(&expires_at) {
                    tracing::warn!(key = THEME_KEY, "saved theme expired, using default");
                    return ThemeConfig::default();
                }
                match theme_from_json(&value) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!(key = THEME_KEY, error = %e, "failed to parse saved theme, using default");
                        ThemeConfig::default()
                    }
                }
            }
            Ok(None) => ThemeConfig::default(),
            Err(e) => {
                tracing::warn!(key = THEME_KEY, error = %e, "failed to read theme store, using default");
                ThemeConfig::default()
            }
        }
    }

    fn load_row(&self) -> Result<Option<(String, String)>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT value, expires_at FROM theme_store WHERE key = ?1")?;
        let mut rows = stmt.query(rusqlite::params![THEME_KEY])?;
        match rows.next()? {
            Some(row) => Ok(Some((row.get(0)?, row.get(1)?))),
            None => Ok(None),
        }
    }

    /// Remove the persisted slot entirely.
    pub fn clear(&self) -> Result<()> {
        if !self.db_path().exists() {
            return Ok(());
        }
        let conn = self.conn()?;
        conn.execute(
            "DELETE FROM theme_store WHERE key = ?1",
            rusqlite::params![THEME_KEY],
        )?;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Expired when the timestamp parses and is in the past; an unparseable
/// timestamp counts as expired (corrupt metadata).
fn is_expired(expires_at: &str) -> bool {
    match DateTime::parse_from_rfc3339(expires_at) {
        Ok(t) => t.with_timezone(&Utc) <= Utc::now(),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, ThemeStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::at(dir.path());
        (dir, store)
    }

    /// Write a raw row bypassing save(), to simulate corruption.
    fn insert_raw(store: &ThemeStore, value: &str, expires_at: &str) {
        let conn = store.conn().unwrap();
        conn.execute(
            "INSERT INTO theme_store (key, value, expires_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, expires_at = ?3",
            rusqlite::params![THEME_KEY, value, expires_at],
        )
        .unwrap();
    }

    #[test]
    fn load_without_store_returns_default() {
        let (_dir, store) = store();
        assert_eq!(store.load(), ThemeConfig::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = store();
        let mut config = ThemeConfig::default();
        config.primary = "142.1 76.2% 36.3%".to_string();
        config.radius = 0.75;
        store.save(&config).unwrap();
        assert_eq!(store.load(), config);
    }

    #[test]
    fn save_overwrites_previous_value() {
        let (_dir, store) = store();
        let mut config = ThemeConfig::default();
        store.save(&config).unwrap();
        config.radius = 0.1;
        store.save(&config).unwrap();
        assert_eq!(store.load().radius, 0.1);
    }

    #[test]
    fn corrupt_value_falls_back_to_default() {
        let (_dir, store) = store();
        let future = (Utc::now() + Duration::days(1)).to_rfc3339();
        insert_raw(&store, "{not json", &future);
        assert_eq!(store.load(), ThemeConfig::default());
    }

    #[test]
    fn wrong_shape_falls_back_to_default() {
        let (_dir, store) = store();
        let future = (Utc::now() + Duration::days(1)).to_rfc3339();
        insert_raw(&store, r#"{"primary": 1}"#, &future);
        assert_eq!(store.load(), ThemeConfig::default());
    }

    #[test]
    fn invalid_radius_falls_back_to_default() {
        let (_dir, store) = store();
        let future = (Utc::now() + Duration::days(1)).to_rfc3339();
        let mut config = ThemeConfig::default();
        config.radius = -2.0;
        let value = serde_json::to_string(&config).unwrap();
        insert_raw(&store, &value, &future);
        assert_eq!(store.load(), ThemeConfig::default());
    }

    #[test]
    fn expired_row_falls_back_to_default() {
        let (_dir, store) = store();
        let past = (Utc::now() - Duration::days(1)).to_rfc3339();
        let value = serde_json::to_string(&ThemeConfig::default()).unwrap();
        insert_raw(&store, &value, &past);
        assert_eq!(store.load(), ThemeConfig::default());
    }

    #[test]
    fn clear_removes_slot() {
        let (_dir, store) = store();
        let mut config = ThemeConfig::default();
        config.radius = 0.9;
        store.save(&config).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), ThemeConfig::default());
    }
}
