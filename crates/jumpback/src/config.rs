//! # Configuration
//!
//! Jumpback configuration is a [`confique`] config, so it can be layered from a TOML
//! file, environment variables, and compiled defaults. Hosts that keep their own
//! settings blob (an editor plugin's `data.json`) can hand it over as JSON with
//! [`JumpbackConfig::from_host_json`]; missing keys fall back to defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `JUMPBACK_DB_FILE_NAME`, `JUMPBACK_SAVE_TIMER`, etc.
//! 2. **Config file**: `jumpback.toml` (snake_case keys).
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key (TOML) | Key (host JSON) | Default | Description |
//! |------------|-----------------|---------|-------------|
//! | `db_file_name` | `dbFileName` | `.obsidian/plugins/cursor-jumper/cursor-positions.json` | Position database path |
//! | `save_timer` | `saveTimer` | `5000` | Flush interval in milliseconds |
//! | `delete_after_days` | `deleteAfterDays` | `90` | Retention; `0` or less disables sweeping |
//! | `prompt_duration` | `promptDuration` | `10000` | How long the jump prompt stays up (ms) |
//!
//! The configuration is read once when the session loads and never changes afterwards.

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_FILE_NAME: &str = ".obsidian/plugins/cursor-jumper/cursor-positions.json";
pub const DEFAULT_SAVE_TIMER_MS: u64 = 5000;
pub const DEFAULT_DELETE_AFTER_DAYS: i64 = 90;
pub const DEFAULT_PROMPT_DURATION_MS: u64 = 10_000;

const MS_PER_DAY: i64 = 86_400_000;

/// Configuration for jumpback, stored in `jumpback.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct JumpbackConfig {
    /// Path of the position database, relative to the storage adapter's root.
    #[config(
        default = ".obsidian/plugins/cursor-jumper/cursor-positions.json",
        env = "JUMPBACK_DB_FILE_NAME"
    )]
    pub db_file_name: String,

    /// Interval between flushes of the in-memory store, in milliseconds.
    #[config(default = 5000, env = "JUMPBACK_SAVE_TIMER")]
    pub save_timer: u64,

    /// Entries older than this many days are dropped on load. `<= 0` keeps everything.
    #[config(default = 90, env = "JUMPBACK_DELETE_AFTER_DAYS")]
    pub delete_after_days: i64,

    /// How long the "jump to last position" prompt stays visible, in milliseconds.
    #[config(default = 10000, env = "JUMPBACK_PROMPT_DURATION")]
    pub prompt_duration: u64,
}

impl Default for JumpbackConfig {
    fn default() -> Self {
        Self {
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            save_timer: DEFAULT_SAVE_TIMER_MS,
            delete_after_days: DEFAULT_DELETE_AFTER_DAYS,
            prompt_duration: DEFAULT_PROMPT_DURATION_MS,
        }
    }
}

impl JumpbackConfig {
    /// Load from environment, then `file` (if it exists), then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Parse a host settings blob. Missing keys take their defaults.
    pub fn from_host_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.db_file_name)
    }

    pub fn flush_interval_ms(&self) -> i64 {
        i64::try_from(self.save_timer).unwrap_or(i64::MAX)
    }

    pub fn prompt_duration_ms(&self) -> i64 {
        i64::try_from(self.prompt_duration).unwrap_or(i64::MAX)
    }

    /// Maximum entry age in milliseconds, or `None` when sweeping is disabled.
    pub fn retention_ms(&self) -> Option<i64> {
        if self.delete_after_days <= 0 {
            None
        } else {
            Some(self.delete_after_days.saturating_mul(MS_PER_DAY))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = JumpbackConfig::default();
        assert_eq!(config.db_file_name, DEFAULT_DB_FILE_NAME);
        assert_eq!(config.save_timer, 5000);
        assert_eq!(config.delete_after_days, 90);
        assert_eq!(config.prompt_duration, 10_000);
    }

    #[test]
    fn test_retention_disabled_when_not_positive() {
        let zero = JumpbackConfig {
            delete_after_days: 0,
            ..Default::default()
        };
        assert_eq!(zero.retention_ms(), None);

        let negative = JumpbackConfig {
            delete_after_days: -3,
            ..Default::default()
        };
        assert_eq!(negative.retention_ms(), None);
    }

    #[test]
    fn test_retention_in_milliseconds() {
        let config = JumpbackConfig {
            delete_after_days: 2,
            ..Default::default()
        };
        assert_eq!(config.retention_ms(), Some(2 * 86_400_000));
    }

    #[test]
    fn test_host_json_partial_overrides() {
        let config = JumpbackConfig::from_host_json(r#"{"deleteAfterDays": 7}"#).unwrap();
        assert_eq!(config.delete_after_days, 7);
        assert_eq!(config.save_timer, DEFAULT_SAVE_TIMER_MS);
        assert_eq!(config.db_file_name, DEFAULT_DB_FILE_NAME);
    }

    #[test]
    fn test_host_json_empty_object_is_default() {
        let config = JumpbackConfig::from_host_json("{}").unwrap();
        assert_eq!(config, JumpbackConfig::default());
    }

    #[test]
    fn test_host_json_rejects_garbage() {
        assert!(JumpbackConfig::from_host_json("not json").is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("jumpback.toml");
        fs::write(&path, "save_timer = 250\nprompt_duration = 3000\n").unwrap();

        let config = JumpbackConfig::load(Some(&path)).unwrap();
        assert_eq!(config.save_timer, 250);
        assert_eq!(config.prompt_duration, 3000);
        assert_eq!(config.delete_after_days, DEFAULT_DELETE_AFTER_DAYS);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.toml");
        let config = JumpbackConfig::load(Some(&missing)).unwrap();
        assert_eq!(config.db_file_name, DEFAULT_DB_FILE_NAME);
    }
}
