//! Run configuration.
//!
//! Defaults reproduce the classic layout: `./ladder.json` in, three files
//! under `./outputs` out. A JSON config file can override any field; the
//! binary then layers command-line flags on top.
//!
//! The default config file lives at `~/.config/progboard/config.json`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fetch::client::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SETTLE_DELAY_MS};
use crate::ranking::{parse_date, DEFAULT_TARGET_DATE};

/// Application name used for the config directory path
const APP_NAME: &str = "progboard";

/// Config file name
const CONFIG_FILE: &str = "config.json";

const UNSORTED_CSV_FILE: &str = "output.csv";
const SORTED_CSV_FILE: &str = "sorted_output.csv";
const LEADERBOARD_FILE: &str = "leaderboard.txt";

pub const DEFAULT_TITLE: &str = "FRU Progress leaderboard";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// `MM/DD/YYYY`
    pub target_date: String,
    pub settle_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub leaderboard_title: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("./ladder.json"),
            output_dir: PathBuf::from("./outputs"),
            target_date: DEFAULT_TARGET_DATE.to_string(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            leaderboard_title: DEFAULT_TITLE.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load from `explicit` if given (it must exist), else from the default
    /// config file if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::config_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write to `path`, or the default config file when `None`.
    /// Returns the path written.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(path)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<()> {
        self.target_date()?;
        Ok(())
    }

    pub fn target_date(&self) -> Result<NaiveDate> {
        parse_date(&self.target_date).ok_or_else(|| {
            anyhow::anyhow!("Invalid target date '{}', expected MM/DD/YYYY", self.target_date)
        })
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn unsorted_csv_path(&self) -> PathBuf {
        self.output_dir.join(UNSORTED_CSV_FILE)
    }

    pub fn sorted_csv_path(&self) -> PathBuf {
        self.output_dir.join(SORTED_CSV_FILE)
    }

    pub fn leaderboard_path(&self) -> PathBuf {
        self.output_dir.join(LEADERBOARD_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("./ladder.json"));
        assert_eq!(config.settle_delay(), Duration::from_secs(2));
        assert_eq!(
            config.target_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 11, 26).unwrap()
        );
        assert_eq!(config.sorted_csv_path(), PathBuf::from("./outputs/sorted_output.csv"));
        assert_eq!(config.leaderboard_path(), PathBuf::from("./outputs/leaderboard.txt"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_dir": "/tmp/board", "settle_delay_ms": 0}"#).unwrap();

        let config = Config::load(Some(&path)).expect("Failed to load config");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/board"));
        assert_eq!(config.settle_delay(), Duration::ZERO);
        assert_eq!(config.leaderboard_title, DEFAULT_TITLE);
        assert_eq!(config.unsorted_csv_path(), PathBuf::from("/tmp/board/output.csv"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.json"))).is_err());
    }

    #[test]
    fn test_invalid_target_date_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"target_date": "2024-11-26"}"#).unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            leaderboard_title: "Board".to_string(),
            log_file: Some(PathBuf::from("run.log")),
            ..Config::default()
        };

        let written = config.save(Some(&path)).expect("Failed to save config");
        assert_eq!(written, path);
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}
