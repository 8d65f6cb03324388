//! Configuration management

use crate::error::{Result, ScribeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the config file inside the scribe home directory
pub const CONFIG_FILE: &str = "scribe.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Journal storage file, relative to the home directory unless absolute
    pub storage_file: PathBuf,
    /// Backup target, relative to the home directory unless absolute
    pub backup_file: PathBuf,
    /// Seconds between scheduled backups
    pub backup_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_file: PathBuf::from("journal_entries.json"),
            backup_file: PathBuf::from("journal_entries.backup.json"),
            backup_interval_secs: 24 * 60 * 60,
        }
    }
}

impl Config {
    /// Home directory: `SCRIBE_HOME` if set, otherwise the current directory
    pub fn home_dir() -> Result<PathBuf> {
        match std::env::var("SCRIBE_HOME") {
            Ok(home) if !home.is_empty() => Ok(PathBuf::from(home)),
            _ => Ok(std::env::current_dir()?),
        }
    }

    /// Load config from scribe.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", config_path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(ScribeError::Persistence(e)),
        };

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to scribe.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.backup_interval_secs == 0 {
            return Err(ScribeError::Config(
                "backup_interval must be greater than zero".to_string(),
            ));
        }
        if self.storage_file == self.backup_file {
            return Err(ScribeError::Config(
                "storage and backup must be different files".to_string(),
            ));
        }
        Ok(())
    }

    pub fn storage_path(&self, home: &Path) -> PathBuf {
        home.join(&self.storage_file)
    }

    pub fn backup_path(&self, home: &Path) -> PathBuf {
        home.join(&self.backup_file)
    }

    pub fn backup_interval(&self) -> Duration {
        Duration::from_secs(self.backup_interval_secs)
    }
}
