//! Config management use case

use crate::error::{Result, ScribeError};
use crate::infrastructure::Config;
use std::path::PathBuf;

const VALID_KEYS: &str = "storage, backup, backup_interval";

/// Service for reading and changing scribe.toml
pub struct ConfigService {
    home: PathBuf,
}

impl ConfigService {
    pub fn new(home: PathBuf) -> Self {
        ConfigService { home }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.home)?;

        match key {
            "storage" => Ok(config.storage_file.display().to_string()),
            "backup" => Ok(config.backup_file.display().to_string()),
            "backup_interval" => Ok(config.backup_interval_secs.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.home)?;

        match key {
            "storage" => config.storage_file = PathBuf::from(value),
            "backup" => config.backup_file = PathBuf::from(value),
            "backup_interval" => {
                config.backup_interval_secs = value.parse().map_err(|_| {
                    ScribeError::Config(format!(
                        "backup_interval must be a number of seconds, got '{}'",
                        value
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }

        config.validate()?;
        config.save_to_dir(&self.home)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.home)
    }
}

fn unknown_key(key: &str) -> ScribeError {
    ScribeError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        assert_eq!(service.get("storage").unwrap(), "journal_entries.json");
        assert_eq!(service.get("backup_interval").unwrap(), "86400");
    }

    #[test]
    fn test_set_then_get() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        service.set("backup", "backups/daily.json").unwrap();
        service.set("backup_interval", "3600").unwrap();

        assert_eq!(service.get("backup").unwrap(), "backups/daily.json");
        assert_eq!(service.list().unwrap().backup_interval_secs, 3600);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        assert!(service.set("backup_interval", "daily").is_err());
        assert!(service.set("backup_interval", "0").is_err());
        assert!(service.set("backup", "journal_entries.json").is_err());
        // Nothing was written
        assert!(!temp.path().join("scribe.toml").exists());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        match service.get("editor") {
            Err(ScribeError::Config(msg)) => assert!(msg.contains("Unknown config key")),
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert!(service.set("editor", "vim").is_err());
    }
}
