//! Config management use case

use crate::error::{DisciplineError, Result};
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};
use std::path::PathBuf;

/// Keys accepted by `get`
pub const CONFIG_KEYS: [&str; 2] = ["export_dir", "created"];

/// Service for managing tracker configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "export_dir" => Ok(config.export_dir.display().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "export_dir" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(DisciplineError::Config(
                        "export_dir cannot be empty".to_string(),
                    ));
                }
                config.export_dir = PathBuf::from(value);
            }
            "created" => {
                return Err(DisciplineError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> DisciplineError {
    DisciplineError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(init(temp.path()).unwrap())
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert_eq!(service.get("export_dir").unwrap(), ".");
        assert!(!service.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_set_export_dir() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("export_dir", "out").unwrap();
        assert_eq!(service.get("export_dir").unwrap(), "out");
        assert_eq!(service.list().unwrap().export_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
        assert!(service.set("export_dir", "  ").is_err());
        let err = service.set("color", "red").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'color'"));
    }
}
