//! Configuration management

use crate::error::{DisciplineError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory marking a tracker root
pub const DATA_DIR: &str = ".discipline";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where exports are written; relative paths are resolved against the root
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    pub created: DateTime<Utc>,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export_dir: default_export_dir(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .discipline/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DisciplineError::NotDisciplineDirectory(path.to_path_buf())
            } else {
                DisciplineError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DisciplineError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .discipline/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);
        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(data_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Export directory resolved against the tracker root
    pub fn export_path(&self, root: &Path) -> PathBuf {
        if self.export_dir.is_absolute() {
            self.export_dir.clone()
        } else {
            root.join(&self.export_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            export_dir: PathBuf::from("exports"),
            ..Config::default()
        };

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".discipline/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.export_dir, PathBuf::from("exports"));
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_missing_export_dir_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(DATA_DIR)).unwrap();
        fs::write(
            temp.path().join(".discipline/config.toml"),
            "created = \"2024-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());
        match result.unwrap_err() {
            DisciplineError::NotDisciplineDirectory(_) => {}
            other => panic!("Expected NotDisciplineDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_export_path() {
        let root = Path::new("/tmp/tracker");
        let relative = Config {
            export_dir: PathBuf::from("out"),
            ..Config::default()
        };
        assert_eq!(relative.export_path(root), PathBuf::from("/tmp/tracker/out"));

        let absolute = Config {
            export_dir: PathBuf::from("/var/exports"),
            ..Config::default()
        };
        assert_eq!(absolute.export_path(root), PathBuf::from("/var/exports"));
    }
}
