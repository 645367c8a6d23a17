//! File system repository

use crate::domain::{codec, AppState};
use crate::error::{DisciplineError, Result};
use crate::infrastructure::config::DATA_DIR;
use crate::infrastructure::gateway::{decode_snapshot, PersistenceGateway, STORAGE_KEY};
use crate::infrastructure::Config;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a tracker root
pub const ROOT_ENV: &str = "DISCIPLINE_ROOT";

/// Abstract repository for a tracker root
pub trait TrackerRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .discipline/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .discipline/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .discipline directory exists
    fn is_initialized(&self) -> bool;

    /// Create .discipline directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TrackerRepository and PersistenceGateway.
/// The state lives in `.discipline/discipline-table-v1.json`.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the tracker root: DISCIPLINE_ROOT first, then walk up from
    /// the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DisciplineError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'discipline init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    DATA_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the tracker root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DisciplineError::NotDisciplineDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    /// Path of the persisted state snapshot
    pub fn state_path(&self) -> PathBuf {
        self.root.join(DATA_DIR).join(format!("{}.json", STORAGE_KEY))
    }
}

impl TrackerRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.root.join(DATA_DIR);

        if data_dir.exists() {
            return Err(DisciplineError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        Ok(())
    }
}

impl PersistenceGateway for FileSystemRepository {
    fn load(&self) -> Result<Option<AppState>> {
        match fs::read_to_string(self.state_path()) {
            Ok(raw) => decode_snapshot(&raw).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DisciplineError::Persistence(format!(
                "failed to read {}: {}",
                self.state_path().display(),
                e
            ))),
        }
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        let path = self.state_path();
        let contents = codec::to_json(state)?;

        // replace the slot in one rename
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| {
                DisciplineError::Persistence(format!("failed to write {}: {}", path.display(), e))
            })
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(self.state_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DisciplineError::Persistence(format!(
                "failed to remove {}: {}",
                self.state_path().display(),
                e
            ))),
        }
    }
}
