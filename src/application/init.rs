//! Initialize tracker use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};
use log::info;
use std::fs;
use std::path::Path;

/// Create `.discipline/` with a default config at `path`, creating the
/// directory itself when needed. The habit snapshot is created on first open.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::default())?;

    info!("event=tracker_initialized root={}", path.display());
    Ok(repo)
}
