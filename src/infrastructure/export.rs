//! Export artifacts and where they are delivered

use crate::error::Result;
use log::info;
use std::fs;
use std::path::PathBuf;

/// MIME type attached to CSV and JSON exports
pub const EXPORT_MIME: &str = "text/plain;charset=utf-8";

/// A named document ready to be handed to a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub mime: &'static str,
    pub content: String,
}

impl Export {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Export {
            filename: filename.into(),
            mime: EXPORT_MIME,
            content: content.into(),
        }
    }
}

/// Byte sink for exports
pub trait ExportSink {
    /// Deliver the export and report where it ended up
    fn deliver(&mut self, export: &Export) -> Result<PathBuf>;
}

/// Writes exports as files into a directory, creating it when missing
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: PathBuf) -> Self {
        DirectorySink { dir }
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&mut self, export: &Export) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&export.filename);
        fs::write(&path, &export.content)?;

        info!(
            "event=export_written file={} bytes={}",
            path.display(),
            export.content.len()
        );
        Ok(path)
    }
}
