//! Error types for discipline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the discipline application
#[derive(Debug, Error)]
pub enum DisciplineError {
    #[error("Not a discipline directory: {0}")]
    NotDisciplineDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Invalid JSON format: {0}")]
    ImportShape(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DisciplineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DisciplineError::NotDisciplineDirectory(_) => 2,
            DisciplineError::InvalidTimeReference(_) => 3,
            DisciplineError::HabitNotFound(_) => 4,
            DisciplineError::ImportShape(_) | DisciplineError::Json(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DisciplineError::NotDisciplineDirectory(path) => {
                format!(
                    "Not a discipline directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'discipline init' in this directory to start tracking\n\
                    • Navigate to an existing discipline directory\n\
                    • Set DISCIPLINE_ROOT environment variable to your tracker path",
                    path.display()
                )
            }
            DisciplineError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, last week, next week\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-01-03)\n\n\
                    Examples:\n\
                    discipline show --week 'last week'\n\
                    discipline toggle 1 yesterday",
                    ref_str
                )
            }
            DisciplineError::HabitNotFound(selector) => {
                format!(
                    "Habit not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'discipline list' to see habit positions and ids\n\
                    • Refer to a habit by position (1, 2, ...), id, or exact name",
                    selector
                )
            }
            DisciplineError::ImportShape(_) | DisciplineError::Json(_) => {
                format!(
                    "{}\n\n\
                    Expected a JSON object with a 'habits' array and a 'checks' object,\n\
                    as written by 'discipline export json'. Current data was left unchanged.",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DisciplineError
pub type Result<T> = std::result::Result<T, DisciplineError>;
