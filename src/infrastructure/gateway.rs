//! Single-slot persistence of the application state

use crate::domain::AppState;
use crate::error::{DisciplineError, Result};

/// Fixed key of the persisted snapshot
pub const STORAGE_KEY: &str = "discipline-table-v1";

/// Load/save/clear of one `AppState` snapshot.
///
/// Callers treat `save` and `clear` failures as non-fatal; the in-memory
/// state stays authoritative for the session.
pub trait PersistenceGateway {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<AppState>>;

    fn save(&mut self, state: &AppState) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

/// Decode a stored snapshot. Missing `habits`/`checks` default to empty.
pub fn decode_snapshot(raw: &str) -> Result<AppState> {
    serde_json::from_str(raw)
        .map_err(|e| DisciplineError::Persistence(format!("corrupt {}: {}", STORAGE_KEY, e)))
}

/// Gateway backed by a string slot in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryGateway {
    slot: Option<String>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored text, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        MemoryGateway {
            slot: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self) -> Result<Option<AppState>> {
        self.slot.as_deref().map(decode_snapshot).transpose()
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        self.slot = Some(serde_json::to_string(state)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}
