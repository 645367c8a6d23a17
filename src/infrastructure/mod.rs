//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod export;
pub mod gateway;
pub mod logging;
pub mod repository;

pub use config::Config;
pub use export::{DirectorySink, Export, ExportSink, EXPORT_MIME};
pub use gateway::{MemoryGateway, PersistenceGateway, STORAGE_KEY};
pub use repository::{FileSystemRepository, TrackerRepository};
