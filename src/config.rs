//! Store location and backend selection.

use std::path::{Path, PathBuf};

use crate::persist::{SnapshotStore, json::JsonFileStore, sqlite::SqliteStore};

/// Store file used when the driver does not pick one.
pub const DEFAULT_STORE_PATH: &str = "library_data.json";

/// Encoding of the snapshot artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Pretty-printed JSON file, replaced by rename.
    #[default]
    Json,
    /// SQLite database file.
    Sqlite,
}

impl StoreBackend {
    /// Picks SQLite for `.db`, `.sqlite` and `.sqlite3` paths, JSON otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("db" | "sqlite" | "sqlite3") => Self::Sqlite,
            _ => Self::Json,
        }
    }
}

/// Where and how the library snapshot is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Artifact path.
    pub path: PathBuf,
    /// Artifact encoding.
    pub backend: StoreBackend,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
            backend: StoreBackend::Json,
        }
    }
}

impl StoreConfig {
    /// Config for `path`, with the backend inferred from its extension.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let backend = StoreBackend::from_path(&path);
        Self { path, backend }
    }

    /// Builds the configured store.
    pub fn open(&self) -> Box<dyn SnapshotStore> {
        match self.backend {
            StoreBackend::Json => Box::new(JsonFileStore::new(self.path.clone())),
            StoreBackend::Sqlite => Box::new(SqliteStore::new(self.path.clone())),
        }
    }
}
