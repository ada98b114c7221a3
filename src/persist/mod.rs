//! Snapshot persistence: store abstraction, codec, and aggregate save/load.

/// Atomic JSON file store.
pub mod json;
/// Single-file SQLite store.
pub mod sqlite;

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::{
    core::library::Library,
    snapshot::{LibrarySnapshotV1, SNAPSHOT_FORMAT_VERSION, SnapshotEnvelope, SnapshotError},
};

/// Failure to write or read a snapshot artifact.
#[derive(Debug)]
pub enum PersistError {
    /// Filesystem failure.
    Io(std::io::Error),
    /// SQLite failure.
    Sqlite(rusqlite::Error),
    /// Encode or decode failure.
    Serde(serde_json::Error),
    /// Envelope written by an unknown format version.
    UnsupportedVersion(u16),
    /// Decoded snapshot is internally inconsistent.
    Snapshot(SnapshotError),
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl From<SnapshotError> for PersistError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::Serde(err) => write!(f, "decode error: {err}"),
            Self::UnsupportedVersion(v) => write!(f, "unsupported snapshot format version {v}"),
            Self::Snapshot(err) => write!(f, "inconsistent snapshot: {err}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Sqlite(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::UnsupportedVersion(_) => None,
            Self::Snapshot(err) => Some(err),
        }
    }
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Durable home for one library snapshot.
///
/// `save_snapshot` must be all-or-nothing: after a failure the artifact
/// still holds the previous snapshot, or nothing.
pub trait SnapshotStore {
    /// Replaces the stored snapshot.
    fn save_snapshot(&mut self, snapshot: &LibrarySnapshotV1) -> PersistResult<()>;
    /// Reads the stored snapshot; `Ok(None)` when no artifact exists yet.
    fn load_snapshot(&self) -> PersistResult<Option<LibrarySnapshotV1>>;
    /// Artifact location, for diagnostics.
    fn location(&self) -> &Path;
}

/// Writes the full library to `store`.
pub fn save(library: &Library, store: &mut dyn SnapshotStore) -> PersistResult<()> {
    let snapshot = library.export_snapshot();
    store.save_snapshot(&snapshot)?;
    tracing::info!(
        path = %store.location().display(),
        items = snapshot.items.len(),
        members = snapshot.members.len(),
        "library saved"
    );
    Ok(())
}

/// Reads and validates the stored library; `Ok(None)` when none exists.
pub fn try_load(store: &dyn SnapshotStore) -> PersistResult<Option<Library>> {
    let Some(snapshot) = store.load_snapshot()? else {
        return Ok(None);
    };
    Ok(Some(Library::from_snapshot(snapshot)?))
}

/// Loads the stored library, falling back to an empty one.
///
/// A missing artifact is normal on first run. An unreadable or inconsistent
/// one is logged as a warning and never surfaces as an error.
pub fn load(store: &dyn SnapshotStore) -> Library {
    match try_load(store) {
        Ok(Some(library)) => {
            tracing::info!(
                path = %store.location().display(),
                items = library.catalog().len(),
                members = library.registry().len(),
                "library loaded"
            );
            library
        }
        Ok(None) => {
            tracing::info!(
                path = %store.location().display(),
                "no saved library found, starting empty"
            );
            Library::new()
        }
        Err(err) => {
            tracing::warn!(
                path = %store.location().display(),
                error = %err,
                "failed to load library, starting empty"
            );
            Library::new()
        }
    }
}

#[derive(Deserialize)]
struct VersionProbe {
    format_version: u16,
}

pub(crate) fn encode_snapshot(snapshot: &LibrarySnapshotV1) -> PersistResult<Vec<u8>> {
    let env = SnapshotEnvelope::new(snapshot.clone());
    Ok(serde_json::to_vec_pretty(&env)?)
}

pub(crate) fn decode_snapshot(payload: &[u8]) -> PersistResult<LibrarySnapshotV1> {
    let probe: VersionProbe = serde_json::from_slice(payload)?;
    if probe.format_version != SNAPSHOT_FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion(probe.format_version));
    }
    let env: SnapshotEnvelope = serde_json::from_slice(payload)?;
    Ok(env.snapshot)
}
