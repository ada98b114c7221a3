//! JSON snapshot file replaced atomically via temp file and rename.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::snapshot::LibrarySnapshotV1;

use super::{PersistError, PersistResult, SnapshotStore, decode_snapshot, encode_snapshot};

/// Snapshot kept as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the file at `path`. Nothing is touched until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl SnapshotStore for JsonFileStore {
    fn save_snapshot(&mut self, snapshot: &LibrarySnapshotV1) -> PersistResult<()> {
        let payload = encode_snapshot(snapshot)?;

        // Same directory so the rename stays on one filesystem.
        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        tmp.write_all(&payload)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|err| PersistError::Io(err.error))?;
        sync_dir(self.parent_dir())?;
        Ok(())
    }

    fn load_snapshot(&self) -> PersistResult<Option<LibrarySnapshotV1>> {
        let payload = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        decode_snapshot(&payload).map(Some)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Flushes the directory entry so the rename itself is durable.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}
