//! SQLite-backed snapshot store.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, OpenFlags, OptionalExtension, params};

use crate::snapshot::LibrarySnapshotV1;

use super::{PersistResult, SnapshotStore, decode_snapshot, encode_snapshot};

/// Snapshot kept as the single row of a `snapshots` table.
///
/// Each save replaces the row inside one transaction, so readers see either
/// the previous snapshot or the new one.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Store backed by the database file at `path`. Nothing is touched until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_for_write(&self) -> PersistResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(conn)
    }
}

impl SnapshotStore for SqliteStore {
    fn save_snapshot(&mut self, snapshot: &LibrarySnapshotV1) -> PersistResult<()> {
        let payload = encode_snapshot(snapshot)?;
        let mut conn = self.open_for_write()?;

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM snapshots", [])?;
        tx.execute(
            "INSERT INTO snapshots(ts_ms, payload) VALUES (?1, ?2)",
            params![now_ms() as i64, payload],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn load_snapshot(&self) -> PersistResult<Option<LibrarySnapshotV1>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let payload: Option<Vec<u8>> = conn
            .query_row(
                "SELECT payload FROM snapshots ORDER BY id DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        payload.map(|bytes| decode_snapshot(&bytes)).transpose()
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
