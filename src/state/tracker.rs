use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use crate::error::{ArchiveError, Result};

/// Source of truth for the time of the last successful archive.
///
/// The value is a Unix timestamp in seconds; 0 means "never archived".
pub trait ArchiveTracker {
    /// Most recently recorded archive time, or 0 if none was ever recorded
    fn last_archive_time(&self) -> Result<i64>;

    /// Append `timestamp` as the new current archive time
    fn record_archive(&mut self, timestamp: i64) -> Result<()>;
}

/// The ArchiveStore keeps the archive timestamp log in SQLite.
///
/// Rows are only ever appended; the current value is the newest row.
/// The database file is opened and closed around every operation.
pub struct ArchiveStore {
    db_path: PathBuf,
}

impl ArchiveStore {
    /// Open (creating if needed) the store at `db_path`
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();

        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ArchiveError::Unreadable {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let store = ArchiveStore { db_path };
        store.init_schema()?;

        log::info!("📁 Archive database initialized at: {}", store.path().display());
        Ok(store)
    }

    /// Default database location in the user's data directory:
    /// - Linux: ~/.local/share/file-archiver/archive_date.db
    /// - macOS: ~/Library/Application Support/file-archiver/archive_date.db
    /// - Windows: %APPDATA%\file-archiver\archive_date.db
    pub fn default_db_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        path.push("file-archiver");
        path.push("archive_date.db");
        path
    }

    /// Get the path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }

    /// Create the log table and seed it with 0 the first time
    fn init_schema(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute("CREATE TABLE IF NOT EXISTS tbl_archive (time INTEGER)", [])?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tbl_archive", [], |row| row.get(0))?;
        if count == 0 {
            conn.execute("INSERT INTO tbl_archive (time) VALUES (0)", [])?;
            log::info!("🌱 Seeded empty archive log");
        }

        Ok(())
    }
}

impl ArchiveTracker for ArchiveStore {
    fn last_archive_time(&self) -> Result<i64> {
        let conn = self.connect()?;
        let time: Option<Option<i64>> = conn
            .query_row(
                "SELECT time FROM tbl_archive ORDER BY rowid DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(time.flatten().unwrap_or(0))
    }

    fn record_archive(&mut self, timestamp: i64) -> Result<()> {
        let conn = self.connect()?;
        conn.execute("INSERT INTO tbl_archive (time) VALUES (?1)", [timestamp])?;
        log::info!("🕒 Recorded archive time {}", timestamp);
        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for ArchiveStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}

/// Tracker that lives only for the current session
#[derive(Debug, Default, Clone)]
pub struct MemoryTracker {
    log: Vec<i64>,
}

impl MemoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing archive time
    #[cfg(test)]
    pub fn with_time(timestamp: i64) -> Self {
        MemoryTracker { log: vec![timestamp] }
    }
}

impl ArchiveTracker for MemoryTracker {
    fn last_archive_time(&self) -> Result<i64> {
        Ok(self.log.last().copied().unwrap_or(0))
    }

    fn record_archive(&mut self, timestamp: i64) -> Result<()> {
        self.log.push(timestamp);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_store_reads_zero() {
        let dir = tempdir().unwrap();
        let store = ArchiveStore::open(dir.path().join("archive.db")).unwrap();
        assert_eq!(store.last_archive_time().unwrap(), 0);
    }

    #[test]
    fn test_record_then_read() {
        let dir = tempdir().unwrap();
        let mut store = ArchiveStore::open(dir.path().join("archive.db")).unwrap();

        store.record_archive(1_700_000_000).unwrap();

        assert_eq!(store.last_archive_time().unwrap(), 1_700_000_000);
    }

    #[test]
    fn test_newest_row_wins_even_if_smaller() {
        let dir = tempdir().unwrap();
        let mut store = ArchiveStore::open(dir.path().join("archive.db")).unwrap();

        store.record_archive(200).unwrap();
        store.record_archive(150).unwrap();

        assert_eq!(store.last_archive_time().unwrap(), 150);
    }

    #[test]
    fn test_value_survives_reopen() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("nested").join("archive.db");

        {
            let mut store = ArchiveStore::open(&db).unwrap();
            store.record_archive(42).unwrap();
        }

        // Reopening must not seed another 0 over the recorded value
        let store = ArchiveStore::open(&db).unwrap();
        assert_eq!(store.last_archive_time().unwrap(), 42);
        assert_eq!(store.path(), db.as_path());
    }

    #[test]
    fn test_memory_tracker() {
        let mut tracker = MemoryTracker::new();
        assert_eq!(tracker.last_archive_time().unwrap(), 0);

        tracker.record_archive(7).unwrap();
        assert_eq!(tracker.last_archive_time().unwrap(), 7);

        assert_eq!(MemoryTracker::with_time(9).last_archive_time().unwrap(), 9);
    }
}
