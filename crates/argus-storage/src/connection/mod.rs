//! Connection management: one serialized connection per radar database.

pub mod pragmas;
pub mod writer;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use argus_core::errors::StorageError;
use rusqlite::Connection;

use self::pragmas::apply_pragmas;

/// Owns the single connection a bootstrap session runs on.
pub struct RadarDatabase {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl RadarDatabase {
    /// Open (or create) a database at the given path and apply pragmas.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|e| StorageError::SqliteError {
            message: format!("open {}: {e}", path.display()),
        })?;
        apply_pragmas(&conn)?;
        tracing::debug!(path = %path.display(), "opened radar database");

        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
        apply_pragmas(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Delete the database file and its WAL/SHM side files, then open a
    /// fresh database at the same path.
    pub fn recreate(path: &Path) -> Result<Self, StorageError> {
        for candidate in database_files(path) {
            if candidate.exists() {
                std::fs::remove_file(&candidate).map_err(|e| StorageError::Io {
                    path: candidate.display().to_string(),
                    message: e.to_string(),
                })?;
                tracing::debug!(path = %candidate.display(), "removed database file");
            }
        }
        Self::open(path)
    }

    /// Execute an operation with the serialized connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::SqliteError {
            message: "connection lock poisoned".to_string(),
        })?;
        f(&guard)
    }

    /// Get the database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// The main database file plus the side files WAL mode leaves next to it.
fn database_files(path: &Path) -> [PathBuf; 3] {
    let with_suffix = |suffix: &str| {
        let mut name = path.as_os_str().to_os_string();
        name.push(suffix);
        PathBuf::from(name)
    };
    [path.to_path_buf(), with_suffix("-wal"), with_suffix("-shm")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_files_share_the_database_stem() {
        let files = database_files(Path::new("/tmp/radar_db.sqlite"));
        assert_eq!(files[1], PathBuf::from("/tmp/radar_db.sqlite-wal"));
        assert_eq!(files[2], PathBuf::from("/tmp/radar_db.sqlite-shm"));
    }
}
