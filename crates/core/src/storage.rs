//! Byte-level storage primitives.
//!
//! The controller never touches the filesystem directly; it goes through a
//! [`Storage`] implementation. [`FileStorage`] is the real one and
//! [`MemoryStorage`] backs tests and embedders that keep the list elsewhere.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::error::StorageError;

/// Read/replace access to the location holding a todo list.
pub trait Storage {
    /// Reads the full contents at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if nothing exists there and
    /// [`StorageError::Io`] for any other failure.
    fn read_all(&self, location: &Path) -> Result<Vec<u8>, StorageError>;

    /// Replaces the contents at `location` with `bytes`.
    ///
    /// Readers must observe either the old or the new contents, never a
    /// partial write.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the write fails.
    fn write_all(&mut self, location: &Path, bytes: &[u8]) -> Result<(), StorageError>;

    /// Creates an empty entry at `location` unless one already exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the entry cannot be created.
    fn ensure_exists(&mut self, location: &Path) -> Result<(), StorageError>;
}

/// Filesystem-backed storage.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash mid-write never leaves a truncated list.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl FileStorage {
    /// Creates a filesystem storage.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn parent_dir(location: &Path) -> &Path {
    match location.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn create_parent(location: &Path) -> Result<(), StorageError> {
    let parent = parent_dir(location);
    if !parent.exists() {
        debug!(?parent, "creating todo directory");
        fs::create_dir_all(parent).map_err(|e| StorageError::from_io(parent, e))?;
    }
    Ok(())
}

impl Storage for FileStorage {
    #[instrument(skip(self))]
    fn read_all(&self, location: &Path) -> Result<Vec<u8>, StorageError> {
        let bytes = fs::read(location).map_err(|e| StorageError::from_io(location, e))?;
        debug!(bytes = bytes.len(), "read todo file");
        Ok(bytes)
    }

    #[instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    fn write_all(&mut self, location: &Path, bytes: &[u8]) -> Result<(), StorageError> {
        let io_err = |e: std::io::Error| StorageError::Io {
            path: location.to_path_buf(),
            source: e,
        };

        create_parent(location)?;
        let mut tmp = NamedTempFile::new_in(parent_dir(location)).map_err(io_err)?;
        tmp.write_all(bytes).map_err(io_err)?;
        // The temp file is created private; keep the mode of the file it replaces
        if let Ok(meta) = fs::metadata(location) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(io_err)?;
        }
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(location).map_err(|e| io_err(e.error))?;

        debug!("todo file saved");
        Ok(())
    }

    #[instrument(skip(self))]
    fn ensure_exists(&mut self, location: &Path) -> Result<(), StorageError> {
        create_parent(location)?;
        // `append` opens without truncating an existing file
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(location)
            .map_err(|e| StorageError::Io {
                path: location.to_path_buf(),
                source: e,
            })?;
        Ok(())
    }
}

/// In-memory storage with switchable failures.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use jot_core::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// let path = Path::new("todo.json");
///
/// assert!(storage.read_all(path).unwrap_err().is_not_found());
/// storage.write_all(path, b"[]").unwrap();
/// assert_eq!(storage.contents(path), Some(&b"[]"[..]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: HashMap<PathBuf, Vec<u8>>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
    fail_init: bool,
}

impl MemoryStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this storage with `bytes` stored at `location`.
    #[must_use]
    pub fn with_file(mut self, location: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        self.files.insert(location.into(), bytes.into());
        self
    }

    /// Returns the bytes stored at `location`, if any.
    #[must_use]
    pub fn contents(&self, location: &Path) -> Option<&[u8]> {
        self.files.get(location).map(Vec::as_slice)
    }

    /// Returns how many successful writes have happened.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Makes every subsequent read fail with an I/O error.
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Makes every subsequent write fail with an I/O error.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Makes [`Storage::ensure_exists`] fail for missing entries.
    pub fn set_fail_init(&mut self, fail: bool) {
        self.fail_init = fail;
    }

    fn injected(location: &Path, what: &str) -> StorageError {
        StorageError::Io {
            path: location.to_path_buf(),
            source: std::io::Error::other(format!("injected {what} failure")),
        }
    }
}

impl Storage for MemoryStorage {
    fn read_all(&self, location: &Path) -> Result<Vec<u8>, StorageError> {
        if self.fail_reads {
            return Err(Self::injected(location, "read"));
        }
        self.files
            .get(location)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                path: location.to_path_buf(),
            })
    }

    fn write_all(&mut self, location: &Path, bytes: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(Self::injected(location, "write"));
        }
        self.files.insert(location.to_path_buf(), bytes.to_vec());
        self.writes += 1;
        Ok(())
    }

    fn ensure_exists(&mut self, location: &Path) -> Result<(), StorageError> {
        if self.files.contains_key(location) {
            return Ok(());
        }
        if self.fail_init {
            return Err(Self::injected(location, "create"));
        }
        self.files.insert(location.to_path_buf(), Vec::new());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_read_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = FileStorage
            .read_all(&dir.path().join("missing.json"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn file_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        let mut storage = FileStorage::new();

        storage.write_all(&path, b"first").unwrap();
        storage.write_all(&path, b"second").unwrap();

        assert_eq!(storage.read_all(&path).unwrap(), b"second");
    }

    #[test]
    fn file_write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");

        FileStorage.write_all(&path, b"[]").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn file_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("todo.json");

        FileStorage.write_all(&path, b"[]").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn file_ensure_exists_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("todo.json");

        FileStorage.ensure_exists(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"");
    }

    #[test]
    fn file_ensure_exists_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(&path, "keep me").unwrap();

        FileStorage.ensure_exists(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn file_ensure_exists_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = FileStorage
            .ensure_exists(&blocker.join("todo.json"))
            .unwrap_err();
        assert!(!err.is_not_found());
    }

    #[cfg(unix)]
    #[test]
    fn file_write_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(&path, "[]").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        FileStorage.write_all(&path, b"[{}]").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        assert_eq!(fs::read(&path).unwrap(), b"[{}]");
    }

    #[test]
    fn memory_ensure_exists_creates_empty_entry() {
        let mut storage = MemoryStorage::new();
        let path = Path::new("todo.json");

        storage.ensure_exists(path).unwrap();
        assert_eq!(storage.contents(path), Some(&b""[..]));
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn memory_injected_failures() {
        let path = Path::new("todo.json");
        let mut storage = MemoryStorage::new().with_file(path, "[]");

        storage.set_fail_reads(true);
        assert!(!storage.read_all(path).unwrap_err().is_not_found());

        storage.set_fail_writes(true);
        assert!(storage.write_all(path, b"x").is_err());
        assert_eq!(storage.contents(path), Some(&b"[]"[..]));

        storage.set_fail_init(true);
        // Existing entries are fine even when creation would fail
        assert!(storage.ensure_exists(path).is_ok());
        assert!(storage.ensure_exists(Path::new("other.json")).is_err());
    }
}
