use crate::error::Result;
use std::path::Path;

/// Abstract interface for the host's durable storage.
///
/// Paths are relative to whatever root the adapter was built with (a vault, a
/// plugin data directory). The engine only ever needs these four operations;
/// everything else about the database (when to write, what to write) lives in
/// [`crate::flush`].
pub trait StorageAdapter {
    /// Read a whole file as text.
    /// Returns Ok(None) if the file does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_if_exists(&self, path: &Path) -> Result<Option<String>>;

    /// Replace the file's contents.
    /// SHOULD be atomic (e.g. write to tmp then rename) to avoid torn databases.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> Result<bool>;

    /// Create a directory (and any missing parents).
    fn mkdir(&self, path: &Path) -> Result<()>;
}

impl<T: StorageAdapter + ?Sized> StorageAdapter for &T {
    fn read_if_exists(&self, path: &Path) -> Result<Option<String>> {
        (**self).read_if_exists(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        (**self).write(path, contents)
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        (**self).exists(path)
    }

    fn mkdir(&self, path: &Path) -> Result<()> {
        (**self).mkdir(path)
    }
}
