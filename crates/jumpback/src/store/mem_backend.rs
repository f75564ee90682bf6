use super::backend::StorageAdapter;
use crate::error::{JumpbackError, Result};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// In-memory storage adapter for testing.
///
/// Uses `RefCell` for interior mutability since the engine is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageAdapter` trait to use `&self` for all methods.
///
/// Counts writes so tests can assert exactly how much I/O a flush performed.
#[derive(Default)]
pub struct MemAdapter {
    files: RefCell<HashMap<PathBuf, String>>,
    dirs: RefCell<HashSet<PathBuf>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
}

impl MemAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation for testing load fallbacks.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Test helper to seed a file without counting it as a write.
    pub fn insert_file(&self, path: impl Into<PathBuf>, contents: &str) {
        self.files
            .borrow_mut()
            .insert(path.into(), contents.to_string());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }
}

impl StorageAdapter for MemAdapter {
    fn read_if_exists(&self, path: &Path) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(JumpbackError::Store("Simulated read error".to_string()));
        }
        Ok(self.files.borrow().get(path).cloned())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(JumpbackError::Store("Simulated write error".to_string()));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        Ok(self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path))
    }

    fn mkdir(&self, path: &Path) -> Result<()> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }
}
