use super::backend::StorageAdapter;
use crate::error::{JumpbackError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

/// Filesystem adapter rooted at a directory (typically the vault root).
pub struct FsAdapter {
    root: PathBuf,
}

impl FsAdapter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a store path against the root. Absolute paths are used as given;
    /// relative paths may not climb out of the root.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(JumpbackError::Store(format!(
                "Path escapes the storage root: {}",
                path.display()
            )));
        }
        Ok(self.root.join(path))
    }
}

impl StorageAdapter for FsAdapter {
    fn read_if_exists(&self, path: &Path) -> Result<Option<String>> {
        let full = self.resolve(path)?;
        match fs::read_to_string(&full) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JumpbackError::Io(e)),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let target = self.resolve(path)?;
        let dir = match target.parent() {
            Some(parent) => parent.to_path_buf(),
            None => self.root.clone(),
        };

        // Atomic write
        let tmp = dir.join(format!(".jumpback-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, contents).map_err(JumpbackError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(JumpbackError::Io(e));
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        Ok(self.resolve(path)?.exists())
    }

    fn mkdir(&self, path: &Path) -> Result<()> {
        let full = self.resolve(path)?;
        if !full.exists() {
            fs::create_dir_all(&full).map_err(JumpbackError::Io)?;
        }
        Ok(())
    }
}
