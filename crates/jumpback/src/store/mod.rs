//! # Storage Layer
//!
//! Jumpback keeps one small database: a JSON object mapping each document id to its
//! last [`PositionRecord`]. This module holds the in-memory side of it
//! ([`PositionStore`]) and the [`backend::StorageAdapter`] abstraction through which
//! it reaches durable storage.
//!
//! ## Memory Is Truth
//!
//! While the process is alive the [`PositionStore`] is the single source of truth.
//! The durable file is a lagging copy:
//!
//! 1. **Load**: the file is read once at startup. Missing or malformed → empty store.
//! 2. **Mutate**: captures, renames, deletes and the sweeper only touch memory.
//! 3. **Flush**: the whole map is written back on a timer and at shutdown, and only
//!    when it differs from the last successful write (see [`crate::flush`]).
//!
//! ## Implementations
//!
//! - [`fs_backend::FsAdapter`]: Real files under a root directory, atomic writes.
//! - [`mem_backend::MemAdapter`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <root>/
//! └── .obsidian/plugins/cursor-jumper/
//!     └── cursor-positions.json   # Position database (configurable)
//! ```

use crate::error::Result;
use crate::model::{DocId, PositionMap, PositionRecord};
use std::path::Path;
use tracing::warn;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

use backend::StorageAdapter;

/// In-memory mapping from document to its last position.
///
/// Equality is structural: key order never matters, every record field must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionStore {
    entries: PositionMap,
}

impl PositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(entries: PositionMap) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &DocId) -> Option<&PositionRecord> {
        self.entries.get(id)
    }

    pub fn set(&mut self, id: DocId, record: PositionRecord) {
        self.entries.insert(id, record);
    }

    pub fn remove(&mut self, id: &DocId) -> Option<PositionRecord> {
        self.entries.remove(id)
    }

    pub fn contains(&self, id: &DocId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DocId, &PositionRecord)> {
        self.entries.iter()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut PositionMap {
        &mut self.entries
    }

    pub fn as_map(&self) -> &PositionMap {
        &self.entries
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let entries: PositionMap = serde_json::from_str(text)?;
        Ok(Self { entries })
    }

    /// Read the database through `adapter`.
    ///
    /// Never fails: an absent file, an adapter error or malformed JSON all yield an
    /// empty store, since losing history is not worth interrupting the host for.
    pub fn load<A: StorageAdapter>(adapter: &A, path: &Path) -> Self {
        match Self::try_load(adapter, path) {
            Ok(store) => store,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read position database, starting empty"
                );
                Self::new()
            }
        }
    }

    fn try_load<A: StorageAdapter>(adapter: &A, path: &Path) -> Result<Self> {
        match adapter.read_if_exists(path)? {
            Some(text) => Self::from_json(&text),
            None => Ok(Self::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemAdapter;
    use super::*;
    use crate::model::Cursor;
    use tracing_test::traced_test;

    fn record(line: u32) -> PositionRecord {
        PositionRecord::new(Some(Cursor::caret(line, 0)), None).stamped(1)
    }

    #[test]
    fn test_get_set_remove() {
        let mut store = PositionStore::new();
        let id = DocId::from("a.md");
        assert!(store.get(&id).is_none());

        store.set(id.clone(), record(1));
        assert_eq!(store.get(&id), Some(&record(1)));

        store.set(id.clone(), record(2));
        assert_eq!(store.get(&id), Some(&record(2)));
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove(&id), Some(record(2)));
        assert!(store.get(&id).is_none());
        assert!(store.remove(&id).is_none());
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut a = PositionStore::new();
        a.set("x.md".into(), record(1));
        a.set("y.md".into(), record(2));

        let mut b = PositionStore::new();
        b.set("y.md".into(), record(2));
        b.set("x.md".into(), record(1));

        assert_eq!(a, b);

        b.set("y.md".into(), record(3));
        assert_ne!(a, b);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let adapter = MemAdapter::new();
        let store = PositionStore::load(&adapter, Path::new("db/positions.json"));
        assert!(store.is_empty());
    }

    #[test]
    #[traced_test]
    fn test_load_malformed_file_is_empty() {
        let adapter = MemAdapter::new();
        adapter.insert_file("db/positions.json", "{ this is not json");
        let store = PositionStore::load(&adapter, Path::new("db/positions.json"));
        assert!(store.is_empty());
        assert!(logs_contain("failed to read position database"));
    }

    #[test]
    fn test_load_read_error_is_empty() {
        let adapter = MemAdapter::new();
        adapter.insert_file("db/positions.json", "{}");
        adapter.set_simulate_read_error(true);
        let store = PositionStore::load(&adapter, Path::new("db/positions.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_existing_entries() {
        let adapter = MemAdapter::new();
        adapter.insert_file(
            "db/positions.json",
            r#"{"a.md":{"scroll":3.0,"lastSavedTime":5},"b.md":{"cursor":{"from":{"ch":0,"line":1},"to":{"ch":2,"line":1}}}}"#,
        );
        let store = PositionStore::load(&adapter, Path::new("db/positions.json"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&"a.md".into()).unwrap().scroll, Some(3.0));
        assert!(store.get(&"b.md".into()).unwrap().last_saved_time.is_none());
    }
}
