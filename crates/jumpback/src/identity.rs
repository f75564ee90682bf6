//! Keeps store keys in step with document renames and deletions.
//!
//! Document ids are paths, so they change when the user moves a file. Both
//! operations only touch memory; a bulk reorganization of hundreds of files costs
//! one flush on the next timer tick, not one per file.

use crate::model::DocId;
use crate::store::PositionStore;
use tracing::debug;

/// Move the record stored under `old` to `new`, unchanged. Returns whether a record moved.
pub fn rename(store: &mut PositionStore, old: &DocId, new: &DocId) -> bool {
    if old == new {
        return store.contains(old);
    }
    match store.remove(old) {
        Some(record) => {
            debug!(from = %old, to = %new, "moved position record");
            store.set(new.clone(), record);
            true
        }
        None => false,
    }
}

/// Forget the record for `id`. Returns whether there was one.
pub fn delete(store: &mut PositionStore, id: &DocId) -> bool {
    let removed = store.remove(id).is_some();
    if removed {
        debug!(doc = %id, "dropped position record");
    }
    removed
}
