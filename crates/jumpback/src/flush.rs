//! # Dirty Tracking and Flushing
//!
//! Editors emit edit and scroll events far more often than it is useful to write a
//! file. Captures therefore only touch memory, and the database reaches storage in
//! whole-map flushes:
//!
//! - **When**: on a fixed interval ([`FlushSchedule`]) and once at shutdown. Never
//!   per edit.
//! - **Whether**: only if the store differs from the copy taken after the last
//!   successful write (the *snapshot*). Comparison is structural, so reverting to
//!   the previously written state costs no I/O either.
//!
//! ## Write Lifecycle
//!
//! ```text
//! begin(store) ──► PendingFlush ──► execute(adapter) ──► finish(pending, result)
//!     │                                                        │
//!     └─ None if clean or already in flight                    └─ snapshot replaced on Ok only
//! ```
//!
//! Splitting the write lets hosts with asynchronous storage run `execute` on their own
//! schedule. Only one flush may be in flight; the snapshot is replaced only after the
//! write is known to have succeeded, so a failed write leaves the same delta for the
//! next attempt.

use crate::error::Result;
use crate::store::backend::StorageAdapter;
use crate::store::PositionStore;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A serialized database waiting to be written.
#[derive(Debug)]
pub struct PendingFlush {
    path: PathBuf,
    contents: String,
    snapshot: PositionStore,
}

impl PendingFlush {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Make sure the parent directory exists, then write the file.
    pub fn execute<A: StorageAdapter + ?Sized>(&self, adapter: &A) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !adapter.exists(parent)? {
                adapter.mkdir(parent)?;
            }
        }
        adapter.write(&self.path, &self.contents)
    }
}

/// Remembers what was last written and whether a write is in flight.
#[derive(Debug, Default)]
pub struct FlushTracker {
    last_flushed: PositionStore,
    in_progress: bool,
}

impl FlushTracker {
    /// Start tracking with `snapshot` as the state known to be on disk.
    pub fn new(snapshot: PositionStore) -> Self {
        Self {
            last_flushed: snapshot,
            in_progress: false,
        }
    }

    pub fn should_flush(&self, store: &PositionStore) -> bool {
        *store != self.last_flushed
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Serialize `store` for writing if it is dirty and no other flush is in flight.
    pub fn begin(&mut self, store: &PositionStore, path: &Path) -> Result<Option<PendingFlush>> {
        if self.in_progress {
            debug!("flush already in progress, skipping");
            return Ok(None);
        }
        if !self.should_flush(store) {
            return Ok(None);
        }

        let contents = store.to_json()?;
        self.in_progress = true;
        Ok(Some(PendingFlush {
            path: path.to_path_buf(),
            contents,
            snapshot: store.clone(),
        }))
    }

    /// Record the outcome of a write started with [`FlushTracker::begin`].
    pub fn finish(&mut self, pending: PendingFlush, result: Result<()>) -> Result<()> {
        self.in_progress = false;
        match result {
            Ok(()) => {
                debug!(
                    path = %pending.path.display(),
                    entries = pending.snapshot.len(),
                    "flushed position database"
                );
                self.last_flushed = pending.snapshot;
                Ok(())
            }
            Err(e) => {
                warn!(
                    path = %pending.path.display(),
                    error = %e,
                    "failed to write position database, will retry"
                );
                Err(e)
            }
        }
    }

    /// Begin, execute and finish in one go. Returns whether anything was written.
    pub fn flush<A: StorageAdapter + ?Sized>(
        &mut self,
        store: &PositionStore,
        path: &Path,
        adapter: &A,
    ) -> Result<bool> {
        let Some(pending) = self.begin(store, path)? else {
            return Ok(false);
        };
        let result = pending.execute(adapter);
        self.finish(pending, result)?;
        Ok(true)
    }
}

/// Recurring flush deadline.
#[derive(Debug, Clone)]
pub struct FlushSchedule {
    interval_ms: i64,
    next_due_ms: Option<i64>,
}

impl FlushSchedule {
    pub fn start(interval_ms: i64, now_ms: i64) -> Self {
        Self {
            interval_ms,
            next_due_ms: Some(now_ms.saturating_add(interval_ms)),
        }
    }

    /// True once per elapsed interval; re-arms for the next one.
    pub fn poll(&mut self, now_ms: i64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
                true
            }
            _ => false,
        }
    }

    pub fn next_due_ms(&self) -> Option<i64> {
        self.next_due_ms
    }

    pub fn cancel(&mut self) {
        self.next_due_ms = None;
    }
}
