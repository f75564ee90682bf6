//! # The Session Context
//!
//! [`Jumpback`] is the one object a host creates when it loads the feature and
//! drops when it unloads it. It owns the store, the flush bookkeeping, the capture
//! debounce guards, the flush timer and the prompt; there is no global state.
//!
//! ## Wiring a Host
//!
//! | Host event | Call |
//! |------------|------|
//! | feature loaded | [`Jumpback::load`] |
//! | document opened | [`Jumpback::on_document_opened`] → render the returned prompt |
//! | content changed | [`Jumpback::on_content_changed`] |
//! | view scrolled | [`Jumpback::on_scrolled`] |
//! | file renamed / deleted | [`Jumpback::on_renamed`] / [`Jumpback::on_deleted`] |
//! | prompt button | [`Jumpback::confirm_prompt`] / [`Jumpback::dismiss_prompt`] |
//! | any timer tick | [`Jumpback::tick`] → hide the prompt if it expired |
//! | shutdown / unload | [`Jumpback::shutdown`] |
//!
//! Timers are deadlines against the injected [`Clock`]: the host only has to call
//! `tick` regularly (every few hundred milliseconds is plenty).
//!
//! ## Load Sequence
//!
//! 1. Read the database (missing or broken → empty, logged).
//! 2. Sweep stale entries ([`crate::retention`]).
//! 3. If the sweep removed anything, flush immediately instead of waiting for the timer.
//! 4. Arm the flush timer.

use crate::capture::{capture_state, restore_state, RestoreOutcome};
use crate::clock::Clock;
use crate::config::JumpbackConfig;
use crate::debounce::LeadingDebounce;
use crate::error::Result;
use crate::flush::{FlushSchedule, FlushTracker, PendingFlush};
use crate::host::EditorHost;
use crate::identity;
use crate::model::DocId;
use crate::prompt::{PromptView, PromptWidget};
use crate::retention::{self, SweepReport};
use crate::store::backend::StorageAdapter;
use crate::store::PositionStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What happened during a [`Jumpback::tick`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// The flush timer fired and the database was written.
    pub flushed: bool,
    /// The prompt timed out; the host should hide it.
    pub prompt_expired: bool,
}

pub struct Jumpback<A: StorageAdapter, C: Clock> {
    config: JumpbackConfig,
    db_path: PathBuf,
    adapter: A,
    clock: C,
    store: PositionStore,
    tracker: FlushTracker,
    schedule: FlushSchedule,
    change_guard: LeadingDebounce,
    scroll_guard: LeadingDebounce,
    prompt: PromptWidget,
    last_sweep: SweepReport,
}

impl<A: StorageAdapter, C: Clock> Jumpback<A, C> {
    pub fn load(config: JumpbackConfig, adapter: A, clock: C) -> Self {
        let db_path = config.db_path();
        let mut store = PositionStore::load(&adapter, &db_path);
        let on_disk = store.clone();

        let now = clock.now_ms();
        let last_sweep = retention::sweep(&mut store, config.retention_ms(), now);
        let schedule = FlushSchedule::start(config.flush_interval_ms(), now);

        let mut session = Self {
            config,
            db_path,
            adapter,
            clock,
            store,
            tracker: FlushTracker::new(on_disk),
            schedule,
            change_guard: LeadingDebounce::default(),
            scroll_guard: LeadingDebounce::default(),
            prompt: PromptWidget::new(),
            last_sweep,
        };

        if last_sweep.removed > 0 {
            if let Err(e) = session.flush() {
                debug!(error = %e, "post-sweep flush failed, retrying on next tick");
            }
        }
        session
    }

    pub fn config(&self) -> &JumpbackConfig {
        &self.config
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn store(&self) -> &PositionStore {
        &self.store
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Result of the load-time retention sweep.
    pub fn last_sweep(&self) -> SweepReport {
        self.last_sweep
    }

    // --- Host events ---

    /// A document was opened. Returns the prompt to display, if any.
    pub fn on_document_opened<H: EditorHost + ?Sized>(
        &mut self,
        host: &H,
        id: DocId,
    ) -> Option<PromptView> {
        let now = self.clock.now_ms();
        let intent = host.has_navigation_intent();
        let duration = self.config.prompt_duration_ms();
        let record = self.store.get(&id);
        self.prompt.open(id, record, intent, now, duration)
    }

    /// The active document's content changed. Returns whether a capture was stored.
    pub fn on_content_changed<H: EditorHost + ?Sized>(&mut self, host: &H) -> bool {
        let now = self.clock.now_ms();
        self.change_guard.trigger(now) && self.capture(host)
    }

    /// The active document's view scrolled. Returns whether a capture was stored.
    pub fn on_scrolled<H: EditorHost + ?Sized>(&mut self, host: &H) -> bool {
        let now = self.clock.now_ms();
        self.scroll_guard.trigger(now) && self.capture(host)
    }

    pub fn on_renamed(&mut self, old: &DocId, new: &DocId) -> bool {
        identity::rename(&mut self.store, old, new)
    }

    pub fn on_deleted(&mut self, id: &DocId) -> bool {
        identity::delete(&mut self.store, id)
    }

    /// Capture the active view right now, bypassing the debounce guards.
    pub fn capture<H: EditorHost + ?Sized>(&mut self, host: &H) -> bool {
        let Some(id) = host.active_document() else {
            return false;
        };
        let Some(record) = capture_state(host) else {
            return false;
        };
        let now = self.clock.now_ms();
        debug!(doc = %id, label = %record.target_label(), "captured position");
        self.store.set(id, record.stamped(now));
        true
    }

    /// Restore the stored position for `id` directly, without a prompt.
    pub fn restore<H: EditorHost + ?Sized>(
        &self,
        host: &mut H,
        id: &DocId,
    ) -> Option<RestoreOutcome> {
        let record = self.store.get(id)?;
        Some(restore_state(host, id, record))
    }

    // --- Prompt ---

    pub fn prompt(&self) -> Option<PromptView> {
        self.prompt.view()
    }

    pub fn confirm_prompt<H: EditorHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Option<RestoreOutcome> {
        self.prompt.confirm(host)
    }

    pub fn dismiss_prompt(&mut self) -> bool {
        self.prompt.dismiss()
    }

    // --- Timers and flushing ---

    /// Advance the flush and prompt timers.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.now_ms();
        let prompt_expired = self.prompt.expire(now);
        let flushed = self.schedule.poll(now) && self.flush().unwrap_or(false);
        TickReport {
            flushed,
            prompt_expired,
        }
    }

    pub fn should_flush(&self) -> bool {
        self.tracker.should_flush(&self.store)
    }

    /// Write the store if it changed since the last successful write.
    /// Returns whether anything was written.
    pub fn flush(&mut self) -> Result<bool> {
        self.tracker.flush(&self.store, &self.db_path, &self.adapter)
    }

    /// First half of a flush, for hosts that write asynchronously.
    /// Returns `None` when there is nothing to write or a write is still in flight.
    pub fn begin_flush(&mut self) -> Result<Option<PendingFlush>> {
        self.tracker.begin(&self.store, &self.db_path)
    }

    /// Second half of a flush: report how the write of `pending` went.
    pub fn finish_flush(&mut self, pending: PendingFlush, result: Result<()>) -> Result<()> {
        self.tracker.finish(pending, result)
    }

    /// Tear down: close the prompt, stop all timers and make one last flush attempt.
    pub fn shutdown(mut self) -> Result<()> {
        self.prompt.clear();
        self.schedule.cancel();
        self.change_guard.cancel();
        self.scroll_guard.cancel();
        self.flush().map(|_| ())
    }
}
