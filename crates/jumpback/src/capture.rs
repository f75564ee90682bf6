//! # Capturing and Restoring Positions
//!
//! [`capture_state`] reads the active view into a [`PositionRecord`];
//! [`restore_state`] writes one back. Neither touches the store: the session
//! decides when to capture and where to keep the result.
//!
//! ## Restore Rules
//!
//! 1. The active document must still be the one the record belongs to. The user
//!    may have switched documents between "offer to jump" and "jump"; in that case
//!    nothing happens ([`RestoreOutcome::Stale`]).
//! 2. If the record has a cursor: select it and scroll it into view (centered).
//! 3. If the record has a scroll offset that differs from the current one: apply it.
//!    When restoring the cursor already put the view in the right place this is a
//!    no-op, which avoids a visible second jump.
//! 4. Focus the editor.

use crate::host::EditorHost;
use crate::model::{DocId, PositionRecord};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The position was applied to the active editor.
    Applied,
    /// The active document is no longer the record's document.
    Stale,
    /// There is no active document at all.
    NoActiveDocument,
}

/// Read the active view's selection and scroll offset.
///
/// Returns `None` when there is no active document or when neither value is
/// available; such a capture must not be stored. A non-finite scroll offset
/// counts as unavailable.
pub fn capture_state<H: EditorHost + ?Sized>(host: &H) -> Option<PositionRecord> {
    host.active_document()?;
    let scroll = host.scroll().filter(|s| s.is_finite());
    let record = PositionRecord::new(host.selection(), scroll);
    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}

/// Apply `record` to the active editor if it still shows `id`.
pub fn restore_state<H: EditorHost + ?Sized>(
    host: &mut H,
    id: &DocId,
    record: &PositionRecord,
) -> RestoreOutcome {
    let Some(active) = host.active_document() else {
        return RestoreOutcome::NoActiveDocument;
    };
    if &active != id {
        debug!(expected = %id, active = %active, "active document changed, not restoring");
        return RestoreOutcome::Stale;
    }

    if let Some(cursor) = &record.cursor {
        host.set_selection(cursor);
        host.scroll_into_view(cursor, true);
    }
    if let Some(target) = record.scroll {
        if host.scroll().filter(|s| s.is_finite()) != Some(target) {
            host.set_scroll(target);
        }
    }
    host.focus();
    RestoreOutcome::Applied
}
