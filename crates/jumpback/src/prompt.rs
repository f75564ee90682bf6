//! # The "Jump to last position?" Prompt
//!
//! When a document with a remembered position is opened, jumpback does not move the
//! cursor on its own. It offers a small, timed prompt instead:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Jump to Line 42?  [Jump]  ✕ │
//! └──────────────────────────────┘
//! ```
//!
//! ## States
//!
//! ```text
//!            open (record, no navigation intent)
//!   Idle ───────────────────────────────────────► Showing
//!    ▲                                               │
//!    └── confirm (restore) / dismiss / expire / open ┘
//! ```
//!
//! At most one prompt is ever showing. Opening any document first clears the
//! current prompt, so prompts from earlier documents can never pile up.
//!
//! The widget owns no UI. It hands the host a [`PromptView`] to render and tells
//! it when the prompt is gone; rendering is the host's business.

use crate::capture::{restore_state, RestoreOutcome};
use crate::host::EditorHost;
use crate::model::{DocId, PositionRecord};

pub const CONFIRM_LABEL: &str = "Jump";
pub const DISMISS_LABEL: &str = "✕";

/// What the host should display while the prompt is showing.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptView {
    pub doc: DocId,
    pub message: String,
    pub confirm_label: &'static str,
    pub dismiss_label: &'static str,
    pub expires_at_ms: i64,
}

#[derive(Debug, Clone)]
struct ActivePrompt {
    doc: DocId,
    record: PositionRecord,
    expires_at_ms: i64,
}

impl ActivePrompt {
    fn view(&self) -> PromptView {
        PromptView {
            doc: self.doc.clone(),
            message: format!("Jump to {}?", self.record.target_label()),
            confirm_label: CONFIRM_LABEL,
            dismiss_label: DISMISS_LABEL,
            expires_at_ms: self.expires_at_ms,
        }
    }
}

#[derive(Debug, Default)]
pub struct PromptWidget {
    active: Option<ActivePrompt>,
}

impl PromptWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a document open. Always clears the current prompt first; shows a new
    /// one only if a record exists and the host did not open at an explicit target.
    pub fn open(
        &mut self,
        doc: DocId,
        record: Option<&PositionRecord>,
        navigation_intent: bool,
        now_ms: i64,
        duration_ms: i64,
    ) -> Option<PromptView> {
        self.clear();
        let record = record?;
        if navigation_intent {
            return None;
        }

        let prompt = ActivePrompt {
            doc,
            record: record.clone(),
            expires_at_ms: now_ms.saturating_add(duration_ms),
        };
        let view = prompt.view();
        self.active = Some(prompt);
        Some(view)
    }

    /// The user accepted: restore the shown position and close the prompt.
    /// Returns `None` when no prompt was showing.
    pub fn confirm<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> Option<RestoreOutcome> {
        let prompt = self.active.take()?;
        Some(restore_state(host, &prompt.doc, &prompt.record))
    }

    /// The user declined. Returns whether a prompt was showing.
    pub fn dismiss(&mut self) -> bool {
        self.clear()
    }

    /// Close the prompt if its time is up. Returns whether it just expired.
    pub fn expire(&mut self, now_ms: i64) -> bool {
        match &self.active {
            Some(prompt) if now_ms >= prompt.expires_at_ms => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Force the widget back to idle. Returns whether a prompt was showing.
    pub fn clear(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_showing(&self) -> bool {
        self.active.is_some()
    }

    pub fn view(&self) -> Option<PromptView> {
        self.active.as_ref().map(ActivePrompt::view)
    }
}
