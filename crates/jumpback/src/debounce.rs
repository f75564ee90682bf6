//! Leading-edge debounce guard for position captures.
//!
//! The first trigger runs immediately and arms a cooldown. Triggers that arrive
//! while armed are swallowed and push the cooldown out again, so a burst of
//! keystrokes or scroll events collapses into the single capture at its start.
//! Once the window passes with no triggers, the guard disarms and the next
//! trigger runs immediately again.
//!
//! Firing on the leading edge means the first movement after opening a document
//! is recorded right away, even if the document is closed a moment later.

/// Quiet period that separates two captures from the same trigger.
pub const CAPTURE_DEBOUNCE_MS: i64 = 300;

#[derive(Debug, Clone)]
pub struct LeadingDebounce {
    window_ms: i64,
    armed_until: Option<i64>,
}

impl LeadingDebounce {
    pub fn new(window_ms: i64) -> Self {
        Self {
            window_ms,
            armed_until: None,
        }
    }

    /// Register a trigger at `now_ms`. Returns true when the caller should run.
    pub fn trigger(&mut self, now_ms: i64) -> bool {
        let suppressed = self.is_armed(now_ms);
        self.armed_until = Some(now_ms.saturating_add(self.window_ms));
        !suppressed
    }

    pub fn is_armed(&self, now_ms: i64) -> bool {
        matches!(self.armed_until, Some(until) if now_ms < until)
    }

    pub fn cancel(&mut self) {
        self.armed_until = None;
    }
}

impl Default for LeadingDebounce {
    fn default() -> Self {
        Self::new(CAPTURE_DEBOUNCE_MS)
    }
}
