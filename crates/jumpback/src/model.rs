//! # Domain Model: Documents and Their Last Positions
//!
//! This module defines the data that jumpback remembers: a [`PositionRecord`] per
//! [`DocId`].
//!
//! ## What a Position Is
//!
//! A position is whatever the editor could tell us about where the user was:
//!
//! - **Cursor**: the selection as an anchor (`from`) and head (`to`), each a
//!   zero-based `{line, ch}` pair.
//! - **Scroll**: the vertical scroll offset in host units, rounded to 4 decimals.
//!
//! Either may be missing (a reading view has no cursor; some views expose no
//! scroll). A record with neither is meaningless and is never stored.
//!
//! ## On-Disk Shape
//!
//! ```json
//! {
//!   "notes/a.md": {
//!     "scroll": 120.5,
//!     "cursor": { "from": { "ch": 0, "line": 4 }, "to": { "ch": 0, "line": 4 } },
//!     "lastSavedTime": 1718000000000
//!   }
//! }
//! ```
//!
//! ## Lenient Reading
//!
//! The database file may have been written by older versions or edited by hand.
//! Reading never fails because of a single bad field: a malformed `cursor` or
//! `scroll` is treated as absent, and a missing `lastSavedTime` is left for the
//! retention sweeper to backfill.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identity of a document in the host's namespace (usually a vault-relative path).
///
/// Not stable across renames; see [`crate::identity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A zero-based line/column location in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPos {
    pub ch: u32,
    pub line: u32,
}

impl CursorPos {
    pub fn new(line: u32, ch: u32) -> Self {
        Self { ch, line }
    }
}

/// A selection: `from` is the anchor, `to` is the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub from: CursorPos,
    pub to: CursorPos,
}

impl Cursor {
    pub fn new(from: CursorPos, to: CursorPos) -> Self {
        Self { from, to }
    }

    /// A collapsed selection (a plain caret).
    pub fn caret(line: u32, ch: u32) -> Self {
        let pos = CursorPos::new(line, ch);
        Self { from: pos, to: pos }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    #[serde(
        rename = "lastSavedTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_saved_time: Option<i64>,
}

// Field-by-field lenient decoding: a bad field degrades to "not available"
// instead of failing the whole database.
impl<'de> Deserialize<'de> for PositionRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = RecordHelper::deserialize(deserializer)?;

        let scroll = helper.scroll.as_ref().and_then(serde_json::Value::as_f64);
        let cursor = helper
            .cursor
            .and_then(|value| serde_json::from_value::<Cursor>(value).ok());
        let last_saved_time = helper.last_saved_time.as_ref().and_then(|value| {
            value
                .as_i64()
                .or_else(|| value.as_f64().map(|ms| ms.trunc() as i64))
        });

        Ok(PositionRecord {
            scroll,
            cursor,
            last_saved_time,
        })
    }
}

#[derive(Deserialize)]
struct RecordHelper {
    #[serde(default)]
    scroll: Option<serde_json::Value>,
    #[serde(default)]
    cursor: Option<serde_json::Value>,
    #[serde(default, rename = "lastSavedTime")]
    last_saved_time: Option<serde_json::Value>,
}

impl PositionRecord {
    pub fn new(cursor: Option<Cursor>, scroll: Option<f64>) -> Self {
        Self {
            scroll: scroll.map(round_scroll),
            cursor,
            last_saved_time: None,
        }
    }

    /// True when the record carries neither a cursor nor a scroll offset.
    pub fn is_empty(&self) -> bool {
        self.cursor.is_none() && self.scroll.is_none()
    }

    pub fn stamped(mut self, now_ms: i64) -> Self {
        self.last_saved_time = Some(now_ms);
        self
    }

    /// Human label for the position, e.g. `"Line 5"` (1-based) or `"Last position"`.
    pub fn target_label(&self) -> String {
        match &self.cursor {
            Some(cursor) => format!("Line {}", cursor.from.line + 1),
            None => "Last position".to_string(),
        }
    }
}

/// Rounds a scroll offset to 4 decimal places.
pub fn round_scroll(offset: f64) -> f64 {
    (offset * 10_000.0).round() / 10_000.0
}

/// The serialized form of the whole database.
pub type PositionMap = HashMap<DocId, PositionRecord>;
