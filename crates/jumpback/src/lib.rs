//! # Jumpback Architecture
//!
//! Jumpback remembers where you were in every document (selection and scroll
//! offset) and offers to take you back there the next time you open it.
//!
//! It is a **host-agnostic library**: it knows nothing about any particular editor,
//! event bus or filesystem. The host feeds it events and implements two small
//! traits; jumpback decides what to remember, when to write it down and what to
//! forget.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (editor plugin, CLI, tests)                           │
//! │  - Implements EditorHost and StorageAdapter                 │
//! │  - Delivers events, renders the prompt, calls tick()        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - One context object per host lifetime                     │
//! │  - Routes events, owns timers, debounce guards, prompt      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (capture, flush, retention, identity, prompt)       │
//! │  - Pure logic over PositionStore                            │
//! │  - No I/O except through StorageAdapter                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PositionStore (memory), StorageAdapter trait             │
//! │  - FsAdapter (production), MemAdapter (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Three Constraints
//!
//! 1. **Never lose the latest position**: captures land in memory immediately and
//!    the first movement in a burst is recorded, not the last.
//! 2. **Never write needlessly**: flushes run on a timer and only when the store
//!    differs from what was last written.
//! 3. **Never accumulate garbage**: renames and deletes keep keys current, and old
//!    entries are swept on load.
//!
//! ## Key Principle: No Hidden State
//!
//! Everything lives in a [`session::Jumpback`] value the host owns. Time comes from
//! an injected [`clock::Clock`]; storage from an injected
//! [`store::backend::StorageAdapter`]. The same engine runs against a real vault,
//! an in-memory map, or a CLI pointed at a JSON file.
//!
//! ## Testing Strategy
//!
//! - **Engine modules**: unit tests next to the code, on `PositionStore`,
//!   [`store::mem_backend::MemAdapter`] and `test_utils::FakeEditor` (behind the
//!   `test_utils` feature).
//! - **Session**: integration tests in `tests/` driving whole host lifecycles with a
//!   [`clock::ManualClock`].
//! - **Filesystem adapter**: integration tests against temp directories.
//!
//! ## Module Overview
//!
//! - [`session`]: The context object hosts interact with
//! - [`model`]: `DocId`, `PositionRecord`, cursor types
//! - [`store`]: In-memory store and storage adapters
//! - [`flush`]: Dirty tracking and the flush timer
//! - [`retention`]: Load-time sweep of stale entries
//! - [`identity`]: Rename/delete maintenance
//! - [`capture`]: Reading and applying positions
//! - [`debounce`]: Leading-edge capture guard
//! - [`prompt`]: The "jump to last position?" state machine
//! - [`host`]: The editor interface hosts implement
//! - [`clock`]: Time sources
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod capture;
pub mod clock;
pub mod config;
pub mod debounce;
pub mod error;
pub mod flush;
pub mod host;
pub mod identity;
pub mod model;
pub mod prompt;
pub mod retention;
pub mod session;
pub mod store;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
