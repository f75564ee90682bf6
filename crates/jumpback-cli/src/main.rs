//! # Jumpback CLI
//!
//! The `jumpback` binary is a maintenance tool for a position database: list what
//! is remembered, inspect one entry, prune stale ones, or fix up entries by hand
//! after moving files outside the editor.
//!
//! It is a thin client: everything it does goes through the `jumpback` library,
//! the same engine an editor host uses.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + command handlers (commands.rs)          │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (crates/jumpback)                                  │
//! │  - Session, store, sweeper, identity maintenance            │
//! │  - FsAdapter over the vault directory                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
