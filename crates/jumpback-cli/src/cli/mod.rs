//! # CLI Behavior
//!
//! This is **one possible client** for jumpback, not the feature itself. It is the
//! only place that knows about terminal output and exit codes.
//!
//! ## Locating the Database
//!
//! The database path in the configuration is relative to a root directory (the
//! editor's vault). The CLI resolves:
//!
//! 1. **Root**: `--root <DIR>`, else the current directory.
//! 2. **Configuration**: `--config <FILE>`, else `jumpback.toml` in the OS config
//!    directory (via `directories`), layered with `JUMPBACK_*` environment variables.
//! 3. **Database**: `--db <PATH>` overrides `db_file_name`.
//!
//! ## Naked Execution
//!
//! Running `jumpback` with no subcommand lists the database.
//!
//! ## Writes
//!
//! `prune`, `forget` and `rename` open a full session: the database is swept on
//! load exactly as an editor would, the change is applied, and the session is shut
//! down, which flushes. Read-only commands never write.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The default level is `warn`;
//! `--verbose` turns on `debug` for jumpback, and `RUST_LOG` overrides both.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

use clap::Parser;
use commands::Context;
use setup::{Cli, Commands};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = Context::from_cli(&cli)?;
    let now = ctx.now_ms();
    let result = match cli.command.unwrap_or(Commands::List) {
        Commands::List => commands::list(&ctx)?,
        Commands::Show { id } => commands::show(&ctx, &id)?,
        Commands::Prune { days } => commands::prune(ctx, days)?,
        Commands::Forget { id } => commands::forget(ctx, &id)?,
        Commands::Rename { old, new } => commands::rename(ctx, &old, &new)?,
        Commands::Config => commands::config(&ctx)?,
    };

    print!("{}", render::render_result(&result, now));
    Ok(())
}

/// Filter used when `RUST_LOG` is unset. Covers both the library and this binary.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "jumpback=debug,jumpback_cli=debug"
    } else {
        "warn"
    }
}

fn init_logging(verbose: bool) {
    let default_level = default_filter(verbose);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_covers_cli_target() {
        let filter = default_filter(true);
        assert!(filter.split(',').any(|d| d == "jumpback=debug"));
        assert!(filter.split(',').any(|d| d == "jumpback_cli=debug"));
        assert!(EnvFilter::try_new(filter).is_ok());
        assert_eq!(default_filter(false), "warn");
    }
}
