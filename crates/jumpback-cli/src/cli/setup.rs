use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jumpback",
    bin_name = "jumpback",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Inspect and maintain a jumpback position database", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory the database path is relative to (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub root: Option<PathBuf>,

    /// Database path, overriding the configured `db_file_name`
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub db: Option<String>,

    /// Configuration file (defaults to jumpback.toml in the user config directory)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List remembered positions, most recent first
    #[command(alias = "ls")]
    List,

    /// Show the stored record for one document
    Show {
        /// Document id (path as the editor reports it)
        id: String,
    },

    /// Drop entries older than the retention window and save
    Prune {
        /// Retention in days, overriding `delete_after_days`
        #[arg(long)]
        days: Option<i64>,
    },

    /// Forget the position of one document
    #[command(alias = "rm")]
    Forget {
        /// Document id
        id: String,
    },

    /// Move a remembered position to a new document id
    #[command(alias = "mv")]
    Rename {
        /// Current document id
        old: String,
        /// New document id
        new: String,
    },

    /// Print the effective configuration
    Config,
}
