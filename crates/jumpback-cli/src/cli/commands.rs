use super::setup::Cli;
use directories::ProjectDirs;
use jumpback::clock::{Clock, SystemClock};
use jumpback::config::JumpbackConfig;
use jumpback::error::{JumpbackError, Result};
use jumpback::model::{DocId, PositionRecord};
use jumpback::session::Jumpback;
use jumpback::store::backend::StorageAdapter;
use jumpback::store::fs_backend::FsAdapter;
use jumpback::store::PositionStore;
use std::path::PathBuf;
use tracing::debug;

/// Everything a command needs: where the database lives and how to reach it.
pub struct Context<A: StorageAdapter, C: Clock> {
    pub adapter: A,
    pub clock: C,
    pub config: JumpbackConfig,
    pub config_file: Option<PathBuf>,
}

impl Context<FsAdapter, SystemClock> {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_file = cli.config.clone().or_else(default_config_file);
        let mut config = JumpbackConfig::load(config_file.as_deref())?;
        if let Some(db) = &cli.db {
            config.db_file_name = db.clone();
        }

        let root = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        debug!(
            root = %root.display(),
            db = %config.db_file_name,
            "resolved position database"
        );

        Ok(Self {
            adapter: FsAdapter::new(root),
            clock: SystemClock,
            config,
            config_file,
        })
    }
}

impl<A: StorageAdapter, C: Clock> Context<A, C> {
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    fn read_store(&self) -> PositionStore {
        PositionStore::load(&self.adapter, &self.config.db_path())
    }

    fn open_session(self) -> Jumpback<A, C> {
        Jumpback::load(self.config, self.adapter, self.clock)
    }
}

fn default_config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "jumpback").map(|dirs| dirs.config_dir().join("jumpback.toml"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured command output; `render` turns it into text.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<(DocId, PositionRecord)>,
    pub detail: Option<String>,
    pub settings: Vec<(&'static str, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

pub fn list<A: StorageAdapter, C: Clock>(ctx: &Context<A, C>) -> Result<CmdResult> {
    let store = ctx.read_store();
    let mut listed: Vec<(DocId, PositionRecord)> = store
        .iter()
        .map(|(id, record)| (id.clone(), record.clone()))
        .collect();
    // Most recent first; entries without a timestamp last, then by id.
    listed.sort_by(|(a_id, a), (b_id, b)| {
        b.last_saved_time
            .cmp(&a.last_saved_time)
            .then_with(|| a_id.cmp(b_id))
    });

    let mut result = CmdResult {
        listed,
        ..Default::default()
    };
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("No positions remembered."));
    }
    Ok(result)
}

pub fn show<A: StorageAdapter, C: Clock>(ctx: &Context<A, C>, id: &str) -> Result<CmdResult> {
    let store = ctx.read_store();
    let id = DocId::from(id);
    let record = store
        .get(&id)
        .ok_or_else(|| JumpbackError::Store(format!("No position stored for {}", id)))?;

    Ok(CmdResult {
        detail: Some(serde_json::to_string_pretty(record)?),
        ..Default::default()
    })
}

pub fn prune<A: StorageAdapter, C: Clock>(
    mut ctx: Context<A, C>,
    days: Option<i64>,
) -> Result<CmdResult> {
    if let Some(days) = days {
        ctx.config.delete_after_days = days;
    }
    let disabled = ctx.config.retention_ms().is_none();

    let session = ctx.open_session();
    let report = session.last_sweep();
    let remaining = session.store().len();
    session.shutdown()?;

    let mut result = CmdResult::default();
    if disabled {
        result.add_message(CmdMessage::warning(
            "Retention is disabled (delete_after_days <= 0); nothing pruned.",
        ));
        return Ok(result);
    }
    result.add_message(CmdMessage::success(format!(
        "Pruned {} stale entr{}, {} remaining.",
        report.removed,
        if report.removed == 1 { "y" } else { "ies" },
        remaining
    )));
    if report.backfilled > 0 {
        result.add_message(CmdMessage::info(format!(
            "Stamped {} entries that had no save time.",
            report.backfilled
        )));
    }
    Ok(result)
}

pub fn forget<A: StorageAdapter, C: Clock>(ctx: Context<A, C>, id: &str) -> Result<CmdResult> {
    let mut session = ctx.open_session();
    let id = DocId::from(id);
    let removed = session.on_deleted(&id);
    session.shutdown()?;

    let mut result = CmdResult::default();
    if removed {
        result.add_message(CmdMessage::success(format!("Forgot {}", id)));
    } else {
        result.add_message(CmdMessage::warning(format!("No position stored for {}", id)));
    }
    Ok(result)
}

pub fn rename<A: StorageAdapter, C: Clock>(
    ctx: Context<A, C>,
    old: &str,
    new: &str,
) -> Result<CmdResult> {
    let mut session = ctx.open_session();
    let (old, new) = (DocId::from(old), DocId::from(new));
    let moved = session.on_renamed(&old, &new);
    session.shutdown()?;

    let mut result = CmdResult::default();
    if moved {
        result.add_message(CmdMessage::success(format!("Moved {} -> {}", old, new)));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "No position stored for {}",
            old
        )));
    }
    Ok(result)
}

pub fn config<A: StorageAdapter, C: Clock>(ctx: &Context<A, C>) -> Result<CmdResult> {
    let config = &ctx.config;
    let config_file = ctx
        .config_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());

    Ok(CmdResult {
        settings: vec![
            ("config_file", config_file),
            ("db_file_name", config.db_file_name.clone()),
            ("save_timer", config.save_timer.to_string()),
            ("delete_after_days", config.delete_after_days.to_string()),
            ("prompt_duration", config.prompt_duration.to_string()),
        ],
        ..Default::default()
    })
}
