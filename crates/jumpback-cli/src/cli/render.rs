use super::commands::{CmdMessage, CmdResult, MessageLevel};
use chrono::Duration;
use console::Style;
use jumpback::model::{DocId, PositionRecord};
use std::fmt::Write;

const TIME_WIDTH: usize = 14;
const TARGET_WIDTH: usize = 14;

pub fn render_result(result: &CmdResult, now_ms: i64) -> String {
    let mut out = String::new();

    if !result.listed.is_empty() {
        out.push_str(&render_list(&result.listed, now_ms));
    }
    if let Some(detail) = &result.detail {
        out.push_str(detail);
        out.push('\n');
    }
    for (key, value) in &result.settings {
        let _ = writeln!(out, "{} = {}", Style::new().cyan().apply_to(key), value);
    }
    out.push_str(&render_messages(&result.messages));
    out
}

fn render_list(entries: &[(DocId, PositionRecord)], now_ms: i64) -> String {
    let id_width = entries
        .iter()
        .map(|(id, _)| id.as_str().chars().count())
        .max()
        .unwrap_or(0);
    let muted = Style::new().dim();

    let mut out = String::new();
    for (id, record) in entries {
        let scroll = record
            .scroll
            .map(|s| format!("scroll {}", s))
            .unwrap_or_default();
        let when = record
            .last_saved_time
            .map(|saved| format_time_ago(saved, now_ms))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<id_width$}  {:<TARGET_WIDTH$}  {}  {}",
            id.as_str(),
            record.target_label(),
            muted.apply_to(format!("{:>TIME_WIDTH$}", when)),
            scroll,
            id_width = id_width,
        );
    }
    out
}

fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => Style::new().dim(),
            MessageLevel::Success => Style::new().green(),
            MessageLevel::Warning => Style::new().yellow().bold(),
        };
        let _ = writeln!(out, "{}", style.apply_to(&message.content));
    }
    out
}

fn format_time_ago(saved_ms: i64, now_ms: i64) -> String {
    let elapsed = Duration::try_milliseconds(now_ms.saturating_sub(saved_ms))
        .and_then(|d| d.to_std().ok())
        .unwrap_or_default();
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(elapsed);

    // Pad units to the width of "seconds" so the "ago" column lines up.
    time_str
        .replace("hours ago", "  hours ago")
        .replace("hour ago", "   hour ago")
        .replace("days ago", "   days ago")
        .replace("day ago", "    day ago")
        .replace("weeks ago", "  weeks ago")
        .replace("week ago", "   week ago")
        .replace("months ago", " months ago")
        .replace("month ago", "  month ago")
        .replace("years ago", "  years ago")
        .replace("year ago", "   year ago")
}
