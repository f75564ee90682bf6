//! Load-time garbage collection of stale positions.
//!
//! Runs once, right after the database is read. Records older than the retention
//! window are dropped. Records without a `lastSavedTime` (written by versions that
//! did not track it) are treated as fresh: they get stamped with the current time
//! and age out normally from then on, instead of all vanishing on upgrade.

use crate::store::PositionStore;
use tracing::info;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Records that had no timestamp and were stamped with "now".
    pub backfilled: usize,
    /// Records dropped for being older than the retention window.
    pub removed: usize,
}

/// Sweep `store` in place. `retention_ms = None` disables sweeping entirely.
pub fn sweep(store: &mut PositionStore, retention_ms: Option<i64>, now_ms: i64) -> SweepReport {
    let Some(max_age) = retention_ms else {
        return SweepReport::default();
    };

    let mut report = SweepReport::default();
    store.entries_mut().retain(|_, record| match record.last_saved_time {
        None => {
            record.last_saved_time = Some(now_ms);
            report.backfilled += 1;
            true
        }
        Some(saved) if now_ms.saturating_sub(saved) > max_age => {
            report.removed += 1;
            false
        }
        Some(_) => true,
    });

    if report.removed > 0 || report.backfilled > 0 {
        info!(
            removed = report.removed,
            backfilled = report.backfilled,
            "swept position database"
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cursor, PositionRecord};

    const DAY: i64 = 86_400_000;
    const HOUR: i64 = 3_600_000;
    const NOW: i64 = 1_700_000_000_000;

    fn record_at(time: Option<i64>) -> PositionRecord {
        PositionRecord {
            last_saved_time: time,
            ..PositionRecord::new(Some(Cursor::caret(0, 0)), None)
        }
    }

    #[test]
    fn test_drops_only_expired_entries() {
        let mut store = PositionStore::new();
        store.set("old.md".into(), record_at(Some(NOW - 2 * DAY)));
        store.set("new.md".into(), record_at(Some(NOW - HOUR)));

        let report = sweep(&mut store, Some(DAY), NOW);

        assert_eq!(report.removed, 1);
        assert!(store.get(&"old.md".into()).is_none());
        assert!(store.get(&"new.md".into()).is_some());
    }

    #[test]
    fn test_exact_boundary_is_kept() {
        let mut store = PositionStore::new();
        store.set("edge.md".into(), record_at(Some(NOW - DAY)));
        let report = sweep(&mut store, Some(DAY), NOW);
        assert_eq!(report.removed, 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_backfills_missing_timestamps() {
        let mut store = PositionStore::new();
        store.set("legacy.md".into(), record_at(None));

        let report = sweep(&mut store, Some(DAY), NOW);

        assert_eq!(report, SweepReport { backfilled: 1, removed: 0 });
        assert_eq!(
            store.get(&"legacy.md".into()).unwrap().last_saved_time,
            Some(NOW)
        );
    }

    #[test]
    fn test_disabled_touches_nothing() {
        let mut store = PositionStore::new();
        store.set("ancient.md".into(), record_at(Some(0)));
        store.set("legacy.md".into(), record_at(None));
        let before = store.clone();

        let report = sweep(&mut store, None, NOW);

        assert_eq!(report, SweepReport::default());
        assert_eq!(store, before);
    }

    #[test]
    fn test_survivors_are_within_window() {
        let mut store = PositionStore::new();
        for (i, age) in [0, HOUR, DAY, 3 * DAY, 40 * DAY].iter().enumerate() {
            store.set(format!("{}.md", i).into(), record_at(Some(NOW - age)));
        }
        store.set("legacy.md".into(), record_at(None));

        sweep(&mut store, Some(3 * DAY), NOW);

        assert_eq!(store.len(), 5);
        for (_, record) in store.iter() {
            let saved = record.last_saved_time.unwrap();
            assert!(NOW - saved <= 3 * DAY);
        }
    }
}
