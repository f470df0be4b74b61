//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use kazera::snapshot::adapters::MemorySnapshotStore;
use kazera::task::domain::{TaskDraft, TaskStatus};
use kazera::task::services::TaskStore;
use mockable::Clock;
use rstest::fixture;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reference date shared by the integration tests.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid reference date")
}

fn at_hour(day: NaiveDate, hour: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_hms_opt(hour, 0, 0).expect("valid time of day"))
}

/// Returns an instant `days` after [`today`] at `hour`:00 UTC.
pub fn in_days(days: u64, hour: u32) -> DateTime<Utc> {
    let day = today()
        .checked_add_days(Days::new(days))
        .expect("date within range");
    at_hour(day, hour)
}

/// Returns an instant `days` before [`today`] at `hour`:00 UTC.
pub fn days_ago(days: u64, hour: u32) -> DateTime<Utc> {
    let day = today()
        .checked_sub_days(Days::new(days))
        .expect("date within range");
    at_hour(day, hour)
}

/// Builds a draft in the given column.
pub fn draft(title: &str, status: TaskStatus, deadline: DateTime<Utc>) -> TaskDraft {
    TaskDraft::new(title, deadline)
        .expect("valid draft")
        .with_status(status)
}

/// Provides a shared key-value map addressed at the task key.
#[fixture]
pub fn local_storage() -> MemorySnapshotStore {
    MemorySnapshotStore::new("kazera-tasks")
}

/// Provides a task store over a fresh key-value map.
#[fixture]
pub fn store(local_storage: MemorySnapshotStore) -> TaskStore<MemorySnapshotStore> {
    TaskStore::open(local_storage)
}
