//! Shared world state for kanban board BDD scenarios.

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use kazera::snapshot::adapters::MemorySnapshotStore;
use kazera::task::domain::Task;
use kazera::task::services::{TaskStore, TaskStoreResult};
use rstest::fixture;

/// Scenario world for kanban board behaviour tests.
pub struct KanbanWorld {
    pub store: TaskStore<MemorySnapshotStore>,
    pub today: NaiveDate,
    pub last_task: Option<Task>,
    pub last_move_result: Option<TaskStoreResult<Task>>,
}

impl KanbanWorld {
    /// Creates a world with an empty board dated 2025-03-14.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TaskStore::open(MemorySnapshotStore::new("kazera-tasks")),
            today: NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid scenario date"),
            last_task: None,
            last_move_result: None,
        }
    }

    /// Returns the task most recently added to the scenario.
    pub fn current_task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Returns 09:00 UTC on the day `offset` days from the scenario date.
    pub fn deadline(&self, offset: i64) -> Result<DateTime<Utc>, eyre::Report> {
        let days = Days::new(offset.unsigned_abs());
        let day = if offset < 0 {
            self.today.checked_sub_days(days)
        } else {
            self.today.checked_add_days(days)
        }
        .and_then(|day| day.and_hms_opt(9, 0, 0))
        .ok_or_else(|| eyre::eyre!("deadline out of range"))?;
        Ok(Utc.from_utc_datetime(&day))
    }
}

impl Default for KanbanWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KanbanWorld {
    KanbanWorld::default()
}
