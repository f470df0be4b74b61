//! Dashboard summary of task counts and approaching deadlines.

use crate::task::domain::{DeadlineClass, DeadlineClassifier, Task, TaskId, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};

/// Default number of approaching deadlines listed on the dashboard.
pub const DEFAULT_DEADLINE_LIMIT: usize = 3;

/// A task whose deadline is due today or upcoming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproachingDeadline {
    /// Task identifier.
    pub task_id: TaskId,
    /// Task title.
    pub title: String,
    /// Task deadline.
    pub deadline: DateTime<Utc>,
    /// Urgency label, either due-today or upcoming.
    pub class: DeadlineClass,
}

/// Counts and deadlines shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Number of tasks in the collection.
    pub total: usize,
    /// Number of `todo` tasks.
    pub todo: usize,
    /// Number of `in-progress` tasks.
    pub in_progress: usize,
    /// Number of `done` tasks.
    pub done: usize,
    /// Share of done tasks, in whole percent rounded half up.
    pub completion_percent: u8,
    /// Approaching deadlines, soonest first.
    pub approaching: Vec<ApproachingDeadline>,
}

impl DashboardSummary {
    /// Summarises `tasks` relative to `today`.
    ///
    /// At most `limit` approaching deadlines are listed; ties on the deadline
    /// keep collection order.
    #[must_use]
    pub fn compute(
        tasks: &[Task],
        classifier: &DeadlineClassifier,
        today: NaiveDate,
        limit: usize,
    ) -> Self {
        let count = |status: TaskStatus| tasks.iter().filter(|task| task.status() == status).count();
        let done = count(TaskStatus::Done);

        let mut approaching: Vec<ApproachingDeadline> = tasks
            .iter()
            .filter_map(|task| {
                let class = classifier.classify_task(task, today);
                class.is_approaching().then(|| ApproachingDeadline {
                    task_id: task.id().clone(),
                    title: task.title().as_str().to_owned(),
                    deadline: task.deadline(),
                    class,
                })
            })
            .collect();
        approaching.sort_by_key(|entry| entry.deadline);
        approaching.truncate(limit);

        Self {
            total: tasks.len(),
            todo: count(TaskStatus::Todo),
            in_progress: count(TaskStatus::InProgress),
            done,
            completion_percent: completion_percent(done, tasks.len()),
            approaching,
        }
    }
}

fn completion_percent(done: usize, total: usize) -> u8 {
    let doubled_total = total.saturating_mul(2);
    let scaled = done.saturating_mul(200).saturating_add(total);
    scaled
        .checked_div(doubled_total)
        .map_or(0, |percent| u8::try_from(percent).unwrap_or(u8::MAX))
}
