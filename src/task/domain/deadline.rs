//! Deadline urgency classification.
//!
//! Classification works at day granularity: deadlines are reduced to their
//! UTC calendar date before being compared with the current date, so a task
//! due at 23:59 today and one due at 00:01 today are labelled alike.

use super::{Task, TaskStatus};
use chrono::{DateTime, Days, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default forward window, in days, for [`DeadlineClass::Upcoming`].
pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 7;

/// Urgency label derived from a deadline and the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeadlineClass {
    /// The deadline date has passed.
    Overdue,
    /// The deadline falls on the current date.
    DueToday,
    /// The deadline falls within the forward window.
    Upcoming,
    /// Nothing to flag, including every finished task.
    #[serde(rename = "none")]
    NotFlagged,
}

impl DeadlineClass {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueToday => "due-today",
            Self::Upcoming => "upcoming",
            Self::NotFlagged => "none",
        }
    }

    /// Returns `true` for due-today and upcoming deadlines.
    #[must_use]
    pub const fn is_approaching(self) -> bool {
        matches!(self, Self::DueToday | Self::Upcoming)
    }
}

impl fmt::Display for DeadlineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure deadline classifier with a configurable upcoming window.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use kazera::task::domain::{DeadlineClass, DeadlineClassifier, TaskStatus};
///
/// let classifier = DeadlineClassifier::default();
/// let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let yesterday = Utc.with_ymd_and_hms(2025, 3, 13, 18, 0, 0).unwrap();
///
/// assert_eq!(
///     classifier.classify(yesterday, TaskStatus::Todo, today),
///     DeadlineClass::Overdue
/// );
/// assert_eq!(
///     classifier.classify(yesterday, TaskStatus::Done, today),
///     DeadlineClass::NotFlagged
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineClassifier {
    upcoming_window_days: u32,
}

impl Default for DeadlineClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_UPCOMING_WINDOW_DAYS)
    }
}

impl DeadlineClassifier {
    /// Creates a classifier flagging deadlines up to `upcoming_window_days`
    /// after the current date as upcoming. A zero window disables the
    /// upcoming label.
    #[must_use]
    pub const fn new(upcoming_window_days: u32) -> Self {
        Self {
            upcoming_window_days,
        }
    }

    /// Returns the configured forward window in days.
    #[must_use]
    pub const fn upcoming_window_days(&self) -> u32 {
        self.upcoming_window_days
    }

    /// Classifies a deadline relative to `today`.
    #[must_use]
    pub fn classify(
        &self,
        deadline: DateTime<Utc>,
        status: TaskStatus,
        today: NaiveDate,
    ) -> DeadlineClass {
        if status.is_done() {
            return DeadlineClass::NotFlagged;
        }

        let due = deadline.date_naive();
        if due < today {
            return DeadlineClass::Overdue;
        }
        if due == today {
            return DeadlineClass::DueToday;
        }

        let window_end = today
            .checked_add_days(Days::new(u64::from(self.upcoming_window_days)))
            .unwrap_or(NaiveDate::MAX);
        if due <= window_end {
            DeadlineClass::Upcoming
        } else {
            DeadlineClass::NotFlagged
        }
    }

    /// Classifies a task relative to `today`.
    #[must_use]
    pub fn classify_task(&self, task: &Task, today: NaiveDate) -> DeadlineClass {
        self.classify(task.deadline(), task.status(), today)
    }

    /// Classifies a task relative to the current UTC date of `clock`.
    #[must_use]
    pub fn classify_now(&self, task: &Task, clock: &impl Clock) -> DeadlineClass {
        self.classify_task(task, clock.utc().date_naive())
    }
}
