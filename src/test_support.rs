//! Fixtures shared by unit tests across bounded contexts.

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reference "today" used across tests: Friday 14 March 2025.
pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid reference date")
}

/// Returns an instant `days` from [`today`] at `hour`:00 UTC.
pub(crate) fn days_from_today(days: i64, hour: u32) -> DateTime<Utc> {
    let base = today();
    let day = if days >= 0 {
        base.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        base.checked_sub_days(Days::new(days.unsigned_abs()))
    }
    .expect("date within range");
    let naive = day.and_hms_opt(hour, 0, 0).expect("valid time of day");
    Utc.from_utc_datetime(&naive)
}
