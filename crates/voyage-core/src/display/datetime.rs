//! Date and time display utilities.
//!
//! Record timestamps are shown in the system timezone. Item times are
//! wall-clock values already and are shown as stored.

use std::fmt;

use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    Timestamp,
};

use crate::models::{schedule, ScheduleItem};

/// A `Timestamp` formatted in the system timezone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A calendar day with its weekday, e.g. `Saturday 2024-06-01`.
pub struct DayLabel(pub Date);

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%A %Y-%m-%d"))
    }
}

/// Time of day of an item start: `HH:MM`, or `Flexible` for the sentinel.
pub struct ItemTime(pub DateTime);

impl fmt::Display for ItemTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if schedule::is_flexible(self.0) {
            write!(f, "Flexible")
        } else {
            write!(f, "{}", self.0.strftime("%H:%M"))
        }
    }
}

/// Start and end of an item, e.g. `09:00–11:30` or
/// `22:00 → Monday 2024-06-03 08:30` when it ends on another day.
pub struct ItemSpan<'a>(pub &'a ScheduleItem);

impl fmt::Display for ItemSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.0;
        write!(f, "{}", ItemTime(item.start_at))?;
        match item.end_at {
            Some(end) if end.date() == item.day() => write!(f, "–{}", end.strftime("%H:%M")),
            Some(end) => write!(f, " → {} {}", DayLabel(end.date()), end.strftime("%H:%M")),
            None => Ok(()),
        }
    }
}
