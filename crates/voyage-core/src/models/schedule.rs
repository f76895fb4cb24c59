//! Wall-clock scheduling primitives shared by items and the sequencer.
//!
//! Item times are civil (zone-less) date-times: the day an item belongs to is
//! the calendar date the traveller sees, never a UTC-shifted one.

use jiff::civil::{self, Date, DateTime, Time};
use serde::{Deserialize, Serialize};

use crate::error::{ItineraryError, Result};

/// Time-of-day marking an item as "flexible" (no specific time chosen).
///
/// Flexible items sort as midday among the items of their day.
pub const FLEXIBLE_TIME: Time = civil::time(12, 0, 0, 0);

/// Returns true if the date-time carries the unspecified-time sentinel.
pub fn is_flexible(at: DateTime) -> bool {
    at.time() == FLEXIBLE_TIME
}

/// The sentinel date-time on the given day.
pub fn flexible_on(day: Date) -> DateTime {
    day.to_datetime(FLEXIBLE_TIME)
}

/// Start and optional end of a schedulable item.
///
/// This is the only part of an item a reorder ever writes back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemTiming {
    pub start_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime>,
}

impl ItemTiming {
    /// Creates a timing, rejecting an end that precedes the start.
    pub fn new(start_at: DateTime, end_at: Option<DateTime>) -> Result<Self> {
        if let Some(end) = end_at {
            if end < start_at {
                return Err(ItineraryError::invalid_input("end_at")
                    .with_reason(format!("End {end} is before start {start_at}")));
            }
        }
        Ok(Self { start_at, end_at })
    }

    /// Calendar day bucket of the item.
    pub fn day(&self) -> Date {
        self.start_at.date()
    }

    /// Moves the timing onto `day`, keeping the start's time-of-day.
    ///
    /// The end moves by the same number of days, so the duration is kept
    /// exactly.
    pub fn moved_to(&self, day: Date) -> Result<Self> {
        let from = self.day();
        if from == day {
            return Ok(*self);
        }

        let delta = from.until(day)?;
        let start_at = day.to_datetime(self.start_at.time());
        let end_at = self
            .end_at
            .map(|end| end.checked_add(delta))
            .transpose()?;

        Ok(Self { start_at, end_at })
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &str, input: &str) -> Result<Date> {
    input.trim().parse::<Date>().map_err(|e| {
        ItineraryError::invalid_input(field).with_reason(format!("'{input}' is not a date: {e}"))
    })
}

/// Parses an `HH:MM` or `HH:MM:SS` time of day.
pub fn parse_time(field: &str, input: &str) -> Result<Time> {
    let input = input.trim();
    Time::strptime("%H:%M:%S", input)
        .or_else(|_| Time::strptime("%H:%M", input))
        .map_err(|e| {
            ItineraryError::invalid_input(field)
                .with_reason(format!("'{input}' is not a time of day: {e}"))
        })
}

/// Combines a date and an optional time; a missing time becomes the
/// flexible sentinel.
pub fn combine(date: Date, time: Option<Time>) -> DateTime {
    date.to_datetime(time.unwrap_or(FLEXIBLE_TIME))
}
