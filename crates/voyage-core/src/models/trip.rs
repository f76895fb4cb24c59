//! Trip aggregate definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Idea, ScheduleItem, TripStatus};

/// A trip owning its itinerary items and ideas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    pub title: String,

    pub destination: Option<String>,

    pub description: Option<String>,

    /// First day of the trip
    pub start_date: Option<Date>,

    /// Last day of the trip (inclusive)
    pub end_date: Option<Date>,

    #[serde(default)]
    pub status: TripStatus,

    /// Timestamp when the trip was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the trip was last modified (UTC)
    pub updated_at: Timestamp,

    /// Scheduled items (loaded on demand)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ScheduleItem>,

    /// Unscheduled ideas (loaded on demand)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ideas: Vec<Idea>,
}

/// Longest trip, in days, that is laid out day by day.
pub const MAX_TRIP_DAYS: i64 = 366;

/// Number of calendar days from `start` to `end`, both included.
pub fn day_count(start: Date, end: Date) -> i64 {
    start.duration_until(end).as_secs() / 86_400 + 1
}

impl Trip {
    /// Every calendar day of the trip, when both ends are known.
    ///
    /// Empty for spans longer than [`MAX_TRIP_DAYS`].
    pub fn days(&self) -> Vec<Date> {
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Vec::new();
        };
        if day_count(start, end) > MAX_TRIP_DAYS {
            return Vec::new();
        }
        start
            .series(jiff::Span::new().days(1))
            .take_while(|day| *day <= end)
            .collect()
    }
}
