//! Scheduled itinerary item.

use jiff::{
    civil::{Date, DateTime},
    Timestamp,
};
use serde::{Deserialize, Serialize};

use super::{schedule::ItemTiming, Category};

/// A dated, schedulable trip activity (flight, hotel stay, activity, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleItem {
    /// Unique identifier, stable across reorders
    pub id: u64,

    /// ID of the owning trip
    pub trip_id: u64,

    pub category: Category,

    pub title: String,

    pub description: Option<String>,

    pub location: Option<String>,

    pub notes: Option<String>,

    /// Booking or reservation reference
    pub confirmation_number: Option<String>,

    pub cost: Option<f64>,

    /// Local wall-clock start; 12:00 means "flexible"
    pub start_at: DateTime,

    /// Local wall-clock end, only for items with a duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime>,

    /// Timestamp when the item was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the item was last modified (UTC)
    pub updated_at: Timestamp,
}

impl ScheduleItem {
    /// The day bucket this item belongs to.
    pub fn day(&self) -> Date {
        self.start_at.date()
    }

    pub fn timing(&self) -> ItemTiming {
        ItemTiming {
            start_at: self.start_at,
            end_at: self.end_at,
        }
    }

    pub(crate) fn set_timing(&mut self, timing: ItemTiming) {
        self.start_at = timing.start_at;
        self.end_at = timing.end_at;
    }
}
