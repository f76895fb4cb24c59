//! Parameter structures for Voyage operations
//!
//! These structures are shared by every interface (CLI, MCP server) and carry
//! raw, unvalidated input: dates and times are strings, enumerations are
//! strings. Validation and parsing happen when they are converted into the
//! request types in [`crate::models::requests`].
//!
//! Interface layers wrap them with their own derives:
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct MoveArgs {
//!     pub item_id: u64,
//!     pub target_id: u64,
//! }
//!
//! impl From<MoveArgs> for MoveItem { /* ... */ }
//!
//! // In the MCP server
//! #[derive(Deserialize, JsonSchema)]
//! #[serde(transparent)]
//! struct MoveItemRequest(voyage_core::params::MoveItem);
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifies a trip, item or idea by its numeric ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// Numeric identifier
    pub id: u64,
}

/// Parameters for creating a new trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTrip {
    /// Title of the trip
    pub title: String,
    /// Where the trip goes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// First day of the trip (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Last day of the trip, inclusive (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Trip status ('planning', 'upcoming' or 'completed')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Parameters for deleting a trip together with its items and ideas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteTrip {
    /// Trip ID to delete
    pub id: u64,
    /// Must be true for the deletion to go ahead
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for adding a schedule item to a trip.
///
/// A missing `time` schedules the item as "flexible" (shown without a
/// specific time, sorted as midday).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ItemCreate {
    /// ID of the trip to add the item to
    pub trip_id: u64,
    /// Title of the item
    pub title: String,
    /// Category ('flight', 'accommodation', 'activity', 'restaurant',
    /// 'transport' or 'other'); defaults to 'activity'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Day of the item (YYYY-MM-DD)
    pub date: String,
    /// Start time (HH:MM); omit for a flexible item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Day the item ends (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// End time (HH:MM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Booking or reservation reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Parameters for editing an existing schedule item.
///
/// Only the provided fields change. A new `date` keeps the item's current
/// time of day unless `time` is given too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateItem {
    /// Item ID to update (required)
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New day (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// New start time (HH:MM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Remove the item's end entirely
    #[serde(default)]
    pub clear_end: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Parameters for capturing an unscheduled idea.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct IdeaCreate {
    /// ID of the trip the idea belongs to
    pub trip_id: u64,
    /// Title of the idea
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category the idea gets once scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Link with more information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Rough duration estimate in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration_hours: Option<f64>,
    /// Priority ('high', 'medium' or 'low'); defaults to 'medium'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Parameters for dragging a schedule item onto another item.
///
/// The dragged item lands on the target's day and slot; an item dragged onto
/// itself stays where it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveItem {
    /// ID of the item being dragged
    pub item_id: u64,
    /// ID of the item it is dropped on
    pub target_id: u64,
}

/// Parameters for dragging an idea onto a schedule item.
///
/// The idea becomes a flexible item on the target's day and leaves the idea
/// list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PromoteIdea {
    /// ID of the idea being dragged
    pub idea_id: u64,
    /// ID of the item it is dropped on
    pub target_id: u64,
}
