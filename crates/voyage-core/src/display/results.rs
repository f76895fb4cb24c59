//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use serde::Serialize;

use super::datetime::{DayLabel, ItemTime};
use crate::{
    models::{DayPlan, Idea, ScheduleItem, Trip},
    sequencer::{Reorder, SyncReport},
    store::Conversion,
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::datetime, Timestamp};
/// use voyage_core::{
///     display::CreateResult,
///     models::{Category, ScheduleItem},
/// };
///
/// let item = ScheduleItem {
///     id: 7,
///     trip_id: 1,
///     category: Category::Restaurant,
///     title: "Dinner at Time Out Market".to_string(),
///     description: None,
///     location: Some("Lisbon".to_string()),
///     notes: None,
///     confirmation_number: None,
///     cost: Some(45.0),
///     start_at: datetime(2024, 9, 1, 20, 0, 0, 0),
///     end_at: None,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(item).to_string();
/// assert!(output.starts_with("Created itinerary item with ID: 7"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created trip with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<ScheduleItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created itinerary item with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Idea> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created idea with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<ScheduleItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated itinerary item with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted trip '{}' (ID: {}) with {} items and {} ideas",
            self.resource.title,
            self.resource.id,
            self.resource.items.len(),
            self.resource.ideas.len()
        )
    }
}

impl fmt::Display for DeleteResult<ScheduleItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted itinerary item '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<Idea> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted idea '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

/// Outcome of dragging an item onto another item.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoveResult {
    pub item_id: u64,
    pub target_id: u64,
    /// `None` when the drop changed nothing
    pub reorder: Option<Reorder>,
    pub sync: SyncReport,
    /// The day the item landed on, in its new order
    pub day: Option<DayPlan>,
}

impl MoveResult {
    /// A drop that resolved to nothing.
    pub fn unchanged(item_id: u64, target_id: u64) -> Self {
        Self {
            item_id,
            target_id,
            reorder: None,
            sync: SyncReport::default(),
            day: None,
        }
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(reorder) = &self.reorder else {
            return writeln!(
                f,
                "Nothing to move: item {} was not dropped on another item of its trip.",
                self.item_id
            );
        };

        if reorder.changed_day() {
            writeln!(
                f,
                "Moved item {} to {} ({})",
                self.item_id,
                DayLabel(reorder.to.day()),
                ItemTime(reorder.to.start_at)
            )?;
        } else {
            writeln!(
                f,
                "Reordered item {} within {}",
                self.item_id,
                DayLabel(reorder.to.day())
            )?;
        }
        write_sync_failures(f, &self.sync)?;

        if let Some(day) = &self.day {
            writeln!(f)?;
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

/// Outcome of dragging an idea onto an item.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PromoteResult {
    pub idea_id: u64,
    pub target_id: u64,
    /// `None` when the idea or the target could not be found
    pub conversion: Option<Conversion>,
    pub day: Option<DayPlan>,
}

impl PromoteResult {
    pub fn unchanged(idea_id: u64, target_id: u64) -> Self {
        Self {
            idea_id,
            target_id,
            conversion: None,
            day: None,
        }
    }
}

impl fmt::Display for PromoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(conversion) = &self.conversion else {
            return writeln!(
                f,
                "Nothing to promote: idea {} cannot be dropped on item {}.",
                self.idea_id, self.target_id
            );
        };

        writeln!(
            f,
            "Scheduled idea {} as item {} on {} ({})",
            self.idea_id,
            conversion.item.id,
            DayLabel(conversion.item.day()),
            ItemTime(conversion.item.start_at)
        )?;
        if let Some(cause) = &conversion.idea_left_behind {
            writeln!(f)?;
            writeln!(f, "Warning: the idea is still in the idea list: {cause}")?;
        }

        if let Some(day) = &self.day {
            writeln!(f)?;
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

fn write_sync_failures(f: &mut fmt::Formatter<'_>, sync: &SyncReport) -> fmt::Result {
    if sync.is_complete() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "Warning: {} change(s) could not be saved:", sync.failures.len())?;
    for failure in &sync.failures {
        writeln!(f, "- item {}: {}", failure.item_id, failure.cause)?;
    }
    Ok(())
}
