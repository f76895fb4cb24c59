//! Drag lifecycle types.

use serde::Serialize;

use super::{promote::PromotionPlan, reorder::Reorder};

/// What is being dragged.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum DragSource {
    /// A scheduled item being repositioned
    Item(u64),
    /// An unscheduled idea being dropped into the itinerary
    Idea(u64),
}

/// Phase of the single drag a sequencer tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSource),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

/// Result of ending a drag.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Nothing changed: no target, an unknown id, or a drop on itself
    Cancelled,
    /// An item moved; the in-memory order is already updated and the
    /// listed writes still need persisting
    Reordered(Reorder),
    /// An idea should become an item; nothing changes in memory until
    /// the conversion is persisted and applied
    Promote(PromotionPlan),
}
