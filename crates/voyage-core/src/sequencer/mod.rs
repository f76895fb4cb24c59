//! Drag-and-drop sequencing of a trip's itinerary.
//!
//! A [`Sequencer`] holds one trip's items and ideas and turns drag gestures
//! into new orderings plus the storage writes they require. Items are never
//! numbered: their order is derived from `start_at`, so moving an item means
//! giving it a new date at most, and only items whose timestamps actually
//! changed are written back.
//!
//! Dropping an item on another item of the same day moves it to that slot,
//! although the chronological re-sort has the final say and only reorders
//! items that share a start time. Dropping it on an item of another day moves
//! it to that day at the same time of day, with its end shifted by the same
//! number of days.
//!
//! Dropping an idea on an item schedules the idea as a flexible item on that
//! item's day. The promotion is only applied in memory, through
//! [`Sequencer::apply_promotion`], once storage has created the item.
//!
//! ```rust
//! use jiff::{civil::datetime, Timestamp};
//! use voyage_core::{
//!     models::{Category, ScheduleItem},
//!     sequencer::{DragSource, DropOutcome, Sequencer},
//! };
//!
//! # fn item(id: u64, start: jiff::civil::DateTime) -> ScheduleItem {
//! #     ScheduleItem {
//! #         id, trip_id: 1, category: Category::Activity, title: format!("Item {id}"),
//! #         description: None, location: None, notes: None, confirmation_number: None,
//! #         cost: None, start_at: start, end_at: None,
//! #         created_at: Timestamp::UNIX_EPOCH, updated_at: Timestamp::UNIX_EPOCH,
//! #     }
//! # }
//! let mut sequencer = Sequencer::new(
//!     vec![
//!         item(1, datetime(2024, 6, 1, 9, 0, 0, 0)),
//!         item(2, datetime(2024, 6, 2, 14, 0, 0, 0)),
//!     ],
//!     Vec::new(),
//! );
//!
//! sequencer.begin_drag(DragSource::Item(1))?;
//! let DropOutcome::Reordered(reorder) = sequencer.end_drag(Some(2)) else {
//!     panic!("expected a reorder");
//! };
//! assert_eq!(reorder.to.start_at, datetime(2024, 6, 2, 9, 0, 0, 0));
//! assert_eq!(sequencer.days().len(), 1);
//! # Ok::<(), voyage_core::ItineraryError>(())
//! ```

use log::{debug, warn};

use crate::{
    error::{ItineraryError, Result},
    models::{DayPlan, Idea, ScheduleItem},
};

pub mod drag;
pub mod promote;
pub mod reorder;
pub mod resolve;

#[cfg(test)]
mod tests;

pub use drag::{DragSource, DragState, DropOutcome};
pub use promote::PromotionPlan;
pub use reorder::{ItemWrite, Reorder, SyncReport, WriteFailure};
pub use resolve::{resolve_drop_target, DropTarget};

/// One trip's itinerary and idea backlog plus the drag in progress.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    items: Vec<ScheduleItem>,
    ideas: Vec<Idea>,
    drag: DragState,
}

impl Sequencer {
    /// Creates a sequencer, putting items in chronological order and ideas
    /// in display order.
    pub fn new(mut items: Vec<ScheduleItem>, mut ideas: Vec<Idea>) -> Self {
        reorder::sort_chronologically(&mut items);
        ideas.sort_by(Idea::display_order);
        Self {
            items,
            ideas,
            drag: DragState::Idle,
        }
    }

    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn state(&self) -> DragState {
        self.drag
    }

    /// Items grouped into ascending day buckets.
    pub fn days(&self) -> Vec<DayPlan> {
        DayPlan::group(&self.items)
    }

    /// Starts dragging `source`.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::DragInProgress` - When a drag is already active; it
    ///   stays active
    pub fn begin_drag(&mut self, source: DragSource) -> Result<()> {
        if let DragState::Dragging(current) = self.drag {
            debug!("Ignoring drag of {source:?}: {current:?} is still being dragged");
            return Err(ItineraryError::DragInProgress);
        }
        debug!("Drag started: {source:?}");
        self.drag = DragState::Dragging(source);
        Ok(())
    }

    /// Abandons the current drag without changing anything.
    pub fn cancel_drag(&mut self) {
        if let DragState::Dragging(source) = std::mem::take(&mut self.drag) {
            debug!("Drag cancelled: {source:?}");
        }
    }

    /// Ends the current drag with a drop on `target` (an item ID), or with no
    /// target at all.
    ///
    /// The sequencer is idle afterwards whatever the outcome. Reorders are
    /// applied to the in-memory order immediately. A move whose shifted end
    /// would leave the supported date range is cancelled.
    pub fn end_drag(&mut self, target: Option<u64>) -> DropOutcome {
        let DragState::Dragging(source) = std::mem::take(&mut self.drag) else {
            return DropOutcome::Cancelled;
        };
        let Some(target_id) = target else {
            debug!("Drag of {source:?} ended without a target");
            return DropOutcome::Cancelled;
        };
        let Some(target) = resolve_drop_target(&self.items, target_id) else {
            debug!("Drop target {target_id} is not in the itinerary");
            return DropOutcome::Cancelled;
        };

        let outcome = match source {
            DragSource::Item(item_id) => match reorder::reorder(&mut self.items, item_id, target) {
                Ok(reorder) => reorder.map_or(DropOutcome::Cancelled, DropOutcome::Reordered),
                Err(e) => {
                    warn!("Move of item {item_id} onto item {target_id} cancelled: {e}");
                    DropOutcome::Cancelled
                }
            },
            DragSource::Idea(idea_id) => self
                .ideas
                .iter()
                .find(|idea| idea.id == idea_id)
                .map_or(DropOutcome::Cancelled, |idea| {
                    DropOutcome::Promote(PromotionPlan::new(idea, target))
                }),
        };
        debug!("Drag of {source:?} onto item {target_id}: {outcome:?}");
        outcome
    }

    /// Applies a persisted promotion: the idea leaves the backlog and the
    /// created item joins the itinerary in chronological order.
    pub fn apply_promotion(&mut self, idea_id: u64, item: ScheduleItem) {
        self.ideas.retain(|idea| idea.id != idea_id);
        self.items.push(item);
        reorder::sort_chronologically(&mut self.items);
    }
}
