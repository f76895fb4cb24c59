//! Drop-target resolution shared by reorders and promotions.

use jiff::civil::Date;
use serde::Serialize;

use crate::models::ScheduleItem;

/// Where a dragged element lands: the slot and day of the item it was
/// dropped on.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DropTarget {
    /// Position of the target in the itinerary order
    pub index: usize,
    pub item_id: u64,
    /// Day bucket of the target item
    pub day: Date,
}

/// Resolves a drop on `target_id` against the current item order.
///
/// Returns `None` for ids that are not (or no longer) in the itinerary.
pub fn resolve_drop_target(items: &[ScheduleItem], target_id: u64) -> Option<DropTarget> {
    items
        .iter()
        .position(|item| item.id == target_id)
        .map(|index| DropTarget {
            index,
            item_id: target_id,
            day: items[index].day(),
        })
}
