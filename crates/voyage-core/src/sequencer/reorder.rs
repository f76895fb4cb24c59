//! Repositioning an item and deriving the writes it needs.

use std::collections::HashMap;

use serde::Serialize;

use super::resolve::DropTarget;
use crate::{
    error::Result,
    models::{ItemTiming, ScheduleItem},
};

/// A pending timestamp write for one item.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ItemWrite {
    pub item_id: u64,
    pub timing: ItemTiming,
}

/// An applied reorder.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Reorder {
    /// The dragged item
    pub item_id: u64,
    pub from: ItemTiming,
    pub to: ItemTiming,
    /// Items whose timestamps changed, empty for a same-day move
    pub writes: Vec<ItemWrite>,
}

impl Reorder {
    /// True when the dragged item landed on another day.
    pub fn changed_day(&self) -> bool {
        self.from.day() != self.to.day()
    }
}

/// A write that could not be persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WriteFailure {
    pub item_id: u64,
    pub cause: String,
}

/// Outcome of persisting a batch of writes.
///
/// Failed writes are not retried and the in-memory order is not rolled
/// back, so a report with failures means storage lags behind the screen.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SyncReport {
    /// IDs of items written successfully
    pub written: Vec<u64>,
    pub failures: Vec<WriteFailure>,
}

impl SyncReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn record_success(&mut self, item_id: u64) {
        self.written.push(item_id);
    }

    pub fn record_failure(&mut self, item_id: u64, cause: impl ToString) {
        self.failures.push(WriteFailure {
            item_id,
            cause: cause.to_string(),
        });
    }
}

/// Stable chronological sort; items with equal start times keep their
/// relative order.
pub(crate) fn sort_chronologically(items: &mut [ScheduleItem]) {
    items.sort_by_key(|item| item.start_at);
}

/// Moves `source_id` onto `target` and re-sorts the itinerary.
///
/// The item is pulled out and reinserted at the target's slot. When the
/// target is on another day the item takes that day, keeping its time of
/// day and its duration. Returns `None` when the source is unknown or is
/// the target itself; `items` is untouched in that case.
pub(crate) fn reorder(
    items: &mut Vec<ScheduleItem>,
    source_id: u64,
    target: DropTarget,
) -> Result<Option<Reorder>> {
    if source_id == target.item_id {
        return Ok(None);
    }
    let Some(from_index) = items.iter().position(|item| item.id == source_id) else {
        return Ok(None);
    };

    let from = items[from_index].timing();
    let to = from.moved_to(target.day)?;

    let before: HashMap<u64, ItemTiming> =
        items.iter().map(|item| (item.id, item.timing())).collect();

    let mut moved = items.remove(from_index);
    moved.set_timing(to);
    items.insert(target.index.min(items.len()), moved);
    sort_chronologically(items);

    let writes = items
        .iter()
        .filter(|item| before.get(&item.id) != Some(&item.timing()))
        .map(|item| ItemWrite {
            item_id: item.id,
            timing: item.timing(),
        })
        .collect();

    Ok(Some(Reorder {
        item_id: source_id,
        from,
        to,
        writes,
    }))
}
