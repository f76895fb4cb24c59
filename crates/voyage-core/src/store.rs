//! Persistence seam used by the itinerary sequencer.
//!
//! [`ItineraryStore`] is the narrow set of calls a drag-and-drop session
//! needs. Implementations are synchronous and are driven from tokio's
//! blocking pool by the [`Planner`](crate::Planner), one call per task.

use std::path::PathBuf;

use log::warn;
use serde::Serialize;

use crate::{
    db::Database,
    error::Result,
    models::{Idea, ItemTiming, NewScheduleItem, ScheduleItem},
};

/// Result of turning an idea into a scheduled item.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Conversion {
    /// The newly scheduled item
    pub item: ScheduleItem,
    /// Why the idea could not be removed, if it is still stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_left_behind: Option<String>,
}

/// Storage operations backing reorders and idea promotion.
pub trait ItineraryStore: Send + Sync {
    /// Writes a new start/end for an existing item.
    fn update_schedule_item(&self, id: u64, timing: &ItemTiming) -> Result<()>;

    fn create_schedule_item(&self, item: &NewScheduleItem) -> Result<ScheduleItem>;

    fn delete_idea(&self, id: u64) -> Result<()>;

    /// A trip's items in chronological order.
    fn list_schedule_items(&self, trip_id: u64) -> Result<Vec<ScheduleItem>>;

    fn list_ideas(&self, trip_id: u64) -> Result<Vec<Idea>>;

    /// Creates the item for a promoted idea, then deletes the idea.
    ///
    /// The conversion succeeds when the item is created. A deletion failure
    /// afterwards does not undo the creation; it is logged and returned in
    /// [`Conversion::idea_left_behind`]. Stores that can do both atomically
    /// should override this.
    fn convert_idea(&self, idea_id: u64, item: &NewScheduleItem) -> Result<Conversion> {
        let item = self.create_schedule_item(item)?;
        let idea_left_behind = match self.delete_idea(idea_id) {
            Ok(()) => None,
            Err(e) => {
                warn!("Idea {idea_id} was scheduled as item {} but not removed: {e}", item.id);
                Some(e.to_string())
            }
        };
        Ok(Conversion {
            item,
            idea_left_behind,
        })
    }
}

/// SQLite-backed store opening one connection per call.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    fn open(&self) -> Result<Database> {
        Database::new(&self.db_path)
    }
}

impl ItineraryStore for SqliteStore {
    fn update_schedule_item(&self, id: u64, timing: &ItemTiming) -> Result<()> {
        self.open()?.update_item_timing(id, timing)
    }

    fn create_schedule_item(&self, item: &NewScheduleItem) -> Result<ScheduleItem> {
        self.open()?.create_item(item)
    }

    fn delete_idea(&self, id: u64) -> Result<()> {
        self.open()?.delete_idea(id)
    }

    fn list_schedule_items(&self, trip_id: u64) -> Result<Vec<ScheduleItem>> {
        self.open()?.get_items(trip_id)
    }

    fn list_ideas(&self, trip_id: u64) -> Result<Vec<Idea>> {
        self.open()?.get_ideas(trip_id)
    }

    /// Runs the insert and the delete in one transaction.
    fn convert_idea(&self, idea_id: u64, item: &NewScheduleItem) -> Result<Conversion> {
        let item = self.open()?.convert_idea(idea_id, item)?;
        Ok(Conversion {
            item,
            idea_left_behind: None,
        })
    }
}
