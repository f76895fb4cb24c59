#![allow(dead_code)]

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tempfile::TempDir;
use voyage_core::{
    models::{Idea, ItemTiming, NewScheduleItem, ScheduleItem},
    params::{CreateTrip, ItemCreate},
    ItineraryError, ItineraryStore, Planner, PlannerBuilder, Result, SqliteStore, Trip,
};

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Creates a planner whose drag-and-drop writes go through `store`.
pub async fn create_planner_with_store(db_path: &Path, store: Arc<dyn ItineraryStore>) -> Planner {
    PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .with_store(store)
        .build()
        .await
        .expect("Failed to create planner")
}

pub async fn create_trip(planner: &Planner, title: &str) -> Trip {
    planner
        .create_trip(&CreateTrip {
            title: title.to_string(),
            start_date: Some("2024-06-01".to_string()),
            end_date: Some("2024-06-03".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create trip")
}

/// Adds an item at `date` and optional `HH:MM` time.
pub async fn add_item(
    planner: &Planner,
    trip_id: u64,
    title: &str,
    date: &str,
    time: Option<&str>,
) -> ScheduleItem {
    planner
        .add_item(&ItemCreate {
            trip_id,
            title: title.to_string(),
            date: date.to_string(),
            time: time.map(String::from),
            ..Default::default()
        })
        .await
        .expect("Failed to add item")
}

/// Store wrapper that fails selected operations and records the writes it
/// was asked to make.
///
/// It keeps the trait's default, non-transactional idea conversion.
pub struct FlakyStore {
    inner: SqliteStore,
    failing_items: HashSet<u64>,
    fail_idea_deletes: bool,
    pub updated: Mutex<Vec<u64>>,
}

impl FlakyStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            inner: SqliteStore::new(db_path),
            failing_items: HashSet::new(),
            fail_idea_deletes: false,
            updated: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_item(mut self, item_id: u64) -> Self {
        self.failing_items.insert(item_id);
        self
    }

    pub fn failing_idea_deletes(mut self) -> Self {
        self.fail_idea_deletes = true;
        self
    }

    pub fn updated_ids(&self) -> Vec<u64> {
        let mut ids = self.updated.lock().unwrap().clone();
        ids.sort_unstable();
        ids
    }
}

impl ItineraryStore for FlakyStore {
    fn update_schedule_item(&self, id: u64, timing: &ItemTiming) -> Result<()> {
        self.updated.lock().unwrap().push(id);
        if self.failing_items.contains(&id) {
            return Err(ItineraryError::Configuration {
                message: format!("injected write failure for item {id}"),
            });
        }
        self.inner.update_schedule_item(id, timing)
    }

    fn create_schedule_item(&self, item: &NewScheduleItem) -> Result<ScheduleItem> {
        self.inner.create_schedule_item(item)
    }

    fn delete_idea(&self, id: u64) -> Result<()> {
        if self.fail_idea_deletes {
            return Err(ItineraryError::Configuration {
                message: format!("injected delete failure for idea {id}"),
            });
        }
        self.inner.delete_idea(id)
    }

    fn list_schedule_items(&self, trip_id: u64) -> Result<Vec<ScheduleItem>> {
        self.inner.list_schedule_items(trip_id)
    }

    fn list_ideas(&self, trip_id: u64) -> Result<Vec<Idea>> {
        self.inner.list_ideas(trip_id)
    }
}
