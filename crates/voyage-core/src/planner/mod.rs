//! High-level planner API for trips, itineraries and ideas.
//!
//! [`Planner`] is the async facade every interface talks to. Record
//! management (trips, items, ideas) goes straight to the database; drag and
//! drop goes through a [`Sequencer`](crate::sequencer::Sequencer) loaded from
//! the planner's [`ItineraryStore`].
//!
//! Every database call runs on tokio's blocking pool with its own
//! connection, so reorder writes issued together really do run side by side.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`trip_ops`]: Trip creation, lookup, listing, deletion and export
//! - [`item_ops`]: Schedule item add, show, update and delete
//! - [`idea_ops`]: Idea capture, listing and deletion
//! - [`itinerary_ops`]: Moving items and promoting ideas
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use voyage_core::{
//!     params::{CreateTrip, ItemCreate, MoveItem},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/voyage.db"))
//!     .build()
//!     .await?;
//!
//! let trip = planner
//!     .create_trip(&CreateTrip {
//!         title: "Lisbon".to_string(),
//!         start_date: Some("2024-09-01".to_string()),
//!         end_date: Some("2024-09-04".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let museum = planner
//!     .add_item(&ItemCreate {
//!         trip_id: trip.id,
//!         title: "Gulbenkian".to_string(),
//!         date: "2024-09-01".to_string(),
//!         time: Some("10:00".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! let dinner = planner
//!     .add_item(&ItemCreate {
//!         trip_id: trip.id,
//!         title: "Dinner".to_string(),
//!         date: "2024-09-02".to_string(),
//!         time: Some("20:00".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Drag the museum visit onto day two
//! let result = planner
//!     .move_item(&MoveItem {
//!         item_id: museum.id,
//!         target_id: dinner.id,
//!     })
//!     .await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    db::Database,
    error::{ItineraryError, Result},
    store::ItineraryStore,
};

pub mod builder;
pub mod idea_ops;
pub mod item_ops;
pub mod itinerary_ops;
pub mod trip_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing trips, itineraries and ideas.
#[derive(Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) store: Arc<dyn ItineraryStore>,
}

impl Planner {
    pub(crate) fn new(db_path: PathBuf, store: Arc<dyn ItineraryStore>) -> Self {
        Self { db_path, store }
    }

    /// Runs `f` against a fresh database connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(ItineraryError::join)?
    }

    /// Runs `f` against the itinerary store on the blocking pool.
    pub(crate) async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn ItineraryStore) -> Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(ItineraryError::join)?
    }
}
