//! Core library for the Voyage trip itinerary planner.
//!
//! Trips own a dated itinerary of schedule items and a backlog of undated
//! ideas. Besides plain record management the crate implements drag-and-drop
//! sequencing: moving an item onto another item (possibly on another day) and
//! promoting an idea into the itinerary, with only the changed timestamps
//! written back.
//!
//! - [`models`]: trips, schedule items, ideas and day buckets
//! - [`sequencer`]: the drag state machine, reorders and promotion planning
//! - [`store`]: the persistence seam the sequencer's output is written through
//! - [`planner`]: the async facade used by the CLI and the MCP server
//! - [`display`]: markdown rendering of models and results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use voyage_core::{
//!     params::{CreateTrip, IdeaCreate, ItemCreate, PromoteIdea},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("voyage.db"))
//!     .build()
//!     .await?;
//!
//! let trip = planner
//!     .create_trip(&CreateTrip {
//!         title: "Kyoto".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! let temple = planner
//!     .add_item(&ItemCreate {
//!         trip_id: trip.id,
//!         title: "Kiyomizu-dera".to_string(),
//!         date: "2024-11-02".to_string(),
//!         time: Some("08:00".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! let idea = planner
//!     .add_idea(&IdeaCreate {
//!         trip_id: trip.id,
//!         title: "Nishiki market".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // The idea becomes a flexible item on the temple's day
//! let promoted = planner
//!     .promote_idea(&PromoteIdea {
//!         idea_id: idea.id,
//!         target_id: temple.id,
//!     })
//!     .await?;
//! println!("{promoted}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod operations;
pub mod params;
pub mod planner;
pub mod sequencer;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Ideas, MoveResult, OperationStatus, PromoteResult, Trips,
    UpdateResult,
};
pub use error::{ItineraryError, Result};
pub use models::{Category, DayPlan, Idea, ItemTiming, Priority, ScheduleItem, Trip, TripStatus};
pub use params::{
    CreateTrip, DeleteTrip, Id, IdeaCreate, ItemCreate, MoveItem, PromoteIdea, UpdateItem,
};
pub use planner::{Planner, PlannerBuilder};
pub use sequencer::{DragSource, DropOutcome, Sequencer, SyncReport};
pub use store::{Conversion, ItineraryStore, SqliteStore};
