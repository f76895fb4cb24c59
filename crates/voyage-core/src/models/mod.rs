//! Data models for trips, itinerary items and ideas.
//!
//! This module contains the domain models of the Voyage itinerary planner.
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures stay separate from
//! presentation.
//!
//! # Time model
//!
//! Item start and end times are [`jiff::civil::DateTime`] values: local
//! wall-clock times without a zone. The date component decides the day bucket
//! an item belongs to and the full value decides its order within the day. A
//! time of exactly 12:00 is the "flexible" sentinel (see
//! [`schedule::FLEXIBLE_TIME`]).
//!
//! Record bookkeeping (`created_at`, `updated_at`) uses UTC
//! [`jiff::Timestamp`]s.
//!
//! # Examples
//!
//! ```rust
//! use jiff::{civil::datetime, Timestamp};
//! use voyage_core::models::{Category, ScheduleItem};
//!
//! let item = ScheduleItem {
//!     id: 1,
//!     trip_id: 1,
//!     category: Category::Activity,
//!     title: "Museum".to_string(),
//!     start_at: datetime(2024, 6, 1, 12, 0, 0, 0),
//!     // ... other fields
//! #   description: None,
//! #   location: None,
//! #   notes: None,
//! #   confirmation_number: None,
//! #   cost: None,
//! #   end_at: None,
//! #   created_at: Timestamp::now(),
//! #   updated_at: Timestamp::now(),
//! };
//! println!("{}", item); // Shows "Flexible" instead of 12:00
//! ```

pub mod day;
pub mod idea;
pub mod item;
pub mod requests;
pub mod schedule;
pub mod status;
pub mod trip;


pub use day::DayPlan;
pub use idea::Idea;
pub use item::ScheduleItem;
pub use requests::{NewIdea, NewScheduleItem, NewTrip, UpdateItemRequest};
pub use schedule::{ItemTiming, FLEXIBLE_TIME};
pub use status::{Category, Priority, TripStatus};
pub use trip::Trip;
