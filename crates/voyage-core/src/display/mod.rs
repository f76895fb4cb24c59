//! Markdown presentation of trips, itineraries and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes get newtype wrappers so every interface prints them
//! the same way.
//!
//! - [`collections`]: `Trips`, `Ideas`, `Days`
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`,
//!   `MoveResult`, `PromoteResult`
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: timestamp, day and item-time formatting
//!
//! ```rust
//! use jiff::civil::date;
//! use voyage_core::{display::Days, models::DayPlan};
//!
//! let days = Days(vec![DayPlan {
//!     number: Some(1),
//!     date: date(2024, 6, 1),
//!     items: vec![],
//! }]);
//! assert!(days.to_string().starts_with("### Day 1 · Saturday 2024-06-01"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Days, Ideas, Trips};
pub use datetime::{DayLabel, ItemSpan, ItemTime, LocalDateTime};
pub use results::{CreateResult, DeleteResult, MoveResult, PromoteResult, UpdateResult};
pub use status::OperationStatus;
