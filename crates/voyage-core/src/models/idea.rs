//! Unscheduled activity ideas.

use std::cmp::Ordering;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Category, Priority};

/// An undated candidate activity awaiting scheduling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Idea {
    pub id: u64,

    /// ID of the owning trip
    pub trip_id: u64,

    pub title: String,

    pub description: Option<String>,

    /// Category the idea becomes once scheduled (activity if unset)
    pub category: Option<Category>,

    pub location: Option<String>,

    pub notes: Option<String>,

    pub url: Option<String>,

    pub estimated_duration_hours: Option<f64>,

    #[serde(default)]
    pub priority: Priority,

    /// Timestamp when the idea was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the idea was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Idea {
    /// Display order for idea lists: priority first, then newest first.
    pub fn display_order(a: &Idea, b: &Idea) -> Ordering {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| b.created_at.cmp(&a.created_at))
    }
}
