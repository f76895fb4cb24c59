//! Turning an idea dropped on the itinerary into a new item.

use serde::Serialize;

use super::resolve::DropTarget;
use crate::models::{schedule, Idea, ItemTiming, NewScheduleItem};

/// A promotion waiting to be persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PromotionPlan {
    pub idea_id: u64,
    pub target: DropTarget,
    /// The item to create: flexible time on the target's day, no end
    #[serde(skip)]
    pub item: NewScheduleItem,
}

impl PromotionPlan {
    pub fn new(idea: &Idea, target: DropTarget) -> Self {
        Self {
            idea_id: idea.id,
            target,
            item: NewScheduleItem {
                trip_id: idea.trip_id,
                category: idea.category.unwrap_or_default(),
                title: idea.title.clone(),
                description: idea.description.clone(),
                location: idea.location.clone(),
                notes: idea.notes.clone(),
                confirmation_number: None,
                cost: None,
                timing: ItemTiming {
                    start_at: schedule::flexible_on(target.day),
                    end_at: None,
                },
            },
        }
    }
}
