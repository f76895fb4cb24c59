//! Drag-and-drop operations for the Planner: item moves and idea promotion.
//!
//! Both follow the same shape: load the trip into a
//! [`Sequencer`], replay the gesture on it, then persist what it produced.
//! Reorders are optimistic. The sequencer's new order stands even when some
//! writes fail, and the failures come back in a [`SyncReport`] rather than as
//! an error.

use std::sync::Arc;

use log::{debug, warn};
use tokio::task;

use super::Planner;
use crate::{
    display::{MoveResult, PromoteResult},
    error::{ItineraryError, Result},
    models::DayPlan,
    params::{Id, MoveItem, PromoteIdea},
    sequencer::{DragSource, DropOutcome, ItemWrite, PromotionPlan, Sequencer, SyncReport},
    store::Conversion,
};

impl Planner {
    /// Loads a trip's items and ideas into a fresh sequencer.
    pub async fn open_itinerary(&self, trip_id: u64) -> Result<Sequencer> {
        let items = self.with_store(move |store| store.list_schedule_items(trip_id));
        let ideas = self.with_store(move |store| store.list_ideas(trip_id));
        let (items, ideas) = tokio::try_join!(items, ideas)?;
        Ok(Sequencer::new(items, ideas))
    }

    /// Persists reorder writes concurrently, one blocking task per write.
    ///
    /// Never fails as a whole: each write either lands in
    /// [`SyncReport::written`] or in [`SyncReport::failures`]. Nothing is
    /// retried or rolled back.
    pub async fn persist_reorder(&self, writes: &[ItemWrite]) -> SyncReport {
        let pending: Vec<_> = writes
            .iter()
            .map(|write| {
                let store = Arc::clone(&self.store);
                let write = *write;
                let handle = task::spawn_blocking(move || {
                    store.update_schedule_item(write.item_id, &write.timing)
                });
                (write.item_id, handle)
            })
            .collect();

        let mut report = SyncReport::default();
        for (item_id, handle) in pending {
            match handle.await.map_err(ItineraryError::join).and_then(|r| r) {
                Ok(()) => report.record_success(item_id),
                Err(e) => {
                    warn!("Failed to save new time for item {item_id}: {e}");
                    report.record_failure(item_id, e);
                }
            }
        }
        report
    }

    /// Persists a planned promotion through the store's conversion.
    ///
    /// # Errors
    ///
    /// Fails when the item could not be created. A failure to remove the idea
    /// afterwards is reported in [`Conversion::idea_left_behind`] instead.
    pub async fn commit_promotion(&self, plan: &PromotionPlan) -> Result<Conversion> {
        let idea_id = plan.idea_id;
        let item = plan.item.clone();
        self.with_store(move |store| store.convert_idea(idea_id, &item))
            .await
    }

    /// Drags one item onto another.
    ///
    /// Unknown items, targets outside the item's trip and drops of an item
    /// onto itself change nothing and are not errors.
    pub async fn move_item(&self, params: &MoveItem) -> Result<MoveResult> {
        let Some(item) = self.get_item(&Id { id: params.item_id }).await? else {
            debug!("Move of unknown item {} ignored", params.item_id);
            return Ok(MoveResult::unchanged(params.item_id, params.target_id));
        };

        let mut sequencer = self.open_itinerary(item.trip_id).await?;
        sequencer.begin_drag(DragSource::Item(params.item_id))?;
        let DropOutcome::Reordered(reorder) = sequencer.end_drag(Some(params.target_id)) else {
            return Ok(MoveResult::unchanged(params.item_id, params.target_id));
        };

        let sync = self.persist_reorder(&reorder.writes).await;
        let day = day_of(&sequencer, reorder.to.day());
        Ok(MoveResult {
            item_id: params.item_id,
            target_id: params.target_id,
            reorder: Some(reorder),
            sync,
            day,
        })
    }

    /// Drags an idea onto an item, scheduling it as a flexible item on that
    /// item's day.
    ///
    /// Unknown ideas and targets outside the idea's trip change nothing and
    /// are not errors.
    pub async fn promote_idea(&self, params: &PromoteIdea) -> Result<PromoteResult> {
        let Some(idea) = self.get_idea(&Id { id: params.idea_id }).await? else {
            debug!("Promotion of unknown idea {} ignored", params.idea_id);
            return Ok(PromoteResult::unchanged(params.idea_id, params.target_id));
        };

        let mut sequencer = self.open_itinerary(idea.trip_id).await?;
        sequencer.begin_drag(DragSource::Idea(params.idea_id))?;
        let DropOutcome::Promote(plan) = sequencer.end_drag(Some(params.target_id)) else {
            return Ok(PromoteResult::unchanged(params.idea_id, params.target_id));
        };

        let conversion = self.commit_promotion(&plan).await?;
        sequencer.apply_promotion(plan.idea_id, conversion.item.clone());

        let day = day_of(&sequencer, conversion.item.day());
        Ok(PromoteResult {
            idea_id: params.idea_id,
            target_id: params.target_id,
            conversion: Some(conversion),
            day,
        })
    }
}

fn day_of(sequencer: &Sequencer, date: jiff::civil::Date) -> Option<DayPlan> {
    sequencer.days().into_iter().find(|day| day.date == date)
}
