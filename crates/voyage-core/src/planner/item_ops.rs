//! Schedule item operations for the Planner.

use super::Planner;
use crate::{
    display::UpdateResult,
    error::{ItineraryError, Result},
    models::{NewScheduleItem, ScheduleItem, UpdateItemRequest},
    params::{Id, ItemCreate, UpdateItem},
};

impl Planner {
    /// Adds a schedule item to a trip.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::InvalidInput` - For a blank title, an unknown
    ///   category, unparsable dates or times, or an end before the start
    /// * `ItineraryError::TripNotFound` - When the trip does not exist
    pub async fn add_item(&self, params: &ItemCreate) -> Result<ScheduleItem> {
        let item = NewScheduleItem::try_from(params)?;
        self.with_database(move |db| db.create_item(&item)).await
    }

    pub async fn get_item(&self, params: &Id) -> Result<Option<ScheduleItem>> {
        let id = params.id;
        self.with_database(move |db| db.get_item(id)).await
    }

    /// Edits an item and returns it with a list of what changed.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::ItemNotFound` - When the item does not exist
    /// * `ItineraryError::InvalidInput` - When the edit is invalid, including
    ///   edits that would leave the item ending before it starts
    pub async fn update_item(&self, params: &UpdateItem) -> Result<UpdateResult<ScheduleItem>> {
        let params = params.clone();
        self.with_database(move |db| {
            let id = params.id;
            let current = db.get_item(id)?.ok_or(ItineraryError::ItemNotFound { id })?;
            let request = UpdateItemRequest::resolve(&params, &current)?;
            let changes = describe_changes(&request);

            db.update_item(id, request)?;
            let updated = db.get_item(id)?.ok_or(ItineraryError::ItemNotFound { id })?;
            Ok(UpdateResult::with_changes(updated, changes))
        })
        .await
    }

    /// Deletes an item, returning it if it existed.
    pub async fn delete_item(&self, params: &Id) -> Result<Option<ScheduleItem>> {
        let id = params.id;
        self.with_database(move |db| {
            let Some(item) = db.get_item(id)? else {
                return Ok(None);
            };
            db.delete_item(id)?;
            Ok(Some(item))
        })
        .await
    }
}

fn describe_changes(request: &UpdateItemRequest) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(title) = &request.title {
        changes.push(format!("Title set to '{title}'"));
    }
    if let Some(category) = request.category {
        changes.push(format!("Category set to {category}"));
    }
    if let Some(start_at) = request.start_at {
        changes.push(format!("Start moved to {start_at}"));
    }
    match request.end_at {
        Some(Some(end_at)) => changes.push(format!("End moved to {end_at}")),
        Some(None) => changes.push("End removed".to_string()),
        None => {}
    }
    for (field, value) in [
        ("Description", &request.description),
        ("Location", &request.location),
        ("Notes", &request.notes),
        ("Confirmation number", &request.confirmation_number),
    ] {
        if value.is_some() {
            changes.push(format!("{field} updated"));
        }
    }
    if let Some(cost) = request.cost {
        changes.push(format!("Cost set to {cost:.2}"));
    }
    changes
}
