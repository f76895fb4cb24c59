//! Idea operations for the Planner.

use super::Planner;
use crate::{
    display::Ideas,
    error::{ItineraryError, Result},
    models::{Idea, NewIdea},
    params::{Id, IdeaCreate},
};

impl Planner {
    /// Captures an idea for later scheduling.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::InvalidInput` - For a blank title, an unknown
    ///   category or priority, or a negative duration
    /// * `ItineraryError::TripNotFound` - When the trip does not exist
    pub async fn add_idea(&self, params: &IdeaCreate) -> Result<Idea> {
        let idea = NewIdea::try_from(params)?;
        self.with_database(move |db| db.create_idea(&idea)).await
    }

    pub async fn get_idea(&self, params: &Id) -> Result<Option<Idea>> {
        let id = params.id;
        self.with_database(move |db| db.get_idea(id)).await
    }

    /// Lists a trip's ideas in display order.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::TripNotFound` - When the trip does not exist
    pub async fn list_ideas(&self, params: &Id) -> Result<Ideas> {
        let trip_id = params.id;
        self.with_database(move |db| {
            if !db.trip_exists(trip_id)? {
                return Err(ItineraryError::TripNotFound { id: trip_id });
            }
            db.get_ideas(trip_id).map(Ideas)
        })
        .await
    }

    /// Deletes an idea, returning it if it existed.
    pub async fn delete_idea(&self, params: &Id) -> Result<Option<Idea>> {
        let id = params.id;
        self.with_database(move |db| {
            let Some(idea) = db.get_idea(id)? else {
                return Ok(None);
            };
            db.delete_idea(id)?;
            Ok(Some(idea))
        })
        .await
    }
}
