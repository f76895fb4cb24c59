//! Trip operations for the Planner.

use super::Planner;
use crate::{
    display::Trips,
    error::{ItineraryError, Result},
    models::{NewTrip, Trip},
    params::{CreateTrip, DeleteTrip, Id},
};

impl Planner {
    /// Creates a new trip.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::InvalidInput` - When the title is blank, a date does
    ///   not parse, or the trip ends before it starts
    pub async fn create_trip(&self, params: &CreateTrip) -> Result<Trip> {
        let trip = NewTrip::try_from(params)?;
        self.with_database(move |db| db.create_trip(&trip)).await
    }

    /// Retrieves a trip with its items and ideas.
    pub async fn get_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let id = params.id;
        self.with_database(move |db| db.get_trip(id)).await
    }

    /// Lists all trips, soonest first.
    pub async fn list_trips(&self) -> Result<Trips> {
        self.with_database(|db| db.list_trips()).await.map(Trips)
    }

    /// Deletes a trip and everything it owns.
    ///
    /// Returns the deleted trip, or `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::InvalidInput` - When `confirmed` is not set
    pub async fn delete_trip(&self, params: &DeleteTrip) -> Result<Option<Trip>> {
        if !params.confirmed {
            return Err(ItineraryError::invalid_input("confirmed").with_reason(
                "Trip deletion removes all of its items and ideas. Set 'confirmed' to true to proceed.",
            ));
        }

        let id = params.id;
        self.with_database(move |db| {
            let Some(trip) = db.get_trip(id)? else {
                return Ok(None);
            };
            db.delete_trip(id)?;
            Ok(Some(trip))
        })
        .await
    }

    /// Renders a trip with its items and ideas as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// * `ItineraryError::TripNotFound` - When no trip has the ID
    pub async fn export_trip_json(&self, params: &Id) -> Result<String> {
        let trip = self
            .get_trip(params)
            .await?
            .ok_or(ItineraryError::TripNotFound { id: params.id })?;
        Ok(serde_json::to_string_pretty(&trip)?)
    }
}
