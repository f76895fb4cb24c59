//! Trip CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::{parse_column, parse_optional_column};
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    models::{NewTrip, Trip},
};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (title, destination, description, start_date, end_date, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const TRIP_COLUMNS: &str =
    "id, title, destination, description, start_date, end_date, status, created_at, updated_at";
const CHECK_TRIP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM trips WHERE id = ?1)";
const DELETE_TRIP_SQL: &str = "DELETE FROM trips WHERE id = ?1";

impl super::Database {
    fn build_trip_from_row(row: &rusqlite::Row) -> rusqlite::Result<Trip> {
        Ok(Trip {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            destination: row.get(2)?,
            description: row.get(3)?,
            start_date: parse_optional_column(row, 4)?,
            end_date: parse_optional_column(row, 5)?,
            status: parse_column(row, 6)?,
            created_at: parse_column(row, 7)?,
            updated_at: parse_column(row, 8)?,
            items: Vec::new(),
            ideas: Vec::new(),
        })
    }

    /// Creates a new trip.
    pub fn create_trip(&mut self, trip: &NewTrip) -> Result<Trip> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_TRIP_SQL,
                params![
                    &trip.title,
                    &trip.destination,
                    &trip.description,
                    trip.start_date.map(|d| d.to_string()),
                    trip.end_date.map(|d| d.to_string()),
                    trip.status.as_str(),
                    &now_str,
                    &now_str
                ],
            )
            .db_context("Failed to insert trip")?;

        Ok(Trip {
            id: self.connection.last_insert_rowid() as u64,
            title: trip.title.clone(),
            destination: trip.destination.clone(),
            description: trip.description.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            status: trip.status,
            created_at: now,
            updated_at: now,
            items: Vec::new(),
            ideas: Vec::new(),
        })
    }

    /// Retrieves a trip by its ID, with its items and ideas loaded.
    pub fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        let sql = format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1");
        let mut trip = self
            .connection
            .query_row(&sql, params![id as i64], Self::build_trip_from_row)
            .optional()
            .db_context("Failed to query trip")?;

        if let Some(ref mut trip) = trip {
            trip.items = self.get_items(trip.id)?;
            trip.ideas = self.get_ideas(trip.id)?;
        }

        Ok(trip)
    }

    /// Lists all trips, soonest start first; undated trips come last.
    ///
    /// Items and ideas are loaded for every trip.
    pub fn list_trips(&self) -> Result<Vec<Trip>> {
        let sql = format!(
            "SELECT {TRIP_COLUMNS} FROM trips \
             ORDER BY start_date IS NULL, start_date, id DESC"
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let mut trips = stmt
            .query_map([], Self::build_trip_from_row)
            .db_context("Failed to query trips")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch trips")?;

        for trip in &mut trips {
            trip.items = self.get_items(trip.id)?;
            trip.ideas = self.get_ideas(trip.id)?;
        }

        Ok(trips)
    }

    /// Returns true if a trip with the ID exists.
    pub fn trip_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_TRIP_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check trip existence")
    }

    /// Deletes a trip; its items and ideas go with it.
    pub fn delete_trip(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_TRIP_SQL, params![id as i64])
            .db_context("Failed to delete trip")?;

        if deleted == 0 {
            return Err(ItineraryError::TripNotFound { id });
        }
        Ok(())
    }
}
