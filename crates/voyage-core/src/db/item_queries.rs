//! Schedule item CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::{parse_column, parse_optional_column};
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    models::{ItemTiming, NewScheduleItem, ScheduleItem, UpdateItemRequest},
};

const INSERT_ITEM_SQL: &str = "INSERT INTO itinerary_items (trip_id, category, title, description, location, notes, confirmation_number, cost, start_at, end_at, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const ITEM_COLUMNS: &str = "id, trip_id, category, title, description, location, notes, confirmation_number, cost, start_at, end_at, created_at, updated_at";
const UPDATE_ITEM_TIMING_SQL: &str =
    "UPDATE itinerary_items SET start_at = ?1, end_at = ?2, updated_at = ?3 WHERE id = ?4";
const UPDATE_ITEM_SQL: &str = "UPDATE itinerary_items SET category = ?1, title = ?2, description = ?3, location = ?4, notes = ?5, confirmation_number = ?6, cost = ?7, start_at = ?8, end_at = ?9, updated_at = ?10 WHERE id = ?11";
const DELETE_ITEM_SQL: &str = "DELETE FROM itinerary_items WHERE id = ?1";
const TOUCH_TRIP_SQL: &str = "UPDATE trips SET updated_at = ?1 WHERE id = ?2";

/// Inserts an item on an open connection or transaction and returns it.
pub(super) fn insert_item(
    connection: &Connection,
    item: &NewScheduleItem,
    now: Timestamp,
) -> Result<ScheduleItem> {
    let now_str = now.to_string();

    connection
        .execute(
            INSERT_ITEM_SQL,
            params![
                item.trip_id as i64,
                item.category.as_str(),
                &item.title,
                &item.description,
                &item.location,
                &item.notes,
                &item.confirmation_number,
                item.cost,
                item.timing.start_at.to_string(),
                item.timing.end_at.map(|end| end.to_string()),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert itinerary item")?;
    let id = connection.last_insert_rowid() as u64;

    connection
        .execute(TOUCH_TRIP_SQL, params![&now_str, item.trip_id as i64])
        .db_context("Failed to update trip timestamp")?;

    Ok(ScheduleItem {
        id,
        trip_id: item.trip_id,
        category: item.category,
        title: item.title.clone(),
        description: item.description.clone(),
        location: item.location.clone(),
        notes: item.notes.clone(),
        confirmation_number: item.confirmation_number.clone(),
        cost: item.cost,
        start_at: item.timing.start_at,
        end_at: item.timing.end_at,
        created_at: now,
        updated_at: now,
    })
}

impl super::Database {
    pub(super) fn build_item_from_row(row: &rusqlite::Row) -> rusqlite::Result<ScheduleItem> {
        Ok(ScheduleItem {
            id: row.get::<_, i64>(0)? as u64,
            trip_id: row.get::<_, i64>(1)? as u64,
            category: parse_column(row, 2)?,
            title: row.get(3)?,
            description: row.get(4)?,
            location: row.get(5)?,
            notes: row.get(6)?,
            confirmation_number: row.get(7)?,
            cost: row.get(8)?,
            start_at: parse_column(row, 9)?,
            end_at: parse_optional_column(row, 10)?,
            created_at: parse_column(row, 11)?,
            updated_at: parse_column(row, 12)?,
        })
    }

    /// Adds a schedule item to an existing trip.
    pub fn create_item(&mut self, item: &NewScheduleItem) -> Result<ScheduleItem> {
        if !self.trip_exists(item.trip_id)? {
            return Err(ItineraryError::TripNotFound { id: item.trip_id });
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let created = insert_item(&tx, item, Timestamp::now())?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(created)
    }

    /// Retrieves a single item by its ID.
    pub fn get_item(&self, id: u64) -> Result<Option<ScheduleItem>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM itinerary_items WHERE id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], Self::build_item_from_row)
            .optional()
            .db_context("Failed to get itinerary item")
    }

    /// Retrieves a trip's items in chronological order.
    ///
    /// Items sharing a start time come back in insertion order.
    pub fn get_items(&self, trip_id: u64) -> Result<Vec<ScheduleItem>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM itinerary_items WHERE trip_id = ?1 ORDER BY start_at, id"
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map(params![trip_id as i64], Self::build_item_from_row)
            .db_context("Failed to query itinerary items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch itinerary items")?;

        Ok(items)
    }

    /// Writes only the start and end of an item.
    pub fn update_item_timing(&mut self, id: u64, timing: &ItemTiming) -> Result<()> {
        let updated = self
            .connection
            .execute(
                UPDATE_ITEM_TIMING_SQL,
                params![
                    timing.start_at.to_string(),
                    timing.end_at.map(|end| end.to_string()),
                    Timestamp::now().to_string(),
                    id as i64
                ],
            )
            .db_context("Failed to update item timing")?;

        if updated == 0 {
            return Err(ItineraryError::ItemNotFound { id });
        }
        Ok(())
    }

    /// Applies an edit to an item, keeping fields the request leaves unset.
    pub fn update_item(&mut self, id: u64, request: UpdateItemRequest) -> Result<()> {
        if request.is_empty() {
            return Ok(());
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let sql = format!("SELECT {ITEM_COLUMNS} FROM itinerary_items WHERE id = ?1");
        let current = tx
            .query_row(&sql, params![id as i64], Self::build_item_from_row)
            .optional()
            .db_context("Failed to get current itinerary item")?
            .ok_or(ItineraryError::ItemNotFound { id })?;

        let timing = ItemTiming::new(
            request.start_at.unwrap_or(current.start_at),
            request.end_at.unwrap_or(current.end_at),
        )?;
        let now_str = Timestamp::now().to_string();

        tx.execute(
            UPDATE_ITEM_SQL,
            params![
                request.category.unwrap_or(current.category).as_str(),
                request.title.unwrap_or(current.title),
                request.description.or(current.description),
                request.location.or(current.location),
                request.notes.or(current.notes),
                request.confirmation_number.or(current.confirmation_number),
                request.cost.or(current.cost),
                timing.start_at.to_string(),
                timing.end_at.map(|end| end.to_string()),
                &now_str,
                id as i64
            ],
        )
        .db_context("Failed to update itinerary item")?;

        tx.execute(TOUCH_TRIP_SQL, params![&now_str, current.trip_id as i64])
            .db_context("Failed to update trip timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Deletes an item.
    pub fn delete_item(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_ITEM_SQL, params![id as i64])
            .db_context("Failed to delete itinerary item")?;

        if deleted == 0 {
            return Err(ItineraryError::ItemNotFound { id });
        }
        Ok(())
    }
}
