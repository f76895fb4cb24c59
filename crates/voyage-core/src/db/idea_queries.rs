//! Idea CRUD operations and the idea-to-item conversion.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::{item_queries::insert_item, parse_column, parse_optional_column};
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    models::{Idea, NewIdea, NewScheduleItem, ScheduleItem},
};

const INSERT_IDEA_SQL: &str = "INSERT INTO ideas (trip_id, title, description, category, location, notes, url, estimated_duration_hours, priority, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const IDEA_COLUMNS: &str = "id, trip_id, title, description, category, location, notes, url, estimated_duration_hours, priority, created_at, updated_at";
// High before medium before low, newest first within a priority. Row IDs
// grow with creation time and, unlike the timestamp text, sort numerically.
const IDEA_ORDER: &str =
    "CASE priority WHEN 'high' THEN 0 WHEN 'medium' THEN 1 ELSE 2 END, id DESC";
const DELETE_IDEA_SQL: &str = "DELETE FROM ideas WHERE id = ?1";

impl super::Database {
    fn build_idea_from_row(row: &rusqlite::Row) -> rusqlite::Result<Idea> {
        Ok(Idea {
            id: row.get::<_, i64>(0)? as u64,
            trip_id: row.get::<_, i64>(1)? as u64,
            title: row.get(2)?,
            description: row.get(3)?,
            category: parse_optional_column(row, 4)?,
            location: row.get(5)?,
            notes: row.get(6)?,
            url: row.get(7)?,
            estimated_duration_hours: row.get(8)?,
            priority: parse_column(row, 9)?,
            created_at: parse_column(row, 10)?,
            updated_at: parse_column(row, 11)?,
        })
    }

    /// Captures a new idea for an existing trip.
    pub fn create_idea(&mut self, idea: &NewIdea) -> Result<Idea> {
        if !self.trip_exists(idea.trip_id)? {
            return Err(ItineraryError::TripNotFound { id: idea.trip_id });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_IDEA_SQL,
                params![
                    idea.trip_id as i64,
                    &idea.title,
                    &idea.description,
                    idea.category.map(|c| c.as_str()),
                    &idea.location,
                    &idea.notes,
                    &idea.url,
                    idea.estimated_duration_hours,
                    idea.priority.as_str(),
                    &now_str,
                    &now_str
                ],
            )
            .db_context("Failed to insert idea")?;

        Ok(Idea {
            id: self.connection.last_insert_rowid() as u64,
            trip_id: idea.trip_id,
            title: idea.title.clone(),
            description: idea.description.clone(),
            category: idea.category,
            location: idea.location.clone(),
            notes: idea.notes.clone(),
            url: idea.url.clone(),
            estimated_duration_hours: idea.estimated_duration_hours,
            priority: idea.priority,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a single idea by its ID.
    pub fn get_idea(&self, id: u64) -> Result<Option<Idea>> {
        let sql = format!("SELECT {IDEA_COLUMNS} FROM ideas WHERE id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], Self::build_idea_from_row)
            .optional()
            .db_context("Failed to get idea")
    }

    /// Retrieves a trip's ideas in display order.
    pub fn get_ideas(&self, trip_id: u64) -> Result<Vec<Idea>> {
        let sql =
            format!("SELECT {IDEA_COLUMNS} FROM ideas WHERE trip_id = ?1 ORDER BY {IDEA_ORDER}");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let ideas = stmt
            .query_map(params![trip_id as i64], Self::build_idea_from_row)
            .db_context("Failed to query ideas")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch ideas")?;

        Ok(ideas)
    }

    /// Deletes an idea.
    pub fn delete_idea(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_IDEA_SQL, params![id as i64])
            .db_context("Failed to delete idea")?;

        if deleted == 0 {
            return Err(ItineraryError::IdeaNotFound { id });
        }
        Ok(())
    }

    /// Schedules an idea as a new item and removes the idea, atomically.
    ///
    /// Either both the insert and the delete happen or neither does. A
    /// missing idea aborts the conversion without creating the item.
    pub fn convert_idea(&mut self, idea_id: u64, item: &NewScheduleItem) -> Result<ScheduleItem> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let deleted = tx
            .execute(DELETE_IDEA_SQL, params![idea_id as i64])
            .db_context("Failed to delete idea")?;
        if deleted == 0 {
            return Err(ItineraryError::IdeaNotFound { id: idea_id });
        }

        let created = insert_item(&tx, item, Timestamp::now())?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(created)
    }
}
