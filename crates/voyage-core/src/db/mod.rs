//! Database operations and SQLite management for trips, items and ideas.
//!
//! Every [`Database`] owns one SQLite connection. Callers open a fresh
//! connection per unit of work, so concurrent writers never share one; the
//! busy timeout lets them queue on SQLite's own lock instead of failing.

use std::{path::Path, time::Duration};

use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

pub mod idea_queries;
pub mod item_queries;
mod schema;
pub mod trip_queries;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads a text column and parses it with `FromStr`, mapping failures to a
/// conversion error on that column.
pub(crate) fn parse_column<T>(row: &rusqlite::Row, index: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw: String = row.get(index)?;
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            format!("Invalid value '{raw}': {e}").into(),
        )
    })
}

/// Like [`parse_column`] for nullable columns.
pub(crate) fn parse_optional_column<T>(
    row: &rusqlite::Row,
    index: usize,
) -> rusqlite::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw: Option<String> = row.get(index)?;
    raw.map(|raw| {
        raw.parse::<T>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                index,
                Type::Text,
                format!("Invalid value '{raw}': {e}").into(),
            )
        })
    })
    .transpose()
}
