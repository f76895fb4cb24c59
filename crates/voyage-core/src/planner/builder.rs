//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{ItineraryError, Result},
    store::{ItineraryStore, SqliteStore},
};

/// Builder for creating and configuring Planner instances.
#[derive(Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn ItineraryStore>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/voyage/voyage.db` or `~/.local/share/voyage/voyage.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the store used for drag-and-drop persistence.
    ///
    /// Defaults to a [`SqliteStore`] on the planner's database.
    pub fn with_store(mut self, store: Arc<dyn ItineraryStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::XdgDirectory` if no default path can be found
    /// Returns `ItineraryError::FileSystem` if the database directory cannot
    /// be created
    /// Returns `ItineraryError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ItineraryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(ItineraryError::join)??;
        debug!("Using database at {}", db_path.display());

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(SqliteStore::new(&db_path)));
        Ok(Planner::new(db_path, store))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("voyage")
            .place_data_file("voyage.db")
            .map_err(|e| ItineraryError::XdgDirectory(e.to_string()))
    }
}
