//! Builder for creating and configuring Larder instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Larder;
use crate::{
    db::Database,
    error::{LarderError, Result},
};

/// Builder for creating and configuring Larder instances.
#[derive(Debug, Clone, Default)]
pub struct LarderBuilder {
    database_path: Option<PathBuf>,
}

impl LarderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// Without one, the path follows the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/larder/larder.db` or `~/.local/share/larder/larder.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured larder instance.
    ///
    /// The database is opened once here, so schema creation or migration
    /// failures surface at build time rather than on the first operation.
    ///
    /// # Errors
    ///
    /// Returns `LarderError::FileSystem` if the database path is invalid
    /// Returns `LarderError::Database` if database initialization fails
    pub async fn build(self) -> Result<Larder> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => xdg::BaseDirectories::with_prefix("larder")
                .place_data_file("larder.db")
                .map_err(|e| LarderError::XdgDirectory(e.to_string()))?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LarderError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening larder database at {}", db_path.display());

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(drop))
            .await
            .map_err(|e| LarderError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Larder::new(db_path))
    }
}
