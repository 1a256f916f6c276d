//! Error types for the larder library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all larder operations.
#[derive(Error, Debug)]
pub enum LarderError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A write was rejected by a database constraint (duplicate name or a
    /// unit that is not in the reference table)
    #[error("Write to '{table}' was rejected by a database constraint")]
    Constraint { table: String },
    /// A measure referenced an ingredient name with no matching row
    #[error("No ingredient named '{name}' exists")]
    IngredientNotFound { name: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl LarderError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates a constraint rejection for a write against the given table.
    pub fn constraint(table: impl Into<String>) -> Self {
        Self::Constraint {
            table: table.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| LarderError::database_error(message, e))
    }
}

/// Result type alias for larder operations
pub type Result<T> = std::result::Result<T, LarderError>;
