//! Database operations and SQLite management for the larder.
//!
//! This module provides the low-level persistence layer: connection
//! handling, schema creation and migration, a generic query gateway, and
//! typed repositories for ingredients, recipes, measures and units.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod gateway;
pub mod ingredients;
pub mod measures;
pub mod recipes;
pub mod schema;
pub mod units;

pub(crate) const TABLE_UNITS: &str = "units";
pub(crate) const TABLE_INGREDIENTS: &str = "ingredients";
pub(crate) const TABLE_RECIPES: &str = "recipes";
pub(crate) const TABLE_MEASURES: &str = "measures";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes or migrates the
    /// schema as needed.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let mut db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
