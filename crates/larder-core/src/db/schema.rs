//! Schema creation, unit seeding and version migrations.

use log::info;
use rusqlite::{params, Connection};

use crate::{
    error::{DatabaseResultExt, LarderError, Result},
    models::UnitKind,
};

/// Schema version expected by this build, stored in SQLite's `user_version`.
pub const SCHEMA_VERSION: i64 = 2;

/// Static unit reference data seeded when the schema is created.
const UNITS: [(&str, UnitKind); 8] = [
    ("g", UnitKind::Weight),
    ("kg", UnitKind::Weight),
    ("mL", UnitKind::Volume),
    ("L", UnitKind::Volume),
    ("tsp", UnitKind::Volume),
    ("tbsp", UnitKind::Volume),
    ("oz", UnitKind::Volume),
    ("c", UnitKind::Volume),
];

impl super::Database {
    /// Brings the database to the current schema version: creates the
    /// schema on first open, upgrades an older database, and rejects a
    /// database written by a newer build.
    ///
    /// The schema change and the version bump run in one transaction, so
    /// a failure rolls the file back to its previous version and a later
    /// open retries from a clean state.
    pub(super) fn initialize_schema(&mut self) -> Result<()> {
        // Enable foreign keys for this connection; cascade deletes on the
        // measures table depend on it
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let version = self.schema_version()?;
        if version == SCHEMA_VERSION {
            return Ok(());
        }
        if version > SCHEMA_VERSION {
            return Err(LarderError::Configuration {
                message: format!(
                    "Database schema version {version} is newer than the supported version {SCHEMA_VERSION}"
                ),
            });
        }

        // Enforcement stays off while referenced tables are created or
        // rebuilt; the pragma cannot be toggled inside the transaction
        self.connection
            .execute("PRAGMA foreign_keys = OFF", [])
            .db_context("Failed to disable foreign keys for schema changes")?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to start schema transaction")?;

        if version == 0 {
            create_schema(&tx)?;
        } else {
            upgrade_schema(&tx, version)?;
        }

        tx.execute(&format!("PRAGMA user_version = {SCHEMA_VERSION}"), [])
            .db_context("Failed to record schema version")?;
        tx.commit().db_context("Failed to commit schema changes")?;

        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to re-enable foreign keys")
            .map(|_| ())
    }

    fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }
}

/// Creates all tables from the embedded SQL file and seeds the unit
/// reference table.
fn create_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("../../assets/schema.sql");
    conn.execute_batch(schema_sql)
        .db_context("Failed to create database schema")?;

    seed_units(conn)
}

fn seed_units(conn: &Connection) -> Result<()> {
    let mut stmt = conn
        .prepare("INSERT INTO units (abbreviation, type) VALUES (?1, ?2)")
        .db_context("Failed to prepare unit seed statement")?;

    for (abbreviation, kind) in UNITS {
        stmt.execute(params![abbreviation, kind.as_str()])
            .db_context("Failed to seed unit table")?;
    }

    Ok(())
}

/// Upgrades a database from the immediately preceding schema version,
/// carrying ingredient and recipe rows across the rebuild.
///
/// Measures are dropped, not migrated. The unconditional row copy assumes
/// the column order and types of `ingredients` and `recipes` did not change
/// between the two versions; a mismatch fails the copy and the caller's
/// transaction rolls the whole upgrade back.
fn upgrade_schema(conn: &Connection, from: i64) -> Result<()> {
    if from != SCHEMA_VERSION - 1 {
        return Err(LarderError::Configuration {
            message: format!("No upgrade path from schema version {from} to {SCHEMA_VERSION}"),
        });
    }

    info!("Upgrading database schema from version {from} to {SCHEMA_VERSION}");

    conn.execute_batch(
        "ALTER TABLE ingredients RENAME TO _ingredients_old;
         ALTER TABLE recipes RENAME TO _recipes_old;
         DROP TABLE IF EXISTS units;
         DROP TABLE IF EXISTS ingredients;
         DROP TABLE IF EXISTS recipes;
         DROP TABLE IF EXISTS measures;",
    )
    .db_context("Failed to stash tables for upgrade")?;

    create_schema(conn)?;

    conn.execute_batch(
        "INSERT INTO ingredients SELECT * FROM _ingredients_old;
         INSERT INTO recipes SELECT * FROM _recipes_old;
         DROP TABLE _ingredients_old;
         DROP TABLE _recipes_old;",
    )
    .db_context("Failed to restore rows after upgrade")
}
