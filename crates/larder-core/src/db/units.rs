//! Unit reference data queries.

use rusqlite::Row;

use super::{gateway, Database, TABLE_UNITS};
use crate::{
    error::Result,
    models::{Unit, UnitKind},
};

fn decode_unit(row: &Row<'_>) -> rusqlite::Result<Unit> {
    let kind: String = row.get("type")?;
    let kind = kind.parse::<UnitKind>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            row.as_ref().column_index("type").unwrap_or(0),
            rusqlite::types::Type::Text,
            e.into(),
        )
    })?;

    Ok(Unit {
        id: row.get("id")?,
        abbreviation: row.get("abbreviation")?,
        kind,
    })
}

impl Database {
    /// All measurement units in seeding order.
    pub fn units(&self) -> Result<Vec<Unit>> {
        gateway::query_rows(
            &self.connection,
            TABLE_UNITS,
            None,
            &[],
            Some("id"),
            decode_unit,
        )
    }

    /// The abbreviations of all known units, for validation and messages.
    pub fn unit_abbreviations(&self) -> Result<Vec<String>> {
        gateway::query_rows(
            &self.connection,
            TABLE_UNITS,
            None,
            &[],
            Some("id"),
            |row| row.get("abbreviation"),
        )
    }
}
