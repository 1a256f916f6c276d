//! Generic parameterized query helpers shared by the entity repositories.
//!
//! Reads go through [`query_rows`] or [`raw_query`] with a per-entity decode
//! function. Decode functions address columns by name, so a misspelled
//! column name is a hard decode error rather than a silently wrong value.
//!
//! Writes take `(column, value)` pairs and report constraint rejections
//! (duplicate names, references to unknown units) back to the caller as
//! non-fatal results. Every helper runs against a plain [`Connection`];
//! callers that need several statements to be atomic pass a
//! [`rusqlite::Transaction`], which dereferences to one.

use log::{debug, warn};
use rusqlite::{Connection, Row, ToSql};

use crate::error::{DatabaseResultExt, LarderError, Result};

/// Column/value pairs for a single row write.
pub(crate) type WriteValues<'a> = [(&'static str, &'a dyn ToSql)];

/// Runs a `SELECT *` against one table, decoding each result row.
///
/// The result list preserves the order the database returned; pass
/// `order_by` to make that order deterministic.
pub(crate) fn query_rows<T, F>(
    conn: &Connection,
    table: &str,
    where_clause: Option<&str>,
    params: &[&dyn ToSql],
    order_by: Option<&str>,
    decode: F,
) -> Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut sql = format!("SELECT * FROM {table}");
    if let Some(clause) = where_clause {
        sql.push_str(" WHERE ");
        sql.push_str(clause);
    }
    if let Some(order) = order_by {
        sql.push_str(" ORDER BY ");
        sql.push_str(order);
    }

    raw_query(conn, &sql, params, decode)
}

/// Runs an arbitrary SQL query, for joins the simple form cannot express.
pub(crate) fn raw_query<T, F>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
    mut decode: F,
) -> Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql).db_context("Failed to prepare query")?;

    let rows = stmt
        .query_map(params, |row| decode(row))
        .db_context("Failed to execute query")?;

    rows.collect::<rusqlite::Result<Vec<T>>>()
        .db_context("Failed to decode result rows")
}

/// Inserts a row and returns its new surrogate id, or `None` when the
/// insert was rejected by a constraint.
pub(crate) fn insert_row(
    conn: &Connection,
    table: &str,
    values: &WriteValues<'_>,
) -> Result<Option<i64>> {
    let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();
    let placeholders: Vec<String> = (1..=values.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    );
    let params: Vec<&dyn ToSql> = values.iter().map(|(_, value)| *value).collect();

    match conn.execute(&sql, params.as_slice()) {
        Ok(_) => {
            let id = conn.last_insert_rowid();
            debug!("New {table} row inserted with ID {id}");
            Ok(Some(id))
        }
        Err(rusqlite::Error::SqliteFailure(e, message))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            warn!(
                "Insert into {table} rejected: {}",
                message.as_deref().unwrap_or("constraint violation")
            );
            Ok(None)
        }
        Err(e) => Err(LarderError::database_error(
            format!("Failed to insert into {table}"),
            e,
        )),
    }
}

/// Updates the row with the given id.
///
/// Returns `false` when the value was never persisted (`id == 0`), when no
/// row matches the id, or when the update was rejected by a constraint.
pub(crate) fn update_row(
    conn: &Connection,
    table: &str,
    id: i64,
    values: &WriteValues<'_>,
) -> Result<bool> {
    if id == 0 {
        // Value not currently in the database
        return Ok(false);
    }

    let assignments: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, (column, _))| format!("{column} = ?{}", i + 1))
        .collect();
    let sql = format!(
        "UPDATE {table} SET {} WHERE id = ?{}",
        assignments.join(", "),
        values.len() + 1
    );
    let mut params: Vec<&dyn ToSql> = values.iter().map(|(_, value)| *value).collect();
    params.push(&id);

    match conn.execute(&sql, params.as_slice()) {
        Ok(rows) => Ok(rows == 1),
        Err(rusqlite::Error::SqliteFailure(e, message))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            warn!(
                "Update of {table} ID {id} rejected: {}",
                message.as_deref().unwrap_or("constraint violation")
            );
            Ok(false)
        }
        Err(e) => Err(LarderError::database_error(
            format!("Failed to update {table}"),
            e,
        )),
    }
}

/// Deletes the row with the given id.
///
/// Returns `false` when the value was never persisted (`id == 0`) or when
/// no row matches the id.
pub(crate) fn delete_row(conn: &Connection, table: &str, id: i64) -> Result<bool> {
    if id == 0 {
        // Value not currently in the database
        return Ok(false);
    }

    let sql = format!("DELETE FROM {table} WHERE id = ?1");
    let rows = conn
        .execute(&sql, [id])
        .map_err(|e| LarderError::database_error(format!("Failed to delete from {table}"), e))?;

    Ok(rows == 1)
}

/// Deletes every row matching the predicate, returning the removed count.
pub(crate) fn delete_rows(
    conn: &Connection,
    table: &str,
    where_clause: &str,
    params: &[&dyn ToSql],
) -> Result<usize> {
    let sql = format!("DELETE FROM {table} WHERE {where_clause}");
    conn.execute(&sql, params)
        .map_err(|e| LarderError::database_error(format!("Failed to delete from {table}"), e))
}
