//! Ingredient CRUD operations and queries.

use rusqlite::{Row, ToSql};

use super::{gateway, TABLE_INGREDIENTS};
use crate::{
    error::{LarderError, Result},
    models::Ingredient,
};

/// Converts a result row into an Ingredient. Columns are addressed by name;
/// an unknown name fails the decode.
fn decode_ingredient(row: &Row<'_>) -> rusqlite::Result<Ingredient> {
    Ok(Ingredient {
        id: row.get("id")?,
        name: row.get("name")?,
        unit_cost: row.get("unit_cost")?,
        unit: row.get("unit")?,
    })
}

/// Column/value pairs written for an ingredient. The id is never written;
/// the database assigns it.
fn write_values(ingredient: &Ingredient) -> [(&'static str, &dyn ToSql); 3] {
    [
        ("name", &ingredient.name),
        ("unit_cost", &ingredient.unit_cost),
        ("unit", &ingredient.unit),
    ]
}

impl super::Database {
    /// Inserts a new ingredient and returns it with its assigned id.
    ///
    /// A duplicate name or an unknown unit is rejected by the schema and
    /// surfaces as [`LarderError::Constraint`].
    pub fn add_ingredient(&self, ingredient: &Ingredient) -> Result<Ingredient> {
        match gateway::insert_row(&self.connection, TABLE_INGREDIENTS, &write_values(ingredient))?
        {
            Some(id) => Ok(Ingredient {
                id,
                ..ingredient.clone()
            }),
            None => Err(LarderError::constraint(TABLE_INGREDIENTS)),
        }
    }

    /// Retrieves an ingredient by its id.
    pub fn get_ingredient(&self, id: i64) -> Result<Option<Ingredient>> {
        Ok(gateway::query_rows(
            &self.connection,
            TABLE_INGREDIENTS,
            Some("id = ?1"),
            &[&id],
            None,
            decode_ingredient,
        )?
        .into_iter()
        .next())
    }

    /// All ingredients ordered by name ascending.
    pub fn all_ingredients(&self) -> Result<Vec<Ingredient>> {
        gateway::query_rows(
            &self.connection,
            TABLE_INGREDIENTS,
            None,
            &[],
            Some("name"),
            decode_ingredient,
        )
    }

    /// Updates the ingredient identified by its id to new values.
    /// Returns `false` for an unpersisted ingredient (`id == 0`), a missing
    /// row, or a constraint rejection.
    pub fn update_ingredient(&self, ingredient: &Ingredient) -> Result<bool> {
        gateway::update_row(
            &self.connection,
            TABLE_INGREDIENTS,
            ingredient.id,
            &write_values(ingredient),
        )
    }

    /// Deletes the ingredient with the given id. Measures referencing it
    /// are removed by the cascade.
    pub fn delete_ingredient(&self, id: i64) -> Result<bool> {
        gateway::delete_row(&self.connection, TABLE_INGREDIENTS, id)
    }

    /// Whether an ingredient with this exact name exists.
    pub fn ingredient_exists(&self, name: &str) -> Result<bool> {
        let ids = gateway::query_rows(
            &self.connection,
            TABLE_INGREDIENTS,
            Some("name = ?1"),
            &[&name],
            None,
            |row| row.get::<_, i64>("id"),
        )?;
        Ok(!ids.is_empty())
    }
}
