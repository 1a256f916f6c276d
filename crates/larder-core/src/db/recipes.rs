//! Recipe CRUD operations and queries.

use rusqlite::{Row, ToSql};

use super::{gateway, TABLE_RECIPES};
use crate::{
    error::{LarderError, Result},
    models::Recipe,
};

fn decode_recipe(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    Ok(Recipe {
        id: row.get("id")?,
        name: row.get("name")?,
        yield_amount: row.get("yield")?,
        description: row.get("description")?,
    })
}

fn write_values(recipe: &Recipe) -> [(&'static str, &dyn ToSql); 3] {
    [
        ("name", &recipe.name),
        ("description", &recipe.description),
        ("yield", &recipe.yield_amount),
    ]
}

impl super::Database {
    /// Inserts a new recipe and returns it with its assigned id.
    pub fn add_recipe(&self, recipe: &Recipe) -> Result<Recipe> {
        match gateway::insert_row(&self.connection, TABLE_RECIPES, &write_values(recipe))? {
            Some(id) => Ok(Recipe {
                id,
                ..recipe.clone()
            }),
            None => Err(LarderError::constraint(TABLE_RECIPES)),
        }
    }

    /// Retrieves a recipe by its id.
    pub fn get_recipe(&self, id: i64) -> Result<Option<Recipe>> {
        Ok(gateway::query_rows(
            &self.connection,
            TABLE_RECIPES,
            Some("id = ?1"),
            &[&id],
            None,
            decode_recipe,
        )?
        .into_iter()
        .next())
    }

    /// All recipes ordered by name ascending.
    pub fn all_recipes(&self) -> Result<Vec<Recipe>> {
        gateway::query_rows(
            &self.connection,
            TABLE_RECIPES,
            None,
            &[],
            Some("name"),
            decode_recipe,
        )
    }

    /// Updates the recipe identified by its id to new values.
    /// Returns `false` for an unpersisted recipe (`id == 0`), a missing
    /// row, or a constraint rejection.
    pub fn update_recipe(&self, recipe: &Recipe) -> Result<bool> {
        gateway::update_row(
            &self.connection,
            TABLE_RECIPES,
            recipe.id,
            &write_values(recipe),
        )
    }

    /// Deletes the recipe with the given id. Its measures are removed by
    /// the cascade.
    pub fn delete_recipe(&self, id: i64) -> Result<bool> {
        gateway::delete_row(&self.connection, TABLE_RECIPES, id)
    }

    /// Whether a recipe with this exact name exists.
    pub fn recipe_exists(&self, name: &str) -> Result<bool> {
        let ids = gateway::query_rows(
            &self.connection,
            TABLE_RECIPES,
            Some("name = ?1"),
            &[&name],
            None,
            |row| row.get::<_, i64>("id"),
        )?;
        Ok(!ids.is_empty())
    }
}
