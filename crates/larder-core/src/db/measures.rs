//! Measure queries and whole-recipe replacement.
//!
//! Measures are the join rows between a recipe and its ingredients. They
//! are stored against ingredient ids but read back joined to ingredient
//! names, and they are only ever written as a full set per recipe.

use rusqlite::{OptionalExtension, Row, ToSql};

use super::{gateway, Database, TABLE_MEASURES};
use crate::{
    error::{DatabaseResultExt, LarderError, Result},
    models::Measure,
};

const SELECT_MEASURES_SQL: &str = "SELECT ingredients.name, measures.measure, measures.unit \
     FROM measures INNER JOIN ingredients ON measures.ingred_id = ingredients.id \
     WHERE measures.recipe_id = ?1 \
     ORDER BY ingredients.name";

const SELECT_INGREDIENT_ID_SQL: &str = "SELECT id FROM ingredients WHERE name = ?1";

fn decode_measure(row: &Row<'_>) -> rusqlite::Result<Measure> {
    Ok(Measure {
        ingredient: row.get("name")?,
        quantity: row.get("measure")?,
        unit: row.get("unit")?,
    })
}

impl Database {
    /// All measures of one recipe, joined to their ingredient names and
    /// ordered by ingredient name. A recipe without measures (or an
    /// unknown recipe id) yields an empty list.
    pub fn measures_for_recipe(&self, recipe_id: i64) -> Result<Vec<Measure>> {
        gateway::raw_query(
            &self.connection,
            SELECT_MEASURES_SQL,
            &[&recipe_id],
            decode_measure,
        )
    }

    /// Replaces the full measure set of a recipe atomically.
    ///
    /// Every ingredient name is resolved to its id before anything is
    /// deleted, so a misspelled name fails the whole call with
    /// [`LarderError::IngredientNotFound`] and leaves the existing measures
    /// untouched. Passing an empty slice clears the recipe's measures.
    pub fn set_measures_for_recipe(&mut self, recipe_id: i64, measures: &[Measure]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to start measure transaction")?;

        let mut resolved: Vec<(i64, &Measure)> = Vec::with_capacity(measures.len());
        for measure in measures {
            let id: Option<i64> = tx
                .query_row(SELECT_INGREDIENT_ID_SQL, [&measure.ingredient], |row| {
                    row.get(0)
                })
                .optional()
                .db_context("Failed to resolve ingredient name")?;

            match id {
                Some(id) => resolved.push((id, measure)),
                None => {
                    return Err(LarderError::IngredientNotFound {
                        name: measure.ingredient.clone(),
                    })
                }
            }
        }

        gateway::delete_rows(&tx, TABLE_MEASURES, "recipe_id = ?1", &[&recipe_id])?;

        for (ingred_id, measure) in &resolved {
            let values: [(&'static str, &dyn ToSql); 4] = [
                ("recipe_id", &recipe_id),
                ("ingred_id", ingred_id),
                ("measure", &measure.quantity),
                ("unit", &measure.unit),
            ];
            if gateway::insert_row(&tx, TABLE_MEASURES, &values)?.is_none() {
                return Err(LarderError::constraint(TABLE_MEASURES));
            }
        }

        tx.commit().db_context("Failed to commit measure changes")
    }
}
