//! Measure and unit operations for the Larder.

use tokio::task;

use super::Larder;
use crate::{
    db::Database,
    error::{LarderError, Result},
    models::{Measure, Unit},
    params::SetMeasures,
};

impl Larder {
    /// Lists the measures of one recipe, joined to ingredient names and
    /// ordered by ingredient name.
    pub async fn list_measures(&self, recipe_id: i64) -> Result<Vec<Measure>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.measures_for_recipe(recipe_id)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Replaces the full measure set of a recipe in one transaction.
    ///
    /// Fails with [`LarderError::IngredientNotFound`] if any entry names
    /// an ingredient that does not exist, leaving the recipe's current
    /// measures in place. An empty set clears the recipe's measures.
    pub async fn set_measures(&self, params: &SetMeasures) -> Result<()> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let recipe_id = params.recipe_id;
        let measures: Vec<Measure> = params
            .measures
            .iter()
            .map(|entry| Measure {
                ingredient: entry.ingredient.clone(),
                quantity: entry.quantity,
                unit: entry.unit.clone(),
            })
            .collect();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_measures_for_recipe(recipe_id, &measures)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all measurement units.
    pub async fn list_units(&self) -> Result<Vec<Unit>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.units()
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists the abbreviations of all known units.
    pub async fn unit_abbreviations(&self) -> Result<Vec<String>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.unit_abbreviations()
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
