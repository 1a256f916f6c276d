//! Ingredient operations for the Larder.

use tokio::task;

use super::Larder;
use crate::{
    db::Database,
    error::{LarderError, Result},
    models::Ingredient,
    params::{CreateIngredient, Id, UpdateIngredient},
};

impl Larder {
    /// Creates a new ingredient and returns it with its assigned id.
    pub async fn add_ingredient(&self, params: &CreateIngredient) -> Result<Ingredient> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let ingredient = Ingredient {
            id: 0,
            name: params.name.clone(),
            unit_cost: params.unit_cost,
            unit: params.unit.clone(),
        };

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.add_ingredient(&ingredient)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves an ingredient by its id.
    pub async fn get_ingredient(&self, params: &Id) -> Result<Option<Ingredient>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_ingredient(id)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all ingredients ordered by name.
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.all_ingredients()
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Replaces an ingredient's stored values. Returns `false` when no
    /// row was changed.
    pub async fn update_ingredient(&self, params: &UpdateIngredient) -> Result<bool> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let ingredient = Ingredient {
            id: params.id,
            name: params.name.clone(),
            unit_cost: params.unit_cost,
            unit: params.unit.clone(),
        };

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.update_ingredient(&ingredient)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes an ingredient and, via the cascade, any measures using it.
    /// Returns `false` when no row was deleted.
    pub async fn delete_ingredient(&self, params: &Id) -> Result<bool> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.delete_ingredient(id)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Whether an ingredient with this exact name exists.
    pub async fn ingredient_exists(&self, name: &str) -> Result<bool> {
        let db_path = self.db_path.clone();
        let name = name.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.ingredient_exists(&name)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
