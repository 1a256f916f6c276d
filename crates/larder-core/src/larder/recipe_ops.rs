//! Recipe operations for the Larder.

use tokio::task;

use super::Larder;
use crate::{
    db::Database,
    error::{LarderError, Result},
    models::Recipe,
    params::{CreateRecipe, Id, UpdateRecipe},
};

impl Larder {
    /// Creates a new recipe and returns it with its assigned id.
    pub async fn add_recipe(&self, params: &CreateRecipe) -> Result<Recipe> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let recipe = Recipe {
            id: 0,
            name: params.name.clone(),
            yield_amount: params.yield_amount,
            description: params.description.clone(),
        };

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.add_recipe(&recipe)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a recipe by its id.
    pub async fn get_recipe(&self, params: &Id) -> Result<Option<Recipe>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_recipe(id)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all recipes ordered by name.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.all_recipes()
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Replaces a recipe's stored values. Returns `false` when no row was
    /// changed.
    pub async fn update_recipe(&self, params: &UpdateRecipe) -> Result<bool> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let recipe = Recipe {
            id: params.id,
            name: params.name.clone(),
            yield_amount: params.yield_amount,
            description: params.description.clone(),
        };

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.update_recipe(&recipe)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes a recipe and, via the cascade, its measures. Returns
    /// `false` when no row was deleted.
    pub async fn delete_recipe(&self, params: &Id) -> Result<bool> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.delete_recipe(id)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Whether a recipe with this exact name exists.
    pub async fn recipe_exists(&self, name: &str) -> Result<bool> {
        let db_path = self.db_path.clone();
        let name = name.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.recipe_exists(&name)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
