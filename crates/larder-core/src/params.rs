//! Parameter types for larder operations.
//!
//! Each operation that takes more than a bare id gets its own params struct
//! with a `validate` method. Validation catches empty or nonsensical input
//! before it reaches the database, where it would otherwise surface as an
//! opaque constraint rejection.

use serde::{Deserialize, Serialize};

use crate::error::{LarderError, Result};

fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LarderError::InvalidInput {
            field: field.to_string(),
            reason: "cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Parameters for operations addressing a single row by id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct Id {
    /// Database id of the target row
    pub id: i64,
}

/// Parameters for creating a new ingredient.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateIngredient {
    /// Ingredient name; must be unique
    pub name: String,
    /// Cost per unit of purchase
    pub unit_cost: f64,
    /// Abbreviation of the unit the ingredient is purchased in
    pub unit: String,
}

impl CreateIngredient {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("name", &self.name)?;
        require_non_blank("unit", &self.unit)?;
        if self.unit_cost < 0.0 {
            return Err(LarderError::InvalidInput {
                field: "unit_cost".to_string(),
                reason: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// Parameters for updating an existing ingredient.
///
/// All fields are replaced; there are no partial updates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateIngredient {
    /// Database id of the ingredient to update
    pub id: i64,
    pub name: String,
    pub unit_cost: f64,
    pub unit: String,
}

impl UpdateIngredient {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("name", &self.name)?;
        require_non_blank("unit", &self.unit)?;
        if self.unit_cost < 0.0 {
            return Err(LarderError::InvalidInput {
                field: "unit_cost".to_string(),
                reason: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// Parameters for creating a new recipe.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateRecipe {
    /// Recipe name; must be unique
    pub name: String,
    /// Number of servings the recipe yields
    pub yield_amount: f64,
    /// Optional free-form preparation notes
    pub description: Option<String>,
}

impl CreateRecipe {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("name", &self.name)?;
        if self.yield_amount < 0.0 {
            return Err(LarderError::InvalidInput {
                field: "yield".to_string(),
                reason: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// Parameters for updating an existing recipe.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateRecipe {
    /// Database id of the recipe to update
    pub id: i64,
    pub name: String,
    pub yield_amount: f64,
    pub description: Option<String>,
}

impl UpdateRecipe {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("name", &self.name)?;
        if self.yield_amount < 0.0 {
            return Err(LarderError::InvalidInput {
                field: "yield".to_string(),
                reason: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// One ingredient line in a recipe's measure set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MeasureEntry {
    /// Name of an existing ingredient
    pub ingredient: String,
    /// Amount of the ingredient the recipe uses
    pub quantity: f64,
    /// Abbreviation of the unit the quantity is measured in
    pub unit: String,
}

/// Parameters for replacing the full measure set of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SetMeasures {
    /// Database id of the recipe whose measures are replaced
    pub recipe_id: i64,
    /// The complete new measure set; empty clears all measures
    pub measures: Vec<MeasureEntry>,
}

impl SetMeasures {
    pub fn validate(&self) -> Result<()> {
        for entry in &self.measures {
            require_non_blank("ingredient", &entry.ingredient)?;
            require_non_blank("unit", &entry.unit)?;
            if entry.quantity <= 0.0 {
                return Err(LarderError::InvalidInput {
                    field: "quantity".to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        }
        Ok(())
    }
}
