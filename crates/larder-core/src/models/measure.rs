//! Measure model definition.

use serde::{Deserialize, Serialize};

/// A quantity of one ingredient required by one recipe.
///
/// The ingredient is carried by name; repositories resolve the name to an
/// ingredient id when writing. In storage the association is keyed by
/// `(recipe_id, ingred_id)`, so a recipe holds at most one measure per
/// ingredient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measure {
    /// Name of the measured ingredient
    pub ingredient: String,

    /// How much of the ingredient the recipe needs
    pub quantity: f64,

    /// Abbreviation of the unit the quantity is expressed in
    pub unit: String,
}
