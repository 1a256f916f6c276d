//! Ingredient model definition.

use serde::{Deserialize, Serialize};

/// A purchasable ingredient with its cost per unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Surrogate key assigned by the database; `0` means not yet persisted
    pub id: i64,

    /// Display name, unique across all ingredients
    pub name: String,

    /// Cost of one `unit` of this ingredient (non-negative)
    pub unit_cost: f64,

    /// Abbreviation of the unit the cost applies to (references the unit
    /// table, e.g. "g" or "mL")
    pub unit: String,
}

impl Ingredient {
    /// Whether this ingredient has been written to the database.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
