//! Recipe model definition.

use serde::{Deserialize, Serialize};

/// A recipe with its yield and optional description.
///
/// The ingredient quantities belonging to a recipe are stored separately as
/// [`crate::models::Measure`] rows and fetched on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Surrogate key assigned by the database; `0` means not yet persisted
    pub id: i64,

    /// Display name, unique across all recipes
    pub name: String,

    /// Output quantity the recipe produces (e.g. number of servings).
    /// Named `yield` in the database; renamed here because `yield` is a
    /// reserved word in Rust.
    #[serde(rename = "yield")]
    pub yield_amount: f64,

    /// Free-form description, may be absent
    pub description: Option<String>,
}

impl Recipe {
    /// Whether this recipe has been written to the database.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
