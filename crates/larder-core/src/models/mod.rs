//! Data models for ingredients, recipes, measures and units.
//!
//! This module contains the core domain models of the larder system. Display
//! implementations live in [`crate::display::models`] to keep data structures
//! separate from presentation logic.
//!
//! Every persisted entity carries a surrogate `id` assigned by the database;
//! an `id` of `0` marks a value that has not been written yet. Repositories
//! refuse to update or delete such values.

pub mod ingredient;
pub mod measure;
pub mod recipe;
pub mod unit;


// Re-export all public types at the models level
pub use ingredient::Ingredient;
pub use measure::Measure;
pub use recipe::Recipe;
pub use unit::{Unit, UnitKind};
