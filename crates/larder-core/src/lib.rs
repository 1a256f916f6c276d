//! Core library for the Larder recipe costing application.
//!
//! This crate provides the business logic for managing ingredients, recipes
//! and the measures that tie them together, including SQLite persistence,
//! data models, and error handling.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use larder_core::{LarderBuilder, params::CreateRecipe};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a larder instance
//! let larder = LarderBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Create a new recipe
//! let create_params = CreateRecipe {
//!     name: "Sourdough".to_string(),
//!     yield_amount: 2.0,
//!     description: Some("Two loaves".to_string()),
//! };
//!
//! let recipe = larder.add_recipe(&create_params).await?;
//! println!("Created recipe: {}", recipe);
//!
//! // List recipes, ordered by name
//! let recipes = larder.list_recipes().await?;
//! for recipe in &recipes {
//!     println!("Recipe: {}", recipe.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod larder;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Ingredients, Measures, OperationStatus, Recipes, Units,
    UpdateResult,
};
pub use error::{LarderError, Result};
pub use larder::{Larder, LarderBuilder};
pub use models::{Ingredient, Measure, Recipe, Unit, UnitKind};
pub use params::{
    CreateIngredient, CreateRecipe, Id, MeasureEntry, SetMeasures, UpdateIngredient, UpdateRecipe,
};
