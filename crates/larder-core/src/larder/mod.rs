//! High-level async API for managing the larder.
//!
//! This module provides the main [`Larder`] interface between application
//! layers and the database. Each operation validates its parameters, then
//! opens the database on a blocking task so callers can stay on an async
//! runtime.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Larder`] instances with configuration
//! - [`ingredient_ops`]: Ingredient CRUD operations
//! - [`recipe_ops`]: Recipe CRUD operations
//! - [`measure_ops`]: Recipe measure queries and replacement, unit listing
//!
//! # Usage
//!
//! ```rust
//! use larder_core::{LarderBuilder, params::CreateIngredient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let larder = LarderBuilder::new()
//!     .with_database_path(Some("/tmp/larder.db"))
//!     .build()
//!     .await?;
//!
//! let flour = larder
//!     .add_ingredient(&CreateIngredient {
//!         name: "Flour".to_string(),
//!         unit_cost: 0.002,
//!         unit: "g".to_string(),
//!     })
//!     .await?;
//! assert!(flour.id > 0);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod ingredient_ops;
pub mod measure_ops;
pub mod recipe_ops;

pub use builder::LarderBuilder;

/// Main interface for managing ingredients, recipes and measures.
pub struct Larder {
    pub(crate) db_path: PathBuf,
}

impl Larder {
    /// Creates a new larder with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
