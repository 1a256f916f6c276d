//! Display formatting for domain models, collections and operation results.
//!
//! Domain models carry their own markdown `Display` implementations;
//! newtype wrappers format collections (with empty-collection messages)
//! and operation outcomes so every output context renders the same way.
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: Collection wrapper types (Ingredients, Recipes, Measures, Units)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Ingredients, Measures, Recipes, Units};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
