//! Command-line argument definitions using clap
//!
//! This module defines the CLI structure with clap's derive API, using the
//! parameter wrapper pattern: each command gets a clap-specific argument
//! struct with an explicit `From` conversion into the core parameter type,
//! keeping the core free of CLI framework concerns.

use std::{path::PathBuf, str::FromStr};

use clap::{Args as ClapArgs, Parser, Subcommand};
use larder_core::params::{
    CreateIngredient, CreateRecipe, Id, MeasureEntry, SetMeasures, UpdateIngredient, UpdateRecipe,
};

/// Main command-line interface for the Larder recipe costing tool
///
/// Larder keeps a catalog of priced ingredients and the recipes built from
/// them, with each recipe's ingredient measures stored for costing. All data
/// lives in a single local SQLite database.
#[derive(Parser)]
#[command(version, about, name = "larder")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/larder/larder.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit results as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Larder CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage ingredients
    #[command(alias = "i")]
    Ingredient {
        #[command(subcommand)]
        command: IngredientCommands,
    },
    /// Manage recipes
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Manage a recipe's ingredient measures
    #[command(alias = "m")]
    Measure {
        #[command(subcommand)]
        command: MeasureCommands,
    },
    /// Inspect measurement units
    #[command(alias = "u")]
    Unit {
        #[command(subcommand)]
        command: UnitCommands,
    },
}

/// Add a new ingredient to the catalog
#[derive(ClapArgs)]
pub struct AddIngredientArgs {
    /// Name of the ingredient; must be unique
    pub name: String,
    /// Cost per unit of purchase
    #[arg(short, long, help = "Cost per single unit of the ingredient")]
    pub cost: f64,
    /// Unit the ingredient is purchased in (e.g. g, mL)
    #[arg(short, long, help = "Abbreviation of the purchase unit (e.g. g, mL)")]
    pub unit: String,
}

impl From<AddIngredientArgs> for CreateIngredient {
    fn from(val: AddIngredientArgs) -> Self {
        CreateIngredient {
            name: val.name,
            unit_cost: val.cost,
            unit: val.unit,
        }
    }
}

/// Show details of a specific ingredient
#[derive(ClapArgs)]
pub struct ShowIngredientArgs {
    /// ID of the ingredient to display
    #[arg(help = "Unique identifier of the ingredient to show details for")]
    pub id: i64,
}

impl From<ShowIngredientArgs> for Id {
    fn from(val: ShowIngredientArgs) -> Self {
        Id { id: val.id }
    }
}

/// Replace an ingredient's stored values
#[derive(ClapArgs)]
pub struct UpdateIngredientArgs {
    /// ID of the ingredient to update
    #[arg(help = "Unique identifier of the ingredient to update")]
    pub id: i64,
    /// New name for the ingredient
    pub name: String,
    #[arg(short, long, help = "New cost per single unit of the ingredient")]
    pub cost: f64,
    #[arg(short, long, help = "New abbreviation of the purchase unit")]
    pub unit: String,
}

impl From<UpdateIngredientArgs> for UpdateIngredient {
    fn from(val: UpdateIngredientArgs) -> Self {
        UpdateIngredient {
            id: val.id,
            name: val.name,
            unit_cost: val.cost,
            unit: val.unit,
        }
    }
}

/// Delete an ingredient permanently
#[derive(ClapArgs)]
pub struct DeleteIngredientArgs {
    /// ID of the ingredient to delete
    #[arg(help = "Unique identifier of the ingredient to permanently delete")]
    pub id: i64,
}

impl From<DeleteIngredientArgs> for Id {
    fn from(val: DeleteIngredientArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum IngredientCommands {
    /// Add a new ingredient
    #[command(alias = "a")]
    Add(AddIngredientArgs),
    /// List all ingredients
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific ingredient
    #[command(alias = "s")]
    Show(ShowIngredientArgs),
    /// Replace an ingredient's stored values
    #[command(alias = "u")]
    Update(UpdateIngredientArgs),
    /// Delete an ingredient permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteIngredientArgs),
}

/// Add a new recipe
#[derive(ClapArgs)]
pub struct AddRecipeArgs {
    /// Name of the recipe; must be unique
    pub name: String,
    /// Number of servings the recipe yields
    #[arg(
        short = 'y',
        long = "yield",
        help = "Number of servings the recipe yields"
    )]
    pub yield_amount: f64,
    /// Optional free-form preparation notes
    #[arg(short, long, help = "Optional free-form preparation notes")]
    pub description: Option<String>,
}

impl From<AddRecipeArgs> for CreateRecipe {
    fn from(val: AddRecipeArgs) -> Self {
        CreateRecipe {
            name: val.name,
            yield_amount: val.yield_amount,
            description: val.description,
        }
    }
}

/// Show details of a specific recipe, including its measures
#[derive(ClapArgs)]
pub struct ShowRecipeArgs {
    /// ID of the recipe to display
    #[arg(help = "Unique identifier of the recipe to show details for")]
    pub id: i64,
}

impl From<ShowRecipeArgs> for Id {
    fn from(val: ShowRecipeArgs) -> Self {
        Id { id: val.id }
    }
}

/// Replace a recipe's stored values
#[derive(ClapArgs)]
pub struct UpdateRecipeArgs {
    /// ID of the recipe to update
    #[arg(help = "Unique identifier of the recipe to update")]
    pub id: i64,
    /// New name for the recipe
    pub name: String,
    #[arg(
        short = 'y',
        long = "yield",
        help = "New number of servings the recipe yields"
    )]
    pub yield_amount: f64,
    #[arg(short, long, help = "New free-form preparation notes")]
    pub description: Option<String>,
}

impl From<UpdateRecipeArgs> for UpdateRecipe {
    fn from(val: UpdateRecipeArgs) -> Self {
        UpdateRecipe {
            id: val.id,
            name: val.name,
            yield_amount: val.yield_amount,
            description: val.description,
        }
    }
}

/// Delete a recipe permanently
#[derive(ClapArgs)]
pub struct DeleteRecipeArgs {
    /// ID of the recipe to delete
    #[arg(help = "Unique identifier of the recipe to permanently delete")]
    pub id: i64,
}

impl From<DeleteRecipeArgs> for Id {
    fn from(val: DeleteRecipeArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Add a new recipe
    #[command(alias = "a")]
    Add(AddRecipeArgs),
    /// List all recipes
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific recipe, including its measures
    #[command(alias = "s")]
    Show(ShowRecipeArgs),
    /// Replace a recipe's stored values
    #[command(alias = "u")]
    Update(UpdateRecipeArgs),
    /// Delete a recipe permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteRecipeArgs),
}

/// One measure given on the command line as `INGREDIENT:QUANTITY:UNIT`,
/// e.g. `Flour:500:g`.
#[derive(Clone)]
pub struct MeasureArg {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
}

impl FromStr for MeasureArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(ingredient), Some(quantity), Some(unit)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!(
                "expected INGREDIENT:QUANTITY:UNIT, got '{s}'"
            ));
        };

        if ingredient.is_empty() || unit.is_empty() {
            return Err(format!("expected INGREDIENT:QUANTITY:UNIT, got '{s}'"));
        }

        let quantity: f64 = quantity
            .parse()
            .map_err(|_| format!("'{quantity}' is not a valid quantity"))?;

        Ok(MeasureArg {
            ingredient: ingredient.to_string(),
            quantity,
            unit: unit.to_string(),
        })
    }
}

impl From<MeasureArg> for MeasureEntry {
    fn from(val: MeasureArg) -> Self {
        MeasureEntry {
            ingredient: val.ingredient,
            quantity: val.quantity,
            unit: val.unit,
        }
    }
}

/// Replace the full measure set of a recipe
#[derive(ClapArgs)]
pub struct SetMeasuresArgs {
    /// ID of the recipe whose measures are replaced
    #[arg(help = "Unique identifier of the recipe whose measures are replaced")]
    pub recipe_id: i64,
    /// Measures as INGREDIENT:QUANTITY:UNIT entries
    #[arg(
        required = true,
        help = "Measures as INGREDIENT:QUANTITY:UNIT entries (e.g. Flour:500:g)"
    )]
    pub measures: Vec<MeasureArg>,
}

impl From<SetMeasuresArgs> for SetMeasures {
    fn from(val: SetMeasuresArgs) -> Self {
        SetMeasures {
            recipe_id: val.recipe_id,
            measures: val.measures.into_iter().map(Into::into).collect(),
        }
    }
}

/// List the measures of a recipe
#[derive(ClapArgs)]
pub struct ListMeasuresArgs {
    /// ID of the recipe whose measures are listed
    #[arg(help = "Unique identifier of the recipe whose measures are listed")]
    pub recipe_id: i64,
}

/// Remove all measures from a recipe
#[derive(ClapArgs)]
pub struct ClearMeasuresArgs {
    /// ID of the recipe whose measures are removed
    #[arg(help = "Unique identifier of the recipe whose measures are removed")]
    pub recipe_id: i64,
}

impl From<ClearMeasuresArgs> for SetMeasures {
    fn from(val: ClearMeasuresArgs) -> Self {
        SetMeasures {
            recipe_id: val.recipe_id,
            measures: Vec::new(),
        }
    }
}

#[derive(Subcommand)]
pub enum MeasureCommands {
    /// Replace the full measure set of a recipe
    #[command(alias = "s")]
    Set(SetMeasuresArgs),
    /// List the measures of a recipe
    #[command(aliases = ["l", "ls"])]
    List(ListMeasuresArgs),
    /// Remove all measures from a recipe
    #[command(alias = "c")]
    Clear(ClearMeasuresArgs),
}

#[derive(Subcommand)]
pub enum UnitCommands {
    /// List all measurement units
    #[command(aliases = ["l", "ls"])]
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_arg_parsing() {
        let parsed: MeasureArg = "Flour:500:g".parse().expect("Should parse");
        assert_eq!(parsed.ingredient, "Flour");
        assert_eq!(parsed.quantity, 500.0);
        assert_eq!(parsed.unit, "g");

        let fractional: MeasureArg = "Olive Oil:2.5:tbsp".parse().expect("Should parse");
        assert_eq!(fractional.ingredient, "Olive Oil");
        assert_eq!(fractional.quantity, 2.5);

        assert!("Flour:500".parse::<MeasureArg>().is_err());
        assert!("Flour:many:g".parse::<MeasureArg>().is_err());
        assert!(":500:g".parse::<MeasureArg>().is_err());
    }
}
