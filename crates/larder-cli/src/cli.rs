//! Command handlers bridging parsed arguments to the core library.
//!
//! Each handler converts its CLI arguments into core parameter types,
//! invokes the [`Larder`], and renders the outcome through the terminal
//! renderer (or as JSON when requested). Domain failures print a failure
//! status on stderr and exit nonzero; unexpected errors propagate as
//! `anyhow` errors.

use anyhow::{Context, Result};
use larder_core::{
    display::{
        CreateResult, DeleteResult, Ingredients, Measures, OperationStatus, Recipes, Units,
        UpdateResult,
    },
    params::{CreateIngredient, CreateRecipe, Id, SetMeasures, UpdateIngredient, UpdateRecipe},
    Larder, LarderError,
};
use serde::Serialize;

use crate::{
    args::{IngredientCommands, MeasureCommands, RecipeCommands, UnitCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    larder: Larder,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(larder: Larder, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            larder,
            renderer,
            json,
        }
    }

    /// Renders a value as pretty JSON when --json was given, otherwise as
    /// markdown through the terminal renderer.
    fn output<T: Serialize>(&self, value: &T, markdown: &str) -> Result<()> {
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(value).context("Failed to serialize output")?
            );
            Ok(())
        } else {
            self.renderer.render(markdown)
        }
    }

    /// Reports a domain failure (unknown id, rejected write) on stderr and
    /// exits nonzero. Unexpected errors take the `anyhow` path instead.
    fn fail(&self, message: String) -> Result<()> {
        eprint!("{}", OperationStatus::failure(message));
        std::process::exit(1)
    }

    /// Exits with a failure message unless the recipe exists.
    async fn require_recipe(&self, id: i64) -> Result<()> {
        if self.larder.get_recipe(&Id { id }).await?.is_none() {
            return self.fail(format!("No recipe found with ID: {id}"));
        }
        Ok(())
    }

    /// Turns a constraint rejection into a message naming the valid units,
    /// the most common way to trip the constraint from the command line.
    async fn constraint_message(&self, unit: &str) -> Result<String> {
        let abbreviations = self.larder.unit_abbreviations().await?;
        Ok(if abbreviations.iter().any(|a| a == unit) {
            "the values were rejected by the database".to_string()
        } else {
            format!(
                "'{unit}' is not a known unit (valid units: {})",
                abbreviations.join(", ")
            )
        })
    }

    pub async fn handle_ingredient_command(self, command: IngredientCommands) -> Result<()> {
        match command {
            IngredientCommands::Add(args) => {
                let params: CreateIngredient = args.into();

                if self.larder.ingredient_exists(&params.name).await? {
                    return self.fail(format!(
                        "An ingredient named '{}' already exists",
                        params.name
                    ));
                }

                match self.larder.add_ingredient(&params).await {
                    Ok(ingredient) => {
                        let markdown = format!("{}", CreateResult::new(ingredient.clone()));
                        self.output(&ingredient, &markdown)
                    }
                    Err(LarderError::Constraint { .. }) => self.fail(format!(
                        "Could not add ingredient '{}': {}",
                        params.name,
                        self.constraint_message(&params.unit).await?
                    )),
                    Err(e) => Err(e.into()),
                }
            }
            IngredientCommands::List => {
                let ingredients = self.larder.list_ingredients().await?;
                let markdown = format!("{}", Ingredients(ingredients.clone()));
                self.output(&ingredients, &markdown)
            }
            IngredientCommands::Show(args) => {
                let params: Id = args.into();
                match self.larder.get_ingredient(&params).await? {
                    Some(ingredient) => {
                        let markdown = format!("{ingredient}");
                        self.output(&ingredient, &markdown)
                    }
                    None => self.fail(format!("No ingredient found with ID: {}", params.id)),
                }
            }
            IngredientCommands::Update(args) => {
                let params: UpdateIngredient = args.into();

                if !self.larder.update_ingredient(&params).await? {
                    return self.fail(format!(
                        "Could not update ingredient with ID {}: {}",
                        params.id,
                        self.constraint_message(&params.unit).await?
                    ));
                }

                let updated = self
                    .larder
                    .get_ingredient(&Id { id: params.id })
                    .await?
                    .context("Updated ingredient disappeared")?;
                let markdown = format!("{}", UpdateResult::new(updated.clone()));
                self.output(&updated, &markdown)
            }
            IngredientCommands::Delete(args) => {
                let params: Id = args.into();
                let Some(ingredient) = self.larder.get_ingredient(&params).await? else {
                    return self.fail(format!("No ingredient found with ID: {}", params.id));
                };

                if !self.larder.delete_ingredient(&params).await? {
                    return self.fail(format!(
                        "Failed to delete ingredient with ID: {}",
                        params.id
                    ));
                }

                let markdown = format!("{}", DeleteResult::new(ingredient.clone()));
                self.output(&ingredient, &markdown)
            }
        }
    }

    pub async fn handle_recipe_command(self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::Add(args) => {
                let params: CreateRecipe = args.into();

                if self.larder.recipe_exists(&params.name).await? {
                    return self.fail(format!("A recipe named '{}' already exists", params.name));
                }

                let recipe = self.larder.add_recipe(&params).await?;
                let markdown = format!("{}", CreateResult::new(recipe.clone()));
                self.output(&recipe, &markdown)
            }
            RecipeCommands::List => {
                let recipes = self.larder.list_recipes().await?;
                let markdown = format!("{}", Recipes(recipes.clone()));
                self.output(&recipes, &markdown)
            }
            RecipeCommands::Show(args) => {
                let params: Id = args.into();
                let Some(recipe) = self.larder.get_recipe(&params).await? else {
                    return self.fail(format!("No recipe found with ID: {}", params.id));
                };

                let measures = self.larder.list_measures(recipe.id).await?;
                let markdown = format!("{recipe}\n### Measures\n\n{}", Measures(measures.clone()));
                if self.json {
                    #[derive(Serialize)]
                    struct RecipeWithMeasures<'a> {
                        #[serde(flatten)]
                        recipe: &'a larder_core::Recipe,
                        measures: &'a [larder_core::Measure],
                    }
                    self.output(
                        &RecipeWithMeasures {
                            recipe: &recipe,
                            measures: &measures,
                        },
                        &markdown,
                    )
                } else {
                    self.renderer.render(&markdown)
                }
            }
            RecipeCommands::Update(args) => {
                let params: UpdateRecipe = args.into();

                if !self.larder.update_recipe(&params).await? {
                    return self.fail(format!("Could not update recipe with ID: {}", params.id));
                }

                let updated = self
                    .larder
                    .get_recipe(&Id { id: params.id })
                    .await?
                    .context("Updated recipe disappeared")?;
                let markdown = format!("{}", UpdateResult::new(updated.clone()));
                self.output(&updated, &markdown)
            }
            RecipeCommands::Delete(args) => {
                let params: Id = args.into();
                let Some(recipe) = self.larder.get_recipe(&params).await? else {
                    return self.fail(format!("No recipe found with ID: {}", params.id));
                };

                if !self.larder.delete_recipe(&params).await? {
                    return self.fail(format!("Failed to delete recipe with ID: {}", params.id));
                }

                let markdown = format!("{}", DeleteResult::new(recipe.clone()));
                self.output(&recipe, &markdown)
            }
        }
    }

    pub async fn handle_measure_command(self, command: MeasureCommands) -> Result<()> {
        match command {
            MeasureCommands::Set(args) => {
                let params: SetMeasures = args.into();
                self.require_recipe(params.recipe_id).await?;

                match self.larder.set_measures(&params).await {
                    Ok(()) => {}
                    Err(LarderError::IngredientNotFound { name }) => {
                        return self.fail(format!(
                            "No ingredient named '{name}' exists; add it first with 'larder ingredient add'"
                        ));
                    }
                    Err(LarderError::Constraint { .. }) => {
                        let abbreviations = self.larder.unit_abbreviations().await?;
                        return self.fail(format!(
                            "A measure was rejected; check its unit (valid units: {})",
                            abbreviations.join(", ")
                        ));
                    }
                    Err(e) => return Err(e.into()),
                }

                let measures = self.larder.list_measures(params.recipe_id).await?;
                let markdown = format!(
                    "{}\n{}",
                    OperationStatus::success(format!(
                        "Set {} measure(s) for recipe with ID: {}",
                        measures.len(),
                        params.recipe_id
                    )),
                    Measures(measures.clone())
                );
                self.output(&measures, &markdown)
            }
            MeasureCommands::List(args) => {
                self.require_recipe(args.recipe_id).await?;

                let measures = self.larder.list_measures(args.recipe_id).await?;
                let markdown = format!("{}", Measures(measures.clone()));
                self.output(&measures, &markdown)
            }
            MeasureCommands::Clear(args) => {
                let params: SetMeasures = args.into();
                self.require_recipe(params.recipe_id).await?;

                self.larder.set_measures(&params).await?;
                let status = OperationStatus::success(format!(
                    "Cleared measures for recipe with ID: {}",
                    params.recipe_id
                ));
                self.renderer.render(&format!("{status}"))
            }
        }
    }

    pub async fn handle_unit_command(self, command: UnitCommands) -> Result<()> {
        match command {
            UnitCommands::List => {
                let units = self.larder.list_units().await?;
                let markdown = format!("{}", Units(units.clone()));
                self.output(&units, &markdown)
            }
        }
    }
}
