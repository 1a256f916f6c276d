//! Larder CLI Application
//!
//! Command-line interface for the larder recipe costing tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use larder_core::LarderBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let larder = LarderBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize larder")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Larder started");

    match command {
        Some(Ingredient { command }) => {
            Cli::new(larder, renderer, json)
                .handle_ingredient_command(command)
                .await
        }
        Some(Recipe { command }) => {
            Cli::new(larder, renderer, json)
                .handle_recipe_command(command)
                .await
        }
        Some(Measure { command }) => {
            Cli::new(larder, renderer, json)
                .handle_measure_command(command)
                .await
        }
        Some(Unit { command }) => {
            Cli::new(larder, renderer, json)
                .handle_unit_command(command)
                .await
        }
        None => {
            Cli::new(larder, renderer, json)
                .handle_recipe_command(args::RecipeCommands::List)
                .await
        }
    }
}
