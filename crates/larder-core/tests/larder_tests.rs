use larder_core::{
    params::{CreateIngredient, CreateRecipe, Id, MeasureEntry, SetMeasures, UpdateIngredient},
    Larder, LarderBuilder, LarderError,
};
use tempfile::TempDir;

/// Helper to build a larder over a temporary database file
async fn create_test_larder() -> (TempDir, Larder) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let larder = LarderBuilder::new()
        .with_database_path(Some(temp_dir.path().join("larder.db")))
        .build()
        .await
        .expect("Failed to build larder");
    (temp_dir, larder)
}

fn flour() -> CreateIngredient {
    CreateIngredient {
        name: "Flour".to_string(),
        unit_cost: 0.002,
        unit: "g".to_string(),
    }
}

#[tokio::test]
async fn test_builder_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let nested = temp_dir.path().join("data").join("larder.db");

    let larder = LarderBuilder::new()
        .with_database_path(Some(&nested))
        .build()
        .await
        .expect("Failed to build larder");

    assert!(nested.exists());
    assert!(larder.list_ingredients().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ingredient_lifecycle() {
    let (_temp_dir, larder) = create_test_larder().await;

    let created = larder
        .add_ingredient(&flour())
        .await
        .expect("Failed to add ingredient");
    assert!(created.id > 0);
    assert_eq!(created.name, "Flour");

    let fetched = larder
        .get_ingredient(&Id { id: created.id })
        .await
        .expect("Failed to get ingredient")
        .expect("Ingredient should exist");
    assert_eq!(fetched, created);

    let updated = larder
        .update_ingredient(&UpdateIngredient {
            id: created.id,
            name: "Bread Flour".to_string(),
            unit_cost: 0.003,
            unit: "g".to_string(),
        })
        .await
        .expect("Failed to update ingredient");
    assert!(updated);

    let deleted = larder
        .delete_ingredient(&Id { id: created.id })
        .await
        .expect("Failed to delete ingredient");
    assert!(deleted);

    assert!(larder
        .get_ingredient(&Id { id: created.id })
        .await
        .expect("Failed to query deleted ingredient")
        .is_none());
}

#[tokio::test]
async fn test_validation_rejects_blank_name() {
    let (_temp_dir, larder) = create_test_larder().await;

    let result = larder
        .add_ingredient(&CreateIngredient {
            name: "  ".to_string(),
            unit_cost: 0.002,
            unit: "g".to_string(),
        })
        .await;
    assert!(matches!(result, Err(LarderError::InvalidInput { .. })));

    let result = larder
        .add_recipe(&CreateRecipe {
            name: String::new(),
            yield_amount: 4.0,
            description: None,
        })
        .await;
    assert!(matches!(result, Err(LarderError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_validation_rejects_nonpositive_quantity() {
    let (_temp_dir, larder) = create_test_larder().await;

    let result = larder
        .set_measures(&SetMeasures {
            recipe_id: 1,
            measures: vec![MeasureEntry {
                ingredient: "Flour".to_string(),
                quantity: -1.0,
                unit: "g".to_string(),
            }],
        })
        .await;
    assert!(matches!(result, Err(LarderError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_recipe_and_measure_flow() {
    let (_temp_dir, larder) = create_test_larder().await;

    larder
        .add_ingredient(&flour())
        .await
        .expect("Failed to add ingredient");
    larder
        .add_ingredient(&CreateIngredient {
            name: "Salt".to_string(),
            unit_cost: 0.001,
            unit: "g".to_string(),
        })
        .await
        .expect("Failed to add ingredient");

    let recipe = larder
        .add_recipe(&CreateRecipe {
            name: "Bread".to_string(),
            yield_amount: 12.0,
            description: Some("Two loaves".to_string()),
        })
        .await
        .expect("Failed to add recipe");

    larder
        .set_measures(&SetMeasures {
            recipe_id: recipe.id,
            measures: vec![
                MeasureEntry {
                    ingredient: "Salt".to_string(),
                    quantity: 10.0,
                    unit: "g".to_string(),
                },
                MeasureEntry {
                    ingredient: "Flour".to_string(),
                    quantity: 500.0,
                    unit: "g".to_string(),
                },
            ],
        })
        .await
        .expect("Failed to set measures");

    let measures = larder
        .list_measures(recipe.id)
        .await
        .expect("Failed to list measures");
    assert_eq!(measures.len(), 2);
    assert_eq!(measures[0].ingredient, "Flour");
    assert_eq!(measures[1].ingredient, "Salt");
}

#[tokio::test]
async fn test_set_measures_unknown_ingredient() {
    let (_temp_dir, larder) = create_test_larder().await;

    let recipe = larder
        .add_recipe(&CreateRecipe {
            name: "Bread".to_string(),
            yield_amount: 12.0,
            description: None,
        })
        .await
        .expect("Failed to add recipe");

    let result = larder
        .set_measures(&SetMeasures {
            recipe_id: recipe.id,
            measures: vec![MeasureEntry {
                ingredient: "Saffron".to_string(),
                quantity: 1.0,
                unit: "g".to_string(),
            }],
        })
        .await;
    assert!(
        matches!(result, Err(LarderError::IngredientNotFound { ref name }) if name == "Saffron")
    );
}

#[tokio::test]
async fn test_exists_helpers() {
    let (_temp_dir, larder) = create_test_larder().await;

    larder
        .add_ingredient(&flour())
        .await
        .expect("Failed to add ingredient");

    assert!(larder
        .ingredient_exists("Flour")
        .await
        .expect("Failed to check existence"));
    assert!(!larder
        .recipe_exists("Bread")
        .await
        .expect("Failed to check existence"));
}

#[tokio::test]
async fn test_list_units() {
    let (_temp_dir, larder) = create_test_larder().await;

    let units = larder.list_units().await.expect("Failed to list units");
    assert_eq!(units.len(), 8);

    let abbreviations = larder
        .unit_abbreviations()
        .await
        .expect("Failed to list abbreviations");
    assert_eq!(abbreviations.len(), 8);
    assert!(abbreviations.contains(&"kg".to_string()));
}
