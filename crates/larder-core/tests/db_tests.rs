use larder_core::{Database, Ingredient, LarderError, Measure, Recipe};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn new_ingredient(name: &str) -> Ingredient {
    Ingredient {
        id: 0,
        name: name.to_string(),
        unit_cost: 0.05,
        unit: "g".to_string(),
    }
}

fn new_recipe(name: &str) -> Recipe {
    Recipe {
        id: 0,
        name: name.to_string(),
        yield_amount: 4.0,
        description: None,
    }
}

#[test]
fn test_database_initialization_seeds_units() {
    let (_temp_file, db) = create_test_db();

    let units = db.units().expect("Failed to list units");
    assert_eq!(units.len(), 8);
    assert_eq!(units[0].abbreviation, "g");

    let abbreviations = db
        .unit_abbreviations()
        .expect("Failed to list abbreviations");
    assert!(abbreviations.contains(&"tbsp".to_string()));
    assert!(abbreviations.contains(&"mL".to_string()));
}

#[test]
fn test_reopen_is_idempotent() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

    {
        let db = Database::new(temp_file.path()).expect("Failed to create test database");
        db.add_ingredient(&new_ingredient("Flour"))
            .expect("Failed to add ingredient");
    }

    // Second open sees the current schema version and leaves data alone
    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let ingredients = db.all_ingredients().expect("Failed to list ingredients");
    assert_eq!(ingredients.len(), 1);
    assert_eq!(db.units().expect("Failed to list units").len(), 8);
}

#[test]
fn test_add_and_get_ingredient() {
    let (_temp_file, db) = create_test_db();

    let added = db
        .add_ingredient(&new_ingredient("Flour"))
        .expect("Failed to add ingredient");
    assert!(added.id > 0);

    let retrieved = db
        .get_ingredient(added.id)
        .expect("Failed to get ingredient")
        .expect("Ingredient should exist");
    assert_eq!(retrieved, added);

    assert!(db
        .get_ingredient(added.id + 100)
        .expect("Failed to query missing ingredient")
        .is_none());
}

#[test]
fn test_add_ingredients_get_distinct_ids() {
    let (_temp_file, db) = create_test_db();

    let first = db
        .add_ingredient(&new_ingredient("Flour"))
        .expect("Failed to add first ingredient");
    let second = db
        .add_ingredient(&new_ingredient("Sugar"))
        .expect("Failed to add second ingredient");

    assert!(first.id > 0);
    assert!(second.id > 0);
    assert_ne!(first.id, second.id);
}

#[test]
fn test_duplicate_ingredient_name_rejected() {
    let (_temp_file, db) = create_test_db();

    db.add_ingredient(&new_ingredient("Flour"))
        .expect("Failed to add ingredient");

    let result = db.add_ingredient(&new_ingredient("Flour"));
    assert!(matches!(result, Err(LarderError::Constraint { .. })));

    // The duplicate was not inserted
    let ingredients = db.all_ingredients().expect("Failed to list ingredients");
    assert_eq!(ingredients.len(), 1);
}

#[test]
fn test_unknown_unit_rejected() {
    let (_temp_file, db) = create_test_db();

    let mut ingredient = new_ingredient("Flour");
    ingredient.unit = "furlongs".to_string();

    let result = db.add_ingredient(&ingredient);
    assert!(matches!(result, Err(LarderError::Constraint { .. })));
}

#[test]
fn test_all_ingredients_ordered_by_name() {
    let (_temp_file, db) = create_test_db();

    for name in ["Yeast", "Flour", "Salt"] {
        db.add_ingredient(&new_ingredient(name))
            .expect("Failed to add ingredient");
    }

    let names: Vec<String> = db
        .all_ingredients()
        .expect("Failed to list ingredients")
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["Flour", "Salt", "Yeast"]);
}

#[test]
fn test_update_ingredient() {
    let (_temp_file, db) = create_test_db();

    let mut ingredient = db
        .add_ingredient(&new_ingredient("Flour"))
        .expect("Failed to add ingredient");

    ingredient.unit_cost = 0.1;
    ingredient.unit = "kg".to_string();
    assert!(db
        .update_ingredient(&ingredient)
        .expect("Failed to update ingredient"));

    let retrieved = db
        .get_ingredient(ingredient.id)
        .expect("Failed to get ingredient")
        .expect("Ingredient should exist");
    assert_eq!(retrieved.unit_cost, 0.1);
    assert_eq!(retrieved.unit, "kg");
}

#[test]
fn test_update_and_delete_unpersisted_are_noops() {
    let (_temp_file, db) = create_test_db();

    // id 0 means "never persisted"; both operations report no change
    let unpersisted = new_ingredient("Ghost");
    assert!(!db
        .update_ingredient(&unpersisted)
        .expect("Update of unpersisted ingredient should not error"));
    assert!(!db
        .delete_ingredient(0)
        .expect("Delete of unpersisted ingredient should not error"));

    let recipe = new_recipe("Ghost Soup");
    assert!(!db
        .update_recipe(&recipe)
        .expect("Update of unpersisted recipe should not error"));
    assert!(!db
        .delete_recipe(0)
        .expect("Delete of unpersisted recipe should not error"));
}

#[test]
fn test_delete_missing_row_reports_false() {
    let (_temp_file, db) = create_test_db();

    assert!(!db
        .delete_ingredient(999)
        .expect("Delete of missing ingredient should not error"));
}

#[test]
fn test_ingredient_exists() {
    let (_temp_file, db) = create_test_db();

    db.add_ingredient(&new_ingredient("Flour"))
        .expect("Failed to add ingredient");

    assert!(db
        .ingredient_exists("Flour")
        .expect("Failed to check existence"));
    assert!(!db
        .ingredient_exists("flour")
        .expect("Failed to check existence"));
    assert!(!db
        .ingredient_exists("Sugar")
        .expect("Failed to check existence"));
}

#[test]
fn test_recipe_crud() {
    let (_temp_file, db) = create_test_db();

    let mut recipe = Recipe {
        id: 0,
        name: "Bread".to_string(),
        yield_amount: 12.0,
        description: Some("Knead, prove, bake.".to_string()),
    };
    let added = db.add_recipe(&recipe).expect("Failed to add recipe");
    assert!(added.id > 0);

    let retrieved = db
        .get_recipe(added.id)
        .expect("Failed to get recipe")
        .expect("Recipe should exist");
    assert_eq!(retrieved.name, "Bread");
    assert_eq!(retrieved.yield_amount, 12.0);
    assert_eq!(retrieved.description, Some("Knead, prove, bake.".to_string()));

    recipe.id = added.id;
    recipe.yield_amount = 24.0;
    recipe.description = None;
    assert!(db.update_recipe(&recipe).expect("Failed to update recipe"));

    let retrieved = db
        .get_recipe(added.id)
        .expect("Failed to get recipe")
        .expect("Recipe should exist");
    assert_eq!(retrieved.yield_amount, 24.0);
    assert_eq!(retrieved.description, None);

    assert!(db.delete_recipe(added.id).expect("Failed to delete recipe"));
    assert!(db
        .get_recipe(added.id)
        .expect("Failed to query deleted recipe")
        .is_none());
}

#[test]
fn test_duplicate_recipe_name_rejected() {
    let (_temp_file, db) = create_test_db();

    db.add_recipe(&new_recipe("Bread"))
        .expect("Failed to add recipe");

    let result = db.add_recipe(&new_recipe("Bread"));
    assert!(matches!(result, Err(LarderError::Constraint { .. })));
}

#[test]
fn test_all_recipes_ordered_by_name() {
    let (_temp_file, db) = create_test_db();

    for name in ["Waffles", "Bread", "Pasta"] {
        db.add_recipe(&new_recipe(name)).expect("Failed to add recipe");
    }

    let names: Vec<String> = db
        .all_recipes()
        .expect("Failed to list recipes")
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Bread", "Pasta", "Waffles"]);
}

fn measure(ingredient: &str, quantity: f64) -> Measure {
    Measure {
        ingredient: ingredient.to_string(),
        quantity,
        unit: "g".to_string(),
    }
}

#[test]
fn test_set_and_list_measures() {
    let (_temp_file, mut db) = create_test_db();

    db.add_ingredient(&new_ingredient("Flour"))
        .expect("Failed to add ingredient");
    db.add_ingredient(&new_ingredient("Salt"))
        .expect("Failed to add ingredient");
    let recipe = db
        .add_recipe(&new_recipe("Bread"))
        .expect("Failed to add recipe");

    db.set_measures_for_recipe(recipe.id, &[measure("Salt", 10.0), measure("Flour", 500.0)])
        .expect("Failed to set measures");

    // Listed joined to ingredient names, ordered by name
    let measures = db
        .measures_for_recipe(recipe.id)
        .expect("Failed to list measures");
    assert_eq!(measures.len(), 2);
    assert_eq!(measures[0].ingredient, "Flour");
    assert_eq!(measures[0].quantity, 500.0);
    assert_eq!(measures[1].ingredient, "Salt");
}

#[test]
fn test_set_measures_replaces_previous_set() {
    let (_temp_file, mut db) = create_test_db();

    db.add_ingredient(&new_ingredient("Flour"))
        .expect("Failed to add ingredient");
    db.add_ingredient(&new_ingredient("Salt"))
        .expect("Failed to add ingredient");
    let recipe = db
        .add_recipe(&new_recipe("Bread"))
        .expect("Failed to add recipe");

    db.set_measures_for_recipe(recipe.id, &[measure("Flour", 500.0), measure("Salt", 10.0)])
        .expect("Failed to set measures");
    db.set_measures_for_recipe(recipe.id, &[measure("Flour", 450.0)])
        .expect("Failed to replace measures");

    let measures = db
        .measures_for_recipe(recipe.id)
        .expect("Failed to list measures");
    assert_eq!(measures.len(), 1);
    assert_eq!(measures[0].quantity, 450.0);
}

#[test]
fn test_set_measures_with_empty_set_clears() {
    let (_temp_file, mut db) = create_test_db();

    db.add_ingredient(&new_ingredient("Flour"))
        .expect("Failed to add ingredient");
    let recipe = db
        .add_recipe(&new_recipe("Bread"))
        .expect("Failed to add recipe");

    db.set_measures_for_recipe(recipe.id, &[measure("Flour", 500.0)])
        .expect("Failed to set measures");
    db.set_measures_for_recipe(recipe.id, &[])
        .expect("Failed to clear measures");

    assert!(db
        .measures_for_recipe(recipe.id)
        .expect("Failed to list measures")
        .is_empty());
}

#[test]
fn test_set_measures_unknown_ingredient_preserves_existing() {
    let (_temp_file, mut db) = create_test_db();

    db.add_ingredient(&new_ingredient("Flour"))
        .expect("Failed to add ingredient");
    let recipe = db
        .add_recipe(&new_recipe("Bread"))
        .expect("Failed to add recipe");

    db.set_measures_for_recipe(recipe.id, &[measure("Flour", 500.0)])
        .expect("Failed to set measures");

    let result =
        db.set_measures_for_recipe(recipe.id, &[measure("Flour", 450.0), measure("Saffron", 1.0)]);
    assert!(
        matches!(result, Err(LarderError::IngredientNotFound { ref name }) if name == "Saffron")
    );

    // The failed replacement left the previous set intact
    let measures = db
        .measures_for_recipe(recipe.id)
        .expect("Failed to list measures");
    assert_eq!(measures.len(), 1);
    assert_eq!(measures[0].quantity, 500.0);
}

#[test]
fn test_deleting_recipe_cascades_to_measures() {
    let (_temp_file, mut db) = create_test_db();

    let flour = db
        .add_ingredient(&new_ingredient("Flour"))
        .expect("Failed to add ingredient");
    let recipe = db
        .add_recipe(&new_recipe("Bread"))
        .expect("Failed to add recipe");
    db.set_measures_for_recipe(recipe.id, &[measure("Flour", 500.0)])
        .expect("Failed to set measures");

    assert!(db.delete_recipe(recipe.id).expect("Failed to delete recipe"));

    assert!(db
        .measures_for_recipe(recipe.id)
        .expect("Failed to list measures")
        .is_empty());
    // The ingredient itself survives
    assert!(db
        .get_ingredient(flour.id)
        .expect("Failed to get ingredient")
        .is_some());
}

#[test]
fn test_deleting_ingredient_cascades_to_measures() {
    let (_temp_file, mut db) = create_test_db();

    let flour = db
        .add_ingredient(&new_ingredient("Flour"))
        .expect("Failed to add ingredient");
    db.add_ingredient(&new_ingredient("Salt"))
        .expect("Failed to add ingredient");
    let recipe = db
        .add_recipe(&new_recipe("Bread"))
        .expect("Failed to add recipe");
    db.set_measures_for_recipe(recipe.id, &[measure("Flour", 500.0), measure("Salt", 10.0)])
        .expect("Failed to set measures");

    assert!(db
        .delete_ingredient(flour.id)
        .expect("Failed to delete ingredient"));

    let measures = db
        .measures_for_recipe(recipe.id)
        .expect("Failed to list measures");
    assert_eq!(measures.len(), 1);
    assert_eq!(measures[0].ingredient, "Salt");
}

#[test]
fn test_measures_for_unknown_recipe_is_empty() {
    let (_temp_file, db) = create_test_db();

    assert!(db
        .measures_for_recipe(999)
        .expect("Failed to list measures")
        .is_empty());
}

/// Builds a version 1 database by hand: the previous schema had the same
/// ingredients and recipes column layout but no unit reference data worth
/// keeping and a measures table that is not carried forward.
fn create_v1_db(path: &std::path::Path) {
    let conn = rusqlite::Connection::open(path).expect("Failed to open raw connection");
    conn.execute_batch(
        "CREATE TABLE units (
             id INTEGER PRIMARY KEY,
             abbreviation TEXT UNIQUE,
             type TEXT
         );
         CREATE TABLE ingredients (
             id INTEGER PRIMARY KEY,
             name TEXT UNIQUE,
             unit_cost DOUBLE,
             unit TEXT
         );
         CREATE TABLE recipes (
             id INTEGER PRIMARY KEY,
             name TEXT UNIQUE,
             description TEXT,
             yield DOUBLE
         );
         CREATE TABLE measures (
             recipe_id INTEGER,
             ingred_id INTEGER,
             measure DOUBLE,
             unit TEXT
         );
         INSERT INTO units (abbreviation, type) VALUES ('g', 'W');
         INSERT INTO ingredients (name, unit_cost, unit) VALUES ('Flour', 0.002, 'g');
         INSERT INTO recipes (name, description, yield) VALUES ('Bread', 'Old bread', 12.0);
         INSERT INTO measures (recipe_id, ingred_id, measure, unit) VALUES (1, 1, 500.0, 'g');
         PRAGMA user_version = 1;",
    )
    .expect("Failed to build v1 database");
}

#[test]
fn test_upgrade_from_v1_preserves_ingredients_and_recipes() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    create_v1_db(temp_file.path());

    let mut db = Database::new(temp_file.path()).expect("Failed to upgrade database");

    // Ingredients and recipes carried across
    let ingredients = db.all_ingredients().expect("Failed to list ingredients");
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].name, "Flour");

    let recipes = db.all_recipes().expect("Failed to list recipes");
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Bread");
    assert_eq!(recipes[0].yield_amount, 12.0);

    // Units reseeded from reference data, measures dropped
    assert_eq!(db.units().expect("Failed to list units").len(), 8);
    assert!(db
        .measures_for_recipe(recipes[0].id)
        .expect("Failed to list measures")
        .is_empty());

    // The upgraded database is fully usable
    db.set_measures_for_recipe(recipes[0].id, &[measure("Flour", 450.0)])
        .expect("Failed to set measures after upgrade");
}

/// A version 1 layout whose ingredients table grew an extra column, so the
/// unconditional row copy into the rebuilt table fails mid-upgrade.
fn create_incompatible_v1_db(path: &std::path::Path) {
    let conn = rusqlite::Connection::open(path).expect("Failed to open raw connection");
    conn.execute_batch(
        "CREATE TABLE units (
             id INTEGER PRIMARY KEY,
             abbreviation TEXT UNIQUE,
             type TEXT
         );
         CREATE TABLE ingredients (
             id INTEGER PRIMARY KEY,
             name TEXT UNIQUE,
             unit_cost DOUBLE,
             unit TEXT,
             notes TEXT
         );
         CREATE TABLE recipes (
             id INTEGER PRIMARY KEY,
             name TEXT UNIQUE,
             description TEXT,
             yield DOUBLE
         );
         CREATE TABLE measures (
             recipe_id INTEGER,
             ingred_id INTEGER,
             measure DOUBLE,
             unit TEXT
         );
         INSERT INTO ingredients (name, unit_cost, unit, notes)
             VALUES ('Flour', 0.002, 'g', 'stone ground');
         PRAGMA user_version = 1;",
    )
    .expect("Failed to build incompatible v1 database");
}

#[test]
fn test_failed_upgrade_rolls_back_and_is_retryable() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    create_incompatible_v1_db(temp_file.path());

    // The row copy fails and the whole upgrade must roll back
    assert!(matches!(
        Database::new(temp_file.path()),
        Err(LarderError::Database { .. })
    ));

    // Nothing half-migrated: version unchanged, no stashed tables left
    // behind, original rows intact
    {
        let conn = rusqlite::Connection::open(temp_file.path())
            .expect("Failed to open raw connection");
        let version: i64 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .expect("Failed to read version");
        assert_eq!(version, 1);

        let stashed: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master
                 WHERE name IN ('_ingredients_old', '_recipes_old')",
                [],
                |row| row.get(0),
            )
            .expect("Failed to inspect tables");
        assert_eq!(stashed, 0);

        let name: String = conn
            .query_row("SELECT name FROM ingredients", [], |row| row.get(0))
            .expect("Failed to read ingredient");
        assert_eq!(name, "Flour");
    }

    // A second open fails on the same row copy again, not on a collision
    // with leftovers from the first attempt
    match Database::new(temp_file.path()) {
        Err(LarderError::Database { message, .. }) => {
            assert!(message.contains("Failed to restore rows"), "{message}");
        }
        Err(e) => panic!("Unexpected error: {e}"),
        Ok(_) => panic!("Upgrade with a mismatched column layout should fail"),
    }
}

#[test]
fn test_newer_schema_version_rejected() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let conn = rusqlite::Connection::open(temp_file.path())
            .expect("Failed to open raw connection");
        conn.execute_batch("PRAGMA user_version = 99")
            .expect("Failed to set version");
    }

    let result = Database::new(temp_file.path());
    assert!(matches!(result, Err(LarderError::Configuration { .. })));
}
