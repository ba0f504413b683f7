use std::fs;
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;
use tracing::debug;

use crate::catalog::IngredientCatalog;
use crate::error::{NutritionError, Result};
use crate::models::{DailyPlan, Ingredient, Meal};

/// On-disk plan definition: an ingredient catalog plus meals referencing it
/// by name.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanFile {
    pub ingredients: Vec<IngredientDef>,
    #[serde(default)]
    pub meals: Vec<MealDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngredientDef {
    pub name: String,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealDef {
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemDef {
    pub ingredient: String,
    pub grams: f64,
}

impl PlanFile {
    /// Build the plan, validating every density and quantity.
    pub fn build(&self) -> Result<DailyPlan> {
        let mut catalog = IngredientCatalog::new();
        for def in &self.ingredients {
            catalog.insert(Ingredient::new(
                def.name.as_str(),
                def.protein,
                def.carbs,
                def.fats,
            )?)?;
        }

        let mut plan = DailyPlan::new();
        for def in &self.meals {
            let mut meal = Meal::new(def.name.as_str());
            for item in &def.items {
                meal.add_ingredient(catalog.resolve(&item.ingredient)?, item.grams)?;
            }
            plan.add_meal(Rc::new(meal));
        }

        debug!(
            ingredients = catalog.len(),
            meals = plan.len(),
            "built plan definition"
        );
        Ok(plan)
    }
}

/// Parse a plan definition from a JSON string.
pub fn parse_plan(json: &str) -> Result<DailyPlan> {
    let file: PlanFile = serde_json::from_str(json)?;
    file.build()
}

/// Load a plan definition from a JSON file.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<DailyPlan> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(NutritionError::PlanFileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    parse_plan(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MENU: &str = r#"{
        "ingredients": [
            {"name": "egg", "protein": 13, "carbs": 1.1, "fats": 11},
            {"name": "tomato", "protein": 0.9, "carbs": 3.9, "fats": 0.2}
        ],
        "meals": [
            {"name": "scrambled eggs", "items": [
                {"ingredient": "egg", "grams": 200},
                {"ingredient": "Tomato", "grams": 50}
            ]}
        ]
    }"#;

    #[test]
    fn test_load_plan_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MENU.as_bytes()).unwrap();

        let plan = load_plan(file.path()).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.meals()[0].name(), "scrambled eggs");
        assert_float_absolute_eq!(plan.total_nutrients().calories, 321.3, 1e-9);
    }

    #[test]
    fn test_meals_share_ingredients() {
        let json = r#"{
            "ingredients": [{"name": "tomato", "protein": 0.9, "carbs": 3.9, "fats": 0.2}],
            "meals": [
                {"name": "a", "items": [{"ingredient": "tomato", "grams": 50}]},
                {"name": "b", "items": [{"ingredient": "tomato", "grams": 50}]}
            ]
        }"#;
        let plan = parse_plan(json).unwrap();
        let first = &plan.meals()[0].entries()[0];
        let second = &plan.meals()[1].entries()[0];
        assert!(std::ptr::eq(first.ingredient(), second.ingredient()));
    }

    #[test]
    fn test_unknown_ingredient() {
        let json = r#"{
            "ingredients": [],
            "meals": [{"name": "x", "items": [{"ingredient": "ghost", "grams": 10}]}]
        }"#;
        let err = parse_plan(json).unwrap_err();
        assert!(matches!(err, NutritionError::IngredientNotFound(name) if name == "ghost"));
    }

    #[test]
    fn test_negative_grams_in_file() {
        let json = r#"{
            "ingredients": [{"name": "egg", "protein": 13, "carbs": 1.1, "fats": 11}],
            "meals": [{"name": "x", "items": [{"ingredient": "egg", "grams": -10}]}]
        }"#;
        let err = parse_plan(json).unwrap_err();
        assert!(matches!(err, NutritionError::InvalidQuantity { .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_plan("{ not json").unwrap_err(),
            NutritionError::Json(_)
        ));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_plan("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, NutritionError::PlanFileNotFound(_)));
        assert_eq!(err.to_string(), "Plan file not found: /definitely/not/here.json");
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_plan(dir.path()).unwrap_err(),
            NutritionError::Io(_)
        ));
    }
}
