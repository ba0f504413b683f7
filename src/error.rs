use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("Invalid quantity for {ingredient}: {grams}g (must be a finite, non-negative number)")]
    InvalidQuantity { ingredient: String, grams: f64 },

    #[error("Invalid {nutrient} density for {ingredient}: {value} (must be a finite, non-negative number)")]
    InvalidDensity {
        ingredient: String,
        nutrient: &'static str,
        value: f64,
    },

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("Duplicate ingredient in catalog: {0}")]
    DuplicateIngredient(String),

    #[error("Plan file not found: {0}")]
    PlanFileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, NutritionError>;
