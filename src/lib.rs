pub mod catalog;
pub mod cli;
pub mod demo;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;

pub use error::{NutritionError, Result};
pub use models::{DailyPlan, Ingredient, Meal, MealEntry};
pub use nutrition::Nutrients;
