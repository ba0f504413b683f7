mod ingredient;
mod meal;
mod plan;

pub use ingredient::Ingredient;
pub use meal::{Meal, MealEntry};
pub use plan::DailyPlan;
