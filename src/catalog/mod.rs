mod loader;
mod registry;

pub use loader::{IngredientDef, ItemDef, MealDef, PlanFile, load_plan, parse_plan};
pub use registry::IngredientCatalog;
