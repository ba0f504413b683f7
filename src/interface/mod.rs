pub mod export;
pub mod render;

pub use export::{EntryReport, MealReport, PlanReport, write_csv, write_json};
pub use render::{ReportConfig, display_plan, render_meal_details, render_plan_summary};
