use crate::models::{DailyPlan, Meal};
use crate::nutrition::{DEFAULT_DECIMALS, MAX_DECIMALS};

/// Formatting options for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Decimal places for nutrient values. Grams are printed as given.
    pub decimals: usize,
}

impl ReportConfig {
    /// Decimal places actually used, capped at [`MAX_DECIMALS`].
    pub fn precision(&self) -> usize {
        self.decimals.min(MAX_DECIMALS)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

/// Lines for a single meal: header, one line per entry, meal total.
pub fn render_meal_details(meal: &Meal, config: &ReportConfig) -> Vec<String> {
    let prec = config.precision();
    let mut lines = Vec::with_capacity(meal.len() + 2);

    lines.push(format!("Meal: {}", meal.name()));
    for entry in meal.entries() {
        lines.push(format!(
            "\t - {}g {} ({:.prec$}",
            entry.grams(),
            entry.ingredient(),
            entry.nutrients(),
            prec = prec
        ));
    }
    lines.push(format!("Total: {:.prec$}", meal.total_nutrients(), prec = prec));

    lines
}

/// Lines for a whole plan: every meal block separated by a blank line, then
/// the daily total.
pub fn render_plan_summary(plan: &DailyPlan, config: &ReportConfig) -> Vec<String> {
    let mut lines = Vec::new();

    for meal in plan.meals() {
        lines.extend(render_meal_details(meal, config));
        lines.push(String::new());
    }
    lines.push(format!(
        "DAILY TOTAL: {:.prec$}",
        plan.total_nutrients(),
        prec = config.precision()
    ));

    lines
}

/// Print the plan summary to stdout.
pub fn display_plan(plan: &DailyPlan, config: &ReportConfig) {
    for line in render_plan_summary(plan, config) {
        println!("{}", line);
    }
}
