use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::interface::render::ReportConfig;
use crate::models::{DailyPlan, Meal};
use crate::nutrition::Nutrients;

/// Serializable view of a plan report, values rounded per [`ReportConfig`].
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub meals: Vec<MealReport>,
    pub daily_total: Nutrients,
}

#[derive(Debug, Clone, Serialize)]
pub struct MealReport {
    pub name: String,
    pub entries: Vec<EntryReport>,
    pub total: Nutrients,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub ingredient: String,
    pub grams: f64,
    #[serde(flatten)]
    pub nutrients: Nutrients,
}

impl MealReport {
    pub fn from_meal(meal: &Meal, config: &ReportConfig) -> Self {
        Self {
            name: meal.name().to_string(),
            entries: meal
                .entries()
                .iter()
                .map(|e| EntryReport {
                    ingredient: e.ingredient().name().to_string(),
                    grams: e.grams(),
                    nutrients: e.nutrients().rounded(config.precision()),
                })
                .collect(),
            total: meal.total_nutrients().rounded(config.precision()),
        }
    }
}

impl PlanReport {
    pub fn from_plan(plan: &DailyPlan, config: &ReportConfig) -> Self {
        Self {
            meals: plan
                .meals()
                .iter()
                .map(|m| MealReport::from_meal(m, config))
                .collect(),
            daily_total: plan.total_nutrients().rounded(config.precision()),
        }
    }
}

/// Write the plan report as pretty-printed JSON.
pub fn write_json<W: Write>(plan: &DailyPlan, config: &ReportConfig, mut writer: W) -> Result<()> {
    let report = PlanReport::from_plan(plan, config);
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

/// Write one CSV row per entry, a `TOTAL` row per meal and a final
/// `DAILY TOTAL` row.
pub fn write_csv<W: Write>(plan: &DailyPlan, config: &ReportConfig, writer: W) -> Result<()> {
    let prec = config.precision();
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "meal",
        "ingredient",
        "grams",
        "protein",
        "carbs",
        "fats",
        "calories",
    ])?;

    let row = |meal: &str, label: &str, grams: String, n: Nutrients| {
        [
            meal.to_string(),
            label.to_string(),
            grams,
            format!("{:.prec$}", n.protein),
            format!("{:.prec$}", n.carbs),
            format!("{:.prec$}", n.fats),
            format!("{:.prec$}", n.calories),
        ]
    };

    for meal in plan.meals() {
        for entry in meal.entries() {
            wtr.write_record(row(
                meal.name(),
                entry.ingredient().name(),
                entry.grams().to_string(),
                entry.nutrients(),
            ))?;
        }
        wtr.write_record(row(meal.name(), "TOTAL", String::new(), meal.total_nutrients()))?;
    }
    wtr.write_record(row("", "DAILY TOTAL", String::new(), plan.total_nutrients()))?;

    wtr.flush()?;
    Ok(())
}
