use std::rc::Rc;

use tracing::debug;

use crate::error::{NutritionError, Result};
use crate::interface::render::{ReportConfig, render_meal_details};
use crate::models::Ingredient;
use crate::nutrition::{Nutrients, is_valid_amount};

/// One ingredient used in a meal, with its quantity in grams.
#[derive(Debug, Clone)]
pub struct MealEntry {
    ingredient: Rc<Ingredient>,
    grams: f64,
}

impl MealEntry {
    pub fn ingredient(&self) -> &Ingredient {
        &self.ingredient
    }

    pub fn grams(&self) -> f64 {
        self.grams
    }

    /// Nutrients contributed by this entry.
    pub fn nutrients(&self) -> Nutrients {
        self.ingredient.scaled(self.grams)
    }
}

/// A named meal: an ordered list of ingredient entries.
#[derive(Debug, Clone)]
pub struct Meal {
    name: String,
    entries: Vec<MealEntry>,
}

impl Meal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    /// Add `grams` of an ingredient to this meal.
    ///
    /// Adding the same ingredient again (same `Rc`, not just the same name)
    /// accumulates its grams into the existing entry, which keeps its position.
    pub fn add_ingredient(&mut self, ingredient: Rc<Ingredient>, grams: f64) -> Result<()> {
        if !is_valid_amount(grams) {
            return Err(NutritionError::InvalidQuantity {
                ingredient: ingredient.name().to_string(),
                grams,
            });
        }

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| Rc::ptr_eq(&e.ingredient, &ingredient))
        {
            let combined = entry.grams + grams;
            if !is_valid_amount(combined) {
                return Err(NutritionError::InvalidQuantity {
                    ingredient: ingredient.name().to_string(),
                    grams: combined,
                });
            }
            entry.grams = combined;
            debug!(
                meal = %self.name,
                ingredient = %ingredient,
                grams = entry.grams,
                "accumulated ingredient"
            );
            return Ok(());
        }

        debug!(meal = %self.name, ingredient = %ingredient, grams, "added ingredient");
        self.entries.push(MealEntry { ingredient, grams });
        Ok(())
    }

    /// Sum of nutrients over all entries.
    pub fn total_nutrients(&self) -> Nutrients {
        self.entries.iter().map(MealEntry::nutrients).sum()
    }

    /// Report lines: one per entry in insertion order, then the meal total.
    pub fn render_details(&self, config: &ReportConfig) -> Vec<String> {
        render_meal_details(self, config)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
