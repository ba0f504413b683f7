use std::fmt;

use crate::error::{NutritionError, Result};
use crate::nutrition::{Nutrients, is_valid_amount, scale_density};

/// A food ingredient with fixed nutrient densities (grams per 100g).
///
/// Densities are private so they cannot change after construction. Share an
/// ingredient between meals with `Rc<Ingredient>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    name: String,
    protein: f64,
    carbs: f64,
    fats: f64,
}

impl Ingredient {
    /// Create an ingredient, rejecting negative or non-finite densities.
    pub fn new(name: impl Into<String>, protein: f64, carbs: f64, fats: f64) -> Result<Self> {
        let name = name.into();
        for (nutrient, value) in [("protein", protein), ("carbs", carbs), ("fats", fats)] {
            if !is_valid_amount(value) {
                return Err(NutritionError::InvalidDensity {
                    ingredient: name,
                    nutrient,
                    value,
                });
            }
        }
        Ok(Self {
            name,
            protein,
            carbs,
            fats,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn protein(&self) -> f64 {
        self.protein
    }

    pub fn carbs(&self) -> f64 {
        self.carbs
    }

    pub fn fats(&self) -> f64 {
        self.fats
    }

    /// Nutrients provided by `grams` of this ingredient.
    pub fn nutrients_for(&self, grams: f64) -> Result<Nutrients> {
        if !is_valid_amount(grams) {
            return Err(NutritionError::InvalidQuantity {
                ingredient: self.name.clone(),
                grams,
            });
        }
        Ok(self.scaled(grams))
    }

    /// Unchecked scaling for quantities already validated by a meal.
    pub(crate) fn scaled(&self, grams: f64) -> Nutrients {
        Nutrients::from_macros(
            scale_density(self.protein, grams),
            scale_density(self.carbs, grams),
            scale_density(self.fats, grams),
        )
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
