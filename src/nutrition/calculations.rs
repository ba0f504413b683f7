use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

use crate::nutrition::constants::*;

/// Absolute nutrient amounts for some quantity of food.
///
/// Macronutrients are in grams, calories in kcal. `Display` renders the report
/// fragment `protein=..g, carbs=..g, fats=..g calories=..` using the formatter
/// precision, falling back to [`DEFAULT_DECIMALS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Nutrients {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
}

impl Nutrients {
    /// Build from macronutrient grams, deriving calories.
    pub fn from_macros(protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            protein,
            carbs,
            fats,
            calories: calories_from_macros(protein, carbs, fats),
        }
    }

    /// All four values rounded to `decimals` places.
    pub fn rounded(&self, decimals: usize) -> Self {
        Self {
            protein: round_to(self.protein, decimals),
            carbs: round_to(self.carbs, decimals),
            fats: round_to(self.fats, decimals),
            calories: round_to(self.calories, decimals),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.protein == 0.0 && self.carbs == 0.0 && self.fats == 0.0 && self.calories == 0.0
    }
}

impl Add for Nutrients {
    type Output = Nutrients;

    fn add(self, rhs: Nutrients) -> Nutrients {
        Nutrients {
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
            calories: self.calories + rhs.calories,
        }
    }
}

impl Sum for Nutrients {
    fn sum<I: Iterator<Item = Nutrients>>(iter: I) -> Self {
        iter.fold(Nutrients::default(), Add::add)
    }
}

impl fmt::Display for Nutrients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(DEFAULT_DECIMALS);
        write!(
            f,
            "protein={:.prec$}g, carbs={:.prec$}g, fats={:.prec$}g calories={:.prec$}",
            self.protein,
            self.carbs,
            self.fats,
            self.calories,
            prec = prec
        )
    }
}

/// Energy from macronutrient grams using the Atwater factors.
#[inline]
pub fn calories_from_macros(protein: f64, carbs: f64, fats: f64) -> f64 {
    protein * KCAL_PER_GRAM_PROTEIN + carbs * KCAL_PER_GRAM_CARBS + fats * KCAL_PER_GRAM_FATS
}

/// Amount of a nutrient in `grams` of food with the given per-100g density.
#[inline]
pub fn scale_density(density: f64, grams: f64) -> f64 {
    grams / GRAMS_BASIS * density
}

/// Finite and non-negative.
#[inline]
pub fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Round a float to n decimal places, capped at [`MAX_DECIMALS`].
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10_f64.powi(decimals.min(MAX_DECIMALS) as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_calories_from_macros() {
        assert_float_absolute_eq!(calories_from_macros(1.0, 1.0, 1.0), 17.0, 1e-9);
        assert_eq!(calories_from_macros(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_scale_density() {
        assert_float_absolute_eq!(scale_density(13.0, 200.0), 26.0, 1e-9);
        assert_eq!(scale_density(13.0, 0.0), 0.0);
    }

    #[test]
    fn test_is_valid_amount() {
        assert!(is_valid_amount(0.0));
        assert!(is_valid_amount(12.5));
        assert!(!is_valid_amount(-0.1));
        assert!(!is_valid_amount(f64::NAN));
        assert!(!is_valid_amount(f64::INFINITY));
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Nutrients = Vec::<Nutrients>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_display_uses_precision() {
        let n = Nutrients::from_macros(26.0, 2.2, 22.0);
        assert_eq!(
            format!("{}", n),
            "protein=26.00g, carbs=2.20g, fats=22.00g calories=310.80"
        );
        assert_eq!(
            format!("{:.1}", n),
            "protein=26.0g, carbs=2.2g, fats=22.0g calories=310.8"
        );
    }

    #[test]
    fn test_rounded() {
        let n = Nutrients::from_macros(0.45, 1.95, 0.1).rounded(1);
        assert_eq!(n.protein, 0.5);
        assert_eq!(n.fats, 0.1);
        assert_eq!(n.calories, 10.5);
    }

    #[test]
    fn test_round_to_caps_decimals() {
        assert_eq!(round_to(65.2, 400), round_to(65.2, MAX_DECIMALS));
        assert_eq!(round_to(65.2, usize::MAX), round_to(65.2, MAX_DECIMALS));
        assert!(Nutrients::from_macros(2.25, 12.25, 0.8).rounded(400).calories.is_finite());
    }
}
