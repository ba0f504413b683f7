/// Densities are expressed per this many grams of ingredient.
pub const GRAMS_BASIS: f64 = 100.0;

/// Atwater factor for protein (kcal per gram).
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Atwater factor for carbohydrate (kcal per gram).
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Atwater factor for fat (kcal per gram).
pub const KCAL_PER_GRAM_FATS: f64 = 9.0;

/// Decimal places used for nutrient values in reports.
pub const DEFAULT_DECIMALS: usize = 2;

/// Upper bound on report decimal places; past this `f64` has no digits left.
pub const MAX_DECIMALS: usize = 15;
