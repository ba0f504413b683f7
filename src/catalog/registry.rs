use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{NutritionError, Result};
use crate::models::Ingredient;

/// Ingredients available to a plan definition, looked up by name.
#[derive(Debug, Default)]
pub struct IngredientCatalog {
    /// All ingredients keyed by lowercase name.
    ingredients: HashMap<String, Rc<Ingredient>>,
}

impl IngredientCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ingredient. Names must be unique ignoring case.
    pub fn insert(&mut self, ingredient: Ingredient) -> Result<Rc<Ingredient>> {
        let key = ingredient.name().to_lowercase();
        if self.ingredients.contains_key(&key) {
            return Err(NutritionError::DuplicateIngredient(
                ingredient.name().to_string(),
            ));
        }

        let shared = Rc::new(ingredient);
        self.ingredients.insert(key, Rc::clone(&shared));
        Ok(shared)
    }

    /// Get an ingredient by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<Rc<Ingredient>> {
        self.ingredients.get(&name.to_lowercase()).cloned()
    }

    /// Like [`get`](Self::get), but a missing name is an error.
    pub fn resolve(&self, name: &str) -> Result<Rc<Ingredient>> {
        self.get(name)
            .ok_or_else(|| NutritionError::IngredientNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
