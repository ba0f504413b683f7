use std::rc::Rc;

use tracing::debug;

use crate::interface::render::{ReportConfig, render_plan_summary};
use crate::models::Meal;
use crate::nutrition::Nutrients;

/// An ordered list of meals eaten over one day.
#[derive(Debug, Clone, Default)]
pub struct DailyPlan {
    meals: Vec<Rc<Meal>>,
}

impl DailyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a meal. The same meal may be added more than once.
    pub fn add_meal(&mut self, meal: Rc<Meal>) {
        debug!(meal = %meal.name(), position = self.meals.len(), "added meal");
        self.meals.push(meal);
    }

    pub fn meals(&self) -> &[Rc<Meal>] {
        &self.meals
    }

    /// Sum of every meal's total.
    pub fn total_nutrients(&self) -> Nutrients {
        self.meals.iter().map(|m| m.total_nutrients()).sum()
    }

    /// Full report: each meal's details followed by a blank line, then the
    /// daily total.
    pub fn render_summary(&self, config: &ReportConfig) -> Vec<String> {
        render_plan_summary(self, config)
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_empty_plan_is_zero() {
        let plan = DailyPlan::new();
        assert!(plan.is_empty());
        assert!(plan.total_nutrients().is_zero());
    }

    #[test]
    fn test_total_is_sum_of_meals() {
        let bread = Rc::new(Ingredient::new("bread", 9.0, 49.0, 3.2).unwrap());

        let mut toast = Meal::new("toast");
        toast.add_ingredient(Rc::clone(&bread), 25.0).unwrap();
        let toast = Rc::new(toast);

        let mut plan = DailyPlan::new();
        plan.add_meal(Rc::clone(&toast));
        plan.add_meal(Rc::clone(&toast));

        assert_eq!(plan.len(), 2);
        let expected = toast.total_nutrients() + toast.total_nutrients();
        assert_eq!(plan.total_nutrients(), expected);
        assert_float_absolute_eq!(plan.total_nutrients().calories, 130.4, 1e-9);
    }
}
