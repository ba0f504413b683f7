use std::rc::Rc;

use crate::error::Result;
use crate::models::{DailyPlan, Ingredient, Meal};

/// The minimal menu: scrambled eggs and a tomato sandwich.
pub fn reference_plan() -> Result<DailyPlan> {
    let egg = Rc::new(Ingredient::new("egg", 13.0, 1.1, 11.0)?);
    let tomato = Rc::new(Ingredient::new("tomato", 0.9, 3.9, 0.2)?);
    let bread = Rc::new(Ingredient::new("bread", 9.0, 49.0, 3.2)?);

    let mut scrambled_eggs = Meal::new("scrambled eggs");
    scrambled_eggs.add_ingredient(Rc::clone(&egg), 200.0)?;
    scrambled_eggs.add_ingredient(Rc::clone(&tomato), 50.0)?;

    let mut sandwich = Meal::new("sandwich");
    sandwich.add_ingredient(Rc::clone(&bread), 25.0)?;
    sandwich.add_ingredient(Rc::clone(&tomato), 50.0)?;

    let mut plan = DailyPlan::new();
    plan.add_meal(Rc::new(scrambled_eggs));
    plan.add_meal(Rc::new(sandwich));

    Ok(plan)
}
