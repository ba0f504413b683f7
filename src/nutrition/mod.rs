pub mod calculations;
pub mod constants;

pub use calculations::{Nutrients, calories_from_macros, is_valid_amount, round_to, scale_density};
pub use constants::*;
