//! Ingredient value object

use serde::{Deserialize, Serialize};

/// One line of a recipe's ingredient list
///
/// `amount` is always the unscaled base quantity, sized for the recipe's
/// `default_servings`. Ingredients carry no identity of their own; position
/// in the parent list is the only ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: String, amount: f64, unit: String) -> Self {
        Self { name, amount, unit }
    }
}
