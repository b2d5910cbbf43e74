//! Serving Scaler
//!
//! Pure derivation of display quantities from stored base amounts.

use super::entity::{DomainError, DomainResult};
use super::ingredient::Ingredient;
use super::recipe::Recipe;

/// Round to 2 decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scale a recipe's ingredient list to its current serving count.
///
/// Every call recomputes from the stored base amounts, so repeated scaling
/// is never cumulative. Names and units pass through unchanged. A stored
/// `default_servings` of zero marks a malformed record; scaling refuses it
/// instead of dividing by zero, and callers fall back to the base amounts.
pub fn scale(recipe: &Recipe) -> DomainResult<Vec<Ingredient>> {
    if recipe.default_servings == 0 {
        return Err(DomainError::InvalidRecipe(format!(
            "recipe {} has a defaultServings of 0",
            recipe.id
        )));
    }

    let ratio = recipe.current_servings as f64 / recipe.default_servings as f64;
    Ok(recipe
        .ingredients
        .iter()
        .map(|ing| Ingredient {
            name: ing.name.clone(),
            amount: round2(ing.amount * ratio),
            unit: ing.unit.clone(),
        })
        .collect())
}
