//! Commands for the recipe collection
//!
//! The complete surface the UI calls: load-on-start plus the mutating
//! operations, with domain errors flattened to strings at the boundary.

use crate::domain::{scale, DomainError, DomainResult, Ingredient, Recipe, RecipeDraft};
use crate::repository::Repository;
use crate::AppState;

/// Load the persisted collection and seed it when empty.
///
/// Called once at startup; returns the collection for the first render.
pub async fn init_recipes(state: &AppState) -> Result<Vec<Recipe>, String> {
    state.recipe_repo.load().await.map_err(|e| e.to_string())?;
    state
        .recipe_repo
        .seed_if_empty()
        .await
        .map_err(|e| e.to_string())
}

/// List all recipes
pub async fn list_recipes(state: &AppState) -> Result<Vec<Recipe>, String> {
    state.recipe_repo.list().await.map_err(|e| e.to_string())
}

/// Get recipe by ID
pub async fn get_recipe(state: &AppState, id: u32) -> Result<Option<Recipe>, String> {
    state
        .recipe_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())
}

/// Save the dialog draft.
///
/// With an editing target the draft replaces that recipe; without one a
/// new recipe is created under a fresh id. Returns the saved recipe.
pub async fn save_recipe(
    state: &AppState,
    draft: RecipeDraft,
    editing: Option<u32>,
) -> Result<Recipe, String> {
    let repo = &state.recipe_repo;
    match editing {
        Some(id) => repo
            .update(&draft.into_recipe(id))
            .await
            .map_err(|e| e.to_string()),
        None => repo
            .create(&draft.into_recipe(0))
            .await
            .map_err(|e| e.to_string()),
    }
}

/// Delete recipe
pub async fn delete_recipe(state: &AppState, id: u32) -> Result<(), String> {
    state
        .recipe_repo
        .delete(id)
        .await
        .map_err(|e| e.to_string())
}

/// Change the display serving count of one recipe
pub async fn set_servings(state: &AppState, id: u32, servings: u32) -> Result<(), String> {
    state
        .recipe_repo
        .set_current_servings(id, servings)
        .await
        .map_err(|e| e.to_string())
}

/// Change the serving count from raw field text.
///
/// Non-numeric input is rejected before it reaches the store; the recipe
/// keeps its prior count.
pub async fn set_servings_raw(state: &AppState, id: u32, raw: &str) -> Result<(), String> {
    let servings = parse_servings(raw).map_err(|e| e.to_string())?;
    set_servings(state, id, servings).await
}

/// Ingredient list scaled for display.
///
/// Recomputed from the stored base amounts on every call. A malformed
/// stored record (zero baseline servings) falls back to the raw base
/// amounts instead of failing the render.
pub async fn scaled_ingredients(state: &AppState, id: u32) -> Result<Vec<Ingredient>, String> {
    let recipe = state
        .recipe_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Recipe {} not found", id))?;

    match scale(&recipe) {
        Ok(ingredients) => Ok(ingredients),
        Err(DomainError::InvalidRecipe(msg)) => {
            log::warn!("scaling fell back to base amounts: {}", msg);
            Ok(recipe.ingredients)
        }
        Err(e) => Err(e.to_string()),
    }
}

fn parse_servings(raw: &str) -> DomainResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| DomainError::InvalidInput(format!("not a valid serving count: '{}'", raw)))
}
