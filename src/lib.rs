//! Recipe Book Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: UI-facing command handlers

use std::sync::Arc;

pub mod commands;
pub mod domain;
pub mod repository;

use repository::RecipeRepository;

/// Application state shared across commands
pub struct AppState {
    pub recipe_repo: Arc<RecipeRepository>,
}

impl AppState {
    pub fn new(recipe_repo: RecipeRepository) -> Self {
        Self {
            recipe_repo: Arc::new(recipe_repo),
        }
    }
}
