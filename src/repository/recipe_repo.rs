//! Recipe Repository
//!
//! Owns the recipe collection and its persisted representation. The
//! collection lives in memory for the session; every mutation writes one
//! full snapshot into the recipe slot. Reads fail open: bad storage
//! degrades to an empty collection instead of failing startup.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::db::{self, SharedConnection};
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Ingredient, Recipe};

/// In-memory session state: the collection plus the id counter.
///
/// Between snapshot writes this is the source of truth, so a failed write
/// leaves the session consistent and only durability behind.
struct SessionState {
    recipes: Vec<Recipe>,
    /// Next id to hand out; monotonic for the whole session, never reused
    /// even after deletes
    next_id: u32,
}

/// Slot-backed implementation of the recipe store
pub struct RecipeRepository {
    conn: SharedConnection,
    state: Mutex<SessionState>,
}

impl RecipeRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self {
            conn,
            state: Mutex::new(SessionState {
                recipes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Load the persisted collection into the session.
    ///
    /// An absent, unreadable, or unparsable slot yields the empty
    /// collection; startup never fails on bad storage. The id counter is
    /// seeded past the highest loaded id.
    pub async fn load(&self) -> DomainResult<Vec<Recipe>> {
        let loaded = match self.read_persisted().await {
            Ok(recipes) => recipes,
            Err(e) => {
                log::warn!("recipe slot unreadable, starting empty: {}", e);
                Vec::new()
            }
        };

        let mut state = self.state.lock().await;
        state.next_id = loaded.iter().map(|r| r.id + 1).max().unwrap_or(1);
        state.recipes = loaded;
        Ok(state.recipes.clone())
    }

    /// Seed the collection with the bootstrap recipes if it is empty.
    ///
    /// Idempotent: a non-empty collection is returned unchanged.
    pub async fn seed_if_empty(&self) -> DomainResult<Vec<Recipe>> {
        let mut state = self.state.lock().await;
        if state.recipes.is_empty() {
            state.recipes = bootstrap_recipes();
            state.next_id = state.recipes.iter().map(|r| r.id + 1).max().unwrap_or(1);
            log::info!(
                "seeded recipe collection with {} example recipes",
                state.recipes.len()
            );
            self.persist(&state.recipes).await;
        }
        Ok(state.recipes.clone())
    }

    /// Persist the current collection snapshot, replacing prior content.
    ///
    /// The mutating operations already persist on their own; this is the
    /// explicit whole-collection write for callers that need it.
    pub async fn save(&self) -> DomainResult<()> {
        let state = self.state.lock().await;
        self.write_persisted(&state.recipes).await
    }

    /// Update only the display serving count of one recipe.
    ///
    /// Values below 1 are rejected with the stored state left untouched;
    /// an absent id is a no-op. Baseline servings and ingredient amounts
    /// are never touched here.
    pub async fn set_current_servings(&self, id: u32, servings: u32) -> DomainResult<()> {
        if servings < 1 {
            return Err(DomainError::InvalidInput(format!(
                "servings must be at least 1, got {}",
                servings
            )));
        }

        let mut state = self.state.lock().await;
        match state.recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => recipe.current_servings = servings,
            None => {
                log::debug!("set_current_servings: recipe {} not found", id);
                return Ok(());
            }
        }
        self.persist(&state.recipes).await;
        Ok(())
    }

    async fn read_persisted(&self) -> DomainResult<Vec<Recipe>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let payload = match db::read_slot(conn, db::RECIPES_SLOT)? {
            Some(payload) => payload,
            None => return Ok(Vec::new()),
        };

        serde_json::from_str(&payload).map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn write_persisted(&self, recipes: &[Recipe]) -> DomainResult<()> {
        let payload =
            serde_json::to_string(recipes).map_err(|e| DomainError::Internal(e.to_string()))?;

        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        db::write_slot(conn, db::RECIPES_SLOT, &payload)
    }

    /// Best-effort snapshot write after a mutation.
    ///
    /// A failed write is logged and swallowed: the in-memory change stays
    /// in effect for the rest of the session, it just isn't durable.
    async fn persist(&self, recipes: &[Recipe]) {
        if let Err(e) = self.write_persisted(recipes).await {
            log::error!("failed to persist recipe collection: {}", e);
        }
    }
}

#[async_trait]
impl Repository<Recipe> for RecipeRepository {
    /// Append a new recipe under a fresh id.
    ///
    /// The entity's own id is ignored; the session counter assigns one
    /// that cannot collide with any live or previously used id, even under
    /// rapid successive creation.
    async fn create(&self, entity: &Recipe) -> DomainResult<Recipe> {
        entity.validate()?;

        let mut state = self.state.lock().await;
        let id = state.next_id;
        state.next_id += 1;

        let created = Recipe {
            id,
            ..entity.clone()
        };
        state.recipes.push(created.clone());
        self.persist(&state.recipes).await;
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Recipe>> {
        let state = self.state.lock().await;
        Ok(state.recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Recipe>> {
        let state = self.state.lock().await;
        Ok(state.recipes.clone())
    }

    /// Replace the stored recipe matching `entity.id` with the new record.
    ///
    /// An absent id is a no-op, not an error.
    async fn update(&self, entity: &Recipe) -> DomainResult<Recipe> {
        entity.validate()?;

        let mut state = self.state.lock().await;
        match state.recipes.iter_mut().find(|r| r.id == entity.id) {
            Some(stored) => *stored = entity.clone(),
            None => {
                log::debug!("update: recipe {} not found", entity.id);
                return Ok(entity.clone());
            }
        }
        self.persist(&state.recipes).await;
        Ok(entity.clone())
    }

    /// Remove the recipe matching `id`.
    ///
    /// Removing an absent id is a no-op, so repeated deletes are
    /// idempotent.
    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut state = self.state.lock().await;
        let before = state.recipes.len();
        state.recipes.retain(|r| r.id != id);
        if state.recipes.len() == before {
            log::debug!("delete: recipe {} not found", id);
            return Ok(());
        }
        self.persist(&state.recipes).await;
        Ok(())
    }
}

/// Fixed bootstrap recipes installed into an empty collection.
///
/// Ids 1 and 2 are static; the session counter starts above them after
/// seeding.
fn bootstrap_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            name: "Classic Spaghetti Carbonara".to_string(),
            ingredients: vec![
                Ingredient::new("Spaghetti".to_string(), 400.0, "g".to_string()),
                Ingredient::new("Eggs".to_string(), 4.0, "pcs".to_string()),
                Ingredient::new("Pecorino Romano".to_string(), 100.0, "g".to_string()),
                Ingredient::new("Guanciale".to_string(), 200.0, "g".to_string()),
            ],
            instructions:
                "1. Cook pasta\n2. Mix eggs with cheese\n3. Fry guanciale\n4. Combine all ingredients"
                    .to_string(),
            default_servings: 4,
            current_servings: 4,
        },
        Recipe {
            id: 2,
            name: "Chicken Tikka Masala".to_string(),
            ingredients: vec![
                Ingredient::new("Chicken breast".to_string(), 600.0, "g".to_string()),
                Ingredient::new("Yogurt".to_string(), 200.0, "ml".to_string()),
                Ingredient::new("Tomato sauce".to_string(), 400.0, "ml".to_string()),
                Ingredient::new("Spices".to_string(), 30.0, "g".to_string()),
            ],
            instructions: "1. Marinate chicken\n2. Grill chicken\n3. Prepare sauce\n4. Combine"
                .to_string(),
            default_servings: 4,
            current_servings: 4,
        },
    ]
}
