//! Recipe Entity
//!
//! A stored recipe: ingredient list with base quantities plus the serving
//! counts used to derive display quantities.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::ingredient::Ingredient;

/// A recipe as it lives in the collection
///
/// Ingredient amounts are the base quantities for `default_servings`
/// portions; scaled values are derived at render time and never written
/// back. Serialized field names are camelCase to match the persisted
/// layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier across the collection
    pub id: u32,
    pub name: String,
    /// Ordered ingredient list, base amounts
    pub ingredients: Vec<Ingredient>,
    /// Free-form preparation text, embedded newlines allowed
    pub instructions: String,
    /// Baseline portion count the stored amounts are sized for; > 0 always
    pub default_servings: u32,
    /// User-chosen display portion count; >= 1 enforced at the boundary
    pub current_servings: u32,
}

impl Recipe {
    /// Check the record against the store invariants.
    ///
    /// Runs on every create/update so nothing the store writes can violate
    /// the division basis. NaN amounts fail the `>= 0` comparison and are
    /// rejected with the negatives.
    pub fn validate(&self) -> DomainResult<()> {
        if self.default_servings < 1 {
            return Err(DomainError::InvalidInput(
                "defaultServings must be at least 1".to_string(),
            ));
        }
        if self.current_servings < 1 {
            return Err(DomainError::InvalidInput(
                "currentServings must be at least 1".to_string(),
            ));
        }
        if let Some(bad) = self.ingredients.iter().find(|i| !(i.amount >= 0.0)) {
            return Err(DomainError::InvalidInput(format!(
                "ingredient '{}' has an invalid amount",
                bad.name
            )));
        }
        Ok(())
    }
}

impl Entity for Recipe {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Dialog working copy: a recipe minus its identity
///
/// One draft serves both the add and edit flows; whether a save creates or
/// replaces is decided by the presence of an editing target, not by the
/// draft itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
    pub default_servings: u32,
    pub current_servings: u32,
}

impl Default for RecipeDraft {
    /// The empty dialog: no content, four servings either way
    fn default() -> Self {
        Self {
            name: String::new(),
            ingredients: Vec::new(),
            instructions: String::new(),
            default_servings: 4,
            current_servings: 4,
        }
    }
}

impl RecipeDraft {
    /// Materialize the draft as a stored recipe under `id`
    pub fn into_recipe(self, id: u32) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            instructions: self.instructions,
            default_servings: self.default_servings,
            current_servings: self.current_servings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe {
            id: 7,
            name: "Pancakes".to_string(),
            ingredients: vec![Ingredient::new("Flour".to_string(), 250.0, "g".to_string())],
            instructions: "Mix and fry".to_string(),
            default_servings: 4,
            current_servings: 4,
        }
    }

    #[test]
    fn test_draft_defaults() {
        let draft = RecipeDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.ingredients.is_empty());
        assert_eq!(draft.default_servings, 4);
        assert_eq!(draft.current_servings, 4);
    }

    #[test]
    fn test_draft_into_recipe_assigns_id() {
        let draft = RecipeDraft {
            name: "Soup".to_string(),
            ..RecipeDraft::default()
        };
        let recipe = draft.into_recipe(42);
        assert_eq!(recipe.id(), 42);
        assert_eq!(recipe.name, "Soup");
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(recipe().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_servings() {
        let mut r = recipe();
        r.default_servings = 0;
        assert!(matches!(r.validate(), Err(DomainError::InvalidInput(_))));

        let mut r = recipe();
        r.current_servings = 0;
        assert!(matches!(r.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_bad_amounts() {
        let mut r = recipe();
        r.ingredients[0].amount = -1.0;
        assert!(matches!(r.validate(), Err(DomainError::InvalidInput(_))));

        let mut r = recipe();
        r.ingredients[0].amount = f64::NAN;
        assert!(matches!(r.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_serialized_layout_is_camel_case() {
        let json = serde_json::to_string(&recipe()).unwrap();
        assert!(json.contains("\"defaultServings\":4"));
        assert!(json.contains("\"currentServings\":4"));
        assert!(!json.contains("default_servings"));
    }
}
