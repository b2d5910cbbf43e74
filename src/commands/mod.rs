//! Commands Layer
//!
//! Gesture-level handlers that bridge the UI to the recipe store.

mod recipe_cmd;

pub use recipe_cmd::*;
