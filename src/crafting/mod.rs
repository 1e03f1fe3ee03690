//! Crafting System
//!
//! Provides recipe definitions, the recipe registry and the craft transaction.

pub mod definition;
pub mod engine;
pub mod registry;

pub use definition::{CraftResult, Ingredient, Recipe};
pub use engine::{CraftOutcome, can_craft, craft};
pub use registry::{CraftingRegistry, Unresolved};
