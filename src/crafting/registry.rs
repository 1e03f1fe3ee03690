//! Crafting Recipe Registry
//!
//! Loads the built-in recipe table and resolves craft targets to recipes.

use std::collections::HashSet;
use tracing::{debug, info};

use super::definition::{RawRecipeFile, Recipe};
use crate::error::RecipeError;
use crate::item::ItemKind;

/// Recipe table compiled into the binary
const BUILTIN_RECIPES: &str = include_str!("../../data/recipes.toml");

/// Why a craft target did not resolve to a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unresolved {
    /// The name is not an item at all
    UnknownItem,
    /// The item exists but nothing crafts it
    NoRecipe(ItemKind),
}

/// Registry for all recipe definitions, in declaration order
#[derive(Debug, Clone)]
pub struct CraftingRegistry {
    recipes: Vec<Recipe>,
}

impl CraftingRegistry {
    /// Build the registry from the recipe table shipped with the crate
    pub fn builtin() -> Result<Self, RecipeError> {
        Self::from_toml_str(BUILTIN_RECIPES)
    }

    /// Parse and validate a recipe table
    pub fn from_toml_str(content: &str) -> Result<Self, RecipeError> {
        let file: RawRecipeFile = toml::from_str(content)?;

        let mut recipes = Vec::with_capacity(file.recipes.len());
        let mut outputs = HashSet::new();

        for raw in &file.recipes {
            let recipe = Recipe::from_raw(raw)?;
            if !outputs.insert(recipe.result.kind) {
                return Err(RecipeError::DuplicateOutput(recipe.result.kind));
            }
            debug!(
                "Loaded recipe: {} - {} ingredients -> {} {}",
                recipe.name,
                recipe.ingredients.len(),
                recipe.result.count,
                recipe.result.kind
            );
            recipes.push(recipe);
        }

        info!("Loaded {} recipe definitions", recipes.len());

        Ok(Self { recipes })
    }

    /// The recipe producing `kind`, if any
    pub fn for_output(&self, kind: ItemKind) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.result.kind == kind)
    }

    /// Resolve a raw item name from a craft command
    pub fn resolve(&self, item_name: &str) -> Result<&Recipe, Unresolved> {
        let Some(kind) = ItemKind::from_name(item_name) else {
            return Err(Unresolved::UnknownItem);
        };
        self.for_output(kind).ok_or(Unresolved::NoRecipe(kind))
    }

    /// Get a recipe by name
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Get all recipes
    pub fn all(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Get the number of loaded recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
