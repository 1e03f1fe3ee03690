//! Crafting Recipe Definitions
//!
//! Defines the data structures for crafting recipes, including TOML
//! deserialization (Raw*) and resolved versions with item kinds checked.

use serde::Deserialize;

use crate::error::RecipeError;
use crate::item::ItemKind;

/// Most ingredients a single recipe may list
pub const MAX_INGREDIENTS: usize = 3;

// ============================================================================
// Raw TOML Structures
// ============================================================================

fn default_count() -> u32 {
    1
}

/// Raw item/count entry from TOML, used for both ingredients and results
#[derive(Debug, Clone, Deserialize)]
pub struct RawStack {
    pub item: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

/// Raw recipe definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipeDefinition {
    pub name: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<RawStack>,
    pub result: RawStack,
}

/// Top level of a recipe file: an ordered list of `[[recipe]]` tables
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipeFile {
    #[serde(default, rename = "recipe")]
    pub recipes: Vec<RawRecipeDefinition>,
}

// ============================================================================
// Resolved Structures
// ============================================================================

/// Ingredient in a resolved recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingredient {
    pub kind: ItemKind,
    pub count: u32,
}

/// Result from crafting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CraftResult {
    pub kind: ItemKind,
    pub count: u32,
}

/// A fully resolved recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub result: CraftResult,
}

fn resolve_stack(recipe: &str, raw: &RawStack) -> Result<(ItemKind, u32), RecipeError> {
    let Some(kind) = ItemKind::from_name(&raw.item) else {
        return Err(RecipeError::UnknownItem {
            recipe: recipe.to_string(),
            item: raw.item.clone(),
        });
    };
    if raw.count == 0 {
        return Err(RecipeError::ZeroCount {
            recipe: recipe.to_string(),
            item: raw.item.clone(),
        });
    }
    Ok((kind, raw.count))
}

impl Recipe {
    /// Create a resolved Recipe from raw TOML data.
    ///
    /// The name defaults to the result item's name.
    pub fn from_raw(raw: &RawRecipeDefinition) -> Result<Self, RecipeError> {
        let name = match &raw.name {
            Some(name) => name.clone(),
            None => raw.result.item.clone(),
        };

        if raw.ingredients.is_empty() || raw.ingredients.len() > MAX_INGREDIENTS {
            return Err(RecipeError::IngredientCount {
                recipe: name,
                count: raw.ingredients.len(),
            });
        }

        let (kind, count) = resolve_stack(&name, &raw.result)?;
        let result = CraftResult { kind, count };

        let mut ingredients = Vec::with_capacity(raw.ingredients.len());
        for raw_ingredient in &raw.ingredients {
            let (kind, count) = resolve_stack(&name, raw_ingredient)?;
            ingredients.push(Ingredient { kind, count });
        }

        Ok(Self {
            name,
            ingredients,
            result,
        })
    }
}
