//! Crafting transaction: check every ingredient, consume them all, then
//! produce the result.

use tracing::debug;

use super::definition::Recipe;
use crate::inventory::Inventory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraftOutcome {
    /// Ingredients consumed and result added. `expanded_to` is the new
    /// capacity when storing the result grew the inventory.
    Crafted { expanded_to: Option<usize> },
    /// Some ingredient is missing or short; nothing changed.
    Insufficient,
}

/// Whether the inventory holds every ingredient of `recipe` in full
pub fn can_craft(inventory: &Inventory, recipe: &Recipe) -> bool {
    recipe
        .ingredients
        .iter()
        .all(|ingredient| inventory.quantity(ingredient.kind) >= ingredient.count)
}

/// Craft `recipe` once against `inventory`
pub fn craft(inventory: &mut Inventory, recipe: &Recipe) -> CraftOutcome {
    if !can_craft(inventory, recipe) {
        debug!("Missing ingredients for {}", recipe.name);
        return CraftOutcome::Insufficient;
    }

    // All checks passed - consume ingredients
    for ingredient in &recipe.ingredients {
        inventory.remove(ingredient.kind, ingredient.count);
    }

    let expanded_to = inventory.add(recipe.result.kind, recipe.result.count);

    debug!(
        "Crafted {} (gained {} {})",
        recipe.name, recipe.result.count, recipe.result.kind
    );

    CraftOutcome::Crafted { expanded_to }
}
