use rust_decimal::Decimal;

use crate::costing::scaler::{round_money, ScaledIngredient};
use crate::error::{CateringError, Result};
use crate::models::Recipe;

/// Total cost of a scaled ingredient list.
pub fn scaled_total_cost(scaled: &[ScaledIngredient]) -> Result<Decimal> {
    scaled
        .iter()
        .try_fold(Decimal::ZERO, |total, i| total.checked_add(i.cost))
        .ok_or_else(|| CateringError::InvalidArgument("scaled total cost overflows".to_string()))
}

/// Ingredient cost of the recipe at its base portion size.
pub fn recipe_base_cost(recipe: &Recipe) -> Result<Decimal> {
    recipe.base_cost().ok_or_else(|| {
        CateringError::InvalidArgument(format!("base cost of '{}' overflows", recipe.name))
    })
}

/// Ingredient cost of one serving, rounded like scaled costs.
pub fn cost_per_guest(recipe: &Recipe) -> Result<Decimal> {
    if recipe.portion_size == 0 {
        return Err(CateringError::InvalidArgument(format!(
            "recipe '{}' has a portion size of zero",
            recipe.name
        )));
    }
    Ok(round_money(recipe_base_cost(recipe)? / Decimal::from(recipe.portion_size)))
}
