use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::constants::SCALE_DECIMALS;
use crate::error::{CateringError, Result};
use crate::models::{Ingredient, Menu, Recipe};

/// An ingredient line recomputed for a target guest count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaledIngredient {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub quantity: Decimal,
    pub cost: Decimal,
}

/// Round half-up to the scaler's precision. Values are never negative here.
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

fn scale_value(value: Decimal, target: Decimal, portion: Decimal) -> Option<Decimal> {
    // Multiply before dividing so the ratio itself is never truncated.
    value
        .checked_mul(target)
        .and_then(|v| v.checked_div(portion))
        .map(round_money)
}

fn scale_ingredient(
    ingredient: &Ingredient,
    target: Decimal,
    portion: Decimal,
) -> Result<ScaledIngredient> {
    let overflow = |field: &str| {
        CateringError::InvalidArgument(format!(
            "{} of '{}' is too large to scale to {} guests",
            field, ingredient.name, target
        ))
    };

    Ok(ScaledIngredient {
        id: ingredient.id.clone(),
        name: ingredient.name.clone(),
        unit: ingredient.unit.clone(),
        quantity: scale_value(ingredient.quantity, target, portion).ok_or_else(|| overflow("quantity"))?,
        cost: scale_value(ingredient.cost, target, portion).ok_or_else(|| overflow("cost"))?,
    })
}

/// Scale every ingredient of `recipe` from its portion size to `target_guests`.
///
/// Order is preserved and the recipe is left untouched. Quantity and cost are
/// each rounded to two places independently.
///
/// Returns `InvalidArgument` when either the portion size or the guest count is
/// zero, or when a scaled value does not fit in a `Decimal`.
pub fn scale(recipe: &Recipe, target_guests: u32) -> Result<Vec<ScaledIngredient>> {
    if recipe.portion_size == 0 {
        return Err(CateringError::InvalidArgument(format!(
            "recipe '{}' has a portion size of zero",
            recipe.name
        )));
    }
    if target_guests == 0 {
        return Err(CateringError::InvalidArgument(
            "guest count must be at least 1".to_string(),
        ));
    }

    let target = Decimal::from(target_guests);
    let portion = Decimal::from(recipe.portion_size);

    recipe
        .ingredients
        .iter()
        .map(|i| scale_ingredient(i, target, portion))
        .collect()
}

/// Like [`scale`], but a missing recipe simply has nothing to scale.
pub fn scale_selected(recipe: Option<&Recipe>, target_guests: u32) -> Result<Vec<ScaledIngredient>> {
    match recipe {
        Some(recipe) => scale(recipe, target_guests),
        None => Ok(Vec::new()),
    }
}

/// Scale the first dish of a menu, which is what the menu screen previews.
pub fn scale_menu_lead_dish(menu: &Menu, target_guests: u32) -> Result<Vec<ScaledIngredient>> {
    scale_selected(menu.lead_dish(), target_guests)
}
