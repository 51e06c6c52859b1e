use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::constants::{DEFAULT_PORTION_SIZE, PLACEHOLDER_COST_CENTS, PLACEHOLDER_UNIT};
use crate::error::{CateringError, Result};
use crate::models::{Ingredient, Menu, Recipe};

/// A recipe being put together before it is saved onto a menu.
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    pub name: String,
    pub portion_size: u32,
    pub ingredients: Vec<Ingredient>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            portion_size: DEFAULT_PORTION_SIZE,
            ingredients: Vec::new(),
        }
    }
}

impl RecipeDraft {
    /// Append a numbered placeholder line for the user to fill in.
    pub fn add_placeholder_ingredient(&mut self) -> &mut Ingredient {
        let n = self.ingredients.len() + 1;
        self.ingredients.push(Ingredient::new(
            Uuid::new_v4().to_string(),
            format!("Ingredient {}", n),
            PLACEHOLDER_UNIT,
            Decimal::ONE,
            Decimal::new(PLACEHOLDER_COST_CENTS, 2),
        ));
        let last = self.ingredients.len() - 1;
        &mut self.ingredients[last]
    }
}

/// Menus and the recipes they contain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuBook {
    menus: Vec<Menu>,
}

impl MenuBook {
    pub fn new(menus: Vec<Menu>) -> Self {
        Self { menus }
    }

    /// Create an empty menu. Blank names are ignored.
    pub fn add_menu(&mut self, name: &str, estimated_price: Decimal) -> Option<&Menu> {
        if name.trim().is_empty() {
            debug!("ignoring menu with blank name");
            return None;
        }
        let menu = Menu {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            dishes: Vec::new(),
            estimated_price,
        };
        info!(menu = %menu.name, "added menu");
        self.menus.push(menu);
        self.menus.last()
    }

    /// Save a drafted recipe onto a menu.
    pub fn add_recipe(&mut self, menu_id: &str, draft: RecipeDraft) -> Result<&Recipe> {
        if draft.portion_size == 0 {
            return Err(CateringError::InvalidArgument(
                "portion size must be at least 1".to_string(),
            ));
        }
        if let Some(bad) = draft.ingredients.iter().find(|i| !i.is_valid()) {
            return Err(CateringError::InvalidArgument(format!(
                "ingredient '{}' has a negative quantity or cost",
                bad.name
            )));
        }

        let menu = self
            .menus
            .iter_mut()
            .find(|m| m.id == menu_id)
            .ok_or_else(|| CateringError::NotFound(format!("menu {}", menu_id)))?;

        let recipe = Recipe {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            portion_size: draft.portion_size,
            ingredients: draft.ingredients,
        };
        info!(menu = %menu.name, recipe = %recipe.name, "added recipe");
        menu.dishes.push(recipe);
        let last = menu.dishes.len() - 1;
        Ok(&menu.dishes[last])
    }

    pub fn get(&self, id: &str) -> Option<&Menu> {
        self.menus.iter().find(|m| m.id == id)
    }

    /// The requested menu, falling back to the first one.
    pub fn selected(&self, id: Option<&str>) -> Option<&Menu> {
        id.and_then(|id| self.get(id)).or_else(|| self.menus.first())
    }

    pub fn all(&self) -> &[Menu] {
        &self.menus
    }

    /// Every recipe across all menus, in menu order.
    pub fn all_recipes(&self) -> Vec<&Recipe> {
        self.menus.iter().flat_map(|m| m.dishes.iter()).collect()
    }

    /// Case-insensitive exact recipe lookup.
    pub fn find_recipe_by_name(&self, name: &str) -> Option<&Recipe> {
        let key = name.to_lowercase();
        self.menus
            .iter()
            .flat_map(|m| m.dishes.iter())
            .find(|r| r.key() == key)
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}
