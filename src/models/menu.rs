use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a recipe.
///
/// `quantity` and `cost` are expressed for the owning recipe's base portion size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub quantity: Decimal,
    pub cost: Decimal,
}

impl Ingredient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        quantity: Decimal,
        cost: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            quantity,
            cost,
        }
    }

    /// Quantity and cost must not be negative.
    pub fn is_valid(&self) -> bool {
        !self.quantity.is_sign_negative() && !self.cost.is_sign_negative()
    }
}

/// A dish whose ingredient list was written for `portion_size` guests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub portion_size: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Sum of ingredient costs at the base portion size; `None` on overflow.
    pub fn base_cost(&self) -> Option<Decimal> {
        self.ingredients
            .iter()
            .try_fold(Decimal::ZERO, |total, i| total.checked_add(i.cost))
    }

    /// Positive portion size and every ingredient valid.
    pub fn is_valid(&self) -> bool {
        self.portion_size > 0 && self.ingredients.iter().all(Ingredient::is_valid)
    }

    /// Case-insensitive name key.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A priced grouping of recipes that can be assigned to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub dishes: Vec<Recipe>,
    /// Price per guest.
    pub estimated_price: Decimal,
}

impl Menu {
    /// The dish the scaling panel works on.
    pub fn lead_dish(&self) -> Option<&Recipe> {
        self.dishes.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "rec-1".to_string(),
            name: "Grilled Salmon".to_string(),
            portion_size: 10,
            ingredients: vec![
                Ingredient::new("ing-1", "Salmon fillet", "kg", Decimal::new(2, 0), Decimal::new(15, 0)),
                Ingredient::new("ing-2", "Asparagus", "kg", Decimal::new(15, 1), Decimal::new(8, 0)),
            ],
        }
    }

    #[test]
    fn test_base_cost() {
        assert_eq!(sample_recipe().base_cost(), Some(Decimal::new(23, 0)));
    }

    #[test]
    fn test_is_valid() {
        let recipe = sample_recipe();
        assert!(recipe.is_valid());

        let mut zero_portion = sample_recipe();
        zero_portion.portion_size = 0;
        assert!(!zero_portion.is_valid());

        let mut negative_cost = sample_recipe();
        negative_cost.ingredients[0].cost = Decimal::new(-1, 0);
        assert!(!negative_cost.is_valid());
    }

    #[test]
    fn test_lead_dish() {
        let mut menu = Menu {
            id: "menu-1".to_string(),
            name: "Mediterranean".to_string(),
            dishes: vec![],
            estimated_price: Decimal::new(52, 0),
        };
        assert!(menu.lead_dish().is_none());

        menu.dishes.push(sample_recipe());
        assert_eq!(menu.lead_dish().map(|r| r.id.as_str()), Some("rec-1"));
    }
}
