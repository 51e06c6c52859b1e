pub mod scaler;
pub mod totals;

pub use scaler::{round_money, scale, scale_menu_lead_dish, scale_selected, ScaledIngredient};
pub use totals::{cost_per_guest, recipe_base_cost, scaled_total_cost};
