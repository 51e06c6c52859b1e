pub mod prompts;
pub mod render;

pub use prompts::{
    fuzzy_candidates, prompt_guest_count, prompt_new_password, prompt_password, resolve_recipe,
};
pub use render::{
    display_catalog, display_dashboard, display_events, display_menus, display_notifications,
    display_purchasing, display_report, display_reservations, display_scaled_recipe,
    display_users,
};
