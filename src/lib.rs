pub mod access;
pub mod cli;
pub mod constants;
pub mod costing;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use error::{CateringError, Result};
pub use models::{Ingredient, Menu, Recipe};
