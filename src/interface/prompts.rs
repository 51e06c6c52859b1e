use dialoguer::{Confirm, Input, Password, Select};
use strsim::jaro_winkler;

use crate::constants::{DEFAULT_GUEST_COUNT, FUZZY_MATCH_THRESHOLD, FUZZY_MAX_CANDIDATES};
use crate::error::{CateringError, Result};
use crate::models::Recipe;

/// Prompt for a password without echoing it.
pub fn prompt_password(email: &str) -> Result<String> {
    Ok(Password::new()
        .with_prompt(format!("Password for {}", email))
        .interact()?)
}

/// Prompt for a new account password, asking twice.
pub fn prompt_new_password() -> Result<String> {
    Ok(Password::new()
        .with_prompt("Choose a password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?)
}

/// Prompt for the number of guests to scale for.
pub fn prompt_guest_count() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many guests?")
        .default(DEFAULT_GUEST_COUNT.to_string())
        .interact_text()?;

    let guests: u32 = input
        .trim()
        .parse()
        .map_err(|_| CateringError::InvalidArgument("Invalid number".to_string()))?;

    if guests == 0 {
        return Err(CateringError::InvalidArgument(
            "Guest count must be at least 1".to_string(),
        ));
    }
    Ok(guests)
}

/// Recipes whose names are close to `input`, best first.
pub fn fuzzy_candidates<'a>(recipes: &[&'a Recipe], input: &str) -> Vec<&'a Recipe> {
    let wanted = input.to_lowercase();
    let mut scored: Vec<(&Recipe, f64)> = recipes
        .iter()
        .map(|r| (*r, jaro_winkler(&r.key(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(FUZZY_MAX_CANDIDATES)
        .map(|(r, _)| r)
        .collect()
}

/// Resolve a recipe name typed by the user.
///
/// Exact (case-insensitive) matches win; otherwise close names are offered for
/// confirmation. With no name at all, the user picks from the full list.
pub fn resolve_recipe<'a>(recipes: &[&'a Recipe], input: Option<&str>) -> Result<Option<&'a Recipe>> {
    if recipes.is_empty() {
        return Ok(None);
    }

    let Some(input) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
        let selection = Select::new()
            .with_prompt("Which recipe?")
            .items(&names)
            .default(0)
            .interact()?;
        return Ok(Some(recipes[selection]));
    };

    let wanted = input.to_lowercase();
    if let Some(exact) = recipes.iter().find(|r| r.key() == wanted) {
        return Ok(Some(*exact));
    }

    let candidates = fuzzy_candidates(recipes, input);
    match candidates.as_slice() {
        [] => {
            println!("No recipe found matching '{}'", input);
            Ok(None)
        }
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only.name))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(*only))
        }
        many => {
            let mut options: Vec<String> = many.iter().map(|r| r.name.clone()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;
            Ok(many.get(selection).copied())
        }
    }
}
