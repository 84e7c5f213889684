use dialoguer::{Confirm, Select};

use crate::error::Result;
use crate::models::{CategoryFilter, MealCategory};

/// Prompt for the wheel's category filter.
pub fn prompt_category_filter() -> Result<CategoryFilter> {
    let mut labels = vec!["All Menus".to_string()];
    labels.extend(MealCategory::ALL.iter().map(|c| c.label().to_string()));

    let choice = Select::new()
        .with_prompt("Which menus should go on the wheel?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => CategoryFilter::All,
        i => CategoryFilter::Only(MealCategory::ALL[i - 1]),
    })
}

/// Ask whether to spin now.
pub fn prompt_spin() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt("Spin the wheel?")
        .default(true)
        .interact()?)
}

/// Ask whether to play another round.
pub fn prompt_play_again() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt("Spin again?")
        .default(true)
        .interact()?)
}
