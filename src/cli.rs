use clap::{Parser, Subcommand};

use crate::error::{Result, WheelError};
use crate::models::MealCategory;

/// Wheel of Meals — spin a wheel to pick a dish, then ask an AI for a
/// nutrition rating.
#[derive(Parser, Debug)]
#[command(name = "wheel_of_meals")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a custom menu JSON file (defaults to the built-in menu).
    #[arg(short, long)]
    pub menu: Option<String>,

    /// Seed for deterministic wheel sampling and spins.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play rounds of the wheel interactively.
    Play,

    /// List the menu catalog.
    Menu {
        /// Show only one category: main-course, snack or beverage.
        #[arg(long)]
        category: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play
    }
}

/// Parse a CLI category name.
pub fn parse_category(value: &str) -> Result<MealCategory> {
    match value.to_lowercase().as_str() {
        "main-course" | "main" => Ok(MealCategory::MainCourse),
        "snack" => Ok(MealCategory::Snack),
        "beverage" | "drink" => Ok(MealCategory::Beverage),
        other => Err(WheelError::InvalidInput(format!(
            "unknown category '{other}' (expected main-course, snack or beverage)"
        ))),
    }
}
