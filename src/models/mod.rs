mod analysis;
mod menu;

pub use analysis::{HealthAnalysis, SCORE_UNAVAILABLE, SCORE_UNCONFIGURED};
pub use menu::{CategoryFilter, CuisineType, MealCategory, MenuItem};
