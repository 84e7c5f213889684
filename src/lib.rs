pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod game;
pub mod interface;
pub mod models;
pub mod wheel;

pub use error::{Result, WheelError};
pub use models::{HealthAnalysis, MealCategory, MenuItem};
