use serde::{Deserialize, Serialize};

/// Coarse meal category used for wheel filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealCategory {
    #[serde(rename = "Main Course")]
    MainCourse,
    Snack,
    Beverage,
}

impl MealCategory {
    pub const ALL: [MealCategory; 3] = [
        MealCategory::MainCourse,
        MealCategory::Snack,
        MealCategory::Beverage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealCategory::MainCourse => "Main Course",
            MealCategory::Snack => "Snack",
            MealCategory::Beverage => "Beverage",
        }
    }
}

impl std::fmt::Display for MealCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuisineType {
    Thai,
    International,
    Fusion,
}

/// A category filter, where `All` keeps the full catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(MealCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: MealCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Menus",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

/// A single dish on the menu.
///
/// Immutable once loaded; the catalog owns these for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,

    /// Primary display name (Thai in the built-in catalog).
    pub name: String,

    /// Optional alternate label (English in the built-in catalog).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_name: Option<String>,

    pub category: MealCategory,

    pub cuisine: CuisineType,

    #[serde(default)]
    pub is_healthy_option: bool,

    pub approx_calories: u32,
}

impl MenuItem {
    /// Display label combining the primary and secondary names.
    pub fn display_label(&self) -> String {
        match &self.secondary_name {
            Some(alt) => format!("{} ({})", self.name, alt),
            None => self.name.clone(),
        }
    }
}

impl PartialEq for MenuItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MenuItem {}

impl std::hash::Hash for MenuItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
