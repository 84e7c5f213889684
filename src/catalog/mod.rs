mod data;
mod persistence;

pub use data::builtin_menu;
pub use persistence::{load_menu, save_menu};

use crate::models::{CategoryFilter, MenuItem};

/// Filter the catalog down to one category.
///
/// Pure function: stable relative order, `All` returns everything.
pub fn filter_by_category(items: &[MenuItem], filter: CategoryFilter) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| filter.matches(item.category))
        .cloned()
        .collect()
}
