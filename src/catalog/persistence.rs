use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::MenuItem;

/// Load a menu from a JSON file.
///
/// Deduplicates by id (last occurrence wins) and keeps id order stable.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;

    let mut seen: BTreeMap<u32, MenuItem> = BTreeMap::new();
    for item in items {
        seen.insert(item.id, item);
    }

    Ok(seen.into_values().collect())
}

/// Save a menu to a JSON file, deduplicating by id first.
pub fn save_menu<P: AsRef<Path>>(path: P, items: &[MenuItem]) -> Result<()> {
    let mut seen: BTreeMap<u32, &MenuItem> = BTreeMap::new();
    for item in items {
        seen.insert(item.id, item);
    }

    let deduped: Vec<&MenuItem> = seen.into_values().collect();
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"id": 1, "name": "ผัดไทย", "secondary_name": "Pad Thai", "category": "Main Course", "cuisine": "Thai", "is_healthy_option": false, "approx_calories": 600}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let menu = load_menu(file.path()).unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].name, "ผัดไทย");

        let out_file = NamedTempFile::new().unwrap();
        save_menu(out_file.path(), &menu).unwrap();

        let reloaded = load_menu(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].secondary_name.as_deref(), Some("Pad Thai"));
    }

    #[test]
    fn test_deduplication_by_id() {
        let json = r#"[
            {"id": 7, "name": "first", "category": "Snack", "cuisine": "Thai", "approx_calories": 100},
            {"id": 7, "name": "second", "category": "Snack", "cuisine": "Thai", "approx_calories": 120}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let menu = load_menu(file.path()).unwrap();
        assert_eq!(menu.len(), 1);
        // Last occurrence wins
        assert_eq!(menu[0].name, "second");
        assert_eq!(menu[0].approx_calories, 120);
    }
}
