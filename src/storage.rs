//! Catalog persistence.
//!
//! The catalog lives in three JSON files (items, common-avatar groups,
//! custom-category labels), kept wire-compatible with the original data
//! directory. Loading is forgiving: a missing or undecodable file degrades
//! to an empty collection with a warning, never an error — the engine can
//! always start. Saving is strict and reports failures.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::{Catalog, CommonAvatarGroup, Item};
use crate::error::{CatalogError, Result};

pub const ITEMS_FILE: &str = "ItemsData.json";
pub const COMMON_AVATARS_FILE: &str = "CommonAvatar.json";
pub const CUSTOM_CATEGORIES_FILE: &str = "CustomCategory.json";

/// Loads the whole catalog from a data directory and normalizes legacy
/// supported-avatar references.
pub fn load_catalog(dir: &Path) -> Catalog {
    let mut catalog = Catalog::new(
        load_collection(&dir.join(ITEMS_FILE)),
        load_collection(&dir.join(COMMON_AVATARS_FILE)),
        load_collection(&dir.join(CUSTOM_CATEGORIES_FILE)),
    );
    catalog.normalize_references();
    catalog
}

/// Saves the whole catalog into a data directory.
pub fn save_catalog(dir: &Path, catalog: &Catalog) -> Result<()> {
    save_collection(&dir.join(ITEMS_FILE), &catalog.items)?;
    save_collection(&dir.join(COMMON_AVATARS_FILE), &catalog.common_avatars)?;
    save_collection(&dir.join(CUSTOM_CATEGORIES_FILE), &catalog.custom_categories)
}

pub fn load_items(path: &Path) -> Vec<Item> {
    load_collection(path)
}

pub fn save_items(path: &Path, items: &[Item]) -> Result<()> {
    save_collection(path, items)
}

pub fn load_common_avatars(path: &Path) -> Vec<CommonAvatarGroup> {
    load_collection(path)
}

pub fn save_common_avatars(path: &Path, groups: &[CommonAvatarGroup]) -> Result<()> {
    save_collection(path, groups)
}

pub fn load_custom_categories(path: &Path) -> Vec<String> {
    load_collection(path)
}

pub fn save_custom_categories(path: &Path, labels: &[String]) -> Result<()> {
    save_collection(path, labels)
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    if !path.exists() {
        return Vec::new();
    }
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("failed to read {}: {}", path.display(), err);
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(err) => {
            log::warn!("failed to decode {}: {}", path.display(), err);
            Vec::new()
        }
    }
}

fn save_collection<T: Serialize>(path: &Path, values: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(values)
        .map_err(|err| CatalogError::Serialization(err.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::{avatar, clothing};

    #[test]
    fn save_and_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let catalog = Catalog::new(
            vec![
                avatar("Maki", "D:/avatars/maki"),
                clothing("Dress", "D:/items/dress", &["D:/avatars/maki"]),
            ],
            vec![CommonAvatarGroup::new("girls", vec!["D:/avatars/maki".into()])],
            vec!["素材集".into()],
        );

        save_catalog(dir.path(), &catalog).expect("save");
        let loaded = load_catalog(dir.path());
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn load_normalizes_legacy_title_references() {
        let dir = tempfile::tempdir().expect("tempdir");
        let catalog = Catalog::new(
            vec![
                avatar("Maki", "D:/avatars/maki"),
                clothing("Dress", "D:/items/dress", &["Maki"]),
            ],
            Vec::new(),
            Vec::new(),
        );
        save_catalog(dir.path(), &catalog).expect("save");

        let loaded = load_catalog(dir.path());
        let dress = loaded.find_item("D:/items/dress").expect("dress");
        assert_eq!(dress.supported_avatars, vec!["D:/avatars/maki".to_string()]);
    }

    #[test]
    fn missing_or_corrupt_files_load_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = load_catalog(dir.path());
        assert!(loaded.items.is_empty());

        fs::write(dir.path().join(ITEMS_FILE), b"{ not json").expect("write");
        let loaded = load_catalog(dir.path());
        assert!(loaded.items.is_empty());
    }

    #[test]
    fn save_creates_the_data_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("Datas");
        save_items(&nested.join(ITEMS_FILE), &[]).expect("save");
        assert!(nested.join(ITEMS_FILE).exists());
    }
}
