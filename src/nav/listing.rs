//! Render-model queries.
//!
//! Each function computes, from (catalog, cursor), exactly what the
//! presentation layer should show for the current position. Nothing is
//! cached: after a catalog mutation the caller simply asks again.

use crate::catalog::{Author, Catalog, Item, ItemKind};
use crate::classify::{FileCategory, FileData};
use crate::compat::{resolve, Compatibility};
use crate::lang::Language;
use crate::search::{search_files, search_items};

use super::cursor::{Cursor, Lens, NavState, WILDCARD_AVATAR};

/// Which attribute to order item lists by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    Author,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEntry {
    pub author: Author,
    pub item_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    pub kind: ItemKind,
    /// Set when the entry is a user-defined custom category.
    pub custom_label: Option<String>,
    pub item_count: usize,
}

/// An item visible under the current lens, with its compatibility against
/// the lens avatar (so the caller can render a "via common avatar" note
/// for indirect matches).
#[derive(Debug, Clone, PartialEq)]
pub struct ItemEntry<'a> {
    pub item: &'a Item,
    pub compatibility: Compatibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCategoryEntry {
    pub category: FileCategory,
    pub file_count: usize,
}

/// What the search overlay currently lists.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchListing<'a> {
    Items(Vec<&'a Item>),
    Files(Vec<&'a FileData>),
}

/// The avatar items, for the avatar side panel.
pub fn list_avatars(catalog: &Catalog, sort: SortKey) -> Vec<&Item> {
    let mut avatars: Vec<&Item> = catalog.avatars().collect();
    sort_items(&mut avatars, sort);
    avatars
}

/// Distinct authors with their item counts, sorted by name. The thumbnail
/// comes from the author's first item in catalog order.
pub fn list_authors(catalog: &Catalog) -> Vec<AuthorEntry> {
    let mut entries: Vec<AuthorEntry> = Vec::new();
    for item in &catalog.items {
        match entries
            .iter_mut()
            .find(|entry| entry.author.name == item.author_name)
        {
            Some(entry) => entry.item_count += 1,
            None => entries.push(AuthorEntry {
                author: Author {
                    name: item.author_name.clone(),
                    thumbnail_path: item.author_thumbnail_path.clone(),
                },
                item_count: 1,
            }),
        }
    }
    entries.sort_by(|a, b| a.author.name.cmp(&b.author.name));
    entries
}

/// The categories to offer at the current position: the fixed kinds (minus
/// `Custom`/`Unknown`), then the user-defined custom categories. Under an
/// avatar or author lens, counts are restricted to the items visible
/// through that lens and empty categories are omitted; at the root the
/// full list is returned.
pub fn list_categories(catalog: &Catalog, cursor: &Cursor) -> Vec<CategoryEntry> {
    let lensed = matches!(cursor.lens(), Some(Lens::Avatar { .. } | Lens::Author(_)));
    let mut entries = Vec::new();

    for kind in ItemKind::CATEGORIES {
        let item_count = catalog
            .items
            .iter()
            .filter(|item| item.kind == kind && visible_under_lens(catalog, cursor, item))
            .count();
        if lensed && item_count == 0 {
            continue;
        }
        entries.push(CategoryEntry {
            kind,
            custom_label: None,
            item_count,
        });
    }

    for label in &catalog.custom_categories {
        let item_count = catalog
            .items
            .iter()
            .filter(|item| {
                item.custom_category == *label && visible_under_lens(catalog, cursor, item)
            })
            .count();
        if lensed && item_count == 0 {
            continue;
        }
        entries.push(CategoryEntry {
            kind: ItemKind::Custom,
            custom_label: Some(label.clone()),
            item_count,
        });
    }

    entries
}

/// The items under the selected category, filtered by the active lens and
/// annotated with their compatibility. Empty unless a category is selected.
pub fn list_items<'a>(catalog: &'a Catalog, cursor: &Cursor, sort: SortKey) -> Vec<ItemEntry<'a>> {
    let Some(selection) = cursor.category() else {
        return Vec::new();
    };

    let mut entries: Vec<ItemEntry<'a>> = catalog
        .items
        .iter()
        .filter(|item| {
            item.kind == selection.kind
                && (item.kind != ItemKind::Custom
                    || selection.custom_label.as_deref() == Some(item.custom_category.as_str()))
                && visible_under_lens(catalog, cursor, item)
        })
        .map(|item| ItemEntry {
            compatibility: resolve(item, &catalog.common_avatars, cursor.lens_avatar_path()),
            item,
        })
        .collect();

    entries.sort_by(|a, b| match sort {
        SortKey::Title => a.item.title.cmp(&b.item.title),
        SortKey::Author => a.item.author_name.cmp(&b.item.author_name),
    });
    entries
}

/// The non-empty buckets of the entered item's classification snapshot.
pub fn list_item_categories(cursor: &Cursor) -> Vec<ItemCategoryEntry> {
    let Some(folder) = cursor.folder() else {
        return Vec::new();
    };
    FileCategory::ALL
        .iter()
        .map(|category| ItemCategoryEntry {
            category: *category,
            file_count: folder.count(*category),
        })
        .filter(|entry| entry.file_count > 0)
        .collect()
}

/// The files of the selected bucket, ordered by file name.
pub fn list_files(cursor: &Cursor) -> &[FileData] {
    match (cursor.folder(), cursor.item_category()) {
        (Some(folder), Some(category)) => folder.files(category),
        _ => &[],
    }
}

/// What the search overlay lists at the current position: file search when
/// the cursor is inside an item's folders, item search otherwise. `None`
/// when search mode is inactive.
pub fn list_search_results<'a>(
    catalog: &'a Catalog,
    cursor: &'a Cursor,
    lang: Language,
) -> Option<SearchListing<'a>> {
    let filter = cursor.search()?;

    let listing = match cursor.state() {
        NavState::ItemCategoryChosen => {
            let files = list_files(cursor).iter().collect();
            SearchListing::Files(search_files(files, filter))
        }
        NavState::ItemChosen => {
            let files = cursor.folder().map(|folder| folder.all_files()).unwrap_or_default();
            SearchListing::Files(search_files(files, filter))
        }
        _ => SearchListing::Items(search_items(catalog, filter, lang)),
    };
    Some(listing)
}

fn visible_under_lens(catalog: &Catalog, cursor: &Cursor, item: &Item) -> bool {
    match cursor.lens() {
        Some(Lens::Author(author)) => item.author_name == author.name,
        Some(Lens::Avatar { title, path }) => {
            title == WILDCARD_AVATAR
                || item.is_universal()
                || resolve(item, &catalog.common_avatars, path.as_deref())
                    .is_supported_or_common()
        }
        _ => true,
    }
}

fn sort_items(items: &mut [&Item], sort: SortKey) {
    items.sort_by(|a, b| match sort {
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::Author => a.author_name.cmp(&b.author_name),
    });
}
