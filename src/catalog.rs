//! The in-memory asset catalog.
//!
//! A [`Catalog`] is a plain value bundling the three persistent collections:
//! items, common-avatar groups, and user-defined custom-category labels.
//! Every engine function takes it explicitly; callers own the single
//! long-lived instance and persist the whole collection back after each
//! mutation.

mod common;
mod item;
mod mutate;

pub use common::CommonAvatarGroup;
pub use item::{Author, Item, ItemKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub common_avatars: Vec<CommonAvatarGroup>,
    pub custom_categories: Vec<String>,
}

impl Catalog {
    pub fn new(
        items: Vec<Item>,
        common_avatars: Vec<CommonAvatarGroup>,
        custom_categories: Vec<String>,
    ) -> Self {
        Self {
            items,
            common_avatars,
            custom_categories,
        }
    }

    /// Iterates the avatar items, in catalog order.
    pub fn avatars(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_avatar())
    }

    /// Resolves an avatar item path to its title.
    ///
    /// Only avatar items participate; a dangling path (or an empty one)
    /// resolves to `None` rather than an error.
    pub fn resolve_avatar_title(&self, path: &str) -> Option<&str> {
        if path.is_empty() {
            return None;
        }
        self.avatars()
            .find(|avatar| avatar.item_path == path)
            .map(|avatar| avatar.title.as_str())
    }

    pub fn find_item(&self, path: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.item_path == path)
    }
}
