//! Catalog mutation.
//!
//! Every mutation here follows the replace-whole-collection discipline:
//! the caller hands the catalog in, the operation updates it in place
//! (cascading through supported-avatar references and group membership
//! where required), and the caller persists the full collections back.

use super::{Catalog, CommonAvatarGroup, Item};

impl Catalog {
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the item at `path`.
    ///
    /// Cascades: the path is dropped from every other item's
    /// supported-avatar list and from every common-avatar group.
    /// Idempotent: removing an absent path changes nothing.
    pub fn remove_item(&mut self, path: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.item_path != path);
        let removed = self.items.len() != before;

        for item in &mut self.items {
            item.supported_avatars.retain(|avatar| avatar != path);
        }
        for group in &mut self.common_avatars {
            group.avatars.retain(|avatar| avatar != path);
        }

        removed
    }

    /// Rewrites every reference to `old_path` after an item's content folder
    /// has been re-pointed: supported-avatar entries and group memberships.
    /// The item itself is expected to already carry the new path.
    pub fn rewrite_avatar_path(&mut self, old_path: &str, new_path: &str) {
        for item in &mut self.items {
            for avatar in &mut item.supported_avatars {
                if avatar == old_path {
                    *avatar = new_path.to_string();
                }
            }
        }
        for group in &mut self.common_avatars {
            for avatar in &mut group.avatars {
                if avatar == old_path {
                    *avatar = new_path.to_string();
                }
            }
        }
    }

    /// Adds a custom-category label, deduplicating. Returns whether the
    /// label was new.
    pub fn add_custom_category(&mut self, label: &str) -> bool {
        if label.is_empty() || self.custom_categories.iter().any(|known| known == label) {
            return false;
        }
        self.custom_categories.push(label.to_string());
        true
    }

    /// Inserts a common-avatar group, or replaces the membership of an
    /// existing group with the same name.
    pub fn upsert_common_group(&mut self, group: CommonAvatarGroup) {
        match self
            .common_avatars
            .iter_mut()
            .find(|known| known.name == group.name)
        {
            Some(existing) => existing.avatars = group.avatars,
            None => self.common_avatars.push(group),
        }
    }

    pub fn remove_common_group(&mut self, name: &str) -> bool {
        let before = self.common_avatars.len();
        self.common_avatars.retain(|group| group.name != name);
        self.common_avatars.len() != before
    }

    /// One-time migration of legacy supported-avatar references.
    ///
    /// Old catalog files referenced avatars by *title*; the engine requires
    /// paths. Each entry that matches no avatar path but does match an
    /// avatar title is rewritten to that avatar's path. Entries matching
    /// neither are left in place and simply never resolve.
    pub fn normalize_references(&mut self) {
        let by_title: Vec<(String, String)> = self
            .avatars()
            .map(|avatar| (avatar.title.clone(), avatar.item_path.clone()))
            .collect();
        let known_paths: Vec<String> = by_title.iter().map(|(_, path)| path.clone()).collect();

        for item in &mut self.items {
            for entry in &mut item.supported_avatars {
                if known_paths.iter().any(|path| path == entry) {
                    continue;
                }
                if let Some((_, path)) = by_title.iter().find(|(title, _)| title == entry) {
                    log::debug!("rewriting legacy avatar reference {:?} -> {:?}", entry, path);
                    *entry = path.clone();
                }
            }
        }
    }
}
