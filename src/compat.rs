//! Avatar compatibility resolution.
//!
//! Decides whether an item belongs under a given avatar: directly (the
//! avatar's path is listed in the item's supported avatars) or indirectly
//! (both sides are members of a common-avatar group). Indirect matching is
//! deliberately limited to clothing items — other kinds never match via
//! groups, which mirrors how shared-body clothing compatibility works in
//! practice.

use crate::catalog::{CommonAvatarGroup, Item, ItemKind};

/// The result of resolving an item against an avatar path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compatibility {
    /// The avatar path is listed directly in the item's supported avatars.
    pub is_supported: bool,
    /// The item reaches the avatar through a common-avatar group.
    pub is_common: bool,
    /// The first group (in collection order) that established the indirect
    /// match. `None` unless `is_common`.
    pub common_group: Option<String>,
}

impl Compatibility {
    fn unrelated() -> Self {
        Self::default()
    }

    /// Either a direct or an indirect match.
    pub fn is_supported_or_common(&self) -> bool {
        self.is_supported || self.is_common
    }

    /// An indirect match only. Callers render a "via common avatar" note
    /// for these instead of the plain author line.
    pub fn is_only_common(&self) -> bool {
        self.is_common && !self.is_supported
    }
}

/// Resolves an item against an avatar path.
///
/// A direct match always wins: common-avatar matching is not even attempted
/// when the path is listed in the item's supported avatars. Ties between
/// overlapping groups resolve first-found — supported-avatar entries are
/// checked in item order, candidate groups in collection order.
pub fn resolve(
    item: &Item,
    groups: &[CommonAvatarGroup],
    avatar_path: Option<&str>,
) -> Compatibility {
    let Some(path) = avatar_path.filter(|path| !path.is_empty()) else {
        return Compatibility::unrelated();
    };

    if item.supports(path) {
        return Compatibility {
            is_supported: true,
            ..Compatibility::default()
        };
    }

    if item.kind != ItemKind::Clothing {
        return Compatibility::unrelated();
    }

    let candidates: Vec<&CommonAvatarGroup> =
        groups.iter().filter(|group| group.contains(path)).collect();

    for entry in &item.supported_avatars {
        if let Some(group) = candidates.iter().find(|group| group.contains(entry)) {
            return Compatibility {
                is_supported: false,
                is_common: true,
                common_group: Some(group.name.clone()),
            };
        }
    }

    Compatibility::unrelated()
}
