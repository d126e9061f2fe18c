//! Common-avatar groups.

use serde::{Deserialize, Serialize};

/// A named group of avatar paths treated as mutually interchangeable for
/// compatibility purposes. Membership is by item path; an avatar may belong
/// to any number of groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CommonAvatarGroup {
    pub name: String,
    pub avatars: Vec<String>,
}

impl CommonAvatarGroup {
    pub fn new(name: impl Into<String>, avatars: Vec<String>) -> Self {
        Self {
            name: name.into(),
            avatars,
        }
    }

    pub fn contains(&self, avatar_path: &str) -> bool {
        self.avatars.iter().any(|path| path == avatar_path)
    }
}
