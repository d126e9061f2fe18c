//! The parsed search filter.

/// A structured filter key recognized by the query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Author,
    Title,
    Booth,
    Avatar,
    Category,
    Memo,
}

impl FilterKey {
    /// Matches a key name exactly (key names are case-sensitive, as typed
    /// in the search box). Anything else is not a reserved key.
    pub(crate) fn parse(name: &str) -> Option<Self> {
        match name {
            "Author" => Some(Self::Author),
            "Title" => Some(Self::Title),
            "Booth" => Some(Self::Booth),
            "Avatar" => Some(Self::Avatar),
            "Category" => Some(Self::Category),
            "Memo" => Some(Self::Memo),
            _ => None,
        }
    }
}

/// A parsed query: structured field filters plus residual free-text words.
/// Immutable once built; an all-empty filter means "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub authors: Vec<String>,
    pub titles: Vec<String>,
    pub booth_ids: Vec<String>,
    pub avatars: Vec<String>,
    pub categories: Vec<String>,
    pub memos: Vec<String>,
    /// Free-text words; every word must match somewhere for an item to
    /// survive filtering.
    pub words: Vec<String>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
            && self.titles.is_empty()
            && self.booth_ids.is_empty()
            && self.avatars.is_empty()
            && self.categories.is_empty()
            && self.memos.is_empty()
            && self.words.is_empty()
    }

    pub(crate) fn push(&mut self, key: FilterKey, value: String) {
        match key {
            FilterKey::Author => self.authors.push(value),
            FilterKey::Title => self.titles.push(value),
            FilterKey::Booth => self.booth_ids.push(value),
            FilterKey::Avatar => self.avatars.push(value),
            FilterKey::Category => self.categories.push(value),
            FilterKey::Memo => self.memos.push(value),
        }
    }
}
