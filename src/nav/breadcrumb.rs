//! Breadcrumb rendering.

use crate::lang::Language;
use crate::query::SearchFilter;

use super::cursor::{CategorySelection, Cursor, Lens};

const SEPARATOR: &str = " / ";

/// Renders the textual breadcrumb for the cursor.
///
/// A pure function of the cursor state: lens label / category label / item
/// title / item-category label. Avatar, author, and item segments are
/// sanitized for display (spaces to underscores, slashes to dashes); the
/// category labels are used as-is. At the root — and for a bare plain-
/// category lens — a localized placeholder is returned instead.
///
/// While search mode is active the breadcrumb renders the parsed filter
/// fields plus the remaining free-text words.
pub fn breadcrumb(cursor: &Cursor, lang: Language) -> String {
    if let Some(filter) = cursor.search() {
        return search_breadcrumb(filter, lang);
    }

    let lens_segment = match cursor.lens() {
        None => return placeholder(lang),
        Some(Lens::Avatar { title, .. }) => Some(sanitize(title)),
        Some(Lens::Author(author)) => Some(sanitize(&author.name)),
        Some(Lens::Category) => {
            if cursor.category().is_none() {
                return placeholder(lang);
            }
            None
        }
    };

    let mut segments = Vec::new();
    segments.extend(lens_segment);
    if let Some(selection) = cursor.category() {
        segments.push(category_label(selection, lang));
    }
    if let Some(item) = cursor.item() {
        segments.push(sanitize(&item.title));
    }
    if let Some(category) = cursor.item_category() {
        segments.push(category.display_name(lang).to_string());
    }

    segments.join(SEPARATOR)
}

fn placeholder(lang: Language) -> String {
    lang.translate("ここには現在のパスが表示されます").to_string()
}

fn category_label(selection: &CategorySelection, lang: Language) -> String {
    match &selection.custom_label {
        Some(label) => label.clone(),
        None => selection.kind.display_name(lang).to_string(),
    }
}

/// Display sanitization for name segments, so they read as path components.
fn sanitize(segment: &str) -> String {
    segment.replace(' ', "_").replace('/', "-")
}

fn search_breadcrumb(filter: &SearchFilter, lang: Language) -> String {
    let mut segments = Vec::new();
    let mut field = |label_ja: &str, values: &[String]| {
        if !values.is_empty() {
            segments.push(format!("{}: {}", lang.translate(label_ja), values.join(", ")));
        }
    };

    field("作者", &filter.authors);
    field("タイトル", &filter.titles);
    field("BoothID", &filter.booth_ids);
    field("アバター", &filter.avatars);
    field("カテゴリ", &filter.categories);
    field("メモ", &filter.memos);
    if !filter.words.is_empty() {
        segments.push(filter.words.join(", "));
    }

    format!("{}{}", lang.translate("検索中... - "), segments.join(SEPARATOR))
}
