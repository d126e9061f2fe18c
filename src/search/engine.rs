//! Filtering and ranking over the catalog.
//!
//! Two passes: the structured fields are conjunctive (an item must satisfy
//! every non-empty field array), the free-text words are conjunctive across
//! words but disjunctive per word across fields. Survivors are ranked by
//! how many fields each word matched; ties keep catalog order.

use crate::catalog::{Catalog, Item};
use crate::classify::FileData;
use crate::lang::Language;
use crate::query::SearchFilter;

// ---------------------------------------------------------------------------
// Item search
// ---------------------------------------------------------------------------

/// Searches the catalog, returning matches ranked best-first.
///
/// An empty filter matches every item in catalog order. Structured-field
/// matches do not contribute to the ranking score; a query with only
/// structured fields therefore preserves catalog order among survivors.
pub fn search_items<'a>(
    catalog: &'a Catalog,
    filter: &SearchFilter,
    lang: Language,
) -> Vec<&'a Item> {
    let words: Vec<String> = filter.words.iter().map(|word| word.to_lowercase()).collect();

    let mut scored: Vec<(&Item, usize)> = catalog
        .items
        .iter()
        .filter(|item| matches_structured(catalog, item, filter, lang))
        .filter(|item| words.iter().all(|word| word_score(catalog, item, word) > 0))
        .map(|item| {
            let score = words
                .iter()
                .map(|word| word_score(catalog, item, word))
                .sum();
            (item, score)
        })
        .collect();

    // Stable: equal scores keep their catalog order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(item, _)| item).collect()
}

fn matches_structured(
    catalog: &Catalog,
    item: &Item,
    filter: &SearchFilter,
    lang: Language,
) -> bool {
    if !filter.authors.is_empty() && !filter.authors.iter().any(|author| *author == item.author_name)
    {
        return false;
    }

    if !filter.titles.is_empty() && !filter.titles.iter().any(|title| *title == item.title) {
        return false;
    }

    if !filter.booth_ids.is_empty() {
        let Some(id) = item.booth_id.map(|id| id.to_string()) else {
            return false;
        };
        if !filter.booth_ids.iter().any(|wanted| *wanted == id) {
            return false;
        }
    }

    if !filter.avatars.is_empty() {
        let matched = filter.avatars.iter().any(|avatar| {
            let avatar = avatar.to_lowercase();
            supported_avatar_titles(catalog, item)
                .any(|title| title.to_lowercase().contains(&avatar))
        });
        if !matched {
            return false;
        }
    }

    if !filter.categories.is_empty() {
        let category_name = item.kind.display_name(lang);
        let matched = filter.categories.iter().any(|category| {
            category_name.contains(category.as_str())
                || item.custom_category.contains(category.as_str())
        });
        if !matched {
            return false;
        }
    }

    if !filter.memos.is_empty() {
        let memo = item.memo.to_lowercase();
        let matched = filter
            .memos
            .iter()
            .any(|wanted| memo.contains(&wanted.to_lowercase()));
        if !matched {
            return false;
        }
    }

    true
}

/// How many of the five free-text fields the (lowercased) word matches:
/// title, author name, any resolved supported-avatar title, booth id,
/// memo. Dangling avatar references resolve to no title and no match.
fn word_score(catalog: &Catalog, item: &Item, word: &str) -> usize {
    let mut score = 0;
    if item.title.to_lowercase().contains(word) {
        score += 1;
    }
    if item.author_name.to_lowercase().contains(word) {
        score += 1;
    }
    if supported_avatar_titles(catalog, item).any(|title| title.to_lowercase().contains(word)) {
        score += 1;
    }
    if item
        .booth_id
        .is_some_and(|id| id.to_string().contains(word))
    {
        score += 1;
    }
    if item.memo.to_lowercase().contains(word) {
        score += 1;
    }
    score
}

fn supported_avatar_titles<'a>(
    catalog: &'a Catalog,
    item: &'a Item,
) -> impl Iterator<Item = &'a str> {
    item.supported_avatars
        .iter()
        .filter_map(|path| catalog.resolve_avatar_title(path))
}

// ---------------------------------------------------------------------------
// File search
// ---------------------------------------------------------------------------

/// Searches classified files by name: every free-text word must appear in
/// the file name, ranked by how many words match, ties stable. Structured
/// fields do not apply to files.
pub fn search_files<'a>(files: Vec<&'a FileData>, filter: &SearchFilter) -> Vec<&'a FileData> {
    let words: Vec<String> = filter.words.iter().map(|word| word.to_lowercase()).collect();

    let mut scored: Vec<(&FileData, usize)> = files
        .into_iter()
        .filter_map(|file| {
            let name = file.file_name.to_lowercase();
            if !words.iter().all(|word| name.contains(word)) {
                return None;
            }
            let score = words.iter().filter(|word| name.contains(word.as_str())).count();
            Some((file, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(file, _)| file).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::{avatar, clothing};
    use crate::catalog::ItemKind;
    use crate::query::SearchFilter;
    use std::path::PathBuf;

    fn sample_catalog() -> Catalog {
        let mut dress = clothing("Sailor Dress", "D:/items/dress", &["D:/avatars/maki"]);
        dress.author_name = "mikan shop".into();
        dress.booth_id = Some(4242);
        dress.memo = "夏コミ новый".into();

        let mut hoodie = clothing("Hoodie", "D:/items/hoodie", &["D:/avatars/rui"]);
        hoodie.author_name = "mikan shop".into();

        let mut tool = clothing("dress-up tool", "D:/items/tool", &[]);
        tool.kind = ItemKind::Tool;
        tool.author_name = "someone".into();
        tool.memo = "dress management".into();

        Catalog::new(
            vec![
                avatar("Maki", "D:/avatars/maki"),
                avatar("Rui", "D:/avatars/rui"),
                dress,
                hoodie,
                tool,
            ],
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn empty_filter_matches_everything_in_catalog_order() {
        let catalog = sample_catalog();
        let results = search_items(&catalog, &SearchFilter::default(), Language::Ja);
        let titles: Vec<&str> = results.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Maki", "Rui", "Sailor Dress", "Hoodie", "dress-up tool"]
        );
    }

    #[test]
    fn structured_fields_are_conjunctive_and_exact() {
        let catalog = sample_catalog();

        let filter = SearchFilter::parse(r#"Author="mikan shop""#);
        let results = search_items(&catalog, &filter, Language::Ja);
        assert_eq!(results.len(), 2);

        // Both fields must hold.
        let filter = SearchFilter::parse(r#"Author="mikan shop" Title=Hoodie"#);
        let results = search_items(&catalog, &filter, Language::Ja);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Hoodie");

        // Author match is exact, not substring.
        let filter = SearchFilter::parse("Author=mikan");
        assert!(search_items(&catalog, &filter, Language::Ja).is_empty());
    }

    #[test]
    fn booth_filter_never_matches_items_without_an_id() {
        let catalog = sample_catalog();
        let filter = SearchFilter::parse("Booth=4242");
        let results = search_items(&catalog, &filter, Language::Ja);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Sailor Dress");

        let filter = SearchFilter::parse("Booth=-1");
        assert!(search_items(&catalog, &filter, Language::Ja).is_empty());
    }

    #[test]
    fn avatar_filter_resolves_paths_to_titles() {
        let catalog = sample_catalog();
        let filter = SearchFilter::parse("Avatar=maki");
        let results = search_items(&catalog, &filter, Language::Ja);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Sailor Dress");
    }

    #[test]
    fn dangling_avatar_reference_is_no_match_not_a_crash() {
        let mut catalog = sample_catalog();
        catalog.items.push(clothing(
            "Orphan Cape",
            "D:/items/cape",
            &["D:/avatars/deleted"],
        ));

        let filter = SearchFilter::parse("Avatar=deleted");
        assert!(search_items(&catalog, &filter, Language::Ja).is_empty());

        // Free-text search over the same item also survives.
        let filter = SearchFilter::parse("orphan");
        assert_eq!(search_items(&catalog, &filter, Language::Ja).len(), 1);
    }

    #[test]
    fn category_filter_uses_display_name_and_custom_label() {
        let catalog = sample_catalog();
        let filter = SearchFilter::parse("Category=ツール");
        let results = search_items(&catalog, &filter, Language::Ja);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "dress-up tool");

        let results = search_items(&catalog, &filter, Language::En);
        assert!(results.is_empty(), "category names are per-language");
    }

    #[test]
    fn every_free_text_word_must_match_somewhere() {
        let catalog = sample_catalog();

        let filter = SearchFilter::parse("dress mikan");
        let results = search_items(&catalog, &filter, Language::Ja);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Sailor Dress");

        let filter = SearchFilter::parse("dress zzz");
        assert!(search_items(&catalog, &filter, Language::Ja).is_empty());
    }

    #[test]
    fn ranking_counts_field_matches_per_word() {
        let catalog = sample_catalog();

        // "dress": tool matches in title + memo (2), dress in title (1).
        let filter = SearchFilter::parse("dress");
        let results = search_items(&catalog, &filter, Language::Ja);
        let titles: Vec<&str> = results.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, ["dress-up tool", "Sailor Dress"]);
    }

    #[test]
    fn equal_scores_preserve_catalog_order() {
        let catalog = sample_catalog();
        // "mikan" matches both clothing items in the author field only.
        let filter = SearchFilter::parse("mikan");
        let results = search_items(&catalog, &filter, Language::Ja);
        let titles: Vec<&str> = results.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, ["Sailor Dress", "Hoodie"]);
    }

    #[test]
    fn structured_only_query_keeps_order_with_zero_scores() {
        let catalog = sample_catalog();
        let filter = SearchFilter::parse(r#"Author="mikan shop""#);
        let results = search_items(&catalog, &filter, Language::Ja);
        let titles: Vec<&str> = results.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, ["Sailor Dress", "Hoodie"]);
    }

    #[test]
    fn file_search_requires_every_word_in_the_name() {
        let files = [
            FileData {
                file_name: "body_base.png".into(),
                file_path: PathBuf::from("/x/body_base.png"),
            },
            FileData {
                file_name: "body.psd".into(),
                file_path: PathBuf::from("/x/body.psd"),
            },
            FileData {
                file_name: "readme.txt".into(),
                file_path: PathBuf::from("/x/readme.txt"),
            },
        ];
        let refs: Vec<&FileData> = files.iter().collect();

        let filter = SearchFilter::parse("body base");
        let results = search_files(refs.clone(), &filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].file_name, "body_base.png");

        // One word: both body files match with equal score, stable order.
        let filter = SearchFilter::parse("BODY");
        let results = search_files(refs, &filter);
        let names: Vec<&str> = results.iter().map(|file| file.file_name.as_str()).collect();
        assert_eq!(names, ["body_base.png", "body.psd"]);
    }
}
