//! Navigation over the virtual folder hierarchy.
//!
//! The cursor tracks the user's position: root → lens (avatar, author, or
//! plain category) → category → item → item-internal category → files.
//! Listing is pulled, not pushed: the render-model queries in [`listing`]
//! recompute what is visible from (catalog, cursor) on demand, so there is
//! no cached list to go stale after a mutation.

mod breadcrumb;
mod cursor;
mod listing;

pub use breadcrumb::breadcrumb;
pub use cursor::{CategorySelection, Cursor, Lens, NavState, UndoOutcome, WILDCARD_AVATAR};
pub use listing::{
    list_authors, list_avatars, list_categories, list_files, list_item_categories, list_items,
    list_search_results, AuthorEntry, CategoryEntry, ItemCategoryEntry, ItemEntry, SearchListing,
    SortKey,
};
