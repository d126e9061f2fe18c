//! The navigation cursor and its transitions.

use std::path::Path;

use crate::catalog::{Author, Catalog, Item, ItemKind};
use crate::classify::{FileCategory, FolderInfo};
use crate::error::{CatalogError, Result};
use crate::query::SearchFilter;

/// The avatar-lens title used when an item was jumped to without a
/// resolvable supported avatar; it makes every item of the category
/// visible.
pub const WILDCARD_AVATAR: &str = "*";

/// The active navigation mode. At most one lens is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Lens {
    Avatar {
        title: String,
        path: Option<String>,
    },
    Author(Author),
    /// Browsing by category directly, without an avatar or author.
    Category,
}

/// A selected category: a kind, plus the user label when the kind is
/// `Custom`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySelection {
    pub kind: ItemKind,
    pub custom_label: Option<String>,
}

/// The coarse position of the cursor, derived from which fields are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Root,
    LensChosen,
    CategoryChosen,
    ItemChosen,
    ItemCategoryChosen,
}

/// What an [`Cursor::undo`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// One navigation step was reversed.
    Stepped,
    /// Search mode was active; it was left and the position kept.
    LeftSearch,
    /// Already at the root; nothing changed. A boundary, not an error.
    AtRoot,
}

/// The navigation cursor. Transient: never persisted.
///
/// Descending always narrows (sets a field that was null), ascending always
/// widens (clears the most specific field first). Search mode is an overlay
/// on top of the position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cursor {
    lens: Option<Lens>,
    category: Option<CategorySelection>,
    item: Option<Item>,
    item_category: Option<FileCategory>,
    folder: Option<FolderInfo>,
    search: Option<SearchFilter>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavState {
        if self.item_category.is_some() {
            NavState::ItemCategoryChosen
        } else if self.item.is_some() {
            NavState::ItemChosen
        } else if self.category.is_some() {
            NavState::CategoryChosen
        } else if self.lens.is_some() {
            NavState::LensChosen
        } else {
            NavState::Root
        }
    }

    pub fn lens(&self) -> Option<&Lens> {
        self.lens.as_ref()
    }

    pub fn category(&self) -> Option<&CategorySelection> {
        self.category.as_ref()
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    pub fn item_category(&self) -> Option<FileCategory> {
        self.item_category
    }

    /// The classification snapshot taken when the item was entered.
    pub fn folder(&self) -> Option<&FolderInfo> {
        self.folder.as_ref()
    }

    /// The avatar path the avatar lens is focused on, if any.
    pub fn lens_avatar_path(&self) -> Option<&str> {
        match &self.lens {
            Some(Lens::Avatar { path, .. }) => path.as_deref(),
            _ => None,
        }
    }

    // -----------------------------------------------------------------------
    // Descent
    // -----------------------------------------------------------------------

    /// Activates the avatar lens. Selecting a lens always starts over from
    /// the root, whatever the previous position was.
    pub fn select_avatar(&mut self, title: &str, path: &str) {
        self.reset();
        self.lens = Some(Lens::Avatar {
            title: title.to_string(),
            path: (!path.is_empty()).then(|| path.to_string()),
        });
    }

    /// Activates the author lens, starting over from the root.
    pub fn select_author(&mut self, author: Author) {
        self.reset();
        self.lens = Some(Lens::Author(author));
    }

    /// Selects a category.
    ///
    /// From the root this activates the plain-category lens and the
    /// category in one step (the plain lens bypasses avatar/author). Under
    /// an avatar or author lens it narrows to the category. Deeper states
    /// must ascend first.
    pub fn select_category(&mut self, kind: ItemKind, custom_label: Option<&str>) -> Result<()> {
        match self.state() {
            NavState::Root => {
                self.lens = Some(Lens::Category);
            }
            NavState::LensChosen => {}
            state => {
                return Err(CatalogError::Navigation(format!(
                    "cannot select a category from {state:?}"
                )))
            }
        }
        self.category = Some(CategorySelection {
            kind,
            custom_label: custom_label.map(str::to_string),
        });
        self.search = None;
        Ok(())
    }

    /// Descends into an item, classifying its folders synchronously.
    ///
    /// A missing content folder fails with
    /// [`CatalogError::BrokenItemFolder`] and leaves the cursor unchanged;
    /// the caller can re-point the item's path and retry.
    pub fn select_item(&mut self, item: &Item) -> Result<()> {
        if self.state() != NavState::CategoryChosen {
            return Err(CatalogError::Navigation(format!(
                "cannot select an item from {:?}",
                self.state()
            )));
        }
        let folder = classify_item(item)?;
        self.item = Some(item.clone());
        self.folder = Some(folder);
        self.search = None;
        Ok(())
    }

    /// Descends into one of the item's classified buckets.
    pub fn select_item_category(&mut self, category: FileCategory) -> Result<()> {
        if self.state() != NavState::ItemChosen {
            return Err(CatalogError::Navigation(format!(
                "cannot select an item category from {:?}",
                self.state()
            )));
        }
        self.item_category = Some(category);
        self.search = None;
        Ok(())
    }

    /// Jumps straight to an item (search-result descent), synthesizing the
    /// position above it: an avatar lens from the item's first supported
    /// avatar — the wildcard when none resolves — and the item's own
    /// category. Fails without moving when the item's folder is broken.
    pub fn jump_to_item(&mut self, catalog: &Catalog, item: &Item) -> Result<()> {
        let folder = classify_item(item)?;

        let avatar_path = item.supported_avatars.first().cloned();
        let avatar_title = avatar_path
            .as_deref()
            .and_then(|path| catalog.resolve_avatar_title(path))
            .unwrap_or(WILDCARD_AVATAR)
            .to_string();

        self.reset();
        self.lens = Some(Lens::Avatar {
            title: avatar_title,
            path: avatar_path,
        });
        self.category = Some(CategorySelection {
            kind: item.kind,
            custom_label: (item.kind == ItemKind::Custom)
                .then(|| item.custom_category.clone()),
        });
        self.item = Some(item.clone());
        self.folder = Some(folder);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Ascent
    // -----------------------------------------------------------------------

    /// Reverses exactly one step, most specific field first: item-category,
    /// item, category, lens, root. When search mode is active it is left
    /// instead and the position is kept. At the root this is a no-op.
    pub fn undo(&mut self) -> UndoOutcome {
        if self.search.take().is_some() {
            return UndoOutcome::LeftSearch;
        }
        if self.item_category.take().is_some() {
            return UndoOutcome::Stepped;
        }
        if self.item.take().is_some() {
            self.folder = None;
            return UndoOutcome::Stepped;
        }
        if self.category.take().is_some() {
            return UndoOutcome::Stepped;
        }
        if self.lens.take().is_some() {
            return UndoOutcome::Stepped;
        }
        UndoOutcome::AtRoot
    }

    /// Returns to the root unconditionally.
    pub fn reset(&mut self) {
        *self = Cursor::default();
    }

    // -----------------------------------------------------------------------
    // Search overlay
    // -----------------------------------------------------------------------

    /// Enters search mode with the given query, or leaves it when the
    /// query is empty. The position underneath is untouched either way.
    pub fn set_search(&mut self, query: &str) {
        let trimmed = query.trim();
        self.search = (!trimmed.is_empty()).then(|| SearchFilter::parse(trimmed));
    }

    pub fn search(&self) -> Option<&SearchFilter> {
        self.search.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }
}

fn classify_item(item: &Item) -> Result<FolderInfo> {
    let material = (!item.material_path.is_empty()).then(|| Path::new(&item.material_path));
    FolderInfo::classify(Path::new(&item.item_path), material)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::{avatar, clothing};
    use std::fs;

    fn item_on_disk(dir: &Path, title: &str) -> Item {
        let path = dir.join(title);
        fs::create_dir_all(&path).expect("mkdir");
        fs::write(path.join("asset.fbx"), b"x").expect("write");
        let mut item = clothing(title, path.to_str().expect("utf8 path"), &[]);
        item.kind = ItemKind::Clothing;
        item
    }

    #[test]
    fn descend_then_undo_returns_to_the_previous_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let item = item_on_disk(dir.path(), "dress");
        let mut cursor = Cursor::new();

        cursor
            .select_category(ItemKind::Clothing, None)
            .expect("category");
        assert_eq!(cursor.state(), NavState::CategoryChosen);

        cursor.select_item(&item).expect("item");
        assert_eq!(cursor.state(), NavState::ItemChosen);
        assert!(cursor.folder().is_some());

        assert_eq!(cursor.undo(), UndoOutcome::Stepped);
        assert_eq!(cursor.state(), NavState::CategoryChosen);
        assert_eq!(
            cursor.category().map(|sel| sel.kind),
            Some(ItemKind::Clothing)
        );
        assert!(cursor.item().is_none());
        assert!(cursor.folder().is_none());
    }

    #[test]
    fn undo_at_root_is_a_boundary_no_op() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.undo(), UndoOutcome::AtRoot);
        assert_eq!(cursor.state(), NavState::Root);
    }

    #[test]
    fn undo_unwinds_in_fixed_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let item = item_on_disk(dir.path(), "dress");
        let mut cursor = Cursor::new();

        cursor.select_avatar("Maki", "D:/avatars/maki");
        cursor
            .select_category(ItemKind::Clothing, None)
            .expect("category");
        cursor.select_item(&item).expect("item");
        cursor
            .select_item_category(FileCategory::Modify)
            .expect("item category");
        assert_eq!(cursor.state(), NavState::ItemCategoryChosen);

        let expected = [
            NavState::ItemChosen,
            NavState::CategoryChosen,
            NavState::LensChosen,
            NavState::Root,
        ];
        for state in expected {
            assert_eq!(cursor.undo(), UndoOutcome::Stepped);
            assert_eq!(cursor.state(), state);
        }
        assert_eq!(cursor.undo(), UndoOutcome::AtRoot);
    }

    #[test]
    fn selecting_a_lens_starts_over() {
        let mut cursor = Cursor::new();
        cursor.select_avatar("Maki", "D:/avatars/maki");
        cursor
            .select_category(ItemKind::Clothing, None)
            .expect("category");

        cursor.select_author(Author {
            name: "mikan shop".into(),
            thumbnail_path: String::new(),
        });
        assert_eq!(cursor.state(), NavState::LensChosen);
        assert!(cursor.category().is_none());
        assert!(matches!(cursor.lens(), Some(Lens::Author(_))));
    }

    #[test]
    fn plain_category_bypasses_avatar_and_author() {
        let mut cursor = Cursor::new();
        cursor
            .select_category(ItemKind::Texture, None)
            .expect("category");
        assert_eq!(cursor.state(), NavState::CategoryChosen);
        assert_eq!(cursor.lens(), Some(&Lens::Category));

        // Undo steps back to the bare category lens, then to the root.
        assert_eq!(cursor.undo(), UndoOutcome::Stepped);
        assert_eq!(cursor.state(), NavState::LensChosen);
        assert_eq!(cursor.undo(), UndoOutcome::Stepped);
        assert_eq!(cursor.state(), NavState::Root);
    }

    #[test]
    fn broken_item_fails_distinctly_and_moves_nothing() {
        let mut cursor = Cursor::new();
        cursor
            .select_category(ItemKind::Clothing, None)
            .expect("category");

        let ghost = clothing("ghost", "/nonexistent/ghost", &[]);
        let err = cursor.select_item(&ghost).expect_err("broken folder");
        assert!(matches!(err, CatalogError::BrokenItemFolder(_)));
        assert_eq!(cursor.state(), NavState::CategoryChosen);
        assert!(cursor.item().is_none());
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        let mut cursor = Cursor::new();
        let item = clothing("dress", "/nowhere", &[]);
        assert!(matches!(
            cursor.select_item(&item),
            Err(CatalogError::Navigation(_))
        ));
        assert!(matches!(
            cursor.select_item_category(FileCategory::Modify),
            Err(CatalogError::Navigation(_))
        ));
    }

    #[test]
    fn jump_to_item_synthesizes_the_avatar_lens() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut item = item_on_disk(dir.path(), "dress");
        item.supported_avatars = vec!["D:/avatars/maki".into()];

        let catalog = Catalog::new(
            vec![avatar("Maki", "D:/avatars/maki"), item.clone()],
            Vec::new(),
            Vec::new(),
        );

        let mut cursor = Cursor::new();
        cursor.set_search("dress");
        cursor.jump_to_item(&catalog, &item).expect("jump");

        assert_eq!(cursor.state(), NavState::ItemChosen);
        assert!(!cursor.is_searching());
        match cursor.lens() {
            Some(Lens::Avatar { title, path }) => {
                assert_eq!(title, "Maki");
                assert_eq!(path.as_deref(), Some("D:/avatars/maki"));
            }
            other => panic!("unexpected lens: {other:?}"),
        }

        // A universal item jumps under the wildcard lens.
        let universal = item_on_disk(dir.path(), "cape");
        cursor.jump_to_item(&catalog, &universal).expect("jump");
        match cursor.lens() {
            Some(Lens::Avatar { title, path }) => {
                assert_eq!(title, WILDCARD_AVATAR);
                assert_eq!(*path, None);
            }
            other => panic!("unexpected lens: {other:?}"),
        }
    }

    #[test]
    fn undo_leaves_search_mode_before_moving() {
        let mut cursor = Cursor::new();
        cursor
            .select_category(ItemKind::Clothing, None)
            .expect("category");
        cursor.set_search("dress");

        assert_eq!(cursor.undo(), UndoOutcome::LeftSearch);
        assert!(!cursor.is_searching());
        assert_eq!(cursor.state(), NavState::CategoryChosen);

        assert_eq!(cursor.undo(), UndoOutcome::Stepped);
        assert_eq!(cursor.state(), NavState::LensChosen);
    }
}
