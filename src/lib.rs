//! Avatar asset catalog, navigation, and search library.
//!
//! This crate provides the core engine for an avatar asset manager:
//! - Catalog entities (items, common-avatar groups, custom categories)
//! - Avatar compatibility resolution
//! - Query parsing and multi-field ranking search
//! - On-disk folder classification
//! - Breadcrumb-driven navigation state machine

pub mod catalog;
pub mod classify;
pub mod compat;
pub mod error;
pub mod lang;
pub mod nav;
pub mod query;
pub mod search;
pub mod storage;

// Re-export main types
pub use catalog::{Author, Catalog, CommonAvatarGroup, Item, ItemKind};
pub use classify::{FileCategory, FileData, FolderInfo};
pub use compat::{resolve, Compatibility};
pub use error::{CatalogError, Result};
pub use lang::Language;
pub use nav::{Cursor, Lens, NavState, SortKey, UndoOutcome};
pub use query::SearchFilter;
