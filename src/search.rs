//! Catalog filter and ranking search.

mod engine;

pub use engine::{search_files, search_items};
