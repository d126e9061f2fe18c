use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The item's content folder no longer exists on disk. Recoverable:
    /// re-point the item path and retry the transition.
    #[error("Item folder is missing: {0}")]
    BrokenItemFolder(PathBuf),

    #[error("Invalid navigation transition: {0}")]
    Navigation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
