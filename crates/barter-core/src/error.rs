//! ============================================================================
//! Error Types
//! ============================================================================
//! Catalog construction and upload validation are the only fallible paths.
//! Scoring and insertion never fail.
//! ============================================================================

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ItemId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate item id in seed data: {0}")]
    DuplicateItemId(ItemId),

    #[error("Item ids must be positive, seed data contains 0")]
    ZeroItemId,

    #[error("Item id {0} leaves no room for new listings")]
    ItemIdOutOfRange(ItemId),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Upload form checks, run by callers before `ItemCatalog::add_item`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Zipcode must be 5 digits, got '{0}'")]
    InvalidZipcode(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
