//! ============================================================================
//! BARTER-CORE: Local barter catalog
//! ============================================================================
//! This crate handles all catalog logic for the barter front ends:
//! - In-memory item/user repository with monotonic item ids
//! - Similarity scoring for "find equivalent item" searches
//! - Zipcode + radius browsing
//! - Upload validation and runtime configuration
//! ============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod similarity;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use catalog::{CatalogSeed, ItemCatalog, MAX_SEED_ITEM_ID};
pub use config::BarterConfig;
pub use error::{CatalogError, CatalogResult, ValidationError};
pub use search::{search_by_zip, DEFAULT_SEARCH_RADIUS};
pub use similarity::{
    find_similar_items, rank_similar, tokenize, LexicalScorer, ScoreWeights, SimilarityScorer,
};
pub use types::*;
pub use validation::{validate_new_item, validate_zipcode};
