// ============================================================================
// ItemCatalog — In-memory item repository
// ============================================================================
// Holds every listed item and the known users for the lifetime of the
// process. Nothing is written to disk; a JSON seed file can only provide
// the starting contents.
//
// Item ids are max(existing) + 1, computed under the write lock so
// concurrent inserts never hand out the same id. Seed ids are capped at
// MAX_SEED_ITEM_ID so the next id always fits in an ItemId.
// ============================================================================

pub mod seed;

pub use seed::{demo_items, demo_users, CatalogSeed};

use std::collections::HashSet;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::search::search_by_zip;
use crate::similarity::{find_similar_items, rank_similar, SimilarityScorer};
use crate::types::{
    Category, CatalogStats, Item, ItemId, NewItem, ScoredItem, TargetItem, User, UserId,
    UNKNOWN_USER_NAME,
};

/// Largest id a seed item may carry. The headroom above it is more inserts
/// than a process can hold in memory.
pub const MAX_SEED_ITEM_ID: ItemId = ItemId::MAX / 2;

#[derive(Debug, Default)]
struct CatalogState {
    items: Vec<Item>,
    users: Vec<User>,
}

impl CatalogState {
    // Cannot overflow: seed ids are at most MAX_SEED_ITEM_ID
    fn next_item_id(&self) -> ItemId {
        self.items.iter().map(|item| item.id).max().map_or(1, |max| max + 1)
    }
}

/// Append-only item catalog shared by every front end in the process
#[derive(Debug, Default)]
pub struct ItemCatalog {
    state: RwLock<CatalogState>,
}

impl ItemCatalog {
    /// Build a catalog from existing items and users.
    /// Items without a listing time are stamped with the current time.
    pub fn new(items: Vec<Item>, users: Vec<User>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.id == 0 {
                return Err(CatalogError::ZeroItemId);
            }
            if item.id > MAX_SEED_ITEM_ID {
                return Err(CatalogError::ItemIdOutOfRange(item.id));
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateItemId(item.id));
            }
        }

        let now = chrono::Utc::now().timestamp();
        let items = items
            .into_iter()
            .map(|mut item| {
                if item.listed_at == 0 {
                    item.listed_at = now;
                }
                item
            })
            .collect::<Vec<_>>();

        info!(
            "Catalog ready with {} items and {} users",
            items.len(),
            users.len()
        );

        Ok(Self {
            state: RwLock::new(CatalogState { items, users }),
        })
    }

    /// Catalog holding the built-in demo listings
    pub fn seeded() -> Self {
        match Self::from_seed(CatalogSeed::demo()) {
            Ok(catalog) => catalog,
            Err(e) => {
                debug_assert!(false, "built-in seed rejected: {}", e);
                warn!("Built-in seed rejected: {} - starting with an empty catalog", e);
                Self::default()
            }
        }
    }

    pub fn from_seed(seed: CatalogSeed) -> CatalogResult<Self> {
        Self::new(seed.items, seed.users)
    }

    /// Load starting contents from a JSON seed file
    pub fn from_seed_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        info!("Loading catalog seed from: {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: CatalogSeed =
            serde_json::from_str(&raw).map_err(|source| CatalogError::SeedParse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_seed(seed)
    }

    // A panic while holding the lock cannot leave the state half-written:
    // every mutation is a single push.
    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ========================================================================
    // Item Operations
    // ========================================================================

    /// Append an item owned by `owner_id` and return it with its new id.
    /// Performs no validation and cannot fail.
    pub fn add_item(&self, new_item: NewItem, owner_id: Option<UserId>) -> Item {
        let now = chrono::Utc::now().timestamp();
        let item = {
            let mut state = self.write();
            let item = new_item.into_item(state.next_item_id(), owner_id, now);
            state.items.push(item.clone());
            item
        };

        info!("Listed item {} ({}) for owner {:?}", item.id, item.name, owner_id);
        item
    }

    /// Append an item owned by a randomly chosen known user.
    ///
    /// Demo stand-in for an authenticated uploader; real front ends should
    /// call `add_item` with the caller's identity.
    pub fn add_item_with_random_owner<R: Rng + ?Sized>(&self, new_item: NewItem, rng: &mut R) -> Item {
        let owner_id = self.read().users.choose(rng).map(|user| user.id);
        self.add_item(new_item, owner_id)
    }

    /// Snapshot of every item, in insertion order
    pub fn items(&self) -> Vec<Item> {
        let state = self.read();
        debug!("Listing {} items", state.items.len());
        state.items.clone()
    }

    pub fn item_by_id(&self, id: ItemId) -> Option<Item> {
        self.read().items.iter().find(|item| item.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().items.is_empty()
    }

    // ========================================================================
    // User Operations
    // ========================================================================

    pub fn users(&self) -> Vec<User> {
        self.read().users.clone()
    }

    /// First user with `id`; `None` means "unknown user", not an error.
    pub fn user_by_id(&self, id: UserId) -> Option<User> {
        self.read().users.iter().find(|user| user.id == id).cloned()
    }

    /// Display name for an item's owner, falling back to a placeholder
    pub fn owner_name(&self, owner_id: Option<UserId>) -> String {
        owner_id
            .and_then(|id| self.user_by_id(id))
            .map(|user| user.name)
            .unwrap_or_else(|| UNKNOWN_USER_NAME.to_string())
    }

    // ========================================================================
    // Search Operations
    // ========================================================================

    /// Rank current items against `target` with the default scorer
    pub fn find_similar(&self, target: &TargetItem) -> Vec<ScoredItem> {
        find_similar_items(target, &self.read().items)
    }

    pub fn find_similar_with(&self, scorer: &dyn SimilarityScorer, target: &TargetItem) -> Vec<ScoredItem> {
        rank_similar(scorer, target, &self.read().items)
    }

    /// Items listed in `zip` within `radius` miles
    pub fn search(&self, zip: &str, radius: u32) -> Vec<Item> {
        let results = search_by_zip(&self.read().items, zip, radius);
        debug!("Zip search {} within {} miles: {} items", zip, radius, results.len());
        results
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    pub fn stats(&self) -> CatalogStats {
        let state = self.read();

        let category_counts = Category::ALL
            .iter()
            .map(|category| {
                let count = state
                    .items
                    .iter()
                    .filter(|item| item.category == *category)
                    .count();
                (*category, count)
            })
            .collect();

        CatalogStats {
            total_items: state.items.len(),
            total_users: state.users.len(),
            category_counts,
            unowned_items: state.items.iter().filter(|item| item.owner_id.is_none()).count(),
        }
    }
}
