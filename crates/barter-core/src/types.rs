//! ============================================================================
//! Core Types for the Barter Catalog
//! ============================================================================
//! Items, owners, and the records the similarity scorer consumes and returns.
//! These types are serialized to camelCase JSON for seed files and CLI output.
//! ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Catalog-assigned item identifier
pub type ItemId = u32;

/// Identifier from the fixed user seed set
pub type UserId = u32;

/// Value assumed for items listed without an estimate (USD)
pub const DEFAULT_ESTIMATED_VALUE: u32 = 100;

/// Display name used when an owner lookup misses
pub const UNKNOWN_USER_NAME: &str = "Unknown User";

/// Category of a listed item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Furniture,
    Sports,
    Music,
    Books,
    #[default]
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Clothing,
        Category::Furniture,
        Category::Sports,
        Category::Music,
        Category::Books,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Clothing => "clothing",
            Self::Furniture => "furniture",
            Self::Sports => "sports",
            Self::Music => "music",
            Self::Books => "books",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "electronics" => Ok(Self::Electronics),
            "clothing" => Ok(Self::Clothing),
            "furniture" => Ok(Self::Furniture),
            "sports" => Ok(Self::Sports),
            "music" => Ok(Self::Music),
            "books" => Ok(Self::Books),
            "other" => Ok(Self::Other),
            _ => Err(CatalogError::UnknownCategory(s.to_string())),
        }
    }
}

/// A physical object listed for barter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub zipcode: String,
    /// Miles the owner is willing to travel for a trade
    #[serde(default)]
    pub radius: u32,
    /// Data URL of the uploaded photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<u32>,
    /// Unix timestamp when the item entered the catalog
    #[serde(default)]
    pub listed_at: i64,
}

impl Item {
    pub fn estimated_value_or_default(&self) -> u32 {
        self.estimated_value.unwrap_or(DEFAULT_ESTIMATED_VALUE)
    }
}

/// Upload payload: an item before the catalog assigns its identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub radius: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<u32>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>, zipcode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            zipcode: zipcode.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_estimated_value(mut self, value: u32) -> Self {
        self.estimated_value = Some(value);
        self
    }

    /// Attach identity and listing time, producing a catalog record
    pub(crate) fn into_item(self, id: ItemId, owner_id: Option<UserId>, listed_at: i64) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            zipcode: self.zipcode,
            radius: self.radius,
            image: self.image,
            owner_id,
            estimated_value: self.estimated_value,
            listed_at,
        }
    }
}

/// An item owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: None,
        }
    }
}

/// The item a similarity search is run for.
/// Drafts that were never saved carry no `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

impl TargetItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }
}

impl From<&Item> for TargetItem {
    fn from(item: &Item) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            description: item.description.clone(),
            category: Some(item.category),
            zipcode: Some(item.zipcode.clone()),
        }
    }
}

impl From<&NewItem> for TargetItem {
    fn from(item: &NewItem) -> Self {
        Self {
            id: None,
            name: item.name.clone(),
            description: item.description.clone(),
            category: Some(item.category),
            zipcode: Some(item.zipcode.clone()),
        }
    }
}

/// A catalog item annotated with its similarity to a target.
/// Scores are open-ended integers, not percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: Item,
    pub similarity_score: u32,
}

/// Summary counts for a catalog snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_items: usize,
    pub total_users: usize,
    pub category_counts: Vec<(Category, usize)>,
    pub unowned_items: usize,
}
