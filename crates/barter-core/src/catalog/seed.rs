//! ============================================================================
//! Seed Data - Starting contents for a fresh catalog
//! ============================================================================

use serde::{Deserialize, Serialize};

use crate::types::{Category, Item, User};

/// JSON document accepted by `ItemCatalog::from_seed_file`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub users: Vec<User>,
}

fn seed_item(
    id: u32,
    name: &str,
    zipcode: &str,
    radius: u32,
    description: &str,
    category: Category,
    owner_id: u32,
) -> Item {
    Item {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category,
        zipcode: zipcode.to_string(),
        radius,
        image: None,
        owner_id: Some(owner_id),
        estimated_value: None,
        listed_at: 0,
    }
}

/// Demo listings across three zipcodes
pub fn demo_items() -> Vec<Item> {
    vec![
        seed_item(1, "Vintage Leather Jacket", "90210", 30, "Classic leather jacket in great condition", Category::Clothing, 1),
        seed_item(2, "Nintendo Switch Console", "10001", 25, "Barely used gaming console with accessories", Category::Electronics, 2),
        seed_item(3, "Wooden Coffee Table", "90210", 5, "Handmade oak coffee table", Category::Furniture, 3),
        seed_item(4, "Mountain Bike", "10001", 15, "Trek mountain bike, excellent condition", Category::Sports, 4),
        seed_item(5, "Guitar Acoustic", "33101", 20, "Yamaha acoustic guitar with case", Category::Music, 1),
    ]
}

pub fn demo_users() -> Vec<User> {
    vec![
        User::new(1, "Maya Chen"),
        User::new(2, "Jordan Reyes"),
        User::new(3, "Sam Okafor"),
        User::new(4, "Priya Nair"),
    ]
}

impl CatalogSeed {
    pub fn demo() -> Self {
        Self {
            items: demo_items(),
            users: demo_users(),
        }
    }
}
