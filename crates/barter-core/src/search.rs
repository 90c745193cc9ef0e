//! ============================================================================
//! Zip Search - Browse listings near a postal code
//! ============================================================================
//! An item shows up for a search when it is listed in the searched zipcode
//! and its owner's travel radius fits inside the searched radius.
//! ============================================================================

use crate::types::Item;

/// Radius in miles used when the searcher does not pick one
pub const DEFAULT_SEARCH_RADIUS: u32 = 10;

/// Items in `zip` whose owner radius is at most `radius`, in catalog order.
pub fn search_by_zip(items: &[Item], zip: &str, radius: u32) -> Vec<Item> {
    let zip = zip.trim();
    if zip.is_empty() {
        return Vec::new();
    }

    items
        .iter()
        .filter(|item| item.zipcode == zip && item.radius <= radius)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewItem;

    fn listing(id: u32, zipcode: &str, radius: u32) -> Item {
        NewItem::new(format!("Item {}", id), "desc", zipcode)
            .with_radius(radius)
            .into_item(id, None, 0)
    }

    #[test]
    fn test_filters_by_zip_and_radius() {
        let items = vec![
            listing(1, "90210", 30),
            listing(2, "10001", 25),
            listing(3, "90210", 5),
            listing(4, "10001", 15),
        ];

        let ids: Vec<_> = search_by_zip(&items, "90210", DEFAULT_SEARCH_RADIUS)
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![3]);

        let ids: Vec<_> = search_by_zip(&items, "10001", 25)
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_blank_zip_matches_nothing() {
        let items = vec![listing(1, "", 0)];
        assert!(search_by_zip(&items, "  ", 100).is_empty());
    }

    #[test]
    fn test_zip_is_trimmed() {
        let items = vec![listing(1, "33101", 20)];
        assert_eq!(search_by_zip(&items, " 33101 ", 20).len(), 1);
    }
}
