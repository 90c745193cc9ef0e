//! Property-based tests for the barter catalog
//!
//! Catalogs are generated from a small vocabulary so token overlaps,
//! shared categories and shared zipcodes all occur often.

use barter_core::{
    find_similar_items, Category, Item, ItemCatalog, LexicalScorer, NewItem, SimilarityScorer,
    TargetItem,
};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "bike", "bikes", "mountain", "console", "gaming", "oak", "table", "guitar", "used", "in",
    "a", "jacket", "leather", "vintage", "case", "with",
];
const ZIPS: &[&str] = &["10001", "90210", "33101"];

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..5).prop_map(|words| words.join(" "))
}

fn zip() -> impl Strategy<Value = String> {
    prop::sample::select(ZIPS).prop_map(str::to_string)
}

fn arb_new_item() -> impl Strategy<Value = NewItem> {
    (text(), text(), category(), zip(), 0u32..50).prop_map(
        |(name, description, category, zipcode, radius)| {
            NewItem::new(name, description, zipcode)
                .with_category(category)
                .with_radius(radius)
        },
    )
}

fn arb_catalog() -> impl Strategy<Value = ItemCatalog> {
    prop::collection::vec(arb_new_item(), 0..12).prop_map(|uploads| {
        let catalog = ItemCatalog::default();
        for upload in uploads {
            catalog.add_item(upload, None);
        }
        catalog
    })
}

fn arb_target() -> impl Strategy<Value = TargetItem> {
    (
        text(),
        text(),
        prop::option::of(category()),
        prop::option::of(zip()),
    )
        .prop_map(|(name, description, category, zipcode)| TargetItem {
            id: None,
            name,
            description,
            category,
            zipcode,
        })
}

fn item_named(id: u32, name: &str, category: Category, zipcode: &str) -> Item {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "description": "listing",
        "category": category,
        "zipcode": zipcode,
    }))
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: an item never matches itself
    #[test]
    fn prop_self_exclusion(
        catalog in arb_catalog(),
        pick in any::<prop::sample::Index>(),
        name in "[a-z]{3,8}",
        description in "[a-z]{3,8}",
    ) {
        // two identical listings, so a chosen twin always has a scoring match
        catalog.add_item(NewItem::new(name.clone(), description.clone(), "10001"), None);
        catalog.add_item(NewItem::new(name, description, "10001"), None);
        let items = catalog.items();
        let searchable: Vec<&Item> = items
            .iter()
            .filter(|item| !item.name.is_empty() && !item.description.is_empty())
            .collect();
        let chosen = *pick.get(&searchable);

        let ranked = find_similar_items(&TargetItem::from(chosen), &items);
        prop_assert!(ranked.iter().all(|scored| scored.item.id != chosen.id));
    }

    /// Property: missing name or description yields no results
    #[test]
    fn prop_empty_input_short_circuits(catalog in arb_catalog(), word in text()) {
        let items = catalog.items();
        prop_assert!(find_similar_items(&TargetItem::new("", word.clone()), &items).is_empty());
        prop_assert!(find_similar_items(&TargetItem::new(word, ""), &items).is_empty());
    }

    /// Property: results never carry a zero score
    #[test]
    fn prop_no_zero_scores(catalog in arb_catalog(), target in arb_target()) {
        let ranked = find_similar_items(&target, &catalog.items());
        prop_assert!(ranked.iter().all(|scored| scored.similarity_score > 0));
    }

    /// Property: results are sorted by score, descending
    #[test]
    fn prop_sorted_descending(catalog in arb_catalog(), target in arb_target()) {
        let ranked = find_similar_items(&target, &catalog.items());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].similarity_score >= pair[1].similarity_score);
        }
    }

    /// Property: each result's score is exactly what the scorer gives it,
    /// and every positively scored item is returned
    #[test]
    fn prop_results_match_scorer(catalog in arb_catalog(), target in arb_target()) {
        prop_assume!(!target.name.is_empty() && !target.description.is_empty());
        let items = catalog.items();
        let scorer = LexicalScorer::new();
        let ranked = find_similar_items(&target, &items);

        for scored in &ranked {
            prop_assert_eq!(scored.similarity_score, scorer.score(&target, &scored.item));
        }
        let positive = items.iter().filter(|item| scorer.score(&target, item) > 0).count();
        prop_assert_eq!(ranked.len(), positive);
    }

    /// Property: ids continue from the current maximum
    #[test]
    fn prop_id_monotonicity(catalog in arb_catalog(), a in arb_new_item(), b in arb_new_item()) {
        let max = catalog.items().iter().map(|item| item.id).max().unwrap_or(0);
        prop_assert_eq!(catalog.add_item(a, None).id, max + 1);
        prop_assert_eq!(catalog.add_item(b, None).id, max + 2);
    }

    /// Property: mutating a snapshot never leaks into the catalog
    #[test]
    fn prop_snapshots_are_copies(catalog in arb_catalog(), name in "[a-z]{1,8}") {
        let before = catalog.items();
        let mut snapshot = catalog.items();
        if let Some(first) = snapshot.first_mut() {
            first.name = name;
            first.zipcode.push('9');
        }
        snapshot.push(item_named(999, "ghost", Category::Other, "00000"));

        prop_assert_eq!(catalog.items(), before);
    }
}

/// Category alone outscores a single shared token by at least 40
#[test]
fn category_bonus_dominates_single_token() {
    let scorer = LexicalScorer::new();
    let target = TargetItem::new("Telescope", "tripod")
        .with_category(Category::Electronics)
        .with_zipcode("10001");

    let same_category = item_named(1, "Radio", Category::Electronics, "90210");
    let shared_token = item_named(2, "Telescope", Category::Books, "90210");

    let a = scorer.score(&target, &same_category);
    let b = scorer.score(&target, &shared_token);
    assert_eq!(a, 50);
    assert_eq!(b, 10);
    assert!(a >= b + 40);
}

#[test]
fn example_scenario_against_seed_catalog() {
    let catalog = ItemCatalog::seeded();
    let target = TargetItem::new("Gaming Console", "used console")
        .with_category(Category::Electronics)
        .with_zipcode("10001");

    let ranked = catalog.find_similar(&target);
    let console = &ranked[0];
    assert_eq!(console.item.name, "Nintendo Switch Console");
    assert!(console.similarity_score >= 90);

    let bike = ranked
        .iter()
        .find(|scored| scored.item.name == "Mountain Bike")
        .expect("bike shares the zipcode");
    assert_eq!(bike.similarity_score, 20);
}
