use foodwise::report::dashboard_report;
use foodwise_inventory::{Difficulty, InventoryStore, Recipe};
use time::macros::datetime;

#[test]
fn restaurant_report_lists_all_buckets() {
    let now = datetime!(2026-08-24 07:00 UTC);
    let store = InventoryStore::seed_restaurant(now);
    let report = dashboard_report("Restaurant Inventory Dashboard", &store, None, &[], now);

    assert!(report.contains("== Restaurant Inventory Dashboard =="));
    assert!(report.contains("6 items tracked, 2 expiring soon, 1 expired"));
    assert!(report.contains("Salmon Fillets - Tomorrow"));
    assert!(report.contains("Items (6):"));
}

#[test]
fn suggestions_appear_when_ingredients_are_on_hand() {
    let now = datetime!(2026-08-24 07:00 UTC);
    let store = InventoryStore::seed_home(now);
    let recipes = vec![Recipe {
        name: "French Toast".to_string(),
        ingredients: vec!["Bread".to_string(), "Milk".to_string(), "Eggs".to_string()],
        difficulty: Difficulty::Easy,
        prep_time: "15 mins".to_string(),
    }];
    let report = dashboard_report("Home Kitchen Dashboard", &store, None, &recipes, now);
    assert!(report.contains("French Toast (Easy, 15 mins) - have Bread, Milk"));
}
