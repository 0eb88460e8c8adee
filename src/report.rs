use foodwise_inventory::{
    classify, days_left_label, suggest_meals, warning_schedule, InventoryStore, Recipe,
};
use time::OffsetDateTime;

/// Plain-text rendering of a dashboard: stats line, expiry warnings,
/// (optionally search-filtered) item listing and meal suggestions.
pub fn dashboard_report(
    title: &str,
    store: &InventoryStore,
    query: Option<&str>,
    recipes: &[Recipe],
    now: OffsetDateTime,
) -> String {
    let classification = classify(store.items(), now);
    let counts = classification.counts;

    let mut out = String::new();
    out.push_str(&format!("== {title} ==\n"));
    out.push_str(&format!(
        "{} items tracked, {} expiring soon, {} expired\n",
        counts.total, counts.warning, counts.expired
    ));

    let schedule = warning_schedule(store.items(), now);
    if !schedule.is_empty() {
        out.push_str("\nExpiry warnings:\n");
        for entry in &schedule {
            out.push_str(&format!(
                "  {} - {}\n",
                entry.name,
                days_left_label(entry.days_left)
            ));
        }
    }

    let items = match query {
        Some(query) => store.search(query),
        None => store.items().iter().collect(),
    };
    out.push_str(&format!("\nItems ({}):\n", items.len()));
    for item in items {
        out.push_str(&format!(
            "  {} [{}] {} {}, expires {}\n",
            item.name,
            item.category,
            item.quantity,
            item.unit,
            item.expiry.date()
        ));
    }

    let suggestions = suggest_meals(recipes, store.items());
    if !suggestions.is_empty() {
        out.push_str("\nMeal suggestions:\n");
        for suggestion in &suggestions {
            out.push_str(&format!(
                "  {} ({}, {}) - have {}\n",
                suggestion.recipe.name,
                suggestion.recipe.difficulty,
                suggestion.recipe.prep_time,
                suggestion.available.join(", ")
            ));
        }
    }

    out
}
