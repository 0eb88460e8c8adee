use crate::cli::{resolve_mode, Mode};
use crate::config::Config;
use crate::report::dashboard_report;
use foodwise_inventory::{Difficulty, InventoryStore, Recipe};
use time::OffsetDateTime;

pub fn dashboard(config: Config, mode: Option<Mode>, query: Option<String>) -> anyhow::Result<()> {
    let now = OffsetDateTime::now_utc();
    let mode = resolve_mode(&config, mode);

    let (title, store, recipes) = match mode {
        Mode::Home => (
            "Home Kitchen Dashboard",
            InventoryStore::seed_home(now),
            home_recipes(),
        ),
        Mode::Restaurant => (
            "Restaurant Inventory Dashboard",
            InventoryStore::seed_restaurant(now),
            Vec::new(),
        ),
    };

    tracing::info!(?mode, items = store.len(), "rendering dashboard");
    print!("{}", dashboard_report(title, &store, query.as_deref(), &recipes, now));

    Ok(())
}

fn home_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            name: "Chicken Apple Salad".to_string(),
            ingredients: vec![
                "Chicken Breast".to_string(),
                "Apples".to_string(),
                "Lettuce".to_string(),
            ],
            difficulty: Difficulty::Easy,
            prep_time: "20 mins".to_string(),
        },
        Recipe {
            name: "French Toast".to_string(),
            ingredients: vec![
                "Bread".to_string(),
                "Milk".to_string(),
                "Eggs".to_string(),
            ],
            difficulty: Difficulty::Easy,
            prep_time: "15 mins".to_string(),
        },
    ]
}
