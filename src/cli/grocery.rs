use crate::cli::{resolve_mode, Mode};
use crate::config::Config;
use anyhow::Context;
use foodwise_grocery::{generate, render_print_html, render_text, weekly_summary, Expense};
use foodwise_inventory::InventoryStore;
use foodwise_shared::FoodItem;
use std::path::PathBuf;
use time::OffsetDateTime;

pub fn grocery(
    config: Config,
    mode: Option<Mode>,
    print: bool,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let now = OffsetDateTime::now_utc();
    let mode = resolve_mode(&config, mode);

    let history = demo_history(mode, now);
    let list = generate(&history, &[]);
    tracing::info!(?mode, entries = list.len(), "generated grocery list");

    let rendering = if print {
        render_print_html(&list).context("could not render the printable list")?
    } else {
        render_text(&list)
    };

    match out {
        Some(path) => {
            std::fs::write(&path, &rendering)
                .with_context(|| format!("could not write {}", path.display()))?;
            tracing::info!(path = %path.display(), "grocery list written");
        }
        None => println!("{rendering}"),
    }

    if config.app.weekly_budget > 0.0 {
        let summary = weekly_summary(&demo_expenses(&history, now), config.app.weekly_budget, now);
        println!("\nWeekly budget: spent {:.2}, remaining {:.2}", summary.total_spent, summary.remaining);
        for (category, amount) in &summary.by_category {
            println!("  {category}: {amount:.2}");
        }
    }

    Ok(())
}

/// Demo purchase history: the mode's seed inventory with the staples
/// repeated, so frequency ranking has something to rank.
fn demo_history(mode: Mode, now: OffsetDateTime) -> Vec<FoodItem> {
    let store = match mode {
        Mode::Home => InventoryStore::seed_home(now),
        Mode::Restaurant => InventoryStore::seed_restaurant(now),
    };
    let mut history: Vec<FoodItem> = store.items().to_vec();
    let staples: Vec<FoodItem> = history.iter().take(2).cloned().collect();
    for _ in 0..2 {
        history.extend(staples.iter().cloned());
    }
    history
}

fn demo_expenses(history: &[FoodItem], now: OffsetDateTime) -> Vec<Expense> {
    history
        .iter()
        .map(|item| Expense {
            name: item.name.clone(),
            category: item.category.to_string(),
            amount: item.quantity * 10.0,
            date: now,
        })
        .collect()
}
