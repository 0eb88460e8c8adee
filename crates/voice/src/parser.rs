use crate::categorize::infer_category;
use foodwise_shared::{normalize_unit, FoodCategory, DEFAULT_UNIT};
use serde::{Deserialize, Serialize};

/// Unit tokens recognized in spoken input: the canonical form options plus
/// the synonyms people actually say. Read left-to-right on ambiguity.
pub const SPOKEN_UNITS: &[&str] = &[
    "pcs", "piece", "pieces", "kg", "g", "l", "liter", "liters", "ml", "tbsp", "tsp", "cup",
    "cups", "dozen",
];

/// Structured fields extracted from one transcribed utterance, ready for
/// direct insertion into the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    pub quantity: f64,
    pub unit: String,
    pub name: String,
    pub category: FoodCategory,
}

/// Best-effort parse of a phrase shaped like `"<quantity> <unit> <name>"`,
/// tolerant of a missing quantity or unit. Never fails: ambiguity resolves
/// to defaults (quantity 1, unit `pcs`, category `Other`), not errors.
pub fn parse(utterance: &str) -> ParsedItem {
    let lowered = utterance.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let Some(first) = tokens.first() else {
        return ParsedItem {
            quantity: 1.0,
            unit: DEFAULT_UNIT.to_string(),
            name: String::new(),
            category: FoodCategory::Other,
        };
    };

    let (quantity, unit, name_tokens) = match first.parse::<f64>() {
        // No leading number: the whole utterance is the name.
        Err(_) => (1.0, DEFAULT_UNIT.to_string(), &tokens[..]),
        Ok(quantity) => match tokens.get(1) {
            Some(second) if is_unit_token(second) => {
                (quantity, normalize_unit(second).to_string(), &tokens[2..])
            }
            _ => (quantity, DEFAULT_UNIT.to_string(), &tokens[1..]),
        },
    };

    let name = capitalize(&name_tokens.join(" "));
    let category = infer_category(&name);

    ParsedItem {
        quantity,
        unit,
        name,
        category,
    }
}

/// Exact match against the allow-list first, then substring containment,
/// both read left-to-right.
fn is_unit_token(token: &str) -> bool {
    SPOKEN_UNITS.iter().any(|unit| token == *unit)
        || SPOKEN_UNITS.iter().any(|unit| token.contains(unit))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
