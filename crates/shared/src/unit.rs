/// Canonical unit tokens offered by the manual-entry form.
pub const UNIT_OPTIONS: &[&str] = &[
    "pcs", "kg", "g", "l", "ml", "tbsp", "tsp", "cups", "dozen",
];

pub const DEFAULT_UNIT: &str = "pcs";

/// Collapse spoken synonyms onto the canonical token. Unknown tokens pass
/// through unchanged rather than failing.
pub fn normalize_unit(token: &str) -> &str {
    match token {
        "piece" | "pieces" => "pcs",
        "liter" | "liters" => "l",
        other => other,
    }
}
