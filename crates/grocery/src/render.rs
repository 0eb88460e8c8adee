use crate::error::GroceryResult;
use askama::Template;
use foodwise_shared::GroceryItem;

/// Format a quantity the way people write shopping lists: whole numbers
/// without a decimal point, everything else as-is. Keeps the text artifact
/// re-parseable by the voice parser.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    }
}

fn line(item: &GroceryItem) -> String {
    format!("{} {} {}", format_quantity(item.quantity), item.unit, item.name)
}

/// The downloadable plain-text artifact: one `"<quantity> <unit> <name>"`
/// line per item, newline-separated, nothing else.
pub fn render_text(items: &[GroceryItem]) -> String {
    items.iter().map(line).collect::<Vec<_>>().join("\n")
}

#[derive(Template)]
#[template(path = "grocery_print.html")]
struct GroceryPrintTemplate {
    lines: Vec<String>,
}

/// The printable artifact: an HTML document with one list entry per item,
/// each preceded by an unchecked checkbox.
pub fn render_print_html(items: &[GroceryItem]) -> GroceryResult<String> {
    let template = GroceryPrintTemplate {
        lines: items.iter().map(line).collect(),
    };
    Ok(template.render()?)
}
