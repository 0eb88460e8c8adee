use foodwise_shared::FoodCategory;
use regex::Regex;
use std::sync::LazyLock;

/// Ordered keyword rules for category inference, evaluated first-match-wins
/// over the lowercased item name. Order matters: some keywords overlap
/// (e.g. "coriander" sits in the fresh-produce rule and the herb/spice
/// rule), and the earlier rule always takes precedence.
static CATEGORY_RULES: LazyLock<Vec<(Regex, FoodCategory)>> = LazyLock::new(|| {
    [
        (
            r"apple|banana|orange|mango|grape|lemon|lime|tomato|potato|onion|garlic|carrot|spinach|lettuce|cucumber|capsicum|pepper|broccoli|cauliflower|coriander|peas|beans|greens",
            FoodCategory::FruitsAndVegetables,
        ),
        (
            r"milk|cheese|paneer|yogurt|curd|butter|cream|ghee|egg",
            FoodCategory::DairyAndEggs,
        ),
        (
            r"chicken|mutton|lamb|beef|pork|fish|salmon|prawn|shrimp|crab|meat|steak",
            FoodCategory::MeatAndSeafood,
        ),
        (
            r"bread|bun|cake|croissant|muffin|bagel|pastry",
            FoodCategory::Bakery,
        ),
        // Dried herbs and spices; fresh produce keywords above win first.
        (
            r"coriander|cumin|turmeric|cardamom|clove|cinnamon|masala|herb|spice",
            FoodCategory::PantryItems,
        ),
        (
            r"rice|flour|atta|pasta|noodle|lentil|dal|sugar|salt|oil",
            FoodCategory::PantryItems,
        ),
        (r"frozen|ice cream", FoodCategory::FrozenFood),
        (
            r"juice|soda|water|tea|coffee",
            FoodCategory::Beverages,
        ),
        (
            r"chips|biscuit|cookie|chocolate|candy|popcorn|namkeen",
            FoodCategory::Snacks,
        ),
        (
            r"ketchup|sauce|mayo|mustard|pickle|jam|honey|chutney",
            FoodCategory::Condiments,
        ),
    ]
    .into_iter()
    .map(|(pattern, category)| {
        let regex = Regex::new(pattern).unwrap_or_else(|e| panic!("invalid rule {pattern}: {e}"));
        (regex, category)
    })
    .collect()
});

/// Infer a category from a free-text item name. Falls back to `Other` when
/// no rule matches.
pub fn infer_category(name: &str) -> FoodCategory {
    let name = name.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(regex, _)| regex.is_match(&name))
        .map(|(_, category)| *category)
        .unwrap_or(FoodCategory::Other)
}

/// The rule table in evaluation order, exposed so precedence can be
/// inspected and tested directly.
pub fn rules() -> &'static [(Regex, FoodCategory)] {
    &CATEGORY_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_matches() {
        assert_eq!(infer_category("Tomatoes"), FoodCategory::FruitsAndVegetables);
        assert_eq!(infer_category("Paneer"), FoodCategory::DairyAndEggs);
        assert_eq!(infer_category("Salmon Fillets"), FoodCategory::MeatAndSeafood);
        assert_eq!(infer_category("Whole Wheat Bread"), FoodCategory::Bakery);
        assert_eq!(infer_category("Basmati Rice"), FoodCategory::PantryItems);
        assert_eq!(infer_category("Orange Juice"), FoodCategory::FruitsAndVegetables);
        assert_eq!(infer_category("Apple Juice"), FoodCategory::FruitsAndVegetables);
        assert_eq!(infer_category("Green Tea"), FoodCategory::Beverages);
        assert_eq!(infer_category("Potato Chips"), FoodCategory::FruitsAndVegetables);
        assert_eq!(infer_category("Dark Chocolate"), FoodCategory::Snacks);
        assert_eq!(infer_category("Frozen Peas"), FoodCategory::FruitsAndVegetables);
    }

    #[test]
    fn unmatched_names_fall_back_to_other() {
        assert_eq!(infer_category("Aluminium Foil"), FoodCategory::Other);
        assert_eq!(infer_category(""), FoodCategory::Other);
    }

    #[test]
    fn overlapping_keywords_resolve_by_rule_order() {
        // "coriander" appears in both the produce rule and the herb/spice
        // rule; the produce rule comes first and wins.
        assert_eq!(infer_category("Coriander"), FoodCategory::FruitsAndVegetables);
        let matching: Vec<FoodCategory> = rules()
            .iter()
            .filter(|(regex, _)| regex.is_match("coriander"))
            .map(|(_, category)| *category)
            .collect();
        assert_eq!(
            matching,
            vec![FoodCategory::FruitsAndVegetables, FoodCategory::PantryItems]
        );
    }

    #[test]
    fn matching_is_case_insensitive_via_lowercasing() {
        assert_eq!(infer_category("PANEER"), FoodCategory::DairyAndEggs);
    }
}
