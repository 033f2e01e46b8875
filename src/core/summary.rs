use crate::models::FilterSpec;

/// Separator between summary sections
const SECTION_SEPARATOR: &str = " | ";

/// Separator between category labels, distinct from the price separator
const CATEGORY_SEPARATOR: &str = "/";

/// Render a price tier as a repeated currency symbol (tier 2 -> "$$")
#[inline]
pub fn price_symbol(tier: u8) -> String {
    "$".repeat(tier as usize)
}

/// Render a deterministic, human-readable description of the active filters
///
/// Sections appear in a fixed order (price, category, rating), each present
/// only when its predicate is active. Price tiers are sorted ascending.
/// Returns the empty string when no predicate is active. Purely for
/// display; has no effect on filtering or ranking.
pub fn summarize_filters(filters: &FilterSpec) -> String {
    let mut sections: Vec<String> = Vec::new();

    if filters.price_active() {
        let mut tiers = filters.price_tiers.clone();
        tiers.sort_unstable();
        let symbols: Vec<String> = tiers.iter().map(|tier| price_symbol(*tier)).collect();
        sections.push(format!("Price: {}", symbols.join(", ")));
    }

    if filters.category_active() {
        let labels: Vec<&str> = filters
            .categories
            .iter()
            .map(|category| category.label())
            .collect();
        sections.push(format!("Category: {}", labels.join(CATEGORY_SEPARATOR)));
    }

    if filters.rating_active() {
        let min_rating = filters.min_rating.unwrap_or(0.0);
        sections.push(format!("Rating: {:.1}+", min_rating));
    }

    sections.join(SECTION_SEPARATOR)
}
