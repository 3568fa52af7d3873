use std::collections::HashMap;

/// Label applied to foods the veg-attributes file does not cover.
pub const UNCATEGORIZED: &str = "UNCATEGORIZED";

/// Turn a raw veg-category token (e.g. `VEGAN_VEGETARIAN_OR_OMNI`) into the
/// display label used for the plot legend: lowercase, underscores to spaces,
/// the literal pair "vegan vegetarian" written with a comma, first letter
/// capitalized. No per-word capitalization.
pub fn normalize_label(raw: &str) -> String {
    let s = raw
        .to_lowercase()
        .replace('_', " ")
        .replace("vegan vegetarian", "vegan, vegetarian");
    capitalize_first(&s)
}

/// Look up a food's category and normalize it, defaulting to
/// [`UNCATEGORIZED`] for foods absent from the map.
pub fn veg_category(categories: &HashMap<u64, String>, fdc_id: u64) -> String {
    let raw = categories
        .get(&fdc_id)
        .map(String::as_str)
        .unwrap_or(UNCATEGORIZED);
    normalize_label(raw)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
