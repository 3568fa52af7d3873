use std::collections::HashMap;

use fdc_protein_plot::category::{normalize_label, veg_category, UNCATEGORIZED};
use fdc_protein_plot::chart::CATEGORY_COLORS;

#[test]
fn simple_tokens_are_lowercased_and_capitalized() {
    assert_eq!(normalize_label("VEGAN"), "Vegan");
    assert_eq!(normalize_label("VEGETARIAN"), "Vegetarian");
    assert_eq!(normalize_label("OMNI"), "Omni");
}

#[test]
fn vegan_vegetarian_pair_gets_a_comma() {
    assert_eq!(normalize_label("VEGAN_VEGETARIAN"), "Vegan, vegetarian");
    assert_eq!(
        normalize_label("VEGAN_VEGETARIAN_OR_OMNI"),
        "Vegan, vegetarian or omni"
    );
}

#[test]
fn underscores_become_spaces_without_per_word_capitalization() {
    assert_eq!(normalize_label("VEGAN_OR_VEGETARIAN"), "Vegan or vegetarian");
    assert_eq!(normalize_label("VEGAN_OR_OMNI"), "Vegan or omni");
}

#[test]
fn unmapped_food_is_uncategorized() {
    let map: HashMap<u64, String> = HashMap::new();
    assert_eq!(veg_category(&map, 42), "Uncategorized");
    assert_eq!(normalize_label(UNCATEGORIZED), "Uncategorized");
}

#[test]
fn mapped_food_uses_its_label() {
    let mut map = HashMap::new();
    map.insert(7u64, "VEGAN_VEGETARIAN".to_string());
    assert_eq!(veg_category(&map, 7), "Vegan, vegetarian");
}

#[test]
fn dataset_tokens_cover_the_chart_color_domain() {
    let raw_tokens = [
        "VEGAN",
        "VEGETARIAN",
        "OMNI",
        "VEGAN_OR_VEGETARIAN",
        "VEGAN_OR_OMNI",
        "VEGAN_VEGETARIAN_OR_OMNI",
        UNCATEGORIZED,
    ];
    let domain: Vec<&str> = CATEGORY_COLORS.iter().map(|(label, _)| *label).collect();
    for token in raw_tokens {
        let label = normalize_label(token);
        assert!(
            domain.contains(&label.as_str()),
            "{label} missing from the chart domain"
        );
    }
    assert_eq!(domain.len(), 7);
}
