use fdc_protein_plot::models::{DerivedMetrics, Food, NutrientAmounts};

fn full_macros() -> NutrientAmounts {
    NutrientAmounts {
        energy_kcal: Some(165.0),
        protein_g: Some(10.0),
        carb_by_diff_g: Some(20.0),
        total_lipid_g: Some(5.0),
        fiber_g: Some(3.0),
        alcohol_g: Some(0.0),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn constituent_energy_uses_fixed_coefficients() {
    let n = full_macros();
    // 20*4 + 10*4 + 5*9 + 3*0 + 0*7
    assert_close(n.energy_from_constituents_kcal().unwrap(), 165.0);
    assert_close(n.carb_kcal().unwrap(), 80.0);
    assert_close(n.protein_kcal().unwrap(), 40.0);
    assert_close(n.fat_kcal().unwrap(), 45.0);
    assert_close(n.fiber_kcal().unwrap(), 0.0);
    assert_close(n.alcohol_kcal().unwrap(), 0.0);
}

#[test]
fn fiber_contributes_no_energy() {
    let mut n = full_macros();
    n.fiber_g = Some(100.0);
    assert_close(n.energy_from_constituents_kcal().unwrap(), 165.0);
}

#[test]
fn consistent_food_has_zero_discrepancy_and_matching_estimates() {
    let m = DerivedMetrics::compute(&full_macros());
    assert_close(m.energy_discrepancy_kcal.unwrap(), 0.0);
    assert_close(m.protein_energy_fraction_given.unwrap(), 40.0 / 165.0);
    assert_close(m.protein_energy_fraction_constituents.unwrap(), 40.0 / 165.0);
    assert_close(m.protein_energy_fraction.unwrap(), 40.0 / 165.0);
    // sanity: that is about 24.2%
    assert!((m.protein_energy_fraction.unwrap() * 100.0 - 24.2).abs() < 0.1);
}

#[test]
fn missing_stated_energy_undefines_combined_fraction() {
    let mut n = full_macros();
    n.energy_kcal = None;
    let m = DerivedMetrics::compute(&n);
    assert!(m.protein_energy_fraction_given.is_none());
    // the constituent-based estimate alone is not enough
    assert!(m.protein_energy_fraction_constituents.is_some());
    assert!(m.protein_energy_fraction.is_none());
    assert!(m.energy_discrepancy_kcal.is_none());
}

#[test]
fn zero_stated_energy_undefines_given_fraction() {
    let mut n = full_macros();
    n.energy_kcal = Some(0.0);
    let m = DerivedMetrics::compute(&n);
    assert!(m.protein_energy_fraction_given.is_none());
    assert!(m.protein_energy_fraction.is_none());
}

#[test]
fn missing_macro_undefines_constituent_estimate() {
    let mut n = full_macros();
    n.alcohol_g = None;
    assert!(n.energy_from_constituents_kcal().is_none());
    let m = DerivedMetrics::compute(&n);
    assert!(m.protein_energy_fraction_constituents.is_none());
    assert!(m.protein_energy_fraction.is_none());
    assert!(m.energy_discrepancy_kcal.is_none());
    // the given-energy estimate is still defined on its own
    assert!(m.protein_energy_fraction_given.is_some());
}

#[test]
fn missing_protein_undefines_both_estimates() {
    let mut n = full_macros();
    n.protein_g = None;
    let m = DerivedMetrics::compute(&n);
    assert!(m.protein_energy_fraction_given.is_none());
    assert!(m.protein_energy_fraction_constituents.is_none());
    assert!(m.protein_energy_fraction.is_none());
}

#[test]
fn discrepancy_is_absolute() {
    let mut n = full_macros();
    n.energy_kcal = Some(200.0);
    let m = DerivedMetrics::compute(&n);
    assert_close(m.energy_discrepancy_kcal.unwrap(), 35.0);

    n.energy_kcal = Some(100.0);
    let m = DerivedMetrics::compute(&n);
    assert_close(m.energy_discrepancy_kcal.unwrap(), 65.0);
}

#[test]
fn combined_fraction_averages_disagreeing_estimates() {
    let mut n = full_macros();
    // stated energy double the constituent sum
    n.energy_kcal = Some(330.0);
    let m = DerivedMetrics::compute(&n);
    assert_close(m.protein_energy_fraction_given.unwrap(), 40.0 / 330.0);
    assert_close(m.protein_energy_fraction_constituents.unwrap(), 40.0 / 165.0);
    assert_close(
        m.protein_energy_fraction.unwrap(),
        (40.0 / 330.0 + 40.0 / 165.0) / 2.0,
    );
}

#[test]
fn food_computes_metrics_at_construction() {
    let food = Food::new(12345, "Oat bran, uncooked".to_string(), full_macros());
    assert_eq!(food.fdc_id, 12345);
    assert!(food.metrics.protein_energy_fraction.is_some());
}
