pub mod category;
pub mod chart;
pub mod export;
pub mod fooddata;
pub mod models;
pub mod report;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::models::Food;

/// FoodData Central survey export (input A).
pub const SURVEY_FOOD_PATH: &str = "FoodData_Central_survey_food_json_2021-10-28.json";
/// Veg-category attributes keyed by fdc id (input B).
pub const VEG_ATTRIBUTES_PATH: &str =
    "VegAttributes_for_FoodData_Central_survey_and_sr_legacy_food_json_2021-10-28.json";
/// Intermediate plot table; the contract between the two stages.
pub const PLOT_DATA_PATH: &str = "plot_data.csv";
/// Rendered chart document.
pub const PLOT_HTML_PATH: &str = "plot.html";

/// Stage one: load both JSON inputs, print the diagnostic tables, and write
/// the plot table CSV.
pub fn prepare_data(
    survey_path: impl AsRef<Path>,
    veg_path: impl AsRef<Path>,
    csv_path: impl AsRef<Path>,
) -> Result<()> {
    let docs = fooddata::load_survey_foods(survey_path)?;
    let categories = fooddata::load_veg_categories(veg_path)?;

    report::print_nutrient_inventory(&fooddata::distinct_nutrients(&docs));

    let foods: Vec<Food> = docs.into_iter().map(|d| d.into_food()).collect();
    info!(foods = foods.len(), "derived metrics");

    report::print_energy_discrepancies(&report::foods_by_energy_discrepancy(&foods));

    let ranked = report::foods_by_protein_energy_fraction(&foods);
    report::print_protein_energy_fractions(&ranked);

    let rows = export::plot_rows(&ranked, &categories);
    export::write_csv(&rows, csv_path)
}

/// Stage two: read the plot table back and render the chart document.
pub fn render_plot(csv_path: impl AsRef<Path>, html_path: impl AsRef<Path>) -> Result<()> {
    let rows = export::read_csv(csv_path)?;
    chart::write_html(&rows, html_path)
}
