use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::category;
use crate::models::{Food, PlotRow};

/// Detail page for a food on FoodData Central.
pub fn detail_url(fdc_id: u64) -> String {
    format!("https://fdc.nal.usda.gov/fdc-app.html#/food-details/{fdc_id}")
}

/// Build one plot row per food with a defined combined protein-energy
/// fraction, preserving the order of `ranked`.
pub fn plot_rows(ranked: &[&Food], categories: &HashMap<u64, String>) -> Vec<PlotRow> {
    ranked
        .iter()
        .filter_map(|food| {
            let fraction = food.metrics.protein_energy_fraction?;
            let protein_g = food.nutrients.protein_g?;
            Some(PlotRow {
                fdc_id: food.fdc_id,
                description: food.description.clone(),
                protein_g,
                protein_energy_percent: fraction * 100.0,
                veg_category: category::veg_category(categories, food.fdc_id),
                url: detail_url(food.fdc_id),
            })
        })
        .collect()
}

/// Write the plot table as CSV. The leading unnamed column is a 0-based row
/// index; it carries no meaning and is ignored on read-back.
pub fn write_csv(rows: &[PlotRow], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;

    writer.write_record([
        "",
        "fdc_id",
        "description",
        "protein_g",
        "protein_energy_percent",
        "veg_category",
        "url",
    ])?;
    for (index, row) in rows.iter().enumerate() {
        writer.write_record([
            index.to_string(),
            row.fdc_id.to_string(),
            row.description.clone(),
            row.protein_g.to_string(),
            row.protein_energy_percent.to_string(),
            row.veg_category.clone(),
            row.url.clone(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("write {}", path.display()))?;
    info!(rows = rows.len(), path = %path.display(), "wrote plot table");
    Ok(())
}

/// Read the plot table back. Columns are matched by header name, so the
/// index column is skipped.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<PlotRow>> {
    let path = path.as_ref();
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("open {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: PlotRow = record.with_context(|| format!("parse {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}
