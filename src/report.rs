use crate::models::Food;

/// Descriptions are clipped to this many chars in the console tables.
const DESCRIPTION_WIDTH: usize = 50;

/// Foods ranked by ascending energy discrepancy. Foods whose discrepancy is
/// undefined (a missing stated or constituent energy) are left out.
pub fn foods_by_energy_discrepancy(foods: &[Food]) -> Vec<&Food> {
    let mut ranked: Vec<&Food> = foods
        .iter()
        .filter(|f| f.metrics.energy_discrepancy_kcal.is_some())
        .collect();
    ranked.sort_by(|a, b| {
        a.metrics
            .energy_discrepancy_kcal
            .unwrap_or(f64::INFINITY)
            .total_cmp(&b.metrics.energy_discrepancy_kcal.unwrap_or(f64::INFINITY))
    });
    ranked
}

/// Foods with a defined combined protein-energy fraction, ascending by that
/// fraction. This ordering also fixes the row order of the exported table.
pub fn foods_by_protein_energy_fraction(foods: &[Food]) -> Vec<&Food> {
    let mut ranked: Vec<&Food> = foods
        .iter()
        .filter(|f| f.metrics.protein_energy_fraction.is_some())
        .collect();
    ranked.sort_by(|a, b| {
        a.metrics
            .protein_energy_fraction
            .unwrap_or(f64::INFINITY)
            .total_cmp(&b.metrics.protein_energy_fraction.unwrap_or(f64::INFINITY))
    });
    ranked
}

/// Table of all distinct (nutrient name, unit) pairs in the dataset.
pub fn print_nutrient_inventory(pairs: &[(String, String)]) {
    println!("All nutrients in dataset:");
    let rows: Vec<Vec<String>> = pairs
        .iter()
        .map(|(name, unit)| vec![name.clone(), unit.clone()])
        .collect();
    println!("{}", tabulate(&rows));
}

/// Table of foods by ascending energy discrepancy.
pub fn print_energy_discrepancies(ranked: &[&Food]) {
    println!("Discrepancies between given energy and calculated sum:");
    let rows: Vec<Vec<String>> = ranked
        .iter()
        .map(|f| {
            vec![
                clip(&f.description),
                f.metrics.energy_discrepancy_kcal.unwrap_or(0.0).to_string(),
            ]
        })
        .collect();
    println!("{}", tabulate(&rows));
}

/// Table of foods by ascending combined protein-energy fraction, with both
/// component estimates shown next to the combined value.
pub fn print_protein_energy_fractions(ranked: &[&Food]) {
    println!("Protein energy fractions:");
    let rows: Vec<Vec<String>> = ranked
        .iter()
        .map(|f| {
            vec![
                clip(&f.description),
                percent(f.metrics.protein_energy_fraction_given),
                percent(f.metrics.protein_energy_fraction_constituents),
                "->".to_string(),
                percent(f.metrics.protein_energy_fraction),
            ]
        })
        .collect();
    println!("{}", tabulate(&rows));
}

fn clip(description: &str) -> String {
    description.chars().take(DESCRIPTION_WIDTH).collect()
}

fn percent(fraction: Option<f64>) -> String {
    match fraction {
        Some(f) => format!("{:.1}%", f * 100.0),
        None => "-".to_string(),
    }
}

/// Plain-text table: left-aligned columns padded to the widest cell, with a
/// dashed rule above and below the body.
fn tabulate(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&rule);
    out
}
