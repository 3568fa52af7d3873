use serde::{Deserialize, Serialize};

/// Kcal per gram of carbohydrate.
const CARB_KCAL_PER_G: f64 = 4.0;
/// Kcal per gram of protein.
const PROTEIN_KCAL_PER_G: f64 = 4.0;
/// Kcal per gram of fat.
const FAT_KCAL_PER_G: f64 = 9.0;
/// Kcal per gram of dietary fiber (counted as zero here).
const FIBER_KCAL_PER_G: f64 = 0.0;
/// Kcal per gram of ethanol.
const ALCOHOL_KCAL_PER_G: f64 = 7.0;

/// The six nutrients this analysis cares about, per food.
///
/// Survey records are incomplete, so every field is optional. Missing values
/// propagate as `None` through the derived accessors rather than being
/// substituted with zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NutrientAmounts {
    /// Stated energy (kcal)
    pub energy_kcal: Option<f64>,
    /// Protein (g)
    pub protein_g: Option<f64>,
    /// Carbohydrate, by difference (g)
    pub carb_by_diff_g: Option<f64>,
    /// Total lipid / fat (g)
    pub total_lipid_g: Option<f64>,
    /// Fiber, total dietary (g)
    pub fiber_g: Option<f64>,
    /// Alcohol, ethyl (g)
    pub alcohol_g: Option<f64>,
}

impl NutrientAmounts {
    pub fn carb_kcal(&self) -> Option<f64> {
        self.carb_by_diff_g.map(|g| g * CARB_KCAL_PER_G)
    }

    pub fn protein_kcal(&self) -> Option<f64> {
        self.protein_g.map(|g| g * PROTEIN_KCAL_PER_G)
    }

    pub fn fat_kcal(&self) -> Option<f64> {
        self.total_lipid_g.map(|g| g * FAT_KCAL_PER_G)
    }

    pub fn fiber_kcal(&self) -> Option<f64> {
        self.fiber_g.map(|g| g * FIBER_KCAL_PER_G)
    }

    pub fn alcohol_kcal(&self) -> Option<f64> {
        self.alcohol_g.map(|g| g * ALCOHOL_KCAL_PER_G)
    }

    /// Energy recomputed from the individual macros. `None` if any
    /// contributor is missing.
    pub fn energy_from_constituents_kcal(&self) -> Option<f64> {
        Some(
            self.carb_kcal()?
                + self.protein_kcal()?
                + self.fat_kcal()?
                + self.fiber_kcal()?
                + self.alcohol_kcal()?,
        )
    }
}

/// Metrics derived from a food's [`NutrientAmounts`].
///
/// Computed once at construction; all inputs are immutable and the arithmetic
/// is a handful of scalar ops, so there is nothing worth caching lazily.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivedMetrics {
    /// `|constituent energy − stated energy|` (kcal)
    pub energy_discrepancy_kcal: Option<f64>,
    /// Protein kcal over stated energy
    pub protein_energy_fraction_given: Option<f64>,
    /// Protein kcal over constituent-derived energy
    pub protein_energy_fraction_constituents: Option<f64>,
    /// Mean of the two estimates; defined only when both are.
    pub protein_energy_fraction: Option<f64>,
}

impl DerivedMetrics {
    pub fn compute(n: &NutrientAmounts) -> Self {
        let constituents = n.energy_from_constituents_kcal();

        let energy_discrepancy_kcal = match (constituents, n.energy_kcal) {
            (Some(c), Some(e)) => Some((c - e).abs()),
            _ => None,
        };

        let protein_energy_fraction_given = fraction(n.protein_kcal(), n.energy_kcal);
        let protein_energy_fraction_constituents = fraction(n.protein_kcal(), constituents);

        // Both estimates are required; a single one is not trusted on its own
        // because stated and recomputed energies disagree for many foods.
        let protein_energy_fraction = match (
            protein_energy_fraction_given,
            protein_energy_fraction_constituents,
        ) {
            (Some(a), Some(b)) => Some((a + b) / 2.0),
            _ => None,
        };

        Self {
            energy_discrepancy_kcal,
            protein_energy_fraction_given,
            protein_energy_fraction_constituents,
            protein_energy_fraction,
        }
    }
}

/// A ratio that is undefined when either side is missing or the denominator
/// is zero.
fn fraction(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}

/// One survey food with its extracted nutrients and derived metrics.
#[derive(Debug, Clone)]
pub struct Food {
    pub fdc_id: u64,
    pub description: String,
    pub nutrients: NutrientAmounts,
    pub metrics: DerivedMetrics,
}

impl Food {
    pub fn new(fdc_id: u64, description: String, nutrients: NutrientAmounts) -> Self {
        let metrics = DerivedMetrics::compute(&nutrients);
        Self {
            fdc_id,
            description,
            nutrients,
            metrics,
        }
    }
}

/// One row of the exported plot table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRow {
    pub fdc_id: u64,
    pub description: String,
    /// Protein (g)
    pub protein_g: f64,
    /// Combined protein-energy fraction, as a percentage
    pub protein_energy_percent: f64,
    /// Normalized veg category label, e.g. "Vegan, vegetarian"
    pub veg_category: String,
    /// FoodData Central detail page for this food
    pub url: String,
}
