use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::models::{Food, NutrientAmounts};

/// Nutrient names this pipeline extracts from each survey record.
pub const TARGET_NUTRIENTS: [&str; 6] = [
    "Energy",
    "Total lipid (fat)",
    "Protein",
    "Carbohydrate, by difference",
    "Fiber, total dietary",
    "Alcohol, ethyl",
];

/// Top-level shape of the FoodData Central survey export.
#[derive(Debug, Deserialize)]
pub struct SurveyFile {
    #[serde(rename = "SurveyFoods")]
    pub survey_foods: Vec<SurveyFoodDoc>,
}

/// One food record as it appears on the wire.
#[derive(Debug, Deserialize)]
pub struct SurveyFoodDoc {
    #[serde(rename = "fdcId")]
    pub fdc_id: u64,
    pub description: String,
    #[serde(rename = "foodNutrients")]
    pub food_nutrients: Vec<FoodNutrientDoc>,
}

/// One entry of a record's nutrient list.
#[derive(Debug, Deserialize)]
pub struct FoodNutrientDoc {
    pub nutrient: NutrientDoc,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct NutrientDoc {
    pub name: String,
    #[serde(rename = "unitName")]
    pub unit_name: String,
}

/// One entry of the veg-attributes file.
#[derive(Debug, Deserialize)]
struct VegAttributeDoc {
    #[serde(rename = "fdcId")]
    fdc_id: u64,
    #[serde(rename = "vegCategory")]
    veg_category: String,
}

/// Collect a record's nutrient amounts keyed by (name, unit), restricted to
/// the given target names. Targets absent from the record are simply absent
/// from the result; callers must treat every nutrient as optional.
pub fn extract_nutrients(
    nutrients: &[FoodNutrientDoc],
    names: &[&str],
) -> HashMap<(String, String), f64> {
    nutrients
        .iter()
        .filter(|n| names.contains(&n.nutrient.name.as_str()))
        .map(|n| {
            (
                (n.nutrient.name.clone(), n.nutrient.unit_name.clone()),
                n.amount,
            )
        })
        .collect()
}

impl SurveyFoodDoc {
    /// Pick out the six relevant nutrients by exact (name, unit) pair.
    pub fn nutrient_amounts(&self) -> NutrientAmounts {
        let by_name_unit = extract_nutrients(&self.food_nutrients, &TARGET_NUTRIENTS);
        let get = |name: &str, unit: &str| {
            by_name_unit
                .get(&(name.to_string(), unit.to_string()))
                .copied()
        };
        NutrientAmounts {
            energy_kcal: get("Energy", "kcal"),
            protein_g: get("Protein", "g"),
            carb_by_diff_g: get("Carbohydrate, by difference", "g"),
            total_lipid_g: get("Total lipid (fat)", "g"),
            fiber_g: get("Fiber, total dietary", "g"),
            alcohol_g: get("Alcohol, ethyl", "g"),
        }
    }

    pub fn into_food(self) -> Food {
        let nutrients = self.nutrient_amounts();
        Food::new(self.fdc_id, self.description, nutrients)
    }
}

/// Load the survey food export. A record missing a guaranteed key is a fatal
/// deserialization error; missing nutrients are not.
pub fn load_survey_foods(path: impl AsRef<Path>) -> Result<Vec<SurveyFoodDoc>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read survey food file {}", path.display()))?;
    let file: SurveyFile = serde_json::from_str(&raw)
        .with_context(|| format!("parse survey food file {}", path.display()))?;
    debug!(count = file.survey_foods.len(), "loaded survey foods");
    Ok(file.survey_foods)
}

/// Load the veg-attributes file into an fdc id -> raw category label map.
pub fn load_veg_categories(path: impl AsRef<Path>) -> Result<HashMap<u64, String>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read veg attributes file {}", path.display()))?;
    let entries: Vec<VegAttributeDoc> = serde_json::from_str(&raw)
        .with_context(|| format!("parse veg attributes file {}", path.display()))?;
    debug!(count = entries.len(), "loaded veg categories");
    Ok(entries
        .into_iter()
        .map(|e| (e.fdc_id, e.veg_category))
        .collect())
}

/// All distinct (nutrient name, unit) pairs present across the dataset, sorted.
pub fn distinct_nutrients(foods: &[SurveyFoodDoc]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = foods
        .iter()
        .flat_map(|f| f.food_nutrients.iter())
        .map(|n| (n.nutrient.name.clone(), n.nutrient.unit_name.clone()))
        .collect();
    pairs.sort();
    pairs.dedup();
    pairs
}
