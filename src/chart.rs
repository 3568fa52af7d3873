use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::info;

use crate::models::PlotRow;

const CHART_WIDTH: u32 = 1080;
const CHART_HEIGHT: u32 = 550;
const MARK_SIZE: u32 = 40;

/// Fixed legend domain and color range, in legend order. Labels outside this
/// set still render; they just fall outside the fixed scale.
pub const CATEGORY_COLORS: [(&str, &str); 7] = [
    ("Vegan", "#54a24b"),
    ("Vegetarian", "#f58518"),
    ("Omni", "#e45756"),
    ("Vegan or vegetarian", "#f2cf5b"),
    ("Vegan or omni", "#9e765f"),
    ("Vegan, vegetarian or omni", "#d67195"),
    ("Uncategorized", "#79706e"),
];

/// Build the Vega-Lite spec for the protein-energy scatter plot.
///
/// The legend-bound point selection starts empty, which Vega-Lite treats as
/// "everything selected": all points render at full opacity until a legend
/// entry is clicked, then unselected categories drop to 10%.
pub fn chart_spec(rows: &[PlotRow]) -> Result<Value> {
    let values = serde_json::to_value(rows).context("serialize plot rows")?;
    let domain: Vec<&str> = CATEGORY_COLORS.iter().map(|(label, _)| *label).collect();
    let range: Vec<&str> = CATEGORY_COLORS.iter().map(|(_, color)| *color).collect();

    Ok(json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "width": CHART_WIDTH,
        "height": CHART_HEIGHT,
        "data": {"values": values},
        "mark": {"type": "circle", "size": MARK_SIZE},
        "params": [
            {
                "name": "category_select",
                "select": {"type": "point", "fields": ["veg_category"]},
                "bind": "legend"
            },
            {
                "name": "pan_zoom",
                "select": "interval",
                "bind": "scales"
            }
        ],
        "encoding": {
            "x": {
                "field": "protein_energy_percent",
                "type": "quantitative",
                "title": "Protein energy in % of total"
            },
            // Bound to grams but titled as a percentage; the source chart
            // shipped with this label and it is kept as-is.
            "y": {
                "field": "protein_g",
                "type": "quantitative",
                "title": "Protein weight in % of total"
            },
            "color": {
                "field": "veg_category",
                "type": "nominal",
                "title": "Category",
                "scale": {"domain": domain, "range": range}
            },
            "opacity": {
                "condition": {"param": "category_select", "value": 1},
                "value": 0.1
            },
            "tooltip": [
                {"field": "description", "type": "nominal"},
                {"field": "veg_category", "type": "nominal"},
                {"field": "fdc_id", "type": "quantitative"}
            ],
            "href": {"field": "url", "type": "nominal"}
        },
        // Point links open in a new browsing context.
        "usermeta": {"embedOptions": {"loader": {"target": "_blank"}}}
    }))
}

/// Single-page template; the spec is embedded as a JS object literal.
const HTML_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
  <style>#vis.vega-embed { width: 100%; display: flex; }</style>
</head>
<body>
<div id="vis"></div>
<script>
  const spec = __SPEC__;
  const embedOpt = (spec.usermeta && spec.usermeta.embedOptions) || {};
  vegaEmbed("#vis", spec, embedOpt).catch(console.error);
</script>
</body>
</html>
"##;

/// Render the chart as a standalone HTML document.
pub fn render_html(rows: &[PlotRow]) -> Result<String> {
    let spec = chart_spec(rows)?;
    let json = serde_json::to_string(&spec).context("serialize chart spec")?;
    Ok(HTML_TEMPLATE.replace("__SPEC__", &json))
}

/// Render and write the chart document.
pub fn write_html(rows: &[PlotRow], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let html = render_html(rows)?;
    fs::write(path, html).with_context(|| format!("write {}", path.display()))?;
    info!(points = rows.len(), path = %path.display(), "wrote chart");
    Ok(())
}
