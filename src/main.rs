use anyhow::Result;
use tracing_subscriber::EnvFilter;

use fdc_protein_plot::{
    prepare_data, render_plot, PLOT_DATA_PATH, PLOT_HTML_PATH, SURVEY_FOOD_PATH,
    VEG_ATTRIBUTES_PATH,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    prepare_data(SURVEY_FOOD_PATH, VEG_ATTRIBUTES_PATH, PLOT_DATA_PATH)?;
    render_plot(PLOT_DATA_PATH, PLOT_HTML_PATH)?;
    Ok(())
}
