//! TrafficPlot - 3D scatter viewer for traffic-simulation result tables
//!
//! Loads `result.csv` from the working directory and displays one of its
//! eight (side, metric) series as an interactive 3D scatter plot.

mod charts;
mod data;
mod gui;

use anyhow::Context;
use data::{ResultTable, RESULT_FILE};
use eframe::egui;
use gui::TrafficPlotApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load and schema-check before any window opens; either error is fatal.
    let table = ResultTable::load(RESULT_FILE)
        .with_context(|| format!("cannot display {RESULT_FILE}"))?;
    info!(rows = table.row_count(), "loaded {RESULT_FILE}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("TrafficPlot"),
        ..Default::default()
    };

    eframe::run_native(
        "TrafficPlot",
        options,
        Box::new(move |cc| Ok(Box::new(TrafficPlotApp::new(cc, table)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
