//! TrafficPlot Main Application
//! Main window with control panel and 3D chart viewer.

use crate::charts;
use crate::data::ResultTable;
use crate::gui::control_panel::ViewerSettings;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{error, info};

/// CSV loading result from background thread
enum LoadResult {
    Complete(ResultTable),
    Error(String),
}

/// Main application window.
pub struct TrafficPlotApp {
    table: Option<ResultTable>,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl TrafficPlotApp {
    /// Build the app around a table loaded at startup. Persisted settings
    /// restore the series choice and point size; the path follows the table.
    pub fn new(cc: &eframe::CreationContext<'_>, table: ResultTable) -> Self {
        let mut control_panel = ControlPanel::new();
        if let Some(restored) = cc
            .storage
            .and_then(|s| eframe::get_value::<ViewerSettings>(s, eframe::APP_KEY))
        {
            control_panel.settings.choice = restored.choice;
            control_panel.settings.point_radius = restored.point_radius;
        }
        control_panel.settings.csv_path = table.path().to_path_buf();

        let mut app = Self {
            table: Some(table),
            control_panel,
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
        };
        app.refresh_series();
        app
    }

    /// Re-slice the table for the active series and hand it to the viewer.
    fn refresh_series(&mut self) {
        let Some(table) = &self.table else {
            self.chart_viewer.clear();
            self.control_panel.export_enabled = false;
            return;
        };

        let choice = self.control_panel.settings.choice;
        match table.series_points(choice) {
            Ok(points) => {
                self.control_panel.set_status(format!(
                    "{}: {} points from {} rows",
                    choice.label(),
                    points.len(),
                    table.row_count()
                ));
                self.chart_viewer.set_series(points, choice.label());
                self.control_panel.export_enabled = true;
            }
            Err(e) => {
                error!("series extraction failed: {e}");
                self.chart_viewer.clear();
                self.control_panel.export_enabled = false;
                self.control_panel.set_status(format!("Error: {e}"));
            }
        }
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_load(path);
        }
    }

    /// Load a CSV on a background thread, schema check included.
    fn start_load(&mut self, path: PathBuf) {
        self.control_panel.settings.csv_path = path.clone();
        self.control_panel
            .set_status(format!("Loading {}...", path.display()));
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match ResultTable::load(&path) {
                Ok(table) => LoadResult::Complete(table),
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete(table) => {
                        info!(
                            rows = table.row_count(),
                            "loaded {}",
                            table.path().display()
                        );
                        self.table = Some(table);
                        self.is_loading = false;
                        should_keep_receiver = false;
                        self.refresh_series();
                    }
                    LoadResult::Error(error) => {
                        error!("load failed: {error}");
                        self.control_panel.set_status(format!("Error: {error}"));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Export the displayed series to a PNG chosen via save dialog.
    fn handle_export_png(&mut self) {
        let Some(scatter) = self.chart_viewer.scatter() else {
            self.control_panel.set_status("No chart to export");
            return;
        };

        let default_name = format!(
            "{}.png",
            scatter.label().to_lowercase().replace(' ', "_")
        );
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(default_name)
            .save_file()
        else {
            return; // User cancelled
        };

        match charts::export_png(&path, scatter) {
            Ok(()) => {
                info!("exported {}", path.display());
                self.control_panel
                    .set_status(format!("Exported {}", path.display()));
            }
            Err(e) => {
                error!("export failed: {e:#}");
                self.control_panel.set_status(format!("Error: {e:#}"));
            }
        }
    }
}

impl eframe::App for TrafficPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::ReloadCsv => {
                            if !self.is_loading {
                                let path = self.control_panel.settings.csv_path.clone();
                                self.start_load(path);
                            }
                        }
                        ControlPanelAction::SeriesChanged => self.refresh_series(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer
                .show(ui, self.control_panel.settings.point_radius);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.control_panel.settings);
    }
}
