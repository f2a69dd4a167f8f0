//! Control Panel Widget
//! Left side panel with data source, series selection and export controls.

use crate::data::{SeriesChoice, RESULT_FILE};
use egui::{Color32, ComboBox, RichText};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User-facing settings, persisted across runs.
#[derive(Clone, Serialize, Deserialize)]
pub struct ViewerSettings {
    pub csv_path: PathBuf,
    pub choice: SeriesChoice,
    pub point_radius: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(RESULT_FILE),
            choice: SeriesChoice::default(),
            point_radius: 3.0,
        }
    }
}

/// Left side control panel with file selection and series controls.
pub struct ControlPanel {
    pub settings: ViewerSettings,
    pub status: String,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: ViewerSettings::default(),
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🚦 TrafficPlot")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Simulation Result Viewer")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .csv_path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| self.settings.csv_path.display().to_string());

                    ui.label(RichText::new(&path_text).size(12.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                        if ui.button("⟳ Reload").clicked() {
                            action = ControlPanelAction::ReloadCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Series Section =====
        ui.label(RichText::new("⚙️ Active Series").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([60.0, 20.0], egui::Label::new("Series:"));
            ComboBox::from_id_salt("series_choice")
                .width(200.0)
                .selected_text(self.settings.choice.to_string())
                .show_ui(ui, |ui| {
                    for choice in SeriesChoice::ALL {
                        if ui
                            .selectable_label(
                                self.settings.choice == choice,
                                choice.to_string(),
                            )
                            .clicked()
                            && self.settings.choice != choice
                        {
                            self.settings.choice = choice;
                            action = ControlPanelAction::SeriesChanged;
                        }
                    }
                });
        });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.add_sized([60.0, 20.0], egui::Label::new("Points:"));
            ui.add(egui::Slider::new(&mut self.settings.point_radius, 1.0..=8.0).suffix(" px"));
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button = egui::Button::new(RichText::new("💾 Export PNG").size(14.0))
                    .min_size(egui::vec2(160.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    ReloadCsv,
    SeriesChanged,
    ExportPng,
}
