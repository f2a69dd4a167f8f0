//! Chart Viewer Widget
//! Central panel holding the interactive 3D scatter and its camera state.

use crate::charts::{Camera, Scatter3d};
use egui::RichText;

pub struct ChartViewer {
    scatter: Option<Scatter3d>,
    camera: Camera,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            scatter: None,
            camera: Camera::default(),
        }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scatter = None;
    }

    /// Replace the displayed series. The camera keeps its orientation so
    /// switching series does not lose the view.
    pub fn set_series(&mut self, points: Vec<[f64; 3]>, label: impl Into<String>) {
        self.scatter = Some(Scatter3d::new(points, label));
    }

    pub fn scatter(&self) -> Option<&Scatter3d> {
        self.scatter.as_ref()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, point_radius: f32) {
        let Some(scatter) = &self.scatter else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ui.vertical(|ui| {
            ui.label(
                RichText::new("drag to rotate")
                    .size(11.0)
                    .color(egui::Color32::GRAY),
            );
            scatter.show(ui, &mut self.camera, point_radius);
        });
    }
}
