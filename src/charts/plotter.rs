//! Chart Plotter Module
//! Interactive 3D scatter rendering on top of egui_plot.
//!
//! Points are normalized into a [-1, 1] cube, projected orthographically
//! through a rotatable camera, and drawn as 2D plot items together with the
//! cube's axis box, ticks and labels.

use egui::{Color32, RichText};
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text};

/// Accent color of the active series (tab:pink).
pub const SERIES_COLOR: Color32 = Color32::from_rgb(227, 119, 194);

const AXIS_COLOR: Color32 = Color32::from_rgb(130, 130, 130);
const BOX_COLOR: Color32 = Color32::from_gray(90);

/// Orthographic camera at spherical (azimuth, elevation), rotated by drag.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub azimuth: f64,
    pub elevation: f64,
}

impl Default for Camera {
    fn default() -> Self {
        // ~-60 / ~30 degrees, the usual oblique view onto the box
        Camera {
            azimuth: -1.05,
            elevation: 0.52,
        }
    }
}

impl Camera {
    /// Project a point in normalized cube space to screen coordinates.
    pub fn project(&self, p: [f64; 3]) -> (f64, f64) {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();

        // Right vector: (-sin(a), cos(a), 0)
        let screen_x = -p[0] * sa + p[1] * ca;
        // Up vector: (-cos(a)*sin(e), -sin(a)*sin(e), cos(e))
        let screen_y = -p[0] * ca * se - p[1] * sa * se + p[2] * ce;

        (screen_x, screen_y)
    }

    /// Depth along the camera direction. Positive = further from viewer.
    pub fn depth(&self, p: [f64; 3]) -> f64 {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        -(p[0] * ce * ca + p[1] * ce * sa + p[2] * se)
    }

    fn rotate(&mut self, delta: egui::Vec2) {
        self.azimuth -= delta.x as f64 * 0.01;
        self.elevation = (self.elevation + delta.y as f64 * 0.01).clamp(-1.55, 1.55);
    }
}

/// Padded (min, max) range of one axis.
pub fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_infinite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

/// Round a range/step-count ratio up to a 1-2-5 step.
pub fn nice_step(range: f64, target_steps: usize) -> f64 {
    let raw_step = range / target_steps as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

fn format_tick(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// The 8 corners of the normalized [-1, 1]^3 cube.
const CUBE_CORNERS: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// Corner index pairs forming the 12 cube edges.
const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (1, 3),
    (2, 3),
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// One 3D scatter series with its axis ranges and legend label.
pub struct Scatter3d {
    points: Vec<[f64; 3]>,
    label: String,
    x_range: (f64, f64),
    y_range: (f64, f64),
    z_range: (f64, f64),
}

impl Scatter3d {
    pub fn new(points: Vec<[f64; 3]>, label: impl Into<String>) -> Self {
        let x_range = axis_range(points.iter().map(|p| p[0]));
        let y_range = axis_range(points.iter().map(|p| p[1]));
        let z_range = axis_range(points.iter().map(|p| p[2]));
        Self {
            points,
            label: label.into(),
            x_range,
            y_range,
            z_range,
        }
    }

    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x_range(&self) -> (f64, f64) {
        self.x_range
    }

    pub fn y_range(&self) -> (f64, f64) {
        self.y_range
    }

    pub fn z_range(&self) -> (f64, f64) {
        self.z_range
    }

    fn normalize(&self, p: [f64; 3]) -> [f64; 3] {
        let norm = |v: f64, (lo, hi): (f64, f64)| (v - lo) / (hi - lo) * 2.0 - 1.0;
        [
            norm(p[0], self.x_range),
            norm(p[1], self.y_range),
            norm(p[2], self.z_range),
        ]
    }

    /// Draw the scatter into `ui`; dragging the plot area rotates `camera`.
    pub fn show(&self, ui: &mut egui::Ui, camera: &mut Camera, point_radius: f32) {
        let response = Plot::new("scatter3d")
            .legend(Legend::default())
            .view_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                // Fixed square view bounds around the projected cube; the
                // square plot viewport keeps the cube undistorted.
                let mut min = [f64::INFINITY; 2];
                let mut max = [f64::NEG_INFINITY; 2];
                for corner in CUBE_CORNERS {
                    let (px, py) = camera.project(corner);
                    min[0] = min[0].min(px);
                    min[1] = min[1].min(py);
                    max[0] = max[0].max(px);
                    max[1] = max[1].max(py);
                }
                let center = [(min[0] + max[0]) / 2.0, (min[1] + max[1]) / 2.0];
                let half = ((max[0] - min[0]).max(max[1] - min[1])) / 2.0 + 0.55;
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [center[0] - half, center[1] - half],
                    [center[0] + half, center[1] + half],
                ));

                self.draw_box(plot_ui, camera);
                self.draw_axes(plot_ui, camera);

                let projected: PlotPoints = self
                    .points
                    .iter()
                    .map(|&p| {
                        let (px, py) = camera.project(self.normalize(p));
                        [px, py]
                    })
                    .collect();
                plot_ui.points(
                    Points::new(projected)
                        .radius(point_radius)
                        .color(SERIES_COLOR)
                        .name(&self.label),
                );
            });

        if response.response.dragged() {
            camera.rotate(response.response.drag_delta());
        }
    }

    fn draw_box(&self, plot_ui: &mut egui_plot::PlotUi, camera: &Camera) {
        for (a, b) in CUBE_EDGES {
            let (x0, y0) = camera.project(CUBE_CORNERS[a]);
            let (x1, y1) = camera.project(CUBE_CORNERS[b]);
            plot_ui.line(
                Line::new(PlotPoints::from(vec![[x0, y0], [x1, y1]]))
                    .color(BOX_COLOR)
                    .width(0.6),
            );
        }
    }

    /// Ticks and labels along the three edges meeting at the bottom corner
    /// nearest the viewer.
    fn draw_axes(&self, plot_ui: &mut egui_plot::PlotUi, camera: &Camera) {
        let origin = CUBE_CORNERS
            .into_iter()
            .filter(|c| c[2] < 0.0)
            .min_by(|a, b| {
                camera
                    .depth(*a)
                    .partial_cmp(&camera.depth(*b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or([-1.0, -1.0, -1.0]);

        let x_end = [-origin[0], origin[1], origin[2]];
        let y_end = [origin[0], -origin[1], origin[2]];
        let z_end = [origin[0], origin[1], 1.0];

        // (endpoint, value range, axis goes negative in cube space, title)
        let axes: [([f64; 3], (f64, f64), bool, Option<&str>); 3] = [
            (x_end, self.x_range, origin[0] > x_end[0], Some("Period")),
            (y_end, self.y_range, origin[1] > y_end[1], Some("Arrival Rate")),
            (z_end, self.z_range, false, None),
        ];

        for (end, (val_min, val_max), flipped, title) in axes {
            let step = nice_step(val_max - val_min, 5);
            if step <= 0.0 {
                continue;
            }

            let mut tick = (val_min / step).ceil() * step;
            while tick <= val_max + step * 0.01 {
                let t_raw = ((tick - val_min) / (val_max - val_min)).clamp(0.0, 1.0);
                let t = if flipped { 1.0 - t_raw } else { t_raw };

                let p = [
                    origin[0] + (end[0] - origin[0]) * t,
                    origin[1] + (end[1] - origin[1]) * t,
                    origin[2] + (end[2] - origin[2]) * t,
                ];
                let (px, py) = camera.project(p);
                let (lx, ly) = Self::offset_outward(camera, p, 0.12);
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[px, py], [lx, ly]]))
                        .color(AXIS_COLOR)
                        .width(0.6),
                );
                let (tx, ty) = Self::offset_outward(camera, p, 0.28);
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(tx, ty),
                        RichText::new(format_tick(tick)).size(10.0),
                    )
                    .color(AXIS_COLOR),
                );

                tick += step;
            }

            if let Some(title) = title {
                let mid = [
                    (origin[0] + end[0]) / 2.0,
                    (origin[1] + end[1]) / 2.0,
                    (origin[2] + end[2]) / 2.0,
                ];
                let (tx, ty) = Self::offset_outward(camera, mid, 0.55);
                plot_ui.text(
                    Text::new(PlotPoint::new(tx, ty), RichText::new(title).size(12.0))
                        .color(AXIS_COLOR),
                );
            }
        }
    }

    /// Projected position of `p`, pushed away from the cube center so tick
    /// marks and labels sit outside the box.
    fn offset_outward(camera: &Camera, p: [f64; 3], amount: f64) -> (f64, f64) {
        let (px, py) = camera.project(p);
        let len = (px * px + py * py).sqrt();
        if len < 1e-9 {
            return (px, py - amount);
        }
        (px + px / len * amount, py + py / len * amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = Camera::default();
        let (x, y) = camera.project([0.0, 0.0, 0.0]);
        assert!(x.abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn depth_increases_away_from_viewer() {
        let camera = Camera::default();
        let near = camera.depth([0.0, 0.0, 1.0]);
        let far = camera.depth([0.0, 0.0, -1.0]);
        assert!(far > near);
    }

    #[test]
    fn axis_range_pads_both_ends() {
        let (lo, hi) = axis_range([1.0, 2.0, 3.0].into_iter());
        assert!(lo < 1.0);
        assert!(hi > 3.0);
    }

    #[test]
    fn axis_range_handles_degenerate_input() {
        assert_eq!(axis_range([2.0, 2.0].into_iter()), (1.5, 2.5));
        assert_eq!(axis_range(std::iter::empty()), (0.0, 1.0));
    }

    #[test]
    fn nice_step_snaps_to_1_2_5_ladder() {
        assert!((nice_step(10.0, 5) - 2.0).abs() < 1e-12);
        assert!((nice_step(1.0, 5) - 0.2).abs() < 1e-12);
        assert!((nice_step(7.0, 5) - 2.0).abs() < 1e-12);
        assert!((nice_step(0.35, 5) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn scatter_keeps_point_order() {
        let scatter = Scatter3d::new(vec![[1.0, 0.5, 3.0], [2.0, 0.7, 5.0]], "Right Number of Cars");
        assert_eq!(scatter.points(), &[[1.0, 0.5, 3.0], [2.0, 0.7, 5.0]]);
        assert_eq!(scatter.label(), "Right Number of Cars");
    }

    #[test]
    fn normalized_points_stay_inside_the_cube() {
        let scatter = Scatter3d::new(vec![[1.0, 10.0, 100.0], [5.0, 20.0, 400.0]], "s");
        for &p in scatter.points() {
            let n = scatter.normalize(p);
            for c in n {
                assert!((-1.0..=1.0).contains(&c), "{c} outside cube");
            }
        }
    }
}
