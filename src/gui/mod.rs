//! GUI module - main window, control panel and chart viewer

mod app;
mod chart_viewer;
pub mod control_panel;

pub use app::TrafficPlotApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
