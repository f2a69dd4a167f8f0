//! Charts module - interactive 3D scatter and PNG export

mod plotter;
mod renderer;

pub use plotter::{Camera, Scatter3d};
pub use renderer::export_png;
