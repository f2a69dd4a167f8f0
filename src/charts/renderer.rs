//! Static Chart Renderer
//! Exports the active series as a PNG through plotters' 3D cartesian chart.

use crate::charts::Scatter3d;
use anyhow::Context;
use plotters::prelude::*;
use std::path::Path;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;

/// tab:pink, matching the interactive viewer.
const SERIES_RGB: RGBColor = RGBColor(227, 119, 194);

/// Render `scatter` to a PNG file.
///
/// plotters' 3D coordinates put Y on the vertical axis, so the data Z
/// (metric) maps to chart Y and the data Y (arrival rate) to chart Z.
pub fn export_png(path: &Path, scatter: &Scatter3d) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_lo, x_hi) = scatter.x_range();
    let (y_lo, y_hi) = scatter.y_range();
    let (z_lo, z_hi) = scatter.z_range();

    let mut chart = ChartBuilder::on(&root)
        .caption(scatter.label(), ("sans-serif", 28))
        .margin(20)
        .build_cartesian_3d(x_lo..x_hi, z_lo..z_hi, y_lo..y_hi)?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.3;
        pb.yaw = 0.5;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    chart
        .draw_series(
            scatter
                .points()
                .iter()
                .map(|&[x, y, z]| Circle::new((x, z, y), 4, SERIES_RGB.filled())),
        )?
        .label(scatter.label())
        .legend(|(x, y)| Circle::new((x, y), 4, SERIES_RGB.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    // 3D axes carry no title slots; place the X and Y names by hand.
    let style = ("sans-serif", 16).into_text_style(&root);
    root.draw_text("Period", &style, (WIDTH as i32 / 2 + 150, HEIGHT as i32 - 60))?;
    root.draw_text("Arrival Rate", &style, (WIDTH as i32 / 2 - 330, HEIGHT as i32 - 60))?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_writes_a_nonempty_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("right_number_of_cars.png");
        let scatter = Scatter3d::new(
            vec![[1.0, 0.5, 3.0], [2.0, 0.7, 5.0]],
            "Right Number of Cars",
        );

        export_png(&path, &scatter).unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0, "exported PNG is empty");
    }
}
