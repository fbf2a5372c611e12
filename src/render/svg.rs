use std::path::Path;

use anyhow::{ensure, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{heat_color, text_color_for};
use crate::grid::{PriceGrid, RenderConfig};

/// Draw `grid` as an annotated heatmap on any plotters drawing area.
///
/// Each cell is a rectangle spanning its spot and volatility bin, filled on a
/// dark-to-light ramp and labelled with its price.
pub fn draw_heatmap<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    grid: &PriceGrid,
    config: &RenderConfig,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    area.fill(&WHITE)?;

    let (Some(&spot_lo), Some(&spot_hi)) = (grid.spot_axis.first(), grid.spot_axis.last()) else {
        return Ok(());
    };
    let (Some(&vol_lo), Some(&vol_hi)) = (grid.vol_axis.first(), grid.vol_axis.last()) else {
        return Ok(());
    };

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(
            format!("{} ({} option)", config.title, grid.kind),
            ("sans-serif", 26),
        )
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(spot_lo..spot_hi, vol_lo..vol_hi)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Spot price")
        .y_desc("Volatility")
        .x_label_formatter(&|x| format!("{:.1}", x))
        .y_label_formatter(&|y| format!("{:.2}", y))
        .draw()?;

    let (lo, hi) = grid.min_max().unwrap_or((0.0, 0.0));
    let mean = grid.mean().unwrap_or(0.0);

    chart.draw_series(grid.cells().map(|(i, j, price)| {
        Rectangle::new(
            [
                (grid.spot_axis[j], grid.vol_axis[i]),
                (grid.spot_axis[j + 1], grid.vol_axis[i + 1]),
            ],
            heat_color(price, lo, hi).filled(),
        )
    }))?;

    let spot_mids = grid.spot_midpoints();
    let vol_mids = grid.vol_midpoints();
    let font_size = if grid.cols() > 12 { 10 } else { 14 };
    let decimals = config.decimals;

    chart.draw_series(grid.cells().map(|(i, j, price)| {
        let style = ("sans-serif", font_size)
            .into_font()
            .color(&text_color_for(price, mean))
            .pos(Pos::new(HPos::Center, VPos::Center));
        Text::new(
            format!("{:.*}", decimals, price),
            (spot_mids[j], vol_mids[i]),
            style,
        )
    }))?;

    Ok(())
}

/// Render `grid` to an in-memory SVG document.
pub fn render_heatmap_svg(grid: &PriceGrid, config: &RenderConfig) -> Result<String> {
    ensure!(grid.rows() > 0 && grid.cols() > 0, "cannot render an empty price grid");
    ensure!(
        config.width > 0 && config.height > 0,
        "render size must be non-zero, got {}x{}",
        config.width,
        config.height
    );

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        draw_heatmap(&root, grid, config)?;
        root.present()?;
    }
    Ok(svg)
}

/// Render `grid` and write the SVG to `path`.
pub fn save_heatmap_svg(grid: &PriceGrid, config: &RenderConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let svg = render_heatmap_svg(grid, config)?;
    std::fs::write(path, svg).with_context(|| format!("writing heatmap to {}", path.display()))?;
    log::info!("heatmap saved to {}", path.display());
    Ok(())
}
