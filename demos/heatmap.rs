//! Builds call and put price heatmaps and writes them as SVG, plus the call
//! grid as CSV.
//!
//! Usage:
//!     cargo run --example heatmap -- [config.toml]
//!
//! Without a config path the standard preset is used. Output files are written
//! to the working directory: call_heatmap.svg, put_heatmap.svg, call_prices.csv.

use std::env;
use std::fs::File;

use anyhow::Result;
use bsm_heatmap::{
    build_call_put_grids, default_configs, format_price, save_heatmap_svg, write_grid_csv,
    HeatmapConfig, PriceGrid, RenderConfig,
};

fn print_summary(grid: &PriceGrid) {
    let (lo, hi) = grid.min_max().unwrap_or((0.0, 0.0));
    println!(
        "{} grid: {}x{} cells, min {}, max {}, mean {}",
        grid.kind,
        grid.rows(),
        grid.cols(),
        format_price(lo),
        format_price(hi),
        format_price(grid.mean().unwrap_or(0.0)),
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => HeatmapConfig::from_path(path)?,
        None => default_configs::standard(),
    };

    println!("Black-Scholes-Merton Heatmap");
    println!("============================");
    println!(
        "Strike {:.2}, maturity {:.2}y, rate {:.2}%",
        config.contract.strike,
        config.contract.maturity,
        config.contract.rate * 100.0
    );
    println!(
        "Spot {:.2}..{:.2}, volatility {:.0}%..{:.0}%, {} samples per axis",
        config.spot_range.min,
        config.spot_range.max,
        config.vol_range.min * 100.0,
        config.vol_range.max * 100.0,
        config.steps
    );

    let (call, put) =
        build_call_put_grids(&config.contract, config.spot_range, config.vol_range, config.steps)?;

    print_summary(&call);
    print_summary(&put);

    let render = RenderConfig {
        title: format!("{} | K={}", config.render.title, config.contract.strike),
        ..config.render.clone()
    };
    save_heatmap_svg(&call, &render, "call_heatmap.svg")?;
    save_heatmap_svg(&put, &render, "put_heatmap.svg")?;
    write_grid_csv(&call, File::create("call_prices.csv")?)?;

    println!("Wrote call_heatmap.svg, put_heatmap.svg and call_prices.csv");
    Ok(())
}
