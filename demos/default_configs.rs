use bsm_heatmap::{default_configs, format_price, HeatmapConfig};

fn describe(name: &str, config: &HeatmapConfig, use_case: &str) {
    println!("{name}:");
    println!("   Samples per axis: {}", config.steps);
    println!(
        "   Cells: {}x{}",
        config.steps.saturating_sub(1),
        config.steps.saturating_sub(1)
    );
    println!(
        "   Spot range: {:.0}..{:.0}",
        config.spot_range.min, config.spot_range.max
    );
    println!(
        "   Volatility range: {:.0}%..{:.0}%",
        config.vol_range.min * 100.0,
        config.vol_range.max * 100.0
    );
    println!(
        "   Image: {}x{} px, {} decimals",
        config.render.width, config.render.height, config.render.decimals
    );
    println!("   Use case: {use_case}\n");
}

fn main() {
    println!("bsm-heatmap Default Configuration Examples\n");

    describe("1. Standard", &default_configs::standard(), "the reference 10x10 view");
    describe("2. Fine", &default_configs::fine(), "smoother surface, larger image");
    describe("3. Coarse", &default_configs::coarse(), "quick checks");
    describe("4. Wide", &default_configs::wide(), "deep ITM/OTM and high volatility");

    // Build each preset and report the centre cell of the matrix
    for (name, config) in [
        ("standard", default_configs::standard()),
        ("fine", default_configs::fine()),
        ("coarse", default_configs::coarse()),
        ("wide", default_configs::wide()),
    ] {
        match config.build_grid() {
            Ok(grid) => {
                let mid = grid.rows() / 2;
                let centre = grid.cell(mid, mid).unwrap_or(0.0);
                println!("{name:>8}: centre cell {}", format_price(centre));
            }
            Err(e) => eprintln!("{name:>8}: failed to build grid: {e}"),
        }
    }
}
