mod test_utils;

use bsm_heatmap::render::heat_color;
use bsm_heatmap::{
    build_grid, format_price, price, render_heatmap_svg, save_heatmap_svg, write_grid_csv,
    OptionKind, PriceGrid, RenderConfig,
};
use test_utils::{default_spot_range, default_vol_range, reference_contract, reference_terms};

fn reference_grid(kind: OptionKind) -> PriceGrid {
    build_grid(&reference_terms(kind), default_spot_range(), default_vol_range(), 11)
        .expect("reference grid should build")
}

/// The console front end prints prices as dollars with two decimals.
#[test]
fn test_console_price_format() {
    let call = price(&reference_contract(OptionKind::Call)).unwrap();
    let put = price(&reference_contract(OptionKind::Put)).unwrap();
    assert_eq!(format_price(call), "$10.45");
    assert_eq!(format_price(put), "$5.57");
}

/// SVG output carries axis labels and one annotation per cell.
#[test]
fn test_render_svg() {
    let grid = reference_grid(OptionKind::Call);
    let config = RenderConfig {
        title: "Call heatmap".to_string(),
        ..RenderConfig::default()
    };

    let svg = render_heatmap_svg(&grid, &config).expect("render should succeed");

    assert!(svg.contains("<svg"), "missing svg root");
    assert!(svg.contains("Spot price"));
    assert!(svg.contains("Volatility"));
    assert!(svg.contains("Call heatmap (call option)"));
    for (_, _, value) in grid.cells() {
        let label = format!("{:.2}", value);
        assert!(svg.contains(&label), "missing annotation {label}");
    }
}

/// Cell fills span the ramp from the cheapest to the dearest cell.
#[test]
fn test_render_uses_full_color_ramp() {
    let grid = reference_grid(OptionKind::Put);
    let (lo, hi) = grid.min_max().unwrap();
    let svg = render_heatmap_svg(&grid, &RenderConfig::default()).unwrap();

    for color in [heat_color(lo, lo, hi), heat_color(hi, lo, hi)] {
        let hex = format!("#{:02X}{:02X}{:02X}", color.0, color.1, color.2);
        assert!(
            svg.to_uppercase().contains(&hex),
            "expected fill {hex} in rendered svg"
        );
    }
}

#[test]
fn test_render_rejects_bad_input() {
    let empty = PriceGrid {
        kind: OptionKind::Call,
        spot_axis: vec![],
        vol_axis: vec![],
        matrix: vec![],
    };
    assert!(render_heatmap_svg(&empty, &RenderConfig::default()).is_err());

    let zero_size = RenderConfig {
        width: 0,
        ..RenderConfig::default()
    };
    assert!(render_heatmap_svg(&reference_grid(OptionKind::Call), &zero_size).is_err());
}

#[test]
fn test_save_svg_to_file() {
    let path = std::env::temp_dir().join(format!("bsm_heatmap_{}.svg", std::process::id()));
    save_heatmap_svg(&reference_grid(OptionKind::Call), &RenderConfig::default(), &path)
        .expect("save should succeed");

    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(written.contains("<svg"));
}

/// CSV export reads back to the same midpoints and prices.
#[test]
fn test_csv_export() {
    let grid = reference_grid(OptionKind::Call);
    let mut buf = Vec::new();
    write_grid_csv(&grid, &mut buf).expect("csv export should succeed");

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    let header = reader.headers().unwrap().clone();
    assert_eq!(header.len(), 11);
    assert_eq!(&header[0], "vol\\spot");

    let spot_mids: Vec<f64> = header.iter().skip(1).map(|s| s.parse().unwrap()).collect();
    assert_eq!(spot_mids, grid.spot_midpoints());

    let vol_mids = grid.vol_midpoints();
    let mut rows = 0;
    for (i, record) in reader.records().enumerate() {
        let record = record.unwrap();
        let values: Vec<f64> = record.iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(values[0], vol_mids[i]);
        assert_eq!(&values[1..], grid.matrix[i].as_slice());
        rows += 1;
    }
    assert_eq!(rows, 10);
}
