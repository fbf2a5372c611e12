//! Presentation helpers for price grids: currency text, cell colors,
//! SVG heatmaps and CSV export.
//!
//! Nothing here feeds back into pricing; it only reads finished grids.

pub mod export;
pub mod svg;

pub use export::write_grid_csv;
pub use svg::{draw_heatmap, render_heatmap_svg, save_heatmap_svg};

use plotters::style::{RGBColor, BLACK, WHITE};

const RAMP_LOW: RGBColor = RGBColor(68, 1, 84);
const RAMP_MID: RGBColor = RGBColor(33, 145, 140);
const RAMP_HIGH: RGBColor = RGBColor(253, 231, 37);

/// Currency text with two decimals, e.g. `$10.45`.
pub fn format_price(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

/// Cell fill on a dark-to-light ramp between `min` and `max`.
pub fn heat_color(value: f64, min: f64, max: f64) -> RGBColor {
    if max <= min || !value.is_finite() {
        return RAMP_MID;
    }
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    if t < 0.5 {
        lerp(RAMP_LOW, RAMP_MID, t * 2.0)
    } else {
        lerp(RAMP_MID, RAMP_HIGH, (t - 0.5) * 2.0)
    }
}

/// Annotation color readable on top of [`heat_color`]: cells above the mean
/// sit on the light end of the ramp.
pub fn text_color_for(value: f64, mean: f64) -> RGBColor {
    if value > mean {
        BLACK
    } else {
        WHITE
    }
}

fn lerp(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    let channel = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    RGBColor(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.450_583), "$10.45");
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(-1.234), "-$1.23");
    }

    #[test]
    fn test_heat_color_endpoints() {
        assert_eq!(heat_color(0.0, 0.0, 10.0), RAMP_LOW);
        assert_eq!(heat_color(5.0, 0.0, 10.0), RAMP_MID);
        assert_eq!(heat_color(10.0, 0.0, 10.0), RAMP_HIGH);
        assert_eq!(heat_color(99.0, 0.0, 10.0), RAMP_HIGH);
        assert_eq!(heat_color(3.0, 3.0, 3.0), RAMP_MID);
    }

    #[test]
    fn test_text_color_contrast() {
        assert_eq!(text_color_for(12.0, 10.0), BLACK);
        assert_eq!(text_color_for(8.0, 10.0), WHITE);
        assert_eq!(text_color_for(10.0, 10.0), WHITE);
    }
}
