//! # bsm-heatmap: European Option Pricing and Price Heatmaps
//!
//! `bsm-heatmap` prices European calls and puts with the Black-Scholes-Merton
//! closed form and samples that price over a spot/volatility range to build a
//! heatmap matrix.
//!
//! ## Core Features
//!
//! - **Pricing engine**: the closed-form Black-Scholes-Merton price, with
//!   invalid inputs rejected as typed errors instead of priced into NaN
//! - **Grid evaluator**: evenly spaced axes, adjacent bins, one price per bin
//!   midpoint, giving a `(steps - 1) x (steps - 1)` matrix
//! - **Rendering**: annotated SVG heatmaps (plotters) and CSV export
//! - **Configuration**: TOML-loadable heatmap settings with presets
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_heatmap::{bsm_price, build_grid, AxisRange, FixedTerms, OptionKind};
//!
//! // Single contract
//! let call = bsm_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call)?;
//! let put = bsm_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Put)?;
//! assert!((call - 10.45).abs() < 0.01);
//! assert!((put - 5.57).abs() < 0.01);
//!
//! // 10x10 heatmap over spot 80..120 and volatility 10%..50%
//! let fixed = FixedTerms::new(100.0, 1.0, 0.05, OptionKind::Call);
//! let grid = build_grid(&fixed, AxisRange::new(80.0, 120.0), AxisRange::new(0.1, 0.5), 11)?;
//! assert_eq!(grid.matrix.len(), 10);
//! # Ok::<(), bsm_heatmap::BsmError>(())
//! ```
//!
//! ## Features
//!
//! - `serde` (default): serialization of contracts, grids and configs, and
//!   TOML config loading
//! - `parallel`: evaluate grid rows on the rayon thread pool

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod grid;
pub mod models;
pub mod render;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{BsmError, BsmResult};

// Pricing engine
pub use models::bs::{bsm_price, BlackScholesMerton, OptionContract, OptionKind};
pub use models::traits::PricingModel;

// Grid construction and configuration
pub use grid::{
    build_call_put_grids, build_grid, build_grid_with, matrix_mean, validate_grid_inputs,
    AxisRange, FixedTerms, HeatmapConfig, PriceGrid, RenderConfig, DEFAULT_STEPS,
};

// Presentation
pub use render::{
    format_price, render_heatmap_svg, save_heatmap_svg, text_color_for, write_grid_csv,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured heatmap settings.
///
/// - [`standard()`]: 10x10 cells, spot 80..120, volatility 10%..50%
/// - [`fine()`]: 20x20 cells over the same ranges
/// - [`coarse()`]: 5x5 cells
/// - [`wide()`]: spot 50..150, volatility 5%..100%
pub mod default_configs {
    use crate::grid::config::HeatmapConfig;

    /// The reference layout: strike 100, one year, 5% rate, 11 samples per axis.
    ///
    /// ```rust
    /// use bsm_heatmap::default_configs;
    ///
    /// let grid = default_configs::standard().build_grid()?;
    /// assert_eq!((grid.rows(), grid.cols()), (10, 10));
    /// # Ok::<(), bsm_heatmap::BsmError>(())
    /// ```
    pub fn standard() -> HeatmapConfig {
        HeatmapConfig::standard()
    }

    /// Higher resolution, smaller annotation text.
    pub fn fine() -> HeatmapConfig {
        HeatmapConfig::fine()
    }

    /// Low resolution for quick looks.
    pub fn coarse() -> HeatmapConfig {
        HeatmapConfig::coarse()
    }

    /// Wide spot and volatility ranges.
    pub fn wide() -> HeatmapConfig {
        HeatmapConfig::wide()
    }
}

/// Price one contract with the Black-Scholes-Merton engine.
///
/// # Errors
///
/// [`BsmError::Domain`] if spot, strike, maturity or volatility is not
/// strictly positive and finite, or the rate is not finite.
pub fn price(contract: &OptionContract) -> BsmResult<f64> {
    BlackScholesMerton.price(contract)
}

/// Price a batch of contracts, keeping each result in input order.
///
/// One bad contract does not stop the others from being priced.
pub fn price_all(contracts: &[OptionContract]) -> Vec<BsmResult<f64>> {
    contracts.iter().map(price).collect()
}
