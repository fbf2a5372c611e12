use super::evaluator::{build_grid, validate_grid_inputs, DEFAULT_STEPS};
use super::types::{AxisRange, FixedTerms, PriceGrid};
use crate::error::BsmResult;

/// Output settings for a rendered heatmap
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    pub title: String,
    /// Decimal places printed in each cell
    pub decimals: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 720,
            title: "Option price heatmap".to_string(),
            decimals: 2,
        }
    }
}

/// Everything needed to build and draw one heatmap
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatmapConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub contract: FixedTerms,

    #[cfg_attr(feature = "serde", serde(default = "default_spot_range"))]
    pub spot_range: AxisRange,

    #[cfg_attr(feature = "serde", serde(default = "default_vol_range"))]
    pub vol_range: AxisRange,

    /// Samples per axis; the matrix is `(steps - 1)` square
    #[cfg_attr(feature = "serde", serde(default = "default_steps"))]
    pub steps: usize,

    #[cfg_attr(feature = "serde", serde(default))]
    pub render: RenderConfig,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            contract: FixedTerms::default(),
            spot_range: default_spot_range(),
            vol_range: default_vol_range(),
            steps: default_steps(),
            render: RenderConfig::default(),
        }
    }
}

impl HeatmapConfig {
    /// The default 10x10 layout around an at-the-money strike
    pub fn standard() -> Self {
        Self::default()
    }

    /// 20x20 cells over the standard ranges
    pub fn fine() -> Self {
        Self {
            steps: 21,
            render: RenderConfig {
                width: 1400,
                height: 1100,
                decimals: 1,
                ..RenderConfig::default()
            },
            ..Self::default()
        }
    }

    /// 5x5 cells, useful for quick checks
    pub fn coarse() -> Self {
        Self {
            steps: 6,
            ..Self::default()
        }
    }

    /// Deep in/out of the money and a wide volatility band
    pub fn wide() -> Self {
        Self {
            spot_range: AxisRange::new(50.0, 150.0),
            vol_range: AxisRange::new(0.05, 1.0),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> BsmResult<()> {
        validate_grid_inputs(&self.spot_range, &self.vol_range, self.steps)
    }

    pub fn build_grid(&self) -> BsmResult<PriceGrid> {
        build_grid(&self.contract, self.spot_range, self.vol_range, self.steps)
    }

    /// Parse a TOML document; missing fields take their defaults.
    ///
    /// ```rust
    /// use bsm_heatmap::{HeatmapConfig, OptionKind};
    ///
    /// let config = HeatmapConfig::from_toml_str(r#"
    ///     steps = 6
    ///     [contract]
    ///     kind = "Put"
    /// "#)?;
    /// assert_eq!(config.steps, 6);
    /// assert_eq!(config.contract.kind, OptionKind::Put);
    /// assert_eq!(config.contract.strike, 100.0);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        if s.trim().is_empty() {
            log::warn!("empty heatmap config, using defaults");
        }
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading heatmap config {}", path.display()))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("parsing heatmap config {}", path.display()))?;
        log::info!("loaded heatmap config from {}", path.display());
        Ok(config)
    }
}

fn default_spot_range() -> AxisRange {
    AxisRange::new(80.0, 120.0)
}

fn default_vol_range() -> AxisRange {
    AxisRange::new(0.10, 0.50)
}

fn default_steps() -> usize {
    DEFAULT_STEPS
}
