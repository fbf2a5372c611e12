use crate::error::{BsmError, BsmResult};
use crate::models::bs::{OptionContract, OptionKind};
use crate::models::utils::{linspace, midpoints};

/// Contract terms held constant across a heatmap
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FixedTerms {
    pub strike: f64,
    /// Time to expiry in years
    pub maturity: f64,
    pub rate: f64,
    pub kind: OptionKind,
}

impl Default for FixedTerms {
    fn default() -> Self {
        Self {
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            kind: OptionKind::Call,
        }
    }
}

impl FixedTerms {
    pub fn new(strike: f64, maturity: f64, rate: f64, kind: OptionKind) -> Self {
        Self {
            strike,
            maturity,
            rate,
            kind,
        }
    }

    /// Same terms for the opposite contract type.
    pub fn with_kind(self, kind: OptionKind) -> Self {
        Self { kind, ..self }
    }

    /// Contract at one (spot, volatility) point of the grid.
    pub fn contract_at(&self, spot: f64, volatility: f64) -> OptionContract {
        OptionContract {
            spot,
            strike: self.strike,
            maturity: self.maturity,
            rate: self.rate,
            volatility,
            kind: self.kind,
        }
    }
}

/// Closed interval `[min, max]` sampled along one heatmap axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Rejects non-finite bounds or width, and degenerate or inverted intervals.
    pub fn validate(&self, axis: &str) -> BsmResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(BsmError::invalid_range(format!(
                "{axis} range must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(BsmError::invalid_range(format!(
                "{axis} range must satisfy min < max, got [{}, {}]",
                self.min, self.max
            )));
        }
        if !self.width().is_finite() {
            return Err(BsmError::invalid_range(format!(
                "{axis} range width overflows, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// `steps` evenly spaced samples, endpoints included.
    pub fn samples(&self, steps: usize) -> Vec<f64> {
        linspace(self.min, self.max, steps)
    }
}

/// Binned price surface over spot and volatility.
///
/// `matrix[i][j]` is the price at the midpoint of volatility bin `i`
/// (`vol_axis[i]..vol_axis[i + 1]`) and spot bin `j`
/// (`spot_axis[j]..spot_axis[j + 1]`), so the matrix is one shorter than
/// each axis in both dimensions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceGrid {
    pub kind: OptionKind,
    pub spot_axis: Vec<f64>,
    pub vol_axis: Vec<f64>,
    /// Shape: `[vol_bin][spot_bin]`
    pub matrix: Vec<Vec<f64>>,
}

impl PriceGrid {
    /// Number of volatility bins
    pub fn rows(&self) -> usize {
        self.matrix.len()
    }

    /// Number of spot bins
    pub fn cols(&self) -> usize {
        self.matrix.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, vol_bin: usize, spot_bin: usize) -> Option<f64> {
        self.matrix.get(vol_bin)?.get(spot_bin).copied()
    }

    /// Spot value each column was priced at
    pub fn spot_midpoints(&self) -> Vec<f64> {
        midpoints(&self.spot_axis)
    }

    /// Volatility value each row was priced at
    pub fn vol_midpoints(&self) -> Vec<f64> {
        midpoints(&self.vol_axis)
    }

    /// Iterate `(vol_bin, spot_bin, price)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.matrix
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &v)| (i, j, v)))
    }

    pub fn mean(&self) -> Option<f64> {
        matrix_mean(&self.matrix)
    }

    /// Smallest and largest price in the matrix.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.cells().map(|(_, _, v)| v).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

/// Mean of every value in a matrix; `None` when it holds no values.
pub fn matrix_mean(matrix: &[Vec<f64>]) -> Option<f64> {
    let count: usize = matrix.iter().map(Vec::len).sum();
    if count == 0 {
        return None;
    }
    let total: f64 = matrix.iter().flatten().sum();
    Some(total / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_mean() {
        assert_eq!(matrix_mean(&[]), None);
        assert_eq!(matrix_mean(&[vec![]]), None);
        assert_eq!(matrix_mean(&[vec![1.0, 2.0], vec![3.0, 6.0]]), Some(3.0));
    }

    #[test]
    fn test_axis_range_validation() {
        assert!(AxisRange::new(80.0, 120.0).validate("spot").is_ok());
        assert!(AxisRange::new(1.0, 1.0).validate("spot").is_err());
        assert!(AxisRange::new(2.0, 1.0).validate("spot").is_err());
        assert!(AxisRange::new(f64::NAN, 1.0).validate("spot").is_err());
        assert!(AxisRange::new(-1e308, 1e308).validate("spot").is_err());
        assert_eq!(AxisRange::new(0.1, 0.5).width(), 0.5 - 0.1);
    }

    #[test]
    fn test_grid_accessors() {
        let grid = PriceGrid {
            kind: OptionKind::Put,
            spot_axis: vec![1.0, 2.0, 3.0],
            vol_axis: vec![0.1, 0.3],
            matrix: vec![vec![4.0, -1.0]],
        };
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.cell(0, 1), Some(-1.0));
        assert_eq!(grid.cell(1, 0), None);
        assert_eq!(grid.spot_midpoints(), vec![1.5, 2.5]);
        assert_eq!(grid.min_max(), Some((-1.0, 4.0)));
        assert_eq!(grid.mean(), Some(1.5));
    }
}
