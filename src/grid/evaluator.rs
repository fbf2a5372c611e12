use log::{debug, trace};

use super::types::{AxisRange, FixedTerms, PriceGrid};
use crate::error::{BsmError, BsmResult};
use crate::models::bs::{BlackScholesMerton, OptionKind};
use crate::models::traits::PricingModel;
use crate::models::utils::midpoints;

/// Axis sample count used when none is given (a 10x10 matrix).
pub const DEFAULT_STEPS: usize = 11;

/// Check the grid inputs before anything is priced.
pub fn validate_grid_inputs(spot_range: &AxisRange, vol_range: &AxisRange, steps: usize) -> BsmResult<()> {
    if steps < 2 {
        return Err(BsmError::invalid_range(format!(
            "steps must be at least 2, got {steps}"
        )));
    }
    spot_range.validate("spot")?;
    vol_range.validate("volatility")?;
    if vol_range.min <= 0.0 {
        return Err(BsmError::invalid_range(format!(
            "volatility range must be strictly positive, got [{}, {}]",
            vol_range.min, vol_range.max
        )));
    }
    Ok(())
}

/// A range narrower than `steps` representable values samples into repeats.
fn ensure_strictly_increasing(axis: &[f64], name: &str) -> BsmResult<()> {
    match axis.windows(2).position(|w| w[0] >= w[1]) {
        Some(i) => Err(BsmError::invalid_range(format!(
            "{name} range [{}, {}] is too narrow for {} samples: sample {} is {} and sample {} is {}",
            axis[0],
            axis[axis.len() - 1],
            axis.len(),
            i,
            axis[i],
            i + 1,
            axis[i + 1]
        ))),
        None => Ok(()),
    }
}

/// Build a Black-Scholes-Merton price grid.
///
/// Each axis gets `steps` evenly spaced samples; every cell is priced once at
/// the midpoint of its spot bin and volatility bin, giving a
/// `(steps - 1) x (steps - 1)` matrix.
///
/// # Errors
///
/// * [`BsmError::InvalidRange`] if `steps < 2`, a range is degenerate,
///   inverted, too wide to represent or too narrow to sample `steps` distinct
///   values, or the volatility range is not strictly positive.
/// * [`BsmError::Domain`] from the engine if a midpoint contract is invalid
///   (e.g. non-positive maturity, or a spot range reaching below zero).
///
/// # Example
///
/// ```rust
/// use bsm_heatmap::{build_grid, AxisRange, FixedTerms, OptionKind};
///
/// let fixed = FixedTerms::new(100.0, 1.0, 0.05, OptionKind::Call);
/// let grid = build_grid(&fixed, AxisRange::new(80.0, 120.0), AxisRange::new(0.1, 0.5), 11)?;
/// assert_eq!((grid.rows(), grid.cols()), (10, 10));
/// # Ok::<(), bsm_heatmap::BsmError>(())
/// ```
pub fn build_grid(
    fixed: &FixedTerms,
    spot_range: AxisRange,
    vol_range: AxisRange,
    steps: usize,
) -> BsmResult<PriceGrid> {
    build_grid_with(&BlackScholesMerton, fixed, spot_range, vol_range, steps)
}

/// [`build_grid`] with an explicit pricing model.
pub fn build_grid_with<M: PricingModel>(
    model: &M,
    fixed: &FixedTerms,
    spot_range: AxisRange,
    vol_range: AxisRange,
    steps: usize,
) -> BsmResult<PriceGrid> {
    validate_grid_inputs(&spot_range, &vol_range, steps)?;

    let spot_axis = spot_range.samples(steps);
    let vol_axis = vol_range.samples(steps);
    ensure_strictly_increasing(&spot_axis, "spot")?;
    ensure_strictly_increasing(&vol_axis, "volatility")?;

    debug!(
        "building {}x{} {} grid with {}: spot [{}, {}], vol [{}, {}]",
        steps - 1,
        steps - 1,
        fixed.kind,
        model.name(),
        spot_range.min,
        spot_range.max,
        vol_range.min,
        vol_range.max
    );

    let spot_mids = midpoints(&spot_axis);
    let vol_mids = midpoints(&vol_axis);
    let matrix = evaluate_rows(model, fixed, &spot_mids, &vol_mids)?;

    Ok(PriceGrid {
        kind: fixed.kind,
        spot_axis,
        vol_axis,
        matrix,
    })
}

/// Call and put grids over the same axes.
pub fn build_call_put_grids(
    fixed: &FixedTerms,
    spot_range: AxisRange,
    vol_range: AxisRange,
    steps: usize,
) -> BsmResult<(PriceGrid, PriceGrid)> {
    let call = build_grid(&fixed.with_kind(OptionKind::Call), spot_range, vol_range, steps)?;
    let put = build_grid(&fixed.with_kind(OptionKind::Put), spot_range, vol_range, steps)?;
    Ok((call, put))
}

fn evaluate_row<M: PricingModel>(
    model: &M,
    fixed: &FixedTerms,
    spot_mids: &[f64],
    vol: f64,
) -> BsmResult<Vec<f64>> {
    trace!("pricing row at vol {vol}");
    spot_mids
        .iter()
        .map(|&spot| model.price(&fixed.contract_at(spot, vol)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_rows<M: PricingModel>(
    model: &M,
    fixed: &FixedTerms,
    spot_mids: &[f64],
    vol_mids: &[f64],
) -> BsmResult<Vec<Vec<f64>>> {
    vol_mids
        .iter()
        .map(|&vol| evaluate_row(model, fixed, spot_mids, vol))
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_rows<M: PricingModel>(
    model: &M,
    fixed: &FixedTerms,
    spot_mids: &[f64],
    vol_mids: &[f64],
) -> BsmResult<Vec<Vec<f64>>> {
    use rayon::prelude::*;

    vol_mids
        .par_iter()
        .map(|&vol| evaluate_row(model, fixed, spot_mids, vol))
        .collect()
}
