pub mod bs;

/// Common traits used by all pricing models
pub mod traits {
    use crate::error::BsmResult;
    use crate::models::bs::OptionContract;

    /// Closed-form pricing model for a single European contract.
    ///
    /// Implementations must be pure: the same contract always yields the same
    /// price, which is what lets the grid evaluator fan cells out across threads.
    pub trait PricingModel: Send + Sync {
        fn name(&self) -> &str;
        fn price(&self, contract: &OptionContract) -> BsmResult<f64>;
    }
}

/// Numeric helpers shared by the pricing engine and the grid evaluator
pub mod utils {
    /// Standard normal cumulative distribution function.
    ///
    /// Written via `erfc` rather than `1 + erf` so that the lower tail keeps
    /// its relative precision.
    pub fn normal_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
    }

    /// `n` evenly spaced samples over `[min, max]`, both endpoints included.
    ///
    /// The last sample is pinned to `max` so accumulated rounding never moves
    /// the upper edge of the final bin.
    pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![min],
            _ => {
                let step = (max - min) / (n - 1) as f64;
                let mut out: Vec<f64> = (0..n).map(|i| min + step * i as f64).collect();
                out[n - 1] = max;
                out
            }
        }
    }

    /// Arithmetic midpoint of each adjacent pair of samples.
    pub fn midpoints(axis: &[f64]) -> Vec<f64> {
        axis.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

}
