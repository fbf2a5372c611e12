//! Black-Scholes-Merton closed form for European calls and puts.
//!
//! ```text
//! d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! d2 = d1 − σ·√T
//! call = S·Φ(d1) − K·e^(−rT)·Φ(d2)
//! put  = K·e^(−rT)·Φ(−d2) − S·Φ(−d1)
//! ```
//!
//! Inputs are validated before any arithmetic runs: a contract that would send
//! the formula through `ln(0)` or a division by zero is rejected with
//! [`BsmError::Domain`] instead of being priced into NaN or infinity.

use std::fmt;
use std::str::FromStr;

use crate::error::{BsmError, BsmResult};
use crate::models::traits::PricingModel;
use crate::models::utils::normal_cdf;

/// Contract type. Closed set: string input is parsed through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum OptionKind {
    #[default]
    Call,
    Put,
}

impl OptionKind {
    /// Payoff if exercised immediately.
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = BsmError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(BsmError::invalid_kind(s)),
        }
    }
}

impl TryFrom<String> for OptionKind {
    type Error = BsmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionKind> for String {
    fn from(kind: OptionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A single European option together with the market it is priced in.
///
/// Fields are public for ergonomic construction; [`OptionContract::new`]
/// checks the invariants up front and the engine checks them again before
/// pricing, so a hand-built invalid contract is still rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Underlying price (S), > 0
    pub spot: f64,
    /// Strike price (K), > 0
    pub strike: f64,
    /// Time to expiry in years (T), > 0
    pub maturity: f64,
    /// Annualized risk-free rate (r), any finite value
    pub rate: f64,
    /// Annualized volatility (σ), > 0
    pub volatility: f64,
    pub kind: OptionKind,
}

impl OptionContract {
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> BsmResult<Self> {
        let contract = Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            kind,
        };
        contract.validate()?;
        Ok(contract)
    }

    pub fn call(spot: f64, strike: f64, maturity: f64, rate: f64, volatility: f64) -> BsmResult<Self> {
        Self::new(spot, strike, maturity, rate, volatility, OptionKind::Call)
    }

    pub fn put(spot: f64, strike: f64, maturity: f64, rate: f64, volatility: f64) -> BsmResult<Self> {
        Self::new(spot, strike, maturity, rate, volatility, OptionKind::Put)
    }

    /// Check that the closed form is defined for this contract.
    pub fn validate(&self) -> BsmResult<()> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("volatility", self.volatility),
        ];
        for (name, value) in positive {
            if !value.is_finite() {
                return Err(BsmError::domain(format!("{name} must be finite, got {value}")));
            }
            if value <= 0.0 {
                return Err(BsmError::domain(format!(
                    "{name} must be strictly positive, got {value}"
                )));
            }
        }
        if !self.rate.is_finite() {
            return Err(BsmError::domain(format!("rate must be finite, got {}", self.rate)));
        }
        Ok(())
    }
}

#[allow(non_snake_case)]
fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Price of a European call. Arguments must already satisfy the contract invariants.
#[allow(non_snake_case)]
fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    S * normal_cdf(d1) - K * (-r * T).exp() * normal_cdf(d2)
}

/// Price of a European put. Arguments must already satisfy the contract invariants.
#[allow(non_snake_case)]
fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    K * (-r * T).exp() * normal_cdf(-d2) - S * normal_cdf(-d1)
}

/// The Black-Scholes-Merton engine. Stateless; share it freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesMerton;

impl PricingModel for BlackScholesMerton {
    fn name(&self) -> &str {
        "black-scholes-merton"
    }

    fn price(&self, contract: &OptionContract) -> BsmResult<f64> {
        contract.validate()?;

        let OptionContract {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            kind,
        } = *contract;

        let price = match kind {
            OptionKind::Call => bs_call_price(spot, strike, rate, maturity, volatility),
            OptionKind::Put => bs_put_price(spot, strike, rate, maturity, volatility),
        };

        // Finite inputs can still overflow (e.g. S near f64::MAX).
        if !price.is_finite() {
            return Err(BsmError::domain(format!(
                "price is not finite for {contract:?}"
            )));
        }
        Ok(price)
    }
}

/// Price one European option from its scalar parameters.
///
/// # Example
///
/// ```rust
/// use bsm_heatmap::{bsm_price, OptionKind};
///
/// let call = bsm_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call)?;
/// assert!((call - 10.45).abs() < 0.01);
/// # Ok::<(), bsm_heatmap::BsmError>(())
/// ```
pub fn bsm_price(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    kind: OptionKind,
) -> BsmResult<f64> {
    let contract = OptionContract {
        spot,
        strike,
        maturity,
        rate,
        volatility,
        kind,
    };
    BlackScholesMerton.price(&contract)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!("CALL".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!(" Put \n".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!("p".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!(OptionKind::Put.to_string(), "put");
    }

    #[test]
    fn test_kind_parsing_rejects_unknown() {
        let err = "straddle".parse::<OptionKind>().unwrap_err();
        assert_eq!(err, BsmError::InvalidContractKind("straddle".to_string()));
    }

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionKind::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionKind::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionKind::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionKind::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_new_validates() {
        assert!(OptionContract::call(100.0, 100.0, 1.0, -0.01, 0.2).is_ok());
        for bad in [
            OptionContract::call(0.0, 100.0, 1.0, 0.05, 0.2),
            OptionContract::call(100.0, -1.0, 1.0, 0.05, 0.2),
            OptionContract::call(100.0, 100.0, 0.0, 0.05, 0.2),
            OptionContract::call(100.0, 100.0, 1.0, 0.05, 0.0),
            OptionContract::call(100.0, 100.0, 1.0, f64::NAN, 0.2),
            OptionContract::put(f64::INFINITY, 100.0, 1.0, 0.05, 0.2),
        ] {
            assert!(matches!(bad, Err(BsmError::Domain(_))), "got {bad:?}");
        }
    }
}
