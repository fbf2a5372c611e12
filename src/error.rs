//! Error types for pricing and grid construction.

use thiserror::Error;

/// Failures surfaced by the pricing engine and the grid evaluator.
///
/// None of these are transient: an input is either valid or it is not, so
/// callers should report the error rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BsmError {
    /// Option type outside `{call, put}`.
    #[error("Invalid contract kind: {0:?} (expected \"call\" or \"put\")")]
    InvalidContractKind(String),

    /// An input that leaves the closed-form price undefined
    /// (non-positive maturity/volatility/spot/strike, or a non-finite value).
    #[error("Domain error: {0}")]
    Domain(String),

    /// Degenerate or inverted axis range, or too few steps.
    #[error("Invalid range: {0}")]
    InvalidRange(String),
}

pub type BsmResult<T> = Result<T, BsmError>;

impl BsmError {
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        Self::InvalidContractKind(kind.into())
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }
}
