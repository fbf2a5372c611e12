//! Spot/volatility price grids
//!
//! Samples each axis evenly, splits it into adjacent bins and prices one
//! contract at the midpoint of every (volatility bin, spot bin) pair.

pub mod config;
pub mod evaluator;
pub mod types;

pub use config::*;
pub use evaluator::*;
pub use types::*;
