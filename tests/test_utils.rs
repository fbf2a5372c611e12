#![allow(dead_code)] // Each test binary uses a different subset of helpers

use bsm_heatmap::{AxisRange, FixedTerms, OptionContract, OptionKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Textbook at-the-money contract: S = K = 100, one year, r = 5%, σ = 20%
pub fn reference_contract(kind: OptionKind) -> OptionContract {
    OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, kind).expect("reference contract is valid")
}

/// Fixed terms matching the reference contract
pub fn reference_terms(kind: OptionKind) -> FixedTerms {
    FixedTerms::new(100.0, 1.0, 0.05, kind)
}

pub fn default_spot_range() -> AxisRange {
    AxisRange::new(80.0, 120.0)
}

pub fn default_vol_range() -> AxisRange {
    AxisRange::new(0.1, 0.5)
}

/// Deterministic generator so failures reproduce
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_b5a1)
}

/// A random contract well inside the valid domain
pub fn random_contract(rng: &mut StdRng, kind: OptionKind) -> OptionContract {
    OptionContract {
        spot: rng.gen_range(10.0..300.0),
        strike: rng.gen_range(10.0..300.0),
        maturity: rng.gen_range(0.05..3.0),
        rate: rng.gen_range(-0.02..0.10),
        volatility: rng.gen_range(0.05..1.0),
        kind,
    }
}

/// Assert `|actual - expected| <= tol` with a readable message
pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {} ± {}, got {} (diff {:e})",
        what,
        expected,
        tol,
        actual,
        (actual - expected).abs()
    );
}
