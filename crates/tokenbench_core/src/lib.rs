//! Tokenbench core: pure token accounting and paradigm comparison.
mod accumulator;
mod compare;
mod metrics;

pub use accumulator::{ParadigmSummary, TokenAccumulator};
pub use compare::{
    compare, ComparisonMetrics, ComparisonResult, TheoryValidation, EXPECTED_SAVINGS_LABEL,
    HYPOTHESIS_THRESHOLD_PCT, PATTERN_CODE_EXECUTION, PATTERN_TRADITIONAL,
};
pub use metrics::{OperationRecord, TokenMetrics};

/// Rounds to `decimals` places, exact halves to even.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
