use serde::{Deserialize, Serialize};

use crate::accumulator::ParadigmSummary;
use crate::round_to;

pub const PATTERN_TRADITIONAL: &str = "O(N×M)";
pub const PATTERN_CODE_EXECUTION: &str = "O(N+M)";
pub const EXPECTED_SAVINGS_LABEL: &str = "60-70%";
/// Pass threshold for the hypothesis. Deliberately looser than the expected range.
pub const HYPOTHESIS_THRESHOLD_PCT: f64 = 50.0;

/// Outcome of contrasting two paradigm summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub traditional: ParadigmSummary,
    pub code_execution: ParadigmSummary,
    pub comparison: ComparisonMetrics,
    pub theory_validation: TheoryValidation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    /// Negative when code execution costs more.
    pub total_token_savings: i64,
    pub total_savings_percentage: f64,
    pub context_token_savings: i64,
    pub context_savings_percentage: f64,
    pub tokens_per_op_traditional: f64,
    pub tokens_per_op_code_execution: f64,
    pub efficiency_multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheoryValidation {
    pub pattern_traditional: String,
    pub pattern_code_execution: String,
    pub expected_savings: String,
    pub actual_savings: String,
    pub hypothesis_supported: bool,
}

/// Compares a traditional run against a code-execution run.
///
/// Never faults: every percentage or ratio with a zero denominator is `0`.
pub fn compare(traditional: &ParadigmSummary, code_execution: &ParadigmSummary) -> ComparisonResult {
    let total_diff = signed_diff(traditional.grand_total, code_execution.grand_total);
    let total_pct = percentage(total_diff, traditional.grand_total);

    let context_diff = signed_diff(
        traditional.total_context_tokens,
        code_execution.total_context_tokens,
    );
    let context_pct = percentage(context_diff, traditional.total_context_tokens);

    let efficiency_multiplier = if code_execution.grand_total > 0 {
        round_to(
            traditional.grand_total as f64 / code_execution.grand_total as f64,
            2,
        )
    } else {
        0.0
    };

    ComparisonResult {
        traditional: traditional.clone(),
        code_execution: code_execution.clone(),
        comparison: ComparisonMetrics {
            total_token_savings: total_diff,
            total_savings_percentage: round_to(total_pct, 2),
            context_token_savings: context_diff,
            context_savings_percentage: round_to(context_pct, 2),
            tokens_per_op_traditional: traditional.tokens_per_operation,
            tokens_per_op_code_execution: code_execution.tokens_per_operation,
            efficiency_multiplier,
        },
        theory_validation: TheoryValidation {
            pattern_traditional: PATTERN_TRADITIONAL.to_string(),
            pattern_code_execution: PATTERN_CODE_EXECUTION.to_string(),
            expected_savings: EXPECTED_SAVINGS_LABEL.to_string(),
            actual_savings: savings_label(traditional.grand_total, total_pct),
            hypothesis_supported: total_pct >= HYPOTHESIS_THRESHOLD_PCT,
        },
    }
}

/// One-decimal percentage label. An undefined percentage (zero base) is the
/// bare integer `0%`; integral values keep their `.0`.
fn savings_label(base: u64, pct: f64) -> String {
    if base == 0 {
        return "0%".to_string();
    }
    let rounded = round_to(pct, 1);
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}%")
    } else {
        format!("{rounded}%")
    }
}

fn signed_diff(lhs: u64, rhs: u64) -> i64 {
    (i128::from(lhs) - i128::from(rhs)).clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

fn percentage(diff: i64, base: u64) -> f64 {
    if base == 0 {
        return 0.0;
    }
    diff as f64 / base as f64 * 100.0
}
