use std::fmt::Write;

use tokenbench_core::{ComparisonResult, PATTERN_CODE_EXECUTION, PATTERN_TRADITIONAL};

use crate::report::group_thousands;

/// Width in characters of the longest bar.
pub const BAR_WIDTH: usize = 50;

const TRADITIONAL_MARK: char = '#';
const CODE_EXECUTION_MARK: char = '=';

/// Two text bar charts: per-category breakdown and total consumption.
///
/// Bars in each chart share one scale, set by that chart's largest value.
pub fn render_chart(result: &ComparisonResult) -> String {
    let trad = &result.traditional;
    let code = &result.code_execution;
    let categories = [
        ("Context", trad.total_context_tokens, code.total_context_tokens),
        ("Reasoning", trad.total_reasoning_tokens, code.total_reasoning_tokens),
        ("Tool Calls", trad.total_tool_call_tokens, code.total_tool_call_tokens),
        ("Responses", trad.total_response_tokens, code.total_response_tokens),
    ];

    let mut out = String::new();
    let _ = writeln!(out, "MCP Token Consumption: Traditional vs Code Execution");
    let _ = writeln!(
        out,
        "Legend: {TRADITIONAL_MARK} Traditional   {CODE_EXECUTION_MARK} Code Execution\n"
    );

    let _ = writeln!(out, "Token Breakdown");
    let breakdown_max = categories
        .iter()
        .map(|(_, t, c)| (*t).max(*c))
        .max()
        .unwrap_or(0);
    for (label, t, c) in categories {
        push_bar(&mut out, label, t, breakdown_max, TRADITIONAL_MARK);
        push_bar(&mut out, "", c, breakdown_max, CODE_EXECUTION_MARK);
    }

    let _ = writeln!(out, "\nTotal Consumption");
    let total_max = trad.grand_total.max(code.grand_total);
    push_bar(
        &mut out,
        &format!("Traditional {PATTERN_TRADITIONAL}"),
        trad.grand_total,
        total_max,
        TRADITIONAL_MARK,
    );
    push_bar(
        &mut out,
        &format!("Code Exec {PATTERN_CODE_EXECUTION}"),
        code.grand_total,
        total_max,
        CODE_EXECUTION_MARK,
    );
    out
}

fn push_bar(out: &mut String, label: &str, value: u64, max: u64, mark: char) {
    let bar: String = std::iter::repeat(mark).take(bar_len(value, max)).collect();
    let _ = writeln!(out, "{label:<20} |{bar} {}", group_thousands(value));
}

/// Non-zero values always get at least one mark.
fn bar_len(value: u64, max: u64) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }
    let scaled = (value as u128 * BAR_WIDTH as u128 / max as u128) as usize;
    scaled.max(1)
}
