//! Plain-text rendering of experiment results.
//!
//! Every function returns a `String`; printing is left to the caller.
use std::fmt::Write;

use tokenbench_core::{
    ComparisonResult, TokenAccumulator, PATTERN_CODE_EXECUTION, PATTERN_TRADITIONAL,
};

use crate::scenario::Operation;

const WIDTH: usize = 70;
const LABEL_WIDTH: usize = 20;
const VALUE_WIDTH: usize = 16;

pub fn render_banner(scenario_name: &str, tool_count: usize, operation_count: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    let _ = writeln!(out, "MCP TOKEN CONSUMPTION EXPERIMENT");
    let _ = writeln!(out, "Comparing: Traditional MCP vs Code Execution Paradigm");
    let _ = writeln!(
        out,
        "Scenario:  {scenario_name} with {tool_count} Tools x {operation_count} Operations"
    );
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    out
}

pub fn render_scenario(scenario_name: &str, operations: &[Operation]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "TEST SCENARIO: {scenario_name}");
    let _ = writeln!(out, "{}", "-".repeat(50));
    let _ = writeln!(out, "Operations to execute:");
    for (i, op) in operations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, op.tool);
    }
    out
}

pub fn render_comparison_table(result: &ComparisonResult) -> String {
    let trad = &result.traditional;
    let code = &result.code_execution;
    let comp = &result.comparison;

    let rows: [(&str, String, String); 5] = [
        (
            "Initial Context",
            group_thousands(trad.initial_context_tokens),
            group_thousands(code.initial_context_tokens),
        ),
        (
            "Total Context",
            group_thousands(trad.total_context_tokens),
            group_thousands(code.total_context_tokens),
        ),
        (
            "Reasoning",
            group_thousands(trad.total_reasoning_tokens),
            group_thousands(code.total_reasoning_tokens),
        ),
        (
            "Tool Calls",
            group_thousands(trad.total_tool_call_tokens),
            group_thousands(code.total_tool_call_tokens),
        ),
        (
            "Responses",
            group_thousands(trad.total_response_tokens),
            group_thousands(code.total_response_tokens),
        ),
    ];

    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    let _ = writeln!(out, "TOKEN CONSUMPTION ANALYSIS: Traditional MCP vs Code Execution");
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    push_row(&mut out, "Metric", "Traditional", "Code Execution");
    push_rule(&mut out);
    for (label, lhs, rhs) in &rows {
        push_row(&mut out, label, lhs, rhs);
    }
    push_rule(&mut out);
    push_row(
        &mut out,
        "GRAND TOTAL",
        &group_thousands(trad.grand_total),
        &group_thousands(code.grand_total),
    );
    push_row(
        &mut out,
        "Tokens/Operation",
        &format!("{:.2}", trad.tokens_per_operation),
        &format!("{:.2}", code.tokens_per_operation),
    );

    let _ = writeln!(out, "\n{}", "-".repeat(WIDTH));
    let _ = writeln!(
        out,
        "SAVINGS: {} tokens ({}%)",
        group_signed(comp.total_token_savings),
        comp.total_savings_percentage
    );
    let _ = writeln!(
        out,
        "Context Savings: {} tokens ({}%)",
        group_signed(comp.context_token_savings),
        comp.context_savings_percentage
    );
    let _ = writeln!(
        out,
        "Efficiency: {}x | Hypothesis: {}",
        comp.efficiency_multiplier,
        if result.theory_validation.hypothesis_supported {
            "YES"
        } else {
            "NO"
        }
    );
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    out
}

/// Per-operation rows for one paradigm run, in execution order.
pub fn render_operation_breakdown(acc: &TokenAccumulator) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (initial context {})",
        acc.paradigm_name(),
        group_thousands(acc.initial_context_tokens())
    );
    let _ = writeln!(
        out,
        "{:>4} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "#", "context", "reasoning", "tool_call", "response", "total"
    );
    for (i, metrics) in acc.operations().iter().enumerate() {
        let record = metrics.to_record();
        let _ = writeln!(
            out,
            "{:>4} {:>10} {:>10} {:>10} {:>10} {:>10}",
            i + 1,
            record.context_tokens,
            record.reasoning_tokens,
            record.tool_call_tokens,
            record.response_tokens,
            record.total_tokens
        );
    }
    out
}

pub fn render_conclusion(result: &ComparisonResult) -> String {
    let comp = &result.comparison;
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    let _ = writeln!(out, "CONCLUSION");
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));

    if result.theory_validation.hypothesis_supported {
        let _ = writeln!(out, "HYPOTHESIS CONFIRMED\n");
        let _ = writeln!(
            out,
            "The Code Execution Paradigm achieves {}% token savings compared to",
            comp.total_savings_percentage
        );
        let _ = writeln!(out, "the Traditional MCP Architecture.\n");
        let _ = writeln!(out, "Key Findings:");
        let _ = writeln!(
            out,
            "  - Traditional MCP follows {PATTERN_TRADITIONAL}: tokens grow with N tools x M operations"
        );
        let _ = writeln!(
            out,
            "  - Code Execution follows {PATTERN_CODE_EXECUTION}: one-time discovery + lean operations"
        );
        let _ = writeln!(
            out,
            "  - Context overhead is reduced by {}%",
            comp.context_savings_percentage
        );
        let _ = writeln!(out, "  - Efficiency multiplier: {}x", comp.efficiency_multiplier);
    } else {
        let _ = writeln!(out, "HYPOTHESIS NOT FULLY SUPPORTED\n");
        let _ = writeln!(
            out,
            "The experiment shows {}% token savings, which is below",
            comp.total_savings_percentage
        );
        let _ = writeln!(
            out,
            "the expected 50%+ threshold for strong support of the hypothesis."
        );
    }
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    out
}

fn push_row(out: &mut String, label: &str, lhs: &str, rhs: &str) {
    let _ = writeln!(
        out,
        "{label:<LABEL_WIDTH$} {lhs:>VALUE_WIDTH$} {rhs:>VALUE_WIDTH$}"
    );
}

fn push_rule(out: &mut String) {
    let _ = writeln!(out, "{}", "-".repeat(LABEL_WIDTH + 2 * (VALUE_WIDTH + 1)));
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn group_signed(value: i64) -> String {
    let grouped = group_thousands(value.unsigned_abs());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
