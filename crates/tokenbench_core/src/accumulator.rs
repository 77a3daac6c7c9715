use serde::{Deserialize, Serialize};

use crate::metrics::TokenMetrics;
use crate::round_to;

/// Append-only token ledger for one paradigm run.
///
/// All totals are derived from the operation log on every read, so they can
/// never drift from the records that were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAccumulator {
    paradigm_name: String,
    initial_context_tokens: u64,
    operations: Vec<TokenMetrics>,
}

impl TokenAccumulator {
    pub fn new(paradigm_name: impl Into<String>) -> Self {
        Self {
            paradigm_name: paradigm_name.into(),
            initial_context_tokens: 0,
            operations: Vec::new(),
        }
    }

    /// One-time setup cost paid before any operation (system prompt, tool catalog).
    pub fn set_initial_context_tokens(&mut self, tokens: u64) {
        self.initial_context_tokens = tokens;
    }

    pub fn add_operation(&mut self, metrics: TokenMetrics) {
        self.operations.push(metrics);
    }

    pub fn paradigm_name(&self) -> &str {
        &self.paradigm_name
    }

    pub fn initial_context_tokens(&self) -> u64 {
        self.initial_context_tokens
    }

    /// Operations in execution order.
    pub fn operations(&self) -> &[TokenMetrics] {
        &self.operations
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Initial context plus the context restated by every operation.
    pub fn total_context_tokens(&self) -> u64 {
        self.initial_context_tokens
            .saturating_add(self.sum(|m| m.context_tokens))
    }

    pub fn total_reasoning_tokens(&self) -> u64 {
        self.sum(|m| m.reasoning_tokens)
    }

    pub fn total_tool_call_tokens(&self) -> u64 {
        self.sum(|m| m.tool_call_tokens)
    }

    pub fn total_response_tokens(&self) -> u64 {
        self.sum(|m| m.response_tokens)
    }

    pub fn grand_total(&self) -> u64 {
        self.total_context_tokens()
            .saturating_add(self.total_reasoning_tokens())
            .saturating_add(self.total_tool_call_tokens())
            .saturating_add(self.total_response_tokens())
    }

    /// Average cost per operation; `0.0` for an empty run.
    pub fn tokens_per_operation(&self) -> f64 {
        if self.operations.is_empty() {
            return 0.0;
        }
        self.grand_total() as f64 / self.operations.len() as f64
    }

    pub fn summary(&self) -> ParadigmSummary {
        ParadigmSummary {
            paradigm: self.paradigm_name.clone(),
            operation_count: self.operation_count(),
            initial_context_tokens: self.initial_context_tokens,
            total_context_tokens: self.total_context_tokens(),
            total_reasoning_tokens: self.total_reasoning_tokens(),
            total_tool_call_tokens: self.total_tool_call_tokens(),
            total_response_tokens: self.total_response_tokens(),
            grand_total: self.grand_total(),
            tokens_per_operation: round_to(self.tokens_per_operation(), 2),
        }
    }

    /// Totals saturate at `u64::MAX` rather than overflowing.
    fn sum(&self, field: impl Fn(&TokenMetrics) -> u64) -> u64 {
        self.operations
            .iter()
            .map(field)
            .fold(0, u64::saturating_add)
    }
}

/// Snapshot of an accumulator, the only input the comparator needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParadigmSummary {
    pub paradigm: String,
    pub operation_count: usize,
    pub initial_context_tokens: u64,
    pub total_context_tokens: u64,
    pub total_reasoning_tokens: u64,
    pub total_tool_call_tokens: u64,
    pub total_response_tokens: u64,
    pub grand_total: u64,
    /// Rounded to two decimals.
    pub tokens_per_operation: f64,
}
