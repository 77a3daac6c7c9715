use serde::{Deserialize, Serialize};

/// Token cost of one simulated operation, split into four categories.
///
/// What each category means depends on the paradigm that produced it; the
/// record only stores the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenMetrics {
    /// System prompt and tool definitions restated for this operation.
    pub context_tokens: u64,
    /// Model reasoning around the call.
    pub reasoning_tokens: u64,
    /// Serialized tool invocation.
    pub tool_call_tokens: u64,
    /// Tool response content.
    pub response_tokens: u64,
}

impl TokenMetrics {
    pub fn new(
        context_tokens: u64,
        reasoning_tokens: u64,
        tool_call_tokens: u64,
        response_tokens: u64,
    ) -> Self {
        Self {
            context_tokens,
            reasoning_tokens,
            tool_call_tokens,
            response_tokens,
        }
    }

    /// Saturates at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.context_tokens
            .saturating_add(self.reasoning_tokens)
            .saturating_add(self.tool_call_tokens)
            .saturating_add(self.response_tokens)
    }

    pub fn to_record(&self) -> OperationRecord {
        OperationRecord {
            context_tokens: self.context_tokens,
            reasoning_tokens: self.reasoning_tokens,
            tool_call_tokens: self.tool_call_tokens,
            response_tokens: self.response_tokens,
            total_tokens: self.total(),
        }
    }
}

/// Flat, serializable view of a [`TokenMetrics`] including its total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub context_tokens: u64,
    pub reasoning_tokens: u64,
    pub tool_call_tokens: u64,
    pub response_tokens: u64,
    pub total_tokens: u64,
}
