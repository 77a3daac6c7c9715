use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether an operation gathers information or commits to an action.
///
/// Code execution batches all searches into one intent; bookings stay separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Search,
    Booking,
}

/// One abstract unit of work in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub tool: String,
    pub args: Value,
    pub kind: OperationKind,
}

impl Operation {
    pub fn search(tool: impl Into<String>, args: Value) -> Self {
        Self {
            tool: tool.into(),
            args,
            kind: OperationKind::Search,
        }
    }

    pub fn booking(tool: impl Into<String>, args: Value) -> Self {
        Self {
            tool: tool.into(),
            args,
            kind: OperationKind::Booking,
        }
    }
}

/// Tool definition as advertised by a tool server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(name: &str, description: &str, input_schema: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// A single high-level intent and the aggregated answer it gets back.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentExchange {
    pub reasoning: String,
    pub request: Value,
    pub response: Value,
}

/// Fixture data for one experiment scenario.
///
/// Implementations must be deterministic: the same call always returns the
/// same payload, otherwise runs cannot be compared.
pub trait ScenarioProvider {
    fn name(&self) -> &str;

    /// Operations in execution order.
    fn operations(&self) -> Vec<Operation>;

    /// Every tool the traditional paradigm has to advertise up front.
    fn tools(&self) -> Vec<ToolDefinition>;

    /// Mock result of calling `tool`. Unknown tools get a generic success payload.
    fn mock_response(&self, tool: &str) -> Value;

    fn traditional_system_prompt(&self) -> &str;

    fn code_execution_system_prompt(&self) -> &str;

    /// Compact capability listing used instead of full tool schemas.
    fn capability_manifest(&self) -> &str;

    /// Single intent covering every search-type operation.
    fn batch_exchange(&self, searches: &[Operation]) -> IntentExchange;

    fn booking_exchange(&self, booking: &Operation) -> IntentExchange;
}
