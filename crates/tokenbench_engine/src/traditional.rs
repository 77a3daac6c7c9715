use engine_logging::{engine_debug, engine_info};
use serde_json::json;
use tokenbench_core::{TokenAccumulator, TokenMetrics};

use crate::scenario::{Operation, ScenarioProvider};
use crate::simulation::{pretty_json, SimulationError, SimulationSettings, TRADITIONAL_PARADIGM};
use crate::token::TokenCounter;

/// Simulates sequential tool orchestration.
///
/// Setup pays for the system prompt, every tool schema and a `tools/list`
/// round trip. Every call then re-pays part of the tool context on top of its
/// own reasoning, request and response.
pub fn simulate_traditional(
    scenario: &dyn ScenarioProvider,
    operations: &[Operation],
    counter: &dyn TokenCounter,
    settings: &SimulationSettings,
) -> Result<TokenAccumulator, SimulationError> {
    let mut acc = TokenAccumulator::new(TRADITIONAL_PARADIGM);

    let tools_context = build_tools_context(scenario)?;
    let prompt = format!("{}{}", scenario.traditional_system_prompt(), tools_context);
    let discovery = simulate_tool_discovery(scenario, counter)?;
    acc.set_initial_context_tokens(counter.count(&prompt) + discovery);

    let context_reload = settings.context_reload(counter.count(&tools_context));
    engine_debug!(
        "traditional setup: initial_context={} context_reload_per_op={}",
        acc.initial_context_tokens(),
        context_reload
    );

    for op in operations {
        let mut metrics = simulate_tool_call(scenario, op, counter)?;
        metrics.context_tokens = context_reload;
        engine_debug!("traditional op tool={} total={}", op.tool, metrics.total());
        acc.add_operation(metrics);
    }

    engine_info!(
        "{} simulation: {} operations, {} tokens",
        TRADITIONAL_PARADIGM,
        acc.operation_count(),
        acc.grand_total()
    );
    Ok(acc)
}

/// Full tool catalog as it appears in the system prompt.
pub fn build_tools_context(scenario: &dyn ScenarioProvider) -> Result<String, SimulationError> {
    let tools_json = pretty_json("tool catalog", &scenario.tools())?;
    Ok(format!("## MCP Tools\n```json\n{tools_json}\n```"))
}

fn simulate_tool_discovery(
    scenario: &dyn ScenarioProvider,
    counter: &dyn TokenCounter,
) -> Result<u64, SimulationError> {
    let request = pretty_json(
        "tools/list request",
        &json!({"jsonrpc": "2.0", "method": "tools/list", "params": {}}),
    )?;
    let response = pretty_json(
        "tools/list response",
        &json!({"result": {"tools": scenario.tools()}}),
    )?;
    Ok(counter.count(&format!("{request}{response}")))
}

fn simulate_tool_call(
    scenario: &dyn ScenarioProvider,
    op: &Operation,
    counter: &dyn TokenCounter,
) -> Result<TokenMetrics, SimulationError> {
    let tool = op.tool.as_str();
    let args = pretty_json("tool arguments", &op.args)?;
    let reasoning = format!("Using '{tool}' tool with params:\n{args}");
    let request = pretty_json(
        "tools/call request",
        &json!({"method": "tools/call", "params": {"name": tool, "arguments": op.args}}),
    )?;
    let mock = pretty_json("mock response", &scenario.mock_response(tool))?;
    let response = pretty_json(
        "tools/call response",
        &json!({"result": {"content": [{"text": mock}]}}),
    )?;
    let processing = format!("Received {tool} response, extracting relevant information...");

    Ok(TokenMetrics {
        context_tokens: 0,
        reasoning_tokens: counter.count(&reasoning) + counter.count(&processing),
        tool_call_tokens: counter.count(&request),
        response_tokens: counter.count(&response),
    })
}
