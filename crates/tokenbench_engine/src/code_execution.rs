use engine_logging::{engine_debug, engine_info};
use tokenbench_core::{TokenAccumulator, TokenMetrics};

use crate::scenario::{IntentExchange, Operation, OperationKind, ScenarioProvider};
use crate::simulation::{pretty_json, SimulationError, CODE_EXECUTION_PARADIGM};
use crate::token::TokenCounter;

/// Simulates the batched-intent paradigm.
///
/// Setup pays for a terse prompt plus the capability manifest. All searches
/// collapse into one intent, each booking is its own intent, and no operation
/// re-pays context.
pub fn simulate_code_execution(
    scenario: &dyn ScenarioProvider,
    operations: &[Operation],
    counter: &dyn TokenCounter,
) -> Result<TokenAccumulator, SimulationError> {
    let mut acc = TokenAccumulator::new(CODE_EXECUTION_PARADIGM);
    let prompt = format!(
        "{}\n\n{}",
        scenario.code_execution_system_prompt(),
        scenario.capability_manifest()
    );
    acc.set_initial_context_tokens(counter.count(&prompt));

    let (searches, bookings): (Vec<Operation>, Vec<Operation>) = operations
        .iter()
        .cloned()
        .partition(|op| op.kind == OperationKind::Search);

    if !searches.is_empty() {
        let metrics = measure_exchange(&scenario.batch_exchange(&searches), counter)?;
        engine_debug!(
            "batch intent covers {} searches, total={}",
            searches.len(),
            metrics.total()
        );
        acc.add_operation(metrics);
    }
    for booking in &bookings {
        let metrics = measure_exchange(&scenario.booking_exchange(booking), counter)?;
        engine_debug!("booking intent tool={} total={}", booking.tool, metrics.total());
        acc.add_operation(metrics);
    }

    engine_info!(
        "{} simulation: {} operations, {} tokens",
        CODE_EXECUTION_PARADIGM,
        acc.operation_count(),
        acc.grand_total()
    );
    Ok(acc)
}

fn measure_exchange(
    exchange: &IntentExchange,
    counter: &dyn TokenCounter,
) -> Result<TokenMetrics, SimulationError> {
    let request = pretty_json("intent request", &exchange.request)?;
    let response = pretty_json("intent response", &exchange.response)?;
    Ok(TokenMetrics {
        context_tokens: 0,
        reasoning_tokens: counter.count(&exchange.reasoning),
        tool_call_tokens: counter.count(&request),
        response_tokens: counter.count(&response),
    })
}
