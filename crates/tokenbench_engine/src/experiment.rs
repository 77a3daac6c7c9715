use engine_logging::engine_info;
use tokenbench_core::{compare, ComparisonResult, TokenAccumulator};

use crate::code_execution::simulate_code_execution;
use crate::scenario::ScenarioProvider;
use crate::simulation::{SimulationError, SimulationSettings};
use crate::token::TokenCounter;
use crate::traditional::simulate_traditional;

/// Both paradigm ledgers plus their comparison.
#[derive(Debug, Clone)]
pub struct ExperimentOutcome {
    pub traditional: TokenAccumulator,
    pub code_execution: TokenAccumulator,
    pub comparison: ComparisonResult,
}

/// Runs both simulators over the scenario's operations and compares them.
pub fn run_experiment(
    scenario: &dyn ScenarioProvider,
    counter: &dyn TokenCounter,
    settings: &SimulationSettings,
) -> Result<ExperimentOutcome, SimulationError> {
    let operations = scenario.operations();
    engine_info!(
        "Running scenario '{}' with {} operations",
        scenario.name(),
        operations.len()
    );

    let traditional = simulate_traditional(scenario, &operations, counter, settings)?;
    let code_execution = simulate_code_execution(scenario, &operations, counter)?;
    let comparison = compare(&traditional.summary(), &code_execution.summary());

    engine_info!(
        "Savings {} tokens ({}%), hypothesis supported: {}",
        comparison.comparison.total_token_savings,
        comparison.comparison.total_savings_percentage,
        comparison.theory_validation.hypothesis_supported
    );

    Ok(ExperimentOutcome {
        traditional,
        code_execution,
        comparison,
    })
}
