//! Tokenbench engine: tokenization, scenario fixtures, paradigm simulators and reporting.
#![recursion_limit = "256"]
mod chart;
mod code_execution;
mod experiment;
mod export;
mod persist;
mod report;
mod scenario;
mod simulation;
mod token;
mod traditional;
mod travel;

pub use chart::{render_chart, BAR_WIDTH};
pub use code_execution::simulate_code_execution;
pub use experiment::{run_experiment, ExperimentOutcome};
pub use export::{save_chart, save_results, ExportError};
pub use persist::{OutputDir, PersistError};
pub use report::{
    group_thousands, render_banner, render_comparison_table, render_conclusion,
    render_operation_breakdown, render_scenario,
};
pub use scenario::{IntentExchange, Operation, OperationKind, ScenarioProvider, ToolDefinition};
pub use simulation::{
    SimulationError, SimulationSettings, CODE_EXECUTION_PARADIGM, TRADITIONAL_PARADIGM,
};
pub use token::{
    Cl100kTokenCounter, TokenCounter, TokenizerError, WhitespaceTokenCounter, CL100K_ENCODING,
};
pub use traditional::{build_tools_context, simulate_traditional};
pub use travel::TravelScenario;
