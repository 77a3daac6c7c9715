use pretty_assertions::assert_eq;
use tokenbench_engine::{
    run_experiment, Cl100kTokenCounter, ScenarioProvider, SimulationSettings, TravelScenario,
    WhitespaceTokenCounter,
};

fn init_logging() {
    engine_logging::initialize_for_tests();
}

#[test]
fn travel_scenario_supports_hypothesis_with_cl100k() {
    init_logging();
    let counter = Cl100kTokenCounter::new().unwrap();
    let outcome = run_experiment(
        &TravelScenario::new(),
        &counter,
        &SimulationSettings::default(),
    )
    .unwrap();
    let result = &outcome.comparison;

    assert_eq!(result.traditional.operation_count, 5);
    assert_eq!(result.code_execution.operation_count, 2);
    assert!(result.traditional.grand_total > result.code_execution.grand_total);
    assert!(result.comparison.total_savings_percentage >= 50.0);
    assert!(result.comparison.context_savings_percentage > 0.0);
    assert!(result.comparison.efficiency_multiplier > 2.0);
    assert!(result.theory_validation.hypothesis_supported);
    assert!(result.theory_validation.actual_savings.ends_with('%'));
}

#[test]
fn runs_are_reproducible() {
    init_logging();
    let counter = Cl100kTokenCounter::new().unwrap();
    let settings = SimulationSettings::default();
    let first = run_experiment(&TravelScenario::new(), &counter, &settings).unwrap();
    let second = run_experiment(&TravelScenario::new(), &counter, &settings).unwrap();

    assert_eq!(first.comparison, second.comparison);
}

#[test]
fn ledgers_match_their_summaries() {
    init_logging();
    let scenario = TravelScenario::new();
    let outcome = run_experiment(
        &scenario,
        &WhitespaceTokenCounter,
        &SimulationSettings::default(),
    )
    .unwrap();

    assert_eq!(outcome.traditional.summary(), outcome.comparison.traditional);
    assert_eq!(
        outcome.code_execution.summary(),
        outcome.comparison.code_execution
    );
    assert_eq!(
        outcome.traditional.operation_count(),
        scenario.operations().len()
    );
}

#[test]
fn disabling_reload_shrinks_traditional_context() {
    init_logging();
    let counter = WhitespaceTokenCounter;
    let scenario = TravelScenario::new();
    let with_reload = run_experiment(&scenario, &counter, &SimulationSettings::default()).unwrap();
    let without_reload = run_experiment(
        &scenario,
        &counter,
        &SimulationSettings {
            context_reload_divisor: 0,
        },
    )
    .unwrap();

    assert!(
        without_reload.comparison.traditional.total_context_tokens
            < with_reload.comparison.traditional.total_context_tokens
    );
    assert_eq!(
        without_reload.comparison.traditional.total_context_tokens,
        without_reload.comparison.traditional.initial_context_tokens
    );
}
