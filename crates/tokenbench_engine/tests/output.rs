use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tokenbench_core::{ComparisonResult, TokenAccumulator, TokenMetrics};
use tokenbench_engine::{
    render_chart, render_comparison_table, render_conclusion, render_operation_breakdown,
    render_scenario, save_chart, save_results, OutputDir, PersistError, ScenarioProvider,
    TravelScenario, BAR_WIDTH,
};

fn sample_result() -> (TokenAccumulator, ComparisonResult) {
    let mut trad = TokenAccumulator::new("Traditional MCP");
    trad.set_initial_context_tokens(1000);
    trad.add_operation(TokenMetrics::new(50, 20, 30, 40));
    trad.add_operation(TokenMetrics::new(50, 20, 30, 40));
    let mut code = TokenAccumulator::new("Code Execution");
    code.set_initial_context_tokens(200);
    code.add_operation(TokenMetrics::new(0, 20, 100, 180));
    let result = tokenbench_core::compare(&trad.summary(), &code.summary());
    (trad, result)
}

fn init_logging() {
    engine_logging::initialize_for_tests();
}

#[test]
fn write_creates_missing_output_dir() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out").join("nested");
    assert!(!new_dir.exists());

    let path = OutputDir::new(&new_dir).write_atomic("results.json", "{}").unwrap();
    assert!(new_dir.is_dir());
    assert_eq!(path, new_dir.join("results.json"));
}

#[test]
fn write_replaces_existing_file() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let dir = OutputDir::new(temp.path());

    let first = dir.write_atomic("results.json", "{}").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "{}");

    let second = dir.write_atomic("results.json", "[]").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "[]");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn write_into_a_file_path_fails_cleanly() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let err = OutputDir::new(&file_path)
        .write_atomic("results.json", "{}")
        .unwrap_err();
    assert!(matches!(err, PersistError::NotADirectory(_)));
    assert!(!file_path.with_file_name("results.json").exists());
}

#[test]
fn saved_results_round_trip_through_json() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let (_, result) = sample_result();

    let path = save_results(&result, &temp.path().join("output"), "results.json").unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let restored: ComparisonResult = serde_json::from_str(&text).unwrap();

    assert_eq!(restored, result);
    assert!(text.contains("\n  \"traditional\": {"));
    assert!(text.contains("\"hypothesis_supported\": true"));
    assert!(text.contains("\"pattern_traditional\": \"O(N\\u00d7M)\""));
}

#[test]
fn saved_chart_is_written_verbatim() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let (_, result) = sample_result();
    let chart = render_chart(&result);

    let path = save_chart(&chart, temp.path(), "chart.txt").unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), chart);
}

#[test]
fn comparison_table_lists_every_metric() {
    init_logging();
    let (_, result) = sample_result();
    let table = render_comparison_table(&result);

    for label in [
        "Initial Context",
        "Total Context",
        "Reasoning",
        "Tool Calls",
        "Responses",
        "GRAND TOTAL",
        "Tokens/Operation",
    ] {
        assert!(table.contains(label), "missing {label}");
    }
    assert!(table.contains("1,280"));
    assert!(table.contains("SAVINGS: 780 tokens (60.94%)"));
    assert!(table.contains("Efficiency: 2.56x | Hypothesis: YES"));
}

#[test]
fn chart_scales_to_the_largest_total() {
    init_logging();
    let (_, result) = sample_result();
    let chart = render_chart(&result);
    let full_bar = "#".repeat(BAR_WIDTH);

    assert!(chart.contains(&format!("|{full_bar} 1,280")));
    assert!(chart.contains("Traditional O(N×M)"));
    assert!(chart.contains("Code Exec O(N+M)"));
}

#[test]
fn breakdown_lists_operations_in_order() {
    init_logging();
    let (trad, _) = sample_result();
    let breakdown = render_operation_breakdown(&trad);
    let rows: Vec<&str> = breakdown.lines().skip(2).collect();

    assert_eq!(rows.len(), 2);
    assert!(rows[0].trim_start().starts_with("1 "));
    assert!(rows[1].trim_end().ends_with("140"));
}

#[test]
fn conclusion_reflects_verdict() {
    init_logging();
    let (_, result) = sample_result();
    assert!(render_conclusion(&result).contains("HYPOTHESIS CONFIRMED"));

    let empty = TokenAccumulator::new("Empty").summary();
    let failed = tokenbench_core::compare(&empty, &empty);
    assert!(render_conclusion(&failed).contains("HYPOTHESIS NOT FULLY SUPPORTED"));
}

#[test]
fn scenario_listing_numbers_tools() {
    init_logging();
    let scenario = TravelScenario::new();
    let listing = render_scenario(scenario.name(), &scenario.operations());

    assert!(listing.contains("  1. search_flights"));
    assert!(listing.contains("  5. create_booking"));
}
