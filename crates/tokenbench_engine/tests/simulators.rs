use std::sync::Mutex;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokenbench_engine::{
    build_tools_context, simulate_code_execution, simulate_traditional, IntentExchange, Operation,
    ScenarioProvider, SimulationSettings, TokenCounter, ToolDefinition, TravelScenario,
    WhitespaceTokenCounter, CODE_EXECUTION_PARADIGM, TRADITIONAL_PARADIGM,
};

fn init_logging() {
    engine_logging::initialize_for_tests();
}

/// Every non-empty text costs exactly one token.
struct UnitCounter;
impl TokenCounter for UnitCounter {
    fn count(&self, text: &str) -> u64 {
        u64::from(!text.is_empty())
    }
}

#[derive(Default)]
struct RecordingCounter {
    seen: Mutex<Vec<String>>,
}
impl TokenCounter for RecordingCounter {
    fn count(&self, text: &str) -> u64 {
        self.seen.lock().unwrap().push(text.to_string());
        text.split_whitespace().count() as u64
    }
}

/// Minimal scenario with one tool, used to check that providers are substitutable.
struct PingScenario {
    operations: Vec<Operation>,
}

impl ScenarioProvider for PingScenario {
    fn name(&self) -> &str {
        "Ping"
    }
    fn operations(&self) -> Vec<Operation> {
        self.operations.clone()
    }
    fn tools(&self) -> Vec<ToolDefinition> {
        vec![ToolDefinition::new("ping", "Ping a host.", json!({"type": "object"}))]
    }
    fn mock_response(&self, _tool: &str) -> Value {
        json!({"pong": true})
    }
    fn traditional_system_prompt(&self) -> &str {
        "Call tools."
    }
    fn code_execution_system_prompt(&self) -> &str {
        "State intents."
    }
    fn capability_manifest(&self) -> &str {
        "- net.ping"
    }
    fn batch_exchange(&self, _searches: &[Operation]) -> IntentExchange {
        IntentExchange {
            reasoning: String::new(),
            request: json!({"intent": "ping_all"}),
            response: json!({"ok": true}),
        }
    }
    fn booking_exchange(&self, _booking: &Operation) -> IntentExchange {
        IntentExchange {
            reasoning: "Reserve.".to_string(),
            request: json!({"action": "reserve"}),
            response: json!({"status": "confirmed"}),
        }
    }
}

fn ping_ops(searches: usize, bookings: usize) -> Vec<Operation> {
    let mut ops: Vec<Operation> = (0..searches)
        .map(|i| Operation::search("ping", json!({"host": format!("h{i}")})))
        .collect();
    ops.extend((0..bookings).map(|_| Operation::booking("ping", json!({}))));
    ops
}

#[test]
fn traditional_charges_setup_and_reload_per_operation() {
    init_logging();
    let scenario = PingScenario {
        operations: ping_ops(3, 0),
    };
    let settings = SimulationSettings {
        context_reload_divisor: 1,
    };
    let acc = simulate_traditional(&scenario, &scenario.operations(), &UnitCounter, &settings)
        .unwrap();
    let summary = acc.summary();

    assert_eq!(summary.paradigm, TRADITIONAL_PARADIGM);
    // prompt + catalog, then the tools/list round trip
    assert_eq!(summary.initial_context_tokens, 2);
    assert_eq!(summary.operation_count, 3);
    assert_eq!(summary.total_context_tokens, 2 + 3);
    // pre-call reasoning plus post-call processing note
    assert_eq!(summary.total_reasoning_tokens, 6);
    assert_eq!(summary.total_tool_call_tokens, 3);
    assert_eq!(summary.total_response_tokens, 3);
    assert_eq!(summary.grand_total, 17);
    assert_eq!(summary.tokens_per_operation, 5.67);
}

#[test]
fn traditional_reload_is_half_the_tool_context_by_default() {
    init_logging();
    let scenario = TravelScenario::new();
    let counter = WhitespaceTokenCounter;
    let acc = simulate_traditional(
        &scenario,
        &scenario.operations(),
        &counter,
        &SimulationSettings::default(),
    )
    .unwrap();

    let expected = counter.count(&build_tools_context(&scenario).unwrap()) / 2;
    assert!(expected > 0);
    for op in acc.operations() {
        assert_eq!(op.context_tokens, expected);
    }
}

#[test]
fn traditional_measures_json_rpc_payloads() {
    init_logging();
    let scenario = TravelScenario::new();
    let counter = RecordingCounter::default();
    let ops = vec![scenario.operations()[1].clone()];
    simulate_traditional(&scenario, &ops, &counter, &SimulationSettings::default()).unwrap();

    let seen = counter.seen.lock().unwrap();
    assert!(seen.iter().any(|t| t.contains("\"method\": \"tools/list\"")));
    assert!(seen.iter().any(|t| t.contains("\"inputSchema\"")));
    assert!(seen
        .iter()
        .any(|t| t.starts_with("Using 'check_weather' tool with params:\n{\n  \"location\"")));
    assert!(seen.iter().any(|t| t.contains("\"method\": \"tools/call\"")));
    assert!(seen.iter().any(|t| t.contains("Partly Cloudy")));
    assert!(seen
        .iter()
        .any(|t| t == "Received check_weather response, extracting relevant information..."));
}

#[test]
fn traditional_with_no_operations_keeps_setup_cost() {
    init_logging();
    let scenario = PingScenario { operations: vec![] };
    let acc = simulate_traditional(&scenario, &[], &UnitCounter, &SimulationSettings::default())
        .unwrap();
    let summary = acc.summary();

    assert_eq!(summary.operation_count, 0);
    assert_eq!(summary.grand_total, 2);
    assert_eq!(summary.tokens_per_operation, 0.0);
}

#[test]
fn code_execution_batches_searches_and_separates_bookings() {
    init_logging();
    let scenario = PingScenario {
        operations: ping_ops(4, 2),
    };
    let acc = simulate_code_execution(&scenario, &scenario.operations(), &UnitCounter).unwrap();
    let summary = acc.summary();

    assert_eq!(summary.paradigm, CODE_EXECUTION_PARADIGM);
    assert_eq!(summary.initial_context_tokens, 1);
    assert_eq!(summary.operation_count, 3);
    assert_eq!(summary.total_context_tokens, 1);
    // batch intent has no reasoning text, each booking has one line
    assert_eq!(summary.total_reasoning_tokens, 2);
    assert_eq!(summary.total_tool_call_tokens, 3);
    assert_eq!(summary.total_response_tokens, 3);
    assert_eq!(summary.grand_total, 9);
    assert!(acc.operations().iter().all(|m| m.context_tokens == 0));
}

#[test]
fn code_execution_without_searches_has_no_batch() {
    init_logging();
    let scenario = PingScenario {
        operations: ping_ops(0, 1),
    };
    let acc = simulate_code_execution(&scenario, &scenario.operations(), &UnitCounter).unwrap();
    assert_eq!(acc.operation_count(), 1);
}

#[test]
fn code_execution_with_no_operations_is_not_a_fault() {
    init_logging();
    let scenario = PingScenario { operations: vec![] };
    let acc = simulate_code_execution(&scenario, &[], &UnitCounter).unwrap();

    assert_eq!(acc.operation_count(), 0);
    assert_eq!(acc.summary().tokens_per_operation, 0.0);
    assert_eq!(acc.grand_total(), 1);
}

#[test]
fn code_execution_measures_prompt_and_manifest_together() {
    init_logging();
    let scenario = PingScenario { operations: vec![] };
    let counter = RecordingCounter::default();
    simulate_code_execution(&scenario, &[], &counter).unwrap();

    let seen = counter.seen.lock().unwrap();
    assert_eq!(*seen, vec!["State intents.\n\n- net.ping".to_string()]);
}

#[test]
fn batch_response_is_measured_with_ascii_escapes() {
    init_logging();
    let scenario = TravelScenario::new();
    let counter = RecordingCounter::default();
    simulate_code_execution(&scenario, &scenario.operations(), &counter).unwrap();

    let seen = counter.seen.lock().unwrap();
    let response = seen
        .iter()
        .find(|t| t.contains("\"weather_summary\""))
        .expect("batch response measured");
    assert!(response.contains("15-20\\u00b0C"));
}
