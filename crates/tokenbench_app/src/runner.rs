use anyhow::Context;
use engine_logging::engine_info;
use tokenbench_core::ComparisonResult;
use tokenbench_engine::{
    render_banner, render_chart, render_comparison_table, render_conclusion,
    render_operation_breakdown, render_scenario, run_experiment, save_chart, save_results,
    Cl100kTokenCounter, ScenarioProvider, TokenCounter, TravelScenario, WhitespaceTokenCounter,
};

use crate::cli::TokenizerChoice;
use crate::settings::ExperimentSettings;

fn build_counter(choice: TokenizerChoice) -> anyhow::Result<Box<dyn TokenCounter>> {
    let counter: Box<dyn TokenCounter> = match choice {
        TokenizerChoice::Cl100k => Box::new(
            Cl100kTokenCounter::new().context("initializing cl100k_base tokenizer")?,
        ),
        TokenizerChoice::Whitespace => Box::new(WhitespaceTokenCounter),
    };
    Ok(counter)
}

/// Runs the travel experiment, prints the report and persists the outputs.
pub fn run(
    settings: &ExperimentSettings,
    tokenizer: TokenizerChoice,
) -> anyhow::Result<ComparisonResult> {
    let scenario = TravelScenario::new();
    let operations = scenario.operations();
    let counter = build_counter(tokenizer)?;

    println!(
        "{}",
        render_banner(scenario.name(), scenario.tools().len(), operations.len())
    );
    println!("{}", render_scenario(scenario.name(), &operations));

    let outcome = run_experiment(&scenario, counter.as_ref(), &settings.simulation())
        .context("simulating paradigms")?;
    let result = outcome.comparison;

    println!(
        "Traditional MCP: {} total tokens",
        result.traditional.grand_total
    );
    println!(
        "Code Execution:  {} total tokens\n",
        result.code_execution.grand_total
    );
    if settings.verbose {
        println!("{}", render_operation_breakdown(&outcome.traditional));
        println!("{}", render_operation_breakdown(&outcome.code_execution));
    }
    println!("{}", render_comparison_table(&result));

    if settings.save_results {
        let path = save_results(&result, &settings.output_dir, &settings.results_filename)
            .context("saving results")?;
        println!("[Results saved: {}]", path.display());
    }

    if settings.generate_charts {
        let chart = render_chart(&result);
        println!("\n{chart}");
        let path = save_chart(&chart, &settings.output_dir, &settings.chart_filename)
            .context("saving chart")?;
        println!("[Chart saved: {}]", path.display());
    }

    println!("\n{}", render_conclusion(&result));
    engine_info!(
        "Experiment finished, hypothesis supported: {}",
        result.theory_validation.hypothesis_supported
    );
    Ok(result)
}
