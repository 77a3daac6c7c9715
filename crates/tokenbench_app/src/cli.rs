use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Compare token consumption of traditional MCP tool calling and code execution.
#[derive(Debug, Parser)]
#[command(name = "tokenbench", version)]
pub struct Cli {
    /// RON settings file; flags below override its values.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for results.json and the chart.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip chart generation.
    #[arg(long)]
    pub no_charts: bool,

    /// Skip saving results to JSON.
    #[arg(long)]
    pub no_save: bool,

    /// Print the per-operation token breakdown of both paradigms.
    #[arg(long)]
    pub verbose: bool,

    /// Also write the log to ./tokenbench.log.
    #[arg(long)]
    pub log_file: bool,

    #[arg(long, value_enum, default_value_t = TokenizerChoice::Cl100k)]
    pub tokenizer: TokenizerChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenizerChoice {
    /// BPE `cl100k_base` encoding.
    Cl100k,
    /// Whitespace-separated words; no BPE table needed.
    Whitespace,
}
