use std::fs;
use std::path::{Path, PathBuf};

use engine_logging::LogDestination;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokenbench_engine::SimulationSettings;

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Experiment settings, loadable from a RON file. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentSettings {
    pub output_dir: PathBuf,
    pub results_filename: String,
    pub chart_filename: String,
    pub save_results: bool,
    pub generate_charts: bool,
    pub verbose: bool,
    pub context_reload_divisor: u64,
    pub log_destination: LogDestination,
}

impl Default for ExperimentSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            results_filename: "results.json".to_string(),
            chart_filename: "token_comparison_chart.txt".to_string(),
            save_results: true,
            generate_charts: true,
            verbose: false,
            context_reload_divisor: SimulationSettings::default().context_reload_divisor,
            log_destination: LogDestination::Terminal,
        }
    }
}

impl ExperimentSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Command-line switches win over file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.output_dir {
            self.output_dir = dir.clone();
        }
        if cli.no_charts {
            self.generate_charts = false;
        }
        if cli.no_save {
            self.save_results = false;
        }
        if cli.verbose {
            self.verbose = true;
        }
        if cli.log_file {
            self.log_destination = LogDestination::Both;
        }
    }

    pub fn simulation(&self) -> SimulationSettings {
        SimulationSettings {
            context_reload_divisor: self.context_reload_divisor,
        }
    }
}

/// Defaults, then the optional settings file, then command-line overrides.
pub fn resolve(cli: &Cli) -> Result<ExperimentSettings, SettingsError> {
    let mut settings = match &cli.config {
        Some(path) => ExperimentSettings::load(path)?,
        None => ExperimentSettings::default(),
    };
    settings.apply_cli(cli);
    Ok(settings)
}
