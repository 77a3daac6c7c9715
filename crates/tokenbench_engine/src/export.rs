use std::path::{Path, PathBuf};

use engine_logging::engine_info;
use thiserror::Error;
use tokenbench_core::ComparisonResult;

use crate::persist::{OutputDir, PersistError};
use crate::simulation::to_ascii_pretty;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Saves the comparison as ASCII-only pretty JSON at `{output_dir}/{filename}`.
pub fn save_results(
    comparison: &ComparisonResult,
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf, ExportError> {
    let mut content = to_ascii_pretty(comparison)?;
    content.push('\n');
    let path = OutputDir::new(output_dir).write_atomic(filename, &content)?;
    engine_info!("Results saved: {}", path.display());
    Ok(path)
}

/// Saves an already rendered chart at `{output_dir}/{filename}`.
pub fn save_chart(chart: &str, output_dir: &Path, filename: &str) -> Result<PathBuf, ExportError> {
    let path = OutputDir::new(output_dir).write_atomic(filename, chart)?;
    engine_info!("Chart saved: {}", path.display());
    Ok(path)
}
