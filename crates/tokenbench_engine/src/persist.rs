use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output path {0:?} exists and is not a directory")]
    NotADirectory(PathBuf),
    #[error("cannot create output directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Directory receiving experiment artifacts (results, charts).
#[derive(Debug, Clone)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the directory if needed, then writes `filename` through a
    /// sibling temp file renamed into place. An existing file is replaced.
    pub fn write_atomic(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        if self.path.exists() && !self.path.is_dir() {
            return Err(PersistError::NotADirectory(self.path.clone()));
        }
        fs::create_dir_all(&self.path).map_err(|source| PersistError::CreateDir {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = NamedTempFile::new_in(&self.path)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;

        let target = self.path.join(filename);
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
