use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tiktoken_rs::CoreBPE;

/// Encoding used for every measurement in the experiment.
pub const CL100K_ENCODING: &str = "cl100k_base";

pub trait TokenCounter: Send + Sync {
    /// Number of tokens in `text`; `0` for empty text.
    fn count(&self, text: &str) -> u64;
}

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("failed to load {encoding} encoding: {message}")]
    Load {
        encoding: &'static str,
        message: String,
    },
}

/// BPE token counter backed by the `cl100k_base` table.
///
/// The table is loaded once and shared; clones are cheap.
#[derive(Clone)]
pub struct Cl100kTokenCounter {
    bpe: Arc<CoreBPE>,
}

impl Cl100kTokenCounter {
    pub fn new() -> Result<Self, TokenizerError> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| TokenizerError::Load {
            encoding: CL100K_ENCODING,
            message: e.to_string(),
        })?;
        Ok(Self { bpe: Arc::new(bpe) })
    }
}

impl fmt::Debug for Cl100kTokenCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cl100kTokenCounter")
            .field("encoding", &CL100K_ENCODING)
            .finish()
    }
}

impl TokenCounter for Cl100kTokenCounter {
    fn count(&self, text: &str) -> u64 {
        if text.is_empty() {
            return 0;
        }
        // Special-token text is counted as ordinary text.
        self.bpe.encode_ordinary(text).len() as u64
    }
}

/// Simple, deterministic whitespace tokenizer for tests and offline runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenCounter;

impl TokenCounter for WhitespaceTokenCounter {
    fn count(&self, text: &str) -> u64 {
        text.split_whitespace().count() as u64
    }
}
