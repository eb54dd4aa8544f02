//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using CorpusError.
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors that can occur while loading the vocabulary corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus unavailable: {0}")]
    Unavailable(String),

    #[error("malformed corpus data: {0}")]
    Malformed(String),

    #[error("corpus contains no words")]
    Empty,
}
