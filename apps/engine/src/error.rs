//! Engine error types.

use thiserror::Error;
use vocab_core::CorpusError;

use crate::store::StoreError;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The corpus could not be loaded; the previous daily selection is
    /// retained.
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// The persistence collaborator failed; the operation did not take
    /// effect.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
