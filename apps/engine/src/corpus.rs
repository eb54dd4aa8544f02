//! Corpus sources.
//!
//! The corpus is loaded fresh at every rotation. A source that fails to
//! load aborts the rotation without touching stored state, so a stale
//! daily selection always beats an empty one.

use std::path::PathBuf;

use async_trait::async_trait;
use vocab_core::{Corpus, CorpusError};

/// Provider of the static vocabulary corpus.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    async fn load(&self) -> Result<Corpus, CorpusError>;
}

/// Corpus read from a JSON document on disk (`{ "words": [...] }`).
#[derive(Debug, Clone)]
pub struct JsonFileCorpus {
    path: PathBuf,
}

impl JsonFileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CorpusSource for JsonFileCorpus {
    async fn load(&self) -> Result<Corpus, CorpusError> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CorpusError::Unavailable(format!("{}: {e}", self.path.display())))?;
        Corpus::from_json(&data)
    }
}

/// Fixed in-memory corpus, mainly for tests.
#[derive(Debug, Clone)]
pub struct StaticCorpus {
    corpus: Corpus,
}

impl StaticCorpus {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }
}

#[async_trait]
impl CorpusSource for StaticCorpus {
    async fn load(&self) -> Result<Corpus, CorpusError> {
        Ok(self.corpus.clone())
    }
}
