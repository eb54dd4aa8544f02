//! Shared fixtures for engine integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use vocab_core::{Corpus, CorpusError, Level, VocabularyEntry};
use vocab_engine::{CorpusSource, KeyValueStore, MemoryStore, StoreError, VocabEngine};

pub fn entry(word: &str, level: Level) -> VocabularyEntry {
    VocabularyEntry {
        word: word.to_string(),
        level,
        definition: format!("definition of {word}"),
        example: format!("Example sentence using {word}."),
        audio_url: None,
    }
}

/// Corpus with the given number of entries per level.
pub fn corpus(easy: usize, medium: usize, hard: usize) -> Corpus {
    let mut words = Vec::new();
    for i in 0..easy {
        words.push(entry(&format!("easy-{i}"), Level::Easy));
    }
    for i in 0..medium {
        words.push(entry(&format!("medium-{i}"), Level::Medium));
    }
    for i in 0..hard {
        words.push(entry(&format!("hard-{i}"), Level::Hard));
    }
    Corpus::new(words).expect("non-empty fixture corpus")
}

/// Corpus source whose availability can be flipped mid-test.
#[derive(Default)]
pub struct SwitchableCorpus {
    corpus: RwLock<Option<Corpus>>,
}

impl SwitchableCorpus {
    pub fn available(corpus: Corpus) -> Self {
        Self {
            corpus: RwLock::new(Some(corpus)),
        }
    }

    pub async fn make_unavailable(&self) {
        *self.corpus.write().await = None;
    }

    pub async fn make_available(&self, corpus: Corpus) {
        *self.corpus.write().await = Some(corpus);
    }
}

#[async_trait]
impl CorpusSource for SwitchableCorpus {
    async fn load(&self) -> Result<Corpus, CorpusError> {
        match &*self.corpus.read().await {
            Some(corpus) => Ok(corpus.clone()),
            None => Err(CorpusError::Unavailable("switched off".into())),
        }
    }
}

/// Store that fails every operation.
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _keys: &[&str]) -> Result<HashMap<String, Value>, StoreError> {
        Err(StoreError::Unavailable("store offline".into()))
    }

    async fn set(&self, _entries: HashMap<String, Value>) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".into()))
    }
}

/// Engine handle bundled with its backing stores.
pub struct TestEngine {
    pub engine: VocabEngine,
    pub local: Arc<MemoryStore>,
    pub synced: Arc<MemoryStore>,
}

impl TestEngine {
    /// Seeded engine over in-memory stores and the given corpus.
    pub fn new(corpus: Corpus) -> Self {
        let local = Arc::new(MemoryStore::new());
        let synced = Arc::new(MemoryStore::new());
        let engine = VocabEngine::with_seed(
            local.clone(),
            synced.clone(),
            Arc::new(SwitchableCorpus::available(corpus)),
            42,
        );
        Self {
            engine,
            local,
            synced,
        }
    }

    pub fn with_corpus_source(source: Arc<dyn CorpusSource>) -> Self {
        let local = Arc::new(MemoryStore::new());
        let synced = Arc::new(MemoryStore::new());
        let engine = VocabEngine::with_seed(local.clone(), synced.clone(), source, 42);
        Self {
            engine,
            local,
            synced,
        }
    }

    /// Raw value currently stored under `key` in the local scope.
    pub async fn stored(&self, key: &str) -> Option<Value> {
        let mut map = self.local.get(&[key]).await.expect("memory store");
        map.remove(key)
    }

    /// Raw value currently stored under `key` in the synced scope.
    pub async fn stored_synced(&self, key: &str) -> Option<Value> {
        let mut map = self.synced.get(&[key]).await.expect("memory store");
        map.remove(key)
    }
}
