//! Vocabulary corpus loading and validation.

use serde::Deserialize;

use crate::error::{CorpusError, Result};
use crate::types::{Level, VocabularyEntry};

/// The static vocabulary corpus.
///
/// Loaded once per rotation; never mutated. A corpus that fails
/// validation must never replace a previously valid one; callers abort
/// the rotation instead.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<VocabularyEntry>,
}

#[derive(Deserialize)]
struct CorpusFile {
    #[serde(default)]
    words: Vec<VocabularyEntry>,
}

impl Corpus {
    /// Build a corpus from an already-deserialized word list.
    pub fn new(words: Vec<VocabularyEntry>) -> Result<Self> {
        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { words })
    }

    /// Parse the corpus JSON document (`{ "words": [...] }`).
    pub fn from_json(data: &str) -> Result<Self> {
        let file: CorpusFile =
            serde_json::from_str(data).map_err(|e| CorpusError::Malformed(e.to_string()))?;
        Self::new(file.words)
    }

    pub fn words(&self) -> &[VocabularyEntry] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of entries at a given level.
    pub fn count_for(&self, level: Level) -> usize {
        self.words.iter().filter(|w| w.level == level).count()
    }
}
