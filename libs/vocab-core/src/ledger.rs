//! Learned-word ledger and milestone detection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{LearnedRecord, VocabularyEntry};

/// The record of every word the user has marked learned, plus the running
/// total.
///
/// `total_count` only ever grows, by exactly one per newly learned word;
/// the single exception is [`ProgressLedger::reset`], which clears
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressLedger {
    pub learned: Vec<LearnedRecord>,
    pub total_count: u64,
}

impl ProgressLedger {
    pub fn new(learned: Vec<LearnedRecord>, total_count: u64) -> Self {
        Self {
            learned,
            total_count,
        }
    }

    /// Record a word as learned. Returns `true` if the word was new.
    ///
    /// Deduplication is keyed on the `word` string; marking an
    /// already-learned word leaves the ledger and counter untouched.
    pub fn record_learned(&mut self, entry: VocabularyEntry, now: DateTime<Utc>) -> bool {
        if self.is_learned(&entry.word) {
            return false;
        }
        self.learned.push(LearnedRecord {
            entry,
            learned_date: now,
        });
        self.total_count += 1;
        true
    }

    pub fn is_learned(&self, word: &str) -> bool {
        self.learned.iter().any(|r| r.entry.word == word)
    }

    /// Clear all records and zero the counter. Irreversible; any
    /// confirmation happens in the caller.
    pub fn reset(&mut self) {
        self.learned.clear();
        self.total_count = 0;
    }
}

/// Result of a milestone check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MilestoneCheck {
    pub crossed: bool,
    pub count: u64,
}

/// A milestone is crossed exactly when the count sits on a positive
/// multiple of `threshold`.
///
/// Callers check right after a successful [`ProgressLedger::record_learned`]
/// with the post-increment count, so landing on the multiple is caught on
/// the action that causes it.
pub fn check_milestone(count: u64, threshold: u64) -> MilestoneCheck {
    let crossed = threshold > 0 && count > 0 && count % threshold == 0;
    MilestoneCheck { crossed, count }
}
