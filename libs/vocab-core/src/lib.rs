//! Core daily-vocabulary library shared by the engine.
//!
//! Provides:
//! - Corpus loading and validation
//! - Calendar-day rotation policy
//! - Daily word selection with per-level backfill and random sampling
//! - Learned-word ledger with milestone detection
//! - Shared types (VocabularyEntry, Level, UserSettings, etc.)
//!
//! Everything here is pure and synchronous; persistence and scheduling
//! live in the engine crate.

pub mod corpus;
pub mod error;
pub mod ledger;
pub mod rotation;
pub mod selection;
pub mod types;

pub use corpus::Corpus;
pub use error::{CorpusError, Result};
pub use ledger::{check_milestone, MilestoneCheck, ProgressLedger};
pub use rotation::should_rotate;
pub use selection::select_daily;
pub use types::{
    DailySelection, DictionarySource, LearnedRecord, Level, UserSettings, VocabularyEntry,
    MILESTONE_THRESHOLD, WORDS_PER_DAY,
};
