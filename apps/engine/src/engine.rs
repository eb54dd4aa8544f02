//! The daily vocabulary engine.
//!
//! Composes the three core responsibilities against the persistence
//! collaborator: the rotation policy decides when the daily set is stale,
//! the selection algorithm regenerates it, and the progress ledger tracks
//! learned words and milestones. The engine is the only writer of
//! `dailyWords`, `lastUpdate`, and `totalWordsCount`; UI surfaces mutate
//! through the message interface instead of writing the store directly.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::Mutex;
use tracing::{info, warn};

use vocab_core::{
    check_milestone, select_daily, should_rotate, DictionarySource, LearnedRecord, Level,
    MilestoneCheck, ProgressLedger, UserSettings, VocabularyEntry, MILESTONE_THRESHOLD,
};

use crate::corpus::CorpusSource;
use crate::error::{EngineError, Result};
use crate::store::{decode, encode, keys, KeyValueStore};

/// Daily vocabulary engine over a local and a cross-device-synced store.
///
/// All reads come from the local scope; progress and settings writes are
/// mirrored to the synced scope when `sync_across_devices` is enabled.
pub struct VocabEngine {
    local: Arc<dyn KeyValueStore>,
    synced: Arc<dyn KeyValueStore>,
    corpus: Arc<dyn CorpusSource>,
    rng: Mutex<ChaCha8Rng>,
    // Overlapping rotation triggers (timer tick vs. settings change)
    // serialize here; last write wins on dailyWords/lastUpdate.
    rotation_guard: Mutex<()>,
    // The ledger read-modify-write must not interleave, or a concurrent
    // mark-learned would drop an increment.
    progress_guard: Mutex<()>,
}

impl VocabEngine {
    pub fn new(
        local: Arc<dyn KeyValueStore>,
        synced: Arc<dyn KeyValueStore>,
        corpus: Arc<dyn CorpusSource>,
    ) -> Self {
        Self::with_rng(local, synced, corpus, ChaCha8Rng::from_entropy())
    }

    /// Engine with a seeded generator, for reproducible selection.
    pub fn with_seed(
        local: Arc<dyn KeyValueStore>,
        synced: Arc<dyn KeyValueStore>,
        corpus: Arc<dyn CorpusSource>,
        seed: u64,
    ) -> Self {
        Self::with_rng(local, synced, corpus, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(
        local: Arc<dyn KeyValueStore>,
        synced: Arc<dyn KeyValueStore>,
        corpus: Arc<dyn CorpusSource>,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            local,
            synced,
            corpus,
            rng: Mutex::new(rng),
            rotation_guard: Mutex::new(()),
            progress_guard: Mutex::new(()),
        }
    }

    /// First-install setup: seed absent progress keys, then generate the
    /// initial daily selection. Corpus unavailability is logged and the
    /// engine starts with whatever selection the store already holds.
    pub async fn initialize(&self) -> Result<()> {
        let current = self
            .local
            .get(&[
                keys::LEARNED_WORDS,
                keys::TOTAL_WORDS_COUNT,
                keys::SELECTED_LEVEL,
            ])
            .await?;

        let mut seed = HashMap::new();
        if !current.contains_key(keys::LEARNED_WORDS) {
            seed.insert(
                keys::LEARNED_WORDS.to_string(),
                encode(&Vec::<LearnedRecord>::new()),
            );
        }
        if !current.contains_key(keys::TOTAL_WORDS_COUNT) {
            seed.insert(keys::TOTAL_WORDS_COUNT.to_string(), encode(&0u64));
        }
        if !current.contains_key(keys::SELECTED_LEVEL) {
            let settings = self.settings().await?;
            seed.insert(
                keys::SELECTED_LEVEL.to_string(),
                encode(&settings.default_level),
            );
        }
        if !seed.is_empty() {
            self.local.set(seed).await?;
        }

        info!("vocabulary engine initialized");
        self.rotate_or_retain().await
    }

    /// Apply the rotation policy and regenerate the daily set if it is
    /// stale. Returns whether a rotation happened.
    pub async fn check_and_rotate(&self) -> Result<bool> {
        let map = self.local.get(&[keys::LAST_UPDATE]).await?;
        let last_update: Option<String> = decode(&map, keys::LAST_UPDATE)?;
        // An unparseable timestamp counts as absent and forces rotation.
        let last = last_update
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| t.with_timezone(&Local));

        if should_rotate(last.as_ref(), &Local::now()) {
            self.rotate_now().await?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Regenerate the daily selection unconditionally.
    ///
    /// Loads the corpus fresh; on failure nothing is written and the
    /// previous selection stays intact.
    pub async fn rotate_now(&self) -> Result<()> {
        let _rotating = self.rotation_guard.lock().await;

        let corpus = self.corpus.load().await?;
        let settings = self.settings().await?;
        let per_level = settings.words_per_day_per_level as usize;

        let now = Utc::now();
        let selection = {
            let mut rng = self.rng.lock().await;
            select_daily(corpus.words(), per_level, &mut *rng, now)
        };

        self.local
            .set(HashMap::from([
                (keys::DAILY_WORDS.to_string(), encode(&selection.words)),
                (keys::LAST_UPDATE.to_string(), encode(&now.to_rfc3339())),
            ]))
            .await?;

        info!(words = selection.words.len(), "daily words updated");
        Ok(())
    }

    /// Record a word as learned. Returns `true` when the word was new;
    /// re-marking a learned word is a no-op.
    pub async fn mark_learned(&self, entry: VocabularyEntry) -> Result<bool> {
        let _guard = self.progress_guard.lock().await;

        let map = self
            .local
            .get(&[keys::LEARNED_WORDS, keys::TOTAL_WORDS_COUNT])
            .await?;
        let learned: Vec<LearnedRecord> = decode(&map, keys::LEARNED_WORDS)?.unwrap_or_default();
        let count: u64 = decode(&map, keys::TOTAL_WORDS_COUNT)?.unwrap_or(0);

        let word = entry.word.clone();
        let level = entry.level;
        let mut ledger = ProgressLedger::new(learned, count);
        if !ledger.record_learned(entry, Utc::now()) {
            return Ok(false);
        }

        let entries = HashMap::from([
            (keys::LEARNED_WORDS.to_string(), encode(&ledger.learned)),
            (
                keys::TOTAL_WORDS_COUNT.to_string(),
                encode(&ledger.total_count),
            ),
        ]);
        self.local.set(entries.clone()).await?;
        if self.settings().await?.sync_across_devices {
            self.synced.set(entries).await?;
        }

        info!(
            word = %word,
            level = level.as_str(),
            total = ledger.total_count,
            "word marked learned"
        );
        Ok(true)
    }

    /// Milestone state of the stored counter. Pure read; expected to be
    /// called right after a `mark_learned` that returned `true`.
    pub async fn check_milestone(&self) -> Result<MilestoneCheck> {
        let map = self.local.get(&[keys::TOTAL_WORDS_COUNT]).await?;
        let count: u64 = decode(&map, keys::TOTAL_WORDS_COUNT)?.unwrap_or(0);
        Ok(check_milestone(count, MILESTONE_THRESHOLD))
    }

    /// Clear all learned words and zero the counter, in both scopes when
    /// sync is enabled. The confirmation dialog is the UI's job.
    pub async fn reset_progress(&self) -> Result<()> {
        let _guard = self.progress_guard.lock().await;

        let entries = HashMap::from([
            (
                keys::LEARNED_WORDS.to_string(),
                encode(&Vec::<LearnedRecord>::new()),
            ),
            (keys::TOTAL_WORDS_COUNT.to_string(), encode(&0u64)),
        ]);
        self.local.set(entries.clone()).await?;
        if self.settings().await?.sync_across_devices {
            self.synced.set(entries).await?;
        }

        info!("progress reset");
        Ok(())
    }

    /// Current settings, defaults applied for anything absent.
    pub async fn settings(&self) -> Result<UserSettings> {
        let map = self.local.get(&[keys::USER_SETTINGS]).await?;
        let settings: UserSettings = decode(&map, keys::USER_SETTINGS)?.unwrap_or_default();
        Ok(settings.normalized())
    }

    /// Persist new settings (clamped to valid ranges) and force an
    /// immediate rotation so the daily set reflects them without waiting
    /// for the next calendar day. Returns the settings as stored.
    pub async fn update_settings(&self, settings: UserSettings) -> Result<UserSettings> {
        let settings = settings.normalized();
        if settings.dictionary_source == DictionarySource::Remote && settings.api_key.is_empty() {
            warn!("remote dictionary source configured without an API key");
        }

        self.local
            .set(HashMap::from([
                (keys::USER_SETTINGS.to_string(), encode(&settings)),
                (
                    keys::SELECTED_LEVEL.to_string(),
                    encode(&settings.default_level),
                ),
            ]))
            .await?;
        if settings.sync_across_devices {
            self.synced
                .set(HashMap::from([(
                    keys::USER_SETTINGS.to_string(),
                    encode(&settings),
                )]))
                .await?;
        }

        self.rotate_or_retain().await?;
        Ok(settings)
    }

    /// Today's words, optionally filtered to one level.
    pub async fn daily_words(&self, level: Option<Level>) -> Result<Vec<VocabularyEntry>> {
        let map = self.local.get(&[keys::DAILY_WORDS]).await?;
        let words: Vec<VocabularyEntry> = decode(&map, keys::DAILY_WORDS)?.unwrap_or_default();
        Ok(match level {
            Some(level) => words.into_iter().filter(|w| w.level == level).collect(),
            None => words,
        })
    }

    /// Full learned-word history.
    pub async fn learned_words(&self) -> Result<Vec<LearnedRecord>> {
        let map = self.local.get(&[keys::LEARNED_WORDS]).await?;
        Ok(decode(&map, keys::LEARNED_WORDS)?.unwrap_or_default())
    }

    /// The level the user last browsed in the popup.
    pub async fn selected_level(&self) -> Result<Level> {
        let map = self.local.get(&[keys::SELECTED_LEVEL]).await?;
        match decode(&map, keys::SELECTED_LEVEL)? {
            Some(level) => Ok(level),
            None => Ok(self.settings().await?.default_level),
        }
    }

    pub async fn set_selected_level(&self, level: Level) -> Result<()> {
        self.local
            .set(HashMap::from([(
                keys::SELECTED_LEVEL.to_string(),
                encode(&level),
            )]))
            .await
            .map_err(Into::into)
    }

    /// Rotate, treating corpus unavailability as non-fatal: the previous
    /// selection stays in place.
    async fn rotate_or_retain(&self) -> Result<()> {
        match self.rotate_now().await {
            Ok(()) => Ok(()),
            Err(EngineError::Corpus(e)) => {
                warn!("corpus unavailable, keeping previous daily selection: {e}");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
