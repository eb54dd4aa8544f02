//! Core types for the daily vocabulary engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of words drawn per difficulty level per day.
pub const WORDS_PER_DAY: usize = 5;

/// A milestone fires at every multiple of this learned-word count.
pub const MILESTONE_THRESHOLD: u64 = 100;

/// Difficulty level of a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Default for Level {
    fn default() -> Self {
        Self::Easy
    }
}

impl Level {
    /// All levels in presentation order. This order also fixes backfill
    /// donor traversal and daily-selection concatenation.
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Immutable corpus record. `word` is unique within a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub word: String,
    pub level: Level,
    pub definition: String,
    pub example: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// A vocabulary entry the user has marked learned.
///
/// At most one record exists per distinct `word`; re-marking a learned
/// word is a no-op at the ledger level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnedRecord {
    #[serde(flatten)]
    pub entry: VocabularyEntry,
    pub learned_date: DateTime<Utc>,
}

/// The words chosen for one day, stamped with their generation time.
///
/// Entries are ordered easy, then medium, then hard; order within a level
/// is whatever the sampling pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySelection {
    pub words: Vec<VocabularyEntry>,
    pub generated_at: DateTime<Utc>,
}

impl DailySelection {
    /// Entries for a single level, in selection order.
    pub fn for_level(&self, level: Level) -> impl Iterator<Item = &VocabularyEntry> {
        self.words.iter().filter(move |w| w.level == level)
    }
}

/// Where word definitions are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionarySource {
    Local,
    Remote,
}

impl Default for DictionarySource {
    fn default() -> Self {
        Self::Local
    }
}

/// Valid range for `words_per_day_per_level`.
pub const MIN_WORDS_PER_DAY: u32 = 1;
pub const MAX_WORDS_PER_DAY: u32 = 10;

/// User-facing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub words_per_day_per_level: u32,
    pub auto_play_audio: bool,
    pub dictionary_source: DictionarySource,
    pub api_key: String,
    pub sync_across_devices: bool,
    pub default_level: Level,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            words_per_day_per_level: WORDS_PER_DAY as u32,
            auto_play_audio: false,
            dictionary_source: DictionarySource::default(),
            api_key: String::new(),
            sync_across_devices: true,
            default_level: Level::default(),
        }
    }
}

impl UserSettings {
    /// Clamp out-of-range values to the nearest valid bound.
    ///
    /// Invalid configuration is never rejected outright; the closest legal
    /// value wins.
    pub fn normalized(mut self) -> Self {
        self.words_per_day_per_level = self
            .words_per_day_per_level
            .clamp(MIN_WORDS_PER_DAY, MAX_WORDS_PER_DAY);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn level_round_trips_through_str() {
        for level in Level::ALL {
            assert_eq!(Level::from_str(level.as_str()), Some(level));
        }
        assert_eq!(Level::from_str("expert"), None);
    }

    #[test]
    fn entry_serializes_with_camel_case_audio_url() {
        let entry = VocabularyEntry {
            word: "ephemeral".into(),
            level: Level::Hard,
            definition: "lasting a very short time".into(),
            example: "The ephemeral mist burned off by noon.".into(),
            audio_url: Some("https://example.com/ephemeral.mp3".into()),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["level"], "hard");
        assert_eq!(json["audioUrl"], "https://example.com/ephemeral.mp3");
    }

    #[test]
    fn entry_deserializes_without_audio_url() {
        let json = r#"{"word":"cat","level":"easy","definition":"a small cat","example":"The cat sat."}"#;
        let entry: VocabularyEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.audio_url, None);
    }

    #[test]
    fn learned_record_flattens_entry_fields() {
        let record = LearnedRecord {
            entry: VocabularyEntry {
                word: "cat".into(),
                level: Level::Easy,
                definition: "a small cat".into(),
                example: "The cat sat.".into(),
                audio_url: None,
            },
            learned_date: Utc::now(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["word"], "cat");
        assert!(json["learnedDate"].is_string());
    }

    #[test]
    fn settings_clamp_to_valid_range() {
        let low = UserSettings {
            words_per_day_per_level: 0,
            ..Default::default()
        };
        assert_eq!(low.normalized().words_per_day_per_level, 1);

        let high = UserSettings {
            words_per_day_per_level: 50,
            ..Default::default()
        };
        assert_eq!(high.normalized().words_per_day_per_level, 10);

        let fine = UserSettings::default();
        assert_eq!(fine.clone().normalized(), fine);
    }

    #[test]
    fn settings_deserialize_from_partial_json() {
        let settings: UserSettings =
            serde_json::from_str(r#"{"wordsPerDayPerLevel":7}"#).unwrap();
        assert_eq!(settings.words_per_day_per_level, 7);
        assert_eq!(settings.default_level, Level::Easy);
        assert!(settings.sync_across_devices);
    }
}
