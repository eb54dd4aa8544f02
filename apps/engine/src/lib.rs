//! Daily Vocabulary Engine.
//!
//! Background service behind a vocabulary trainer: rotates a daily word
//! set once per calendar day (or immediately on a settings change),
//! records learned words idempotently, and detects round-number
//! milestones. Persistence and the corpus are injected collaborators;
//! see [`store::KeyValueStore`] and [`corpus::CorpusSource`].

pub mod corpus;
pub mod engine;
pub mod error;
pub mod messages;
pub mod scheduler;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use corpus::{CorpusSource, JsonFileCorpus, StaticCorpus};
pub use engine::VocabEngine;
pub use error::{EngineError, Result};
pub use messages::{Request, Response};
pub use scheduler::{run_rotation_schedule, DEFAULT_ROTATION_PERIOD};
pub use store::{KeyValueStore, MemoryStore, StoreError};

/// Run the engine as a standalone process: in-memory stores, corpus from
/// `CORPUS_PATH` (default `data/vocabulary.json`), hourly rotation checks.
pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let corpus_path =
        std::env::var("CORPUS_PATH").unwrap_or_else(|_| "data/vocabulary.json".into());
    tracing::info!(path = %corpus_path, "loading corpus from file");

    let engine = Arc::new(VocabEngine::new(
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryStore::new()),
        Arc::new(JsonFileCorpus::new(corpus_path)),
    ));
    engine.initialize().await?;

    run_rotation_schedule(engine, DEFAULT_ROTATION_PERIOD).await;
    Ok(())
}
