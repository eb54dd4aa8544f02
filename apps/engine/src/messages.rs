//! Message interface between UI surfaces and the engine.
//!
//! UI contexts never write the store directly; they send a request and
//! the engine performs the mutation. Wire shapes are serde-tagged on an
//! `action` field. Dispatch never panics; failures fold into the response.

use serde::{Deserialize, Serialize};
use vocab_core::VocabularyEntry;

use crate::engine::VocabEngine;

/// A request from a UI surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    /// The user marked a word as learned.
    WordLearned { word: VocabularyEntry },
    /// Ask whether the learned-word count sits on a milestone.
    CheckMilestone,
    /// Settings were saved; the daily selection must be regenerated now.
    SettingsChanged,
}

/// Engine reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Ack {
        success: bool,
    },
    Milestone {
        milestone: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        count: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl VocabEngine {
    /// Handle one UI request.
    pub async fn handle(&self, request: Request) -> Response {
        match request {
            Request::WordLearned { word } => match self.mark_learned(word).await {
                // A duplicate mark is still a successful request.
                Ok(_) => Response::Ack { success: true },
                Err(e) => {
                    tracing::error!("failed to record learned word: {e}");
                    Response::Ack { success: false }
                }
            },
            Request::CheckMilestone => match self.check_milestone().await {
                Ok(check) => Response::Milestone {
                    milestone: check.crossed,
                    count: check.crossed.then_some(check.count),
                    error: None,
                },
                Err(e) => Response::Milestone {
                    milestone: false,
                    count: None,
                    error: Some(e.to_string()),
                },
            },
            Request::SettingsChanged => {
                // Corpus trouble retains the previous selection and is not
                // the user's problem; only storage failures surface.
                match self.rotate_now().await {
                    Ok(()) => Response::Ack { success: true },
                    Err(crate::error::EngineError::Corpus(e)) => {
                        tracing::warn!("settings-driven rotation skipped: {e}");
                        Response::Ack { success: true }
                    }
                    Err(e) => {
                        tracing::error!("settings-driven rotation failed: {e}");
                        Response::Ack { success: false }
                    }
                }
            }
        }
    }
}
