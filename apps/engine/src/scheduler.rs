//! Periodic rotation trigger.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::engine::VocabEngine;

/// Hourly checks are plenty; rotation only ever fires on a calendar-date
/// change.
pub const DEFAULT_ROTATION_PERIOD: Duration = Duration::from_secs(60 * 60);

/// Drive the rotation policy on a fixed cadence until the task is
/// dropped. The first check runs immediately, covering startup after the
/// process was down across midnight. Failures are logged and the loop
/// keeps going.
pub async fn run_rotation_schedule(engine: Arc<VocabEngine>, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        match engine.check_and_rotate().await {
            Ok(true) => debug!("daily rotation performed"),
            Ok(false) => debug!("daily selection still fresh"),
            Err(e) => warn!("rotation check failed: {e}"),
        }
    }
}
