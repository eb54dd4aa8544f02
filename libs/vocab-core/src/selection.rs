//! Daily word selection.
//!
//! Builds the day's word set in three passes: partition the corpus by
//! level, backfill under-populated levels from the other levels, then
//! sample uniformly without replacement within each level. Randomness
//! comes from an injected [`Rng`] so selection is reproducible under a
//! seeded generator.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::types::{DailySelection, Level, VocabularyEntry};

/// Select the daily word set from the corpus.
///
/// Each level contributes up to `per_level` entries. A level with too few
/// entries of its own borrows from the other levels (donors scanned in
/// [`Level::ALL`] order); a borrowed entry leaves its donor group, so no
/// entry can appear twice in one selection. If the whole corpus cannot
/// cover `per_level` for some level, the shortfall is accepted silently.
///
/// The result concatenates the easy, medium, and hard groups in that
/// order; order within a group is random.
pub fn select_daily<R: Rng + ?Sized>(
    corpus: &[VocabularyEntry],
    per_level: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> DailySelection {
    let mut groups = partition(corpus);
    backfill(&mut groups, per_level);

    let mut words = Vec::new();
    for group in &mut groups {
        words.extend(sample_without_replacement(group, per_level, rng));
    }

    DailySelection {
        words,
        generated_at: now,
    }
}

/// Split the corpus into disjoint per-level groups, indexed in
/// [`Level::ALL`] order.
fn partition(corpus: &[VocabularyEntry]) -> [Vec<VocabularyEntry>; 3] {
    let mut groups: [Vec<VocabularyEntry>; 3] = Default::default();
    for entry in corpus {
        let slot = Level::ALL
            .iter()
            .position(|l| *l == entry.level)
            .unwrap_or(0);
        groups[slot].push(entry.clone());
    }
    groups
}

/// Top up each group below `per_level` by moving entries out of the other
/// groups. Donor order is fixed, a moved entry is gone from its donor, and
/// borrowed entries are held aside so a later backfill can never re-borrow
/// one.
fn backfill(groups: &mut [Vec<VocabularyEntry>; 3], per_level: usize) {
    let mut borrowed: [Vec<VocabularyEntry>; 3] = Default::default();
    for i in 0..groups.len() {
        for donor in 0..groups.len() {
            if donor == i {
                continue;
            }
            while groups[i].len() + borrowed[i].len() < per_level && !groups[donor].is_empty() {
                let moved = groups[donor].remove(0);
                borrowed[i].push(moved);
            }
        }
    }
    for (group, extra) in groups.iter_mut().zip(borrowed) {
        group.extend(extra);
    }
}

/// Draw `min(count, pool.len())` entries uniformly at random without
/// replacement; a partial Fisher-Yates over the pool.
fn sample_without_replacement<R: Rng + ?Sized>(
    pool: &mut Vec<VocabularyEntry>,
    count: usize,
    rng: &mut R,
) -> Vec<VocabularyEntry> {
    let count = count.min(pool.len());
    let mut result = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.gen_range(0..pool.len());
        result.push(pool.swap_remove(index));
    }
    result
}
