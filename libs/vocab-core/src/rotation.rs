//! Daily rotation policy.

use chrono::{DateTime, TimeZone};

/// Decide whether the daily selection is stale.
///
/// Rotation is due on first run (no previous timestamp) or whenever the
/// calendar date of `now` differs from the calendar date of the last
/// rotation. The comparison is by year/month/day in the supplied
/// timezone, not by elapsed duration, so 23:59 to 00:01 rotates while a
/// full 23 hours inside one day does not.
pub fn should_rotate<Tz: TimeZone>(last_update: Option<&DateTime<Tz>>, now: &DateTime<Tz>) -> bool {
    match last_update {
        None => true,
        Some(last) => last.date_naive() != now.date_naive(),
    }
}
