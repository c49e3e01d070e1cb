use chrono::{DateTime, Utc};

use crate::storage::save_snapshot;

use super::EditorCore;

/// Write a full snapshot stamped with the core's current host time.
/// Failures are logged; the board stays usable.
pub(super) fn save(core: &mut EditorCore) -> bool {
    let stamp = saved_at(core.now_ms);
    match save_snapshot(core.store.as_mut(), &core.grid, stamp) {
        Ok(()) => {
            core.saves += 1;
            true
        }
        Err(e) => {
            console_error!("Error saving drawing: {}", e);
            false
        }
    }
}

/// Epoch milliseconds to UTC; out-of-range values fall back to the epoch.
fn saved_at(now_ms: f64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(now_ms as i64).unwrap_or_default()
}
