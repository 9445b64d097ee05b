//! Clock access.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current Unix time in seconds, respecting `SOURCE_DATE_EPOCH`.
///
/// Commit ages are measured against this, so setting `SOURCE_DATE_EPOCH`
/// pins them for snapshot tests.
pub fn get_now() -> u64 {
    source_date_epoch(std::env::var("SOURCE_DATE_EPOCH").ok().as_deref())
        .unwrap_or_else(system_now)
}

fn source_date_epoch(value: Option<&str>) -> Option<u64> {
    value.and_then(|val| val.trim().parse().ok())
}

fn system_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_else(|e| {
            log::warn!("System clock is before the Unix epoch: {e}");
            0
        })
}
