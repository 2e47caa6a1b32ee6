//! Small helpers shared by the storage models.

use chrono::{DateTime, Utc};
use finwise_core::utils::time_utils::{format_datetime, parse_datetime};

/// Parses a stored timestamp, falling back to now on corrupt data so a single
/// bad row cannot poison a whole listing.
pub(crate) fn parse_stored_datetime(value: &str, field: &str) -> DateTime<Utc> {
    parse_datetime(value).unwrap_or_else(|e| {
        log::error!("Failed to parse {} '{}': {}", field, value, e);
        Utc::now()
    })
}

/// The canonical textual form of the current instant.
pub(crate) fn now_stored() -> String {
    format_datetime(Utc::now())
}
