use chrono::{DateTime, NaiveDateTime, Utc};

/// Canonical textual datetime format used in storage and at the API boundary.
///
/// This is the single source of truth for serialising instants; every
/// timestamp column stores this representation and every response carries it.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Formats a UTC instant in the canonical textual representation.
pub fn format_datetime(instant: DateTime<Utc>) -> String {
    instant.format(DATETIME_FORMAT).to_string()
}

/// Parses a canonical textual timestamp back to a UTC instant.
pub fn parse_datetime(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT).map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn round_trips_canonical_format() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 15, 12, 30, 45).unwrap();
        let text = format_datetime(instant);
        assert_eq!(text, "2025-06-15T12:30:45.000Z");
        assert_eq!(parse_datetime(&text).unwrap(), instant);
    }
}
