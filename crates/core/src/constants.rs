//! Application-wide constants.

/// Budget usage percentage above which the alert level is critical.
pub const BUDGET_CRITICAL_THRESHOLD: f64 = 90.0;

/// Budget usage percentage above which the alert level is warning.
pub const BUDGET_WARNING_THRESHOLD: f64 = 75.0;

/// Maximum chat messages returned per history fetch.
pub const CHAT_HISTORY_LIMIT: i64 = 50;

/// Maximum tips returned per fetch.
pub const AI_TIPS_LIMIT: i64 = 10;
