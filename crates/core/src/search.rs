//! Pagination clamping shared by listing endpoints.

/// Default page size when the client sends none.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Hard cap on page size.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Clamp a client-supplied limit into `[1, max]`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a client-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
