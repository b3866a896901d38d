/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Client-facing instants (access-token expiry) are Unix epoch milliseconds.
pub type UnixMillis = i64;
