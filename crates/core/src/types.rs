/// Record ids; the `types` table uses BIGSERIAL, and 0 marks a record the
/// store has not assigned an id to.
pub type DbId = i64;

/// Stored timestamps, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
