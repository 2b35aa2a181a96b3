/// Record identifiers are random v4 UUIDs, rendered as hyphenated strings.
pub type RecordId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh identifier for a new record.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4()
}

/// Current wall-clock time.
///
/// Call once per operation and reuse the value for every field the
/// operation touches.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

/// Parse a client-supplied identifier.
///
/// Identifiers are opaque to clients, so anything that is not a well-formed
/// UUID simply names no record and yields `None`.
pub fn parse_record_id(raw: &str) -> Option<RecordId> {
    uuid::Uuid::parse_str(raw).ok()
}
