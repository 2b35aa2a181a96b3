pub mod project;
pub mod task;

use planboard_core::error::CoreError;
use planboard_core::types::{parse_record_id, RecordId};

/// Parse a path identifier, treating a malformed id as an unknown record.
fn parse_id(entity: &'static str, raw: &str) -> Result<RecordId, CoreError> {
    parse_record_id(raw).ok_or_else(|| CoreError::not_found(entity, raw))
}
