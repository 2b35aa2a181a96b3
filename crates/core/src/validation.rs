//! Field constraints for project and task input.
//!
//! DTOs declare their bounds with `#[derive(Validate)]` using the limits
//! below; [`validate_input`] runs the checks and folds any failures into a
//! single [`CoreError::Validation`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Maximum length of a project name or task title, in characters.
pub const MAX_NAME_LENGTH: u64 = 100;

/// Maximum length of a description, in characters.
pub const MAX_DESCRIPTION_LENGTH: u64 = 500;

/// Run the derived validation rules on `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten validation errors into one message, sorted by field name so the
/// output is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
