//! Domain building blocks shared by the store and the HTTP layer:
//! identifiers, timestamps, errors, the task status enum and input
//! validation.

pub mod error;
pub mod task_status;
pub mod types;
pub mod validation;
