//! Record structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` record struct as held by the store
//! - A `Deserialize` + `Validate` create DTO
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for merges

pub mod project;
pub mod task;
