//! In-process record store for projects and tasks.
//!
//! Nothing here is persisted; the store lives exactly as long as the
//! [`MemoryStore`] value that owns it.

pub mod models;
pub mod repositories;
mod store;

pub use store::{MemoryStore, StoreStats};
