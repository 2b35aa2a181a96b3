use indexmap::IndexMap;
use planboard_core::types::RecordId;
use serde::Serialize;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::project::Project;
use crate::models::task::Task;

/// The two record tables. Iteration follows insertion order.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub projects: IndexMap<RecordId, Project>,
    pub tasks: IndexMap<RecordId, Task>,
}

/// Record counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub projects_count: usize,
    pub tasks_count: usize,
}

/// Owner of all project and task records.
///
/// Both tables sit behind one `RwLock`, so every repository call observes
/// and applies a consistent snapshot, including cascades that touch both
/// tables. Shared through `Arc` in the API state.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }

    /// Current number of projects and tasks.
    pub async fn stats(&self) -> StoreStats {
        let tables = self.read().await;
        StoreStats {
            projects_count: tables.projects.len(),
            tasks_count: tables.tasks.len(),
        }
    }
}
