//! Repository for the `tasks` table.

use planboard_core::error::CoreError;
use planboard_core::task_status::TaskStatus;
use planboard_core::types::{self, RecordId};

use crate::models::task::{CreateTask, Task, TaskFilter, UpdateTask};
use crate::store::Tables;
use crate::MemoryStore;

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the stored record.
    ///
    /// Fails with `NotFound` on the project if `input.project_id` does not
    /// name an existing project; nothing is stored in that case.
    pub async fn create(store: &MemoryStore, input: &CreateTask) -> Result<Task, CoreError> {
        let mut tables = store.write().await;
        let project_id = resolve_project(&tables, &input.project_id)?;

        let now = types::now();
        let task = Task {
            id: types::new_record_id(),
            title: input.title.clone(),
            description: input.description.clone(),
            project_id,
            status: input.status,
            created_at: now,
            updated_at: now,
        };

        tables.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    /// Find a task by id.
    pub async fn find_by_id(store: &MemoryStore, id: RecordId) -> Option<Task> {
        store.read().await.tasks.get(&id).cloned()
    }

    /// List tasks matching `filter`, in creation order.
    pub async fn list(store: &MemoryStore, filter: &TaskFilter) -> Vec<Task> {
        store
            .read()
            .await
            .tasks
            .values()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect()
    }

    /// List the tasks of one project.
    ///
    /// Returns `None` if the project does not exist, so callers can tell an
    /// unknown project from one without tasks.
    pub async fn list_by_project(store: &MemoryStore, project_id: RecordId) -> Option<Vec<Task>> {
        let tables = store.read().await;
        if !tables.projects.contains_key(&project_id) {
            return None;
        }

        Some(
            tables
                .tasks
                .values()
                .filter(|task| task.project_id == project_id)
                .cloned()
                .collect(),
        )
    }

    /// Merge `input` into a task. Only `Some` fields are applied.
    ///
    /// Returns `Ok(None)` if no task with the given `id` exists, and
    /// `NotFound` on the project if a new `project_id` names no project.
    pub async fn update(
        store: &MemoryStore,
        id: RecordId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, CoreError> {
        let mut tables = store.write().await;
        if !tables.tasks.contains_key(&id) {
            return Ok(None);
        }

        let project_id = input
            .project_id
            .as_deref()
            .map(|raw| resolve_project(&tables, raw))
            .transpose()?;

        let Some(task) = tables.tasks.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = &input.title {
            task.title = title.clone();
        }
        if let Some(description) = &input.description {
            task.description = description.clone();
        }
        if let Some(project_id) = project_id {
            task.project_id = project_id;
        }
        if let Some(status) = input.status {
            task.status = status;
        }
        task.updated_at = types::now().max(task.created_at);

        Ok(Some(task.clone()))
    }

    /// Set only the status of a task.
    ///
    /// Returns `None` if no task with the given `id` exists.
    pub async fn update_status(
        store: &MemoryStore,
        id: RecordId,
        status: TaskStatus,
    ) -> Option<Task> {
        let mut tables = store.write().await;
        let task = tables.tasks.get_mut(&id)?;
        task.status = status;
        task.updated_at = types::now().max(task.created_at);
        Some(task.clone())
    }

    /// Delete a task by id. Returns `true` if a task was removed.
    pub async fn delete(store: &MemoryStore, id: RecordId) -> bool {
        store.write().await.tasks.shift_remove(&id).is_some()
    }
}

/// Resolve a client-supplied project id to an existing project.
fn resolve_project(tables: &Tables, raw: &str) -> Result<RecordId, CoreError> {
    types::parse_record_id(raw)
        .filter(|id| tables.projects.contains_key(id))
        .ok_or_else(|| CoreError::not_found("Project", raw))
}
