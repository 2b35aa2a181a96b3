//! Repository for the `projects` table.

use planboard_core::types::{self, RecordId};

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::MemoryStore;

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the stored record.
    pub async fn create(store: &MemoryStore, input: &CreateProject) -> Project {
        let now = types::now();
        let project = Project {
            id: types::new_record_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            created_at: now,
            updated_at: now,
        };

        store
            .write()
            .await
            .projects
            .insert(project.id, project.clone());
        project
    }

    /// Find a project by id.
    pub async fn find_by_id(store: &MemoryStore, id: RecordId) -> Option<Project> {
        store.read().await.projects.get(&id).cloned()
    }

    /// List all projects in creation order.
    pub async fn list(store: &MemoryStore) -> Vec<Project> {
        store.read().await.projects.values().cloned().collect()
    }

    /// Merge `input` into a project. Only `Some` fields are applied.
    ///
    /// Returns `None` if no project with the given `id` exists.
    pub async fn update(
        store: &MemoryStore,
        id: RecordId,
        input: &UpdateProject,
    ) -> Option<Project> {
        let mut tables = store.write().await;
        let project = tables.projects.get_mut(&id)?;

        if let Some(name) = &input.name {
            project.name = name.clone();
        }
        if let Some(description) = &input.description {
            project.description = description.clone();
        }
        project.updated_at = types::now().max(project.created_at);

        Some(project.clone())
    }

    /// Delete a project and every task that belongs to it.
    ///
    /// Returns the number of cascaded tasks, or `None` if no project with
    /// the given `id` exists. Both tables change under a single write lock,
    /// so no task can be attached to the project mid-cascade.
    pub async fn delete(store: &MemoryStore, id: RecordId) -> Option<usize> {
        let mut tables = store.write().await;
        tables.projects.shift_remove(&id)?;

        let before = tables.tasks.len();
        tables.tasks.retain(|_, task| task.project_id != id);
        let removed = before - tables.tasks.len();

        tracing::debug!(project_id = %id, removed_tasks = removed, "Cascaded project delete");
        Some(removed)
    }
}
