//! Load, mutate and store workflows. Each call reads the backing file, applies
//! at most one change and writes the whole list back.

use crate::config::RecompletePolicy;
use crate::error::AppError;
use crate::task_list::TaskList;
use std::path::Path;
use tracing::debug;

pub fn list_tasks(path: &Path) -> Result<TaskList, AppError> {
    let mut list = TaskList::new();
    list.load(path)?;
    debug!(path = %path.display(), count = list.len(), "loaded tasks");
    Ok(list)
}

pub fn add_task(path: &Path, description: &str) -> Result<TaskList, AppError> {
    let mut list = list_tasks(path)?;
    list.create(description);
    list.store(path)?;
    debug!(position = list.len(), "added task");
    Ok(list)
}

pub fn delete_task(path: &Path, position: usize) -> Result<TaskList, AppError> {
    let mut list = list_tasks(path)?;
    let removed = list.remove(position)?;
    list.store(path)?;
    debug!(position, description = %removed.description, "deleted task");
    Ok(list)
}

pub fn complete_task(
    path: &Path,
    position: usize,
    policy: RecompletePolicy,
) -> Result<TaskList, AppError> {
    let mut list = list_tasks(path)?;
    list.complete_with(position, policy)?;
    list.store(path)?;
    debug!(position, ?policy, "completed task");
    Ok(list)
}
