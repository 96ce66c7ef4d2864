use crate::config::RecompletePolicy;
use crate::error::AppError;
use crate::model::{Positional, Task, TaskLocator, local_now};
use crate::storage::json_store;
use std::path::Path;

/// Ordered task collection. Insertion order is display order and every id is
/// resolved through the list's [`TaskLocator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList<L: TaskLocator = Positional> {
    tasks: Vec<Task>,
    locator: L,
}

impl TaskList {
    pub fn new() -> Self {
        Self::with_locator(Positional)
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            locator: Positional,
        }
    }
}

impl<L: TaskLocator> TaskList<L> {
    pub fn with_locator(locator: L) -> Self {
        Self {
            tasks: Vec::new(),
            locator,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: L::Id) -> Option<&Task> {
        self.locator
            .index_of(&self.tasks, id)
            .map(|index| &self.tasks[index])
    }

    /// Tasks paired with their current ids, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (L::Id, &Task)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| (self.locator.id_at(&self.tasks, index), task))
    }

    pub fn create<D: Into<String>>(&mut self, description: D) -> &Task {
        self.tasks.push(Task::new(description));
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn remove(&mut self, id: L::Id) -> Result<Task, AppError> {
        let index = self.resolve(id)?;
        Ok(self.tasks.remove(index))
    }

    /// Marks the task complete, re-stamping `completed_at` if it already was.
    pub fn complete(&mut self, id: L::Id) -> Result<&Task, AppError> {
        self.complete_with(id, RecompletePolicy::Refresh)
    }

    pub fn complete_with(
        &mut self,
        id: L::Id,
        policy: RecompletePolicy,
    ) -> Result<&Task, AppError> {
        let index = self.resolve(id)?;
        let task = &mut self.tasks[index];

        if !(task.completed && policy == RecompletePolicy::Keep) {
            task.completed = true;
            task.completed_at = local_now();
        }

        Ok(&self.tasks[index])
    }

    /// Replaces the contents with the tasks stored at `path`. A missing file
    /// leaves the list untouched.
    pub fn load(&mut self, path: &Path) -> Result<(), AppError> {
        if let Some(tasks) = json_store::read_tasks(path)? {
            self.tasks = tasks;
        }
        Ok(())
    }

    pub fn store(&self, path: &Path) -> Result<(), AppError> {
        json_store::save_tasks(path, &self.tasks)
    }

    fn resolve(&self, id: L::Id) -> Result<usize, AppError> {
        self.locator.index_of(&self.tasks, id).ok_or_else(|| {
            AppError::invalid_index(format!(
                "no task with id {} ({} tasks)",
                id,
                self.tasks.len()
            ))
        })
    }
}
