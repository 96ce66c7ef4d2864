use crate::model::Task;
use std::fmt;

/// Maps the externally visible task id to a slot in the ordered collection.
///
/// Every operation on [`crate::task_list::TaskList`] resolves ids through this
/// trait, so a different identity scheme only needs a new implementation.
pub trait TaskLocator {
    type Id: Copy + fmt::Display;

    /// Index of the task named by `id`, or `None` when no such task exists.
    fn index_of(&self, tasks: &[Task], id: Self::Id) -> Option<usize>;

    /// Id of the task currently stored at `index`.
    fn id_at(&self, tasks: &[Task], index: usize) -> Self::Id;
}

/// 1-based position in the collection. Ids shift down after a removal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Positional;

impl TaskLocator for Positional {
    type Id = usize;

    fn index_of(&self, tasks: &[Task], position: usize) -> Option<usize> {
        if (1..=tasks.len()).contains(&position) {
            Some(position - 1)
        } else {
            None
        }
    }

    fn id_at(&self, _tasks: &[Task], index: usize) -> usize {
        index + 1
    }
}
