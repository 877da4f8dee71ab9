use thiserror::Error;

use crate::model::{IdGenerator, Task, TaskId};

/// The only domain error. Communicated as a value to the caller, which is
/// responsible for turning it into a user-visible warning; unknown ids are
/// silent no-ops, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("a task with the same title is already registered")]
    DuplicateTitle,
}

/// Authoritative ordered sequence of tasks. The store is the sole owner of
/// the sequence; consumers get `&[Task]` views and mutate only through the
/// operations below. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a new task with a fresh id and `done = false`. Fails with
    /// [`StoreError::DuplicateTitle`] when any existing task carries the
    /// same title, leaving the store unchanged.
    pub fn add(&mut self, title: &str) -> Result<TaskId, StoreError> {
        if self.has_title(title) {
            return Err(StoreError::DuplicateTitle);
        }
        let id = self.ids.next();
        self.tasks.push(Task::new(id, title));
        Ok(id)
    }

    /// Flip the `done` flag of the matching task. Returns whether anything
    /// changed; an absent id is a silent no-op.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    /// Replace the title of the matching task. `Ok(true)` on success,
    /// `Ok(false)` when the id is unknown (no mutation, no duplicate error).
    ///
    /// The duplicate check runs against the full current list with no
    /// self-exclusion, so resubmitting a task's own unchanged title is
    /// rejected as a collision with itself.
    pub fn edit(&mut self, id: TaskId, new_title: &str) -> Result<bool, StoreError> {
        if self.has_title(new_title) {
            return Err(StoreError::DuplicateTitle);
        }
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.title = new_title.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the matching task, preserving the relative order of the rest.
    /// Obtaining user confirmation is the caller's job. Returns whether a
    /// task was removed; an absent id is a no-op.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    fn has_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title == title)
    }
}
