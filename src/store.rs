//! In-memory task store.
//!
//! The store owns every [`Task`] and is the only place they are mutated.
//! It is created by the binary and handed to the UI explicitly.

use std::collections::BTreeMap;
use std::fmt;

use crate::constants::ERROR_TITLE_REQUIRED;

/// Identifier of a task, unique for the lifetime of its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub is_complete: bool,
}

/// Errors raised when creating a task.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", ERROR_TITLE_REQUIRED)]
    TitleRequired,
}

/// Owner of all tasks and the operations over them.
///
/// Tasks are keyed by id. Ids come from a counter that only ever moves
/// forward, so ascending key order is also insertion order.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: BTreeMap<TaskId, Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task from `title`.
    ///
    /// Surrounding whitespace is trimmed; an empty result is rejected.
    pub fn create(&mut self, title: &str) -> Result<Task, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }

        self.next_id += 1;
        let task = Task {
            id: TaskId(self.next_id),
            title: title.to_string(),
            is_complete: false,
        };
        self.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    /// Flip the completion flag of `id`, returning the new value.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.get_mut(&id)?;
        task.is_complete = !task.is_complete;
        Some(task.is_complete)
    }

    /// Remove `id` from the store.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.tasks.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Display sequence, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.values().filter(|task| task.is_complete).count()
    }
}
