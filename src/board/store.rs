//! The task store: the single owner and single writer of task records.
//!
//! Every mutation is synchronous and atomic; readers only ever observe the
//! collection before or after a whole mutation. Insertion order is the visual
//! order within a column, since no persisted rank field exists.

use crate::board::domain::{Task, TaskId, TaskStatus, UserId};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Thread-safe, insertion-ordered collection of task records.
///
/// Cloning the store clones the handle, not the collection; all clones share
/// the same records.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given records.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks.into_iter().collect())),
        }
    }

    // Mutators never panic while holding the lock, so a poisoned guard still
    // protects a structurally valid collection.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Task>> {
        self.tasks.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Task>> {
        self.tasks.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the entire collection. Last fetch wins; no merge semantics.
    pub fn set_tasks(&self, tasks: Vec<Task>) {
        let mut guard = self.write();
        debug!(replaced = guard.len(), loaded = tasks.len(), "store reset");
        *guard = tasks;
    }

    /// Appends a record. Used by external CRUD flows; the caller is
    /// responsible for identifier uniqueness.
    pub fn add(&self, task: Task) {
        self.write().push(task);
    }

    /// Removes the record with the given identifier.
    ///
    /// Returns whether a record was removed; removing an absent task is a
    /// benign no-op.
    #[must_use]
    pub fn remove(&self, task_id: &TaskId) -> bool {
        let mut guard = self.write();
        let before = guard.len();
        guard.retain(|task| task.id() != task_id);
        guard.len() != before
    }

    /// Rewrites the status of exactly one task, if present.
    ///
    /// Returns whether a record was touched; targeting an absent task is a
    /// benign no-op, not an error.
    #[must_use]
    pub fn update_status(&self, task_id: &TaskId, status: TaskStatus) -> bool {
        let mut guard = self.write();
        guard
            .iter_mut()
            .find(|task| task.id() == task_id)
            .map(|task| task.set_status(status))
            .is_some()
    }

    /// Rewrites the assignee of exactly one task, if present. `None` clears
    /// the assignee.
    ///
    /// Returns whether a record was touched; same no-op-if-absent policy as
    /// [`TaskStore::update_status`].
    #[must_use]
    pub fn assign(&self, task_id: &TaskId, user: Option<UserId>) -> bool {
        let mut guard = self.write();
        guard
            .iter_mut()
            .find(|task| task.id() == task_id)
            .map(|task| task.set_assignee(user))
            .is_some()
    }

    /// Returns a cloned snapshot of the collection in insertion order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.read().clone()
    }

    /// Returns a clone of the record with the given identifier, if present.
    #[must_use]
    pub fn get(&self, task_id: &TaskId) -> Option<Task> {
        self.read()
            .iter()
            .find(|task| task.id() == task_id)
            .cloned()
    }

    /// Returns the number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
