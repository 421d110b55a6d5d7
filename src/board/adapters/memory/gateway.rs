//! In-memory sync gateway acting as a stand-in remote store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::board::{
    domain::{ProjectId, Task, TaskId, TaskStatus, UserId},
    ports::{SyncGateway, SyncGatewayError, SyncGatewayResult},
};

/// Thread-safe in-memory sync gateway.
///
/// Behaves like a small remote document store: fetches filter the held
/// records, and committing a status for a record the store does not hold is
/// rejected, which makes it the reference backend for rollback behaviour as
/// well as for the happy path.
#[derive(Debug, Clone, Default)]
pub struct InMemorySyncGateway {
    state: Arc<RwLock<InMemoryRemoteState>>,
}

#[derive(Debug, Default)]
struct InMemoryRemoteState {
    tasks: HashMap<TaskId, Task>,
}

impl InMemorySyncGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway holding the given records.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let gateway = Self::new();
        for task in tasks {
            gateway.insert(task);
        }
        gateway
    }

    /// Inserts or replaces a record on the remote side.
    pub fn insert(&self, task: Task) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.tasks.insert(task.id().clone(), task);
    }

    /// Deletes a record on the remote side, simulating an out-of-band
    /// removal by another client.
    pub fn delete(&self, task_id: &TaskId) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.tasks.remove(task_id);
    }

    /// Returns a clone of the remote record, if held.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<Task> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.tasks.get(task_id).cloned()
    }
}

#[async_trait]
impl SyncGateway for InMemorySyncGateway {
    async fn fetch_tasks_by_project(
        &self,
        project_id: &ProjectId,
    ) -> SyncGatewayResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            SyncGatewayError::unreachable(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn fetch_tasks_by_user(&self, user_id: &UserId) -> SyncGatewayResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            SyncGatewayError::unreachable(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.assigned_to() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn commit_status(&self, task_id: &TaskId, status: TaskStatus) -> SyncGatewayResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SyncGatewayError::unreachable(std::io::Error::other(err.to_string()))
        })?;
        let task = state
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| SyncGatewayError::Rejected(format!("no such task: {task_id}")))?;
        task.set_status(status);
        Ok(())
    }
}
