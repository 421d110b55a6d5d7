//! Sync gateway port: the capability surface of the remote task store.

use crate::board::domain::{ProjectId, Task, TaskId, TaskStatus, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for sync gateway operations.
pub type SyncGatewayResult<T> = Result<T, SyncGatewayError>;

/// Remote persistence contract consumed by the board engine.
///
/// The engine depends only on this capability set and is agnostic to the
/// transport behind it. Implementations own their own timeout policy; the
/// engine treats every error uniformly as a failed operation.
#[async_trait]
pub trait SyncGateway: Send + Sync {
    /// Fetches all tasks belonging to the given project.
    ///
    /// The result set is unordered; callers impose their own order.
    ///
    /// # Errors
    ///
    /// Returns [`SyncGatewayError`] when the remote store rejects the query
    /// or cannot be reached.
    async fn fetch_tasks_by_project(&self, project_id: &ProjectId)
    -> SyncGatewayResult<Vec<Task>>;

    /// Fetches all tasks assigned to the given user.
    ///
    /// # Errors
    ///
    /// Returns [`SyncGatewayError`] when the remote store rejects the query
    /// or cannot be reached.
    async fn fetch_tasks_by_user(&self, user_id: &UserId) -> SyncGatewayResult<Vec<Task>>;

    /// Commits a partial update setting only the status field of one task.
    ///
    /// # Errors
    ///
    /// Returns [`SyncGatewayError`] when the remote store rejects the update
    /// or cannot be reached.
    async fn commit_status(&self, task_id: &TaskId, status: TaskStatus) -> SyncGatewayResult<()>;
}

/// Errors returned by sync gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum SyncGatewayError {
    /// The remote store processed the request and refused it.
    #[error("remote store rejected the request: {0}")]
    Rejected(String),

    /// The remote store could not be reached or did not answer in time.
    #[error("remote store unreachable: {0}")]
    Unreachable(Arc<dyn std::error::Error + Send + Sync>),
}

impl SyncGatewayError {
    /// Wraps a transport-level failure.
    pub fn unreachable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unreachable(Arc::new(err))
    }
}
