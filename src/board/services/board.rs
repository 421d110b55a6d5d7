//! Board service: remote fetches and filtered view derivation.

use crate::board::{
    domain::{BoardDefinition, BoardType, ProjectId, TaskFilter, UserId},
    ports::{SyncGateway, SyncGatewayError},
    projection::{self, BoardView},
    store::TaskStore,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors returned by board service operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The remote fetch failed; the store keeps its previous contents.
    #[error(transparent)]
    Gateway(#[from] SyncGatewayError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Loads tasks from the remote store and derives board views.
pub struct BoardService<G>
where
    G: SyncGateway,
{
    store: TaskStore,
    gateway: Arc<G>,
    definition: BoardDefinition,
}

impl<G> BoardService<G>
where
    G: SyncGateway,
{
    /// Creates a service for the given board type.
    #[must_use]
    pub const fn new(store: TaskStore, gateway: Arc<G>, board_type: BoardType) -> Self {
        Self {
            store,
            gateway,
            definition: board_type.definition(),
        }
    }

    /// Returns the active board definition.
    #[must_use]
    pub const fn definition(&self) -> BoardDefinition {
        self.definition
    }

    /// Returns the backing store handle.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Replaces the store contents with the project's tasks from the remote
    /// store and returns the record count. Last fetch wins.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Gateway`] when the fetch fails; the store
    /// is left untouched.
    pub async fn refresh_project(&self, project_id: &ProjectId) -> BoardServiceResult<usize> {
        let tasks = self.gateway.fetch_tasks_by_project(project_id).await?;
        let count = tasks.len();
        debug!(project = %project_id, count, "board refreshed from project query");
        self.store.set_tasks(tasks);
        Ok(count)
    }

    /// Replaces the store contents with the user's assigned tasks from the
    /// remote store and returns the record count. Last fetch wins.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Gateway`] when the fetch fails; the store
    /// is left untouched.
    pub async fn refresh_assigned(&self, user_id: &UserId) -> BoardServiceResult<usize> {
        let tasks = self.gateway.fetch_tasks_by_user(user_id).await?;
        let count = tasks.len();
        debug!(user = %user_id, count, "board refreshed from assignee query");
        self.store.set_tasks(tasks);
        Ok(count)
    }

    /// Projects the current store snapshot into filtered board columns.
    #[must_use]
    pub fn view(&self, filter: &TaskFilter) -> BoardView {
        projection::project(&self.store.tasks(), self.definition, filter)
    }
}
