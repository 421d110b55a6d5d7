//! Drag-drop coordination: gesture validation, optimistic moves, and
//! reconciliation with the remote store.
//!
//! Each gesture runs a small state machine: it either resolves to a benign
//! no-op before reaching the gateway, commits, or rolls the store back to the
//! pre-drag status and surfaces the failure. Gestures for the same task are
//! processed strictly one at a time in drop order; gestures for distinct
//! tasks may be in flight concurrently.

use crate::board::{
    domain::{BoardDefinition, BoardDomainError, BoardType, TaskId, TaskStatus},
    ports::{SyncGateway, SyncGatewayError},
    store::TaskStore,
};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Position of a task within a column: the column's status and the visual
/// index inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropPosition {
    status: TaskStatus,
    index: usize,
}

impl DropPosition {
    /// Creates a position.
    #[must_use]
    pub const fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }

    /// Returns the column status.
    #[must_use]
    pub const fn status(self) -> TaskStatus {
        self.status
    }

    /// Returns the visual index within the column.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

/// One drag gesture, from pick-up to drop.
///
/// Transient: exists only for the duration of the gesture. A `None`
/// destination records a drop outside any valid column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropGesture {
    task_id: TaskId,
    source: DropPosition,
    destination: Option<DropPosition>,
}

impl DropGesture {
    /// Creates a gesture dropped onto a column.
    #[must_use]
    pub const fn new(task_id: TaskId, source: DropPosition, destination: DropPosition) -> Self {
        Self {
            task_id,
            source,
            destination: Some(destination),
        }
    }

    /// Creates a gesture dropped outside any valid column.
    #[must_use]
    pub const fn cancelled(task_id: TaskId, source: DropPosition) -> Self {
        Self {
            task_id,
            source,
            destination: None,
        }
    }

    /// Returns the dragged task's identifier.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the pick-up position.
    #[must_use]
    pub const fn source(&self) -> DropPosition {
        self.source
    }

    /// Returns the drop position, when the drop landed on a column.
    #[must_use]
    pub const fn destination(&self) -> Option<DropPosition> {
        self.destination
    }
}

/// Terminal outcome of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The drop landed outside any column; nothing changed.
    Cancelled,
    /// The gesture resolved to a no-op before reaching the gateway, either
    /// because the positions were identical or because the task is no longer
    /// in the store.
    Unchanged,
    /// The optimistic move was confirmed by the remote store.
    Committed,
}

/// Errors surfaced by the coordinator.
#[derive(Debug, Error)]
pub enum DragDropError {
    /// Gesture validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The remote commit failed. The store has already been restored to the
    /// pre-drag status; the caller only needs to notify the user.
    #[error("move of task {task_id} failed and was rolled back to '{restored}'")]
    RolledBack {
        /// The dragged task.
        task_id: TaskId,
        /// Status the store was restored to.
        restored: TaskStatus,
        /// Gateway failure that triggered the rollback.
        #[source]
        cause: SyncGatewayError,
    },
}

/// Result type for coordinator operations.
pub type DragDropResult<T> = Result<T, DragDropError>;

/// Validates drag gestures, applies optimistic store mutations, and delegates
/// persistence to the sync gateway.
pub struct DragDropCoordinator<G>
where
    G: SyncGateway,
{
    store: TaskStore,
    gateway: Arc<G>,
    definition: BoardDefinition,
    gesture_locks: Mutex<HashMap<TaskId, Arc<Mutex<()>>>>,
}

impl<G> DragDropCoordinator<G>
where
    G: SyncGateway,
{
    /// Creates a coordinator for the given board type.
    #[must_use]
    pub fn new(store: TaskStore, gateway: Arc<G>, board_type: BoardType) -> Self {
        Self {
            store,
            gateway,
            definition: board_type.definition(),
            gesture_locks: Mutex::new(HashMap::new()),
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

    /// Processes one drop gesture to completion.
    ///
    /// The destination index is visual only: it is never committed, so a
    /// same-column drop at a new index still commits the unchanged status.
    ///
    /// # Errors
    ///
    /// Returns [`DragDropError::Domain`] when a gesture names a status that
    /// is not a column on the active board, and
    /// [`DragDropError::RolledBack`] when the remote commit fails after the
    /// optimistic mutation; in the latter case the store has already been
    /// restored.
    pub async fn handle_drop(&self, gesture: DropGesture) -> DragDropResult<MoveOutcome> {
        let DropGesture {
            task_id,
            source,
            destination,
        } = gesture;
        let Some(target) = destination else {
            debug!(task = %task_id, "drop cancelled outside any column");
            return Ok(MoveOutcome::Cancelled);
        };

        self.definition.ensure_contains(source.status())?;
        self.definition.ensure_contains(target.status())?;

        if target == source {
            return Ok(MoveOutcome::Unchanged);
        }

        let lock = self.gesture_lock(&task_id).await;
        let _guard = lock.lock().await;
        self.apply_move(&task_id, source.status(), target.status())
            .await
    }

    /// Applies the optimistic mutation and reconciles it with the remote
    /// store. Runs under the per-task gesture lock.
    async fn apply_move(
        &self,
        task_id: &TaskId,
        source_status: TaskStatus,
        destination_status: TaskStatus,
    ) -> DragDropResult<MoveOutcome> {
        if !self.store.update_status(task_id, destination_status) {
            // The task vanished between pick-up and drop; nothing to commit.
            return Ok(MoveOutcome::Unchanged);
        }

        match self.gateway.commit_status(task_id, destination_status).await {
            Ok(()) => {
                debug!(task = %task_id, status = %destination_status, "move committed");
                Ok(MoveOutcome::Committed)
            }
            Err(cause) => {
                if !self.store.update_status(task_id, source_status) {
                    debug!(task = %task_id, "task removed before rollback completed");
                }
                warn!(task = %task_id, error = %cause, "move rolled back");
                Err(DragDropError::RolledBack {
                    task_id: task_id.clone(),
                    restored: source_status,
                    cause,
                })
            }
        }
    }

    /// Returns the gesture lock for the task, pruning locks no gesture holds.
    async fn gesture_lock(&self, task_id: &TaskId) -> Arc<Mutex<()>> {
        let mut locks = self.gesture_locks.lock().await;
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        Arc::clone(locks.entry(task_id.clone()).or_default())
    }
}
