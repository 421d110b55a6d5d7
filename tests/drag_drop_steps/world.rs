//! Shared world state for drag-and-drop BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tessera::board::{
    adapters::memory::InMemorySyncGateway,
    domain::{BoardType, TaskId},
    services::{DragDropCoordinator, DragDropResult, MoveOutcome},
    store::TaskStore,
};

/// Scenario world for drag-and-drop behaviour tests.
pub struct DragDropWorld {
    pub store: TaskStore,
    pub gateway: Arc<InMemorySyncGateway>,
    pub coordinator: DragDropCoordinator<InMemorySyncGateway>,
    pub task_id: Option<TaskId>,
    pub last_result: Option<DragDropResult<MoveOutcome>>,
}

impl DragDropWorld {
    /// Creates a world with an empty kanban board session.
    #[must_use]
    pub fn new() -> Self {
        let store = TaskStore::new();
        let gateway = Arc::new(InMemorySyncGateway::new());
        let coordinator =
            DragDropCoordinator::new(store.clone(), Arc::clone(&gateway), BoardType::Kanban);

        Self {
            store,
            gateway,
            coordinator,
            task_id: None,
            last_result: None,
        }
    }
}

impl Default for DragDropWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragDropWorld {
    DragDropWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
