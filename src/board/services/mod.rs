//! Application services orchestrating the store, projector, and gateway.

mod board;
mod drag_drop;

pub use board::{BoardService, BoardServiceError, BoardServiceResult};
pub use drag_drop::{
    DragDropCoordinator, DragDropError, DragDropResult, DropGesture, DropPosition, MoveOutcome,
};
